#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these functions is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh. scan_number is
 * the exception, it extends whatever the current lexeme already holds.
 */

fn is_ident_start(c: char) -> bool { c.is_alphabetic() || c == '_' }

pub fn is_ident_char(c: char) -> bool { c.is_alphanumeric() || c == '_' }

// skip and discard whitespace, returns if anything was skipped
pub fn scan_whitespace(scanner: &mut Scanner<'_>) -> bool {
    let skipped = scanner.skip_while(char::is_whitespace);
    scanner.ignore();
    skipped
}

// scan [a-zA-Z_][a-zA-Z0-9_]*
pub fn scan_identifier<'a>(scanner: &mut Scanner<'a>) -> Option<&'a str> {
    scanner.accept_if(is_ident_start)?;
    scanner.skip_while(is_ident_char);
    Some(scanner.extract())
}

// Scan a digit-led literal made of digits, decimal separators and exponent
// markers. A sign is only taken right after an exponent marker and only if a
// digit follows it. Whether the result is a well formed number is up to
// whoever converts it (eg: "1e2.5" is scanned whole and rejected later).
pub fn scan_number<'a>(scanner: &mut Scanner<'a>, separator: char) -> Option<&'a str> {
    scanner.accept_if(|c| c.is_ascii_digit())?;
    loop {
        let exponent = matches!(scanner.curr(), Some('e') | Some('E'));
        let accepted = match scanner.peek() {
            Some(c) if c.is_ascii_digit() || c == separator => scanner.next(),
            Some('e') | Some('E') => scanner.next(),
            Some('+') | Some('-')
                if exponent && scanner.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) =>
            {
                scanner.next()
            }
            _ => None,
        };
        if accepted.is_none() {
            break;
        }
    }
    Some(scanner.extract())
}

///////////////////////////////////////////////////////////////////////////////
