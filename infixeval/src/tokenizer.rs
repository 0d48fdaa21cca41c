use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use lexers::{is_ident_char, scan_identifier, scan_number, scan_whitespace, Scanner};

use crate::error::{ExprError, Result};

/// A lexeme of the expression, borrowed from the source text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token<'a> {
    Number(&'a str),
    Ident(&'a str),
    Op(&'a str),
    OParen,
    CParen,
    Comma,
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::Number(s) | Token::Ident(s) | Token::Op(s) => s,
            Token::OParen => "(",
            Token::CParen => ")",
            Token::Comma => ",",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The operator symbols the tokenizer is allowed to produce.
pub trait OperatorSet {
    fn contains_operator(&self, symbol: &str) -> bool;
}

impl<V, S: BuildHasher> OperatorSet for HashMap<String, V, S> {
    fn contains_operator(&self, symbol: &str) -> bool {
        self.contains_key(symbol)
    }
}

impl OperatorSet for [&str] {
    fn contains_operator(&self, symbol: &str) -> bool {
        self.iter().any(|op| *op == symbol)
    }
}

pub(crate) fn is_op_char(c: char) -> bool {
    !is_ident_char(c) && !c.is_whitespace() && c != '(' && c != ')' && c != ','
}

/// Lazy, single pass tokenizer. Once it hits an error it yields `None`.
pub struct Tokenizer<'a, S: ?Sized> {
    src: Scanner<'a>,
    ops: &'a S,
    separator: char,
    prev: Option<Token<'a>>,
    failed: bool,
}

impl<'a, S: OperatorSet + ?Sized> Tokenizer<'a, S> {
    pub fn new(input: &'a str, ops: &'a S) -> Self {
        Tokenizer {
            src: Scanner::new(input.trim()),
            ops,
            separator: '.',
            prev: None,
            failed: false,
        }
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Chars scanned so far.
    pub fn pos(&self) -> usize {
        self.src.char_pos()
    }

    // when would a minus be part of a number? we need to know the prev token
    fn makes_unary(&self) -> bool {
        match self.prev {
            None | Some(Token::OParen) | Some(Token::Comma) => true,
            Some(Token::Op(op)) => self.ops.contains_operator(op),
            _ => false,
        }
    }

    fn get_token(&mut self) -> Option<Result<Token<'a>>> {
        scan_whitespace(&mut self.src);
        let next = self.src.peek()?;
        let leads_number = self.src.peek_nth(1).is_some_and(|c| c.is_ascii_digit());

        if next.is_ascii_digit() {
            scan_number(&mut self.src, self.separator).map(|n| Ok(Token::Number(n)))
        } else if next == '-' && leads_number && self.makes_unary() {
            self.src.next();
            scan_number(&mut self.src, self.separator).map(|n| Ok(Token::Number(n)))
        } else if let Some(id) = scan_identifier(&mut self.src) {
            Some(Ok(Token::Ident(id)))
        } else if self.src.accept('(').is_some() {
            self.src.ignore();
            Some(Ok(Token::OParen))
        } else if self.src.accept(')').is_some() {
            self.src.ignore();
            Some(Ok(Token::CParen))
        } else if self.src.accept(',').is_some() {
            self.src.ignore();
            Some(Ok(Token::Comma))
        } else {
            // grab the longest run of symbol chars, a '-' always starts anew
            // so that "*-1" is "*" followed by a negative literal
            self.src.next();
            while self.src.peek() != Some('-') && self.src.accept_if(is_op_char).is_some() {}
            let op = self.src.extract();
            if self.ops.contains_operator(op) {
                Some(Ok(Token::Op(op)))
            } else {
                let pos = self.pos() - op.chars().count() + 1;
                Some(Err(ExprError::UnknownOperator { token: op.to_string(), pos }))
            }
        }
    }
}

impl<'a, S: OperatorSet + ?Sized> Iterator for Tokenizer<'a, S> {
    type Item = Result<Token<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.get_token();
        debug!("token: {:?}", token);
        match token {
            Some(Ok(t)) => self.prev = Some(t),
            Some(Err(_)) => self.failed = true,
            None => (),
        }
        token
    }
}
