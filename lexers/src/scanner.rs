#![deny(warnings)]

/// A cursor over a string slice.
///
/// The scanner keeps two byte offsets: `start` marks where the lexeme being
/// built begins and `pos` marks the end of what was consumed so far. Lexemes
/// are handed out as slices of the source so they can outlive the scanner.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    src: &'a str,
    start: usize,
    pos: usize,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.pos += next.len_utf8();
        Some(next)
    }
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Scanner<'a> {
        Scanner { src, start: 0, pos: 0 }
    }

    /// Number of chars consumed so far, useful for 1-based error positions.
    pub fn char_pos(&self) -> usize {
        self.src[..self.pos].chars().count()
    }

    pub fn is_done(&self) -> bool { self.pos >= self.src.len() }

    // last consumed char of the current lexeme
    pub fn curr(&self) -> Option<char> {
        self.view().chars().next_back()
    }

    pub fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    pub fn view(&self) -> &'a str {
        &self.src[self.start..self.pos]
    }

    // drop whatever was consumed, next lexeme starts at the cursor
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    pub fn extract(&mut self) -> &'a str {
        let lexeme = self.view();
        self.ignore();
        lexeme
    }

    pub fn accept(&mut self, what: char) -> Option<char> {
        self.accept_if(|c| c == what)
    }

    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(next) if pred(next) => self.next(),
            _ => None,
        }
    }

    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}
