// src/scanner.rs

/// Byte-offset cursor over a borrowed criteria string.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character immediately before the cursor.
    pub fn prev_char(&self) -> Option<char> {
        self.s[..self.i].chars().next_back()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// ASCII case-insensitive lookahead.
    pub fn peek_str_ci(&self, lit: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..lit.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(lit.as_bytes()))
    }

    pub fn consume_str_ci(&mut self, lit: &str) -> bool {
        if self.peek_str_ci(lit) {
            self.i += lit.len();
            true
        } else {
            false
        }
    }

    pub fn skip_ws(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Returns the text up to the first occurrence of `end` and leaves the
    /// cursor on it. Does not move when `end` never occurs.
    /// The capture may span newlines.
    pub fn capture_until(&mut self, end: &str) -> Option<&'a str> {
        let offset = self.rest().find(end)?;
        let start = self.i;
        self.i += offset;
        Some(&self.s[start..self.i])
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}

pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
