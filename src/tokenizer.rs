//! Splits a criteria string into tokens.
//!
//! Connectives, parentheses and whole predicate calls are cut out of the
//! input; whitespace separates everything else. Text that matches nothing
//! special is kept as a plain token and judged later by the parser.

use crate::comparison::ComparisonOp;
use crate::expression::Connective;
use crate::functions::{self, Predicate};
use crate::scanner::{is_word_char, Scanner};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A trimmed, non-empty slice of the criteria text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Connective,
    Comparison,
    Field,
    DateLiteral,
    Predicate(Predicate),
    Text,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Classify the token. Nothing is cached; the parser asks when it needs to.
    pub fn kind(&self) -> TokenKind {
        let t = self.text;
        match t {
            "(" => return TokenKind::OpenParen,
            ")" => return TokenKind::CloseParen,
            _ => {}
        }
        if Connective::parse(t).is_some() {
            TokenKind::Connective
        } else if ComparisonOp::parse(t).is_some() {
            TokenKind::Comparison
        } else if let Some(call) = functions::match_whole(t) {
            TokenKind::Predicate(call.predicate)
        } else if field_name(t).is_some() {
            TokenKind::Field
        } else if date_literal(t).is_some() {
            TokenKind::DateLiteral
        } else {
            TokenKind::Text
        }
    }
}

impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Token", 2)?;
        st.serialize_field("text", self.text)?;
        st.serialize_field("kind", &self.kind())?;
        st.end()
    }
}

/// `[name]` → `name`
pub(crate) fn field_name(t: &str) -> Option<&str> {
    t.strip_prefix('[')?.strip_suffix(']')
}

/// `#inner#` → `inner`, with every edge `#` removed.
pub(crate) fn date_literal(t: &str) -> Option<&str> {
    if t.len() < 2 || !t.starts_with('#') || !t.ends_with('#') {
        return None;
    }
    Some(t.trim_matches('#'))
}

enum Cut {
    Separator(usize),
    Token(usize),
}

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut sc = Scanner::new(input);
    let mut pending = 0;

    while !sc.eof() {
        let here = sc.pos();
        let Some(cut) = next_cut(&sc) else {
            sc.bump();
            continue;
        };
        push_trimmed(&mut tokens, &input[pending..here]);
        let len = match cut {
            Cut::Separator(len) => len,
            Cut::Token(len) => {
                push_trimmed(&mut tokens, &input[here..here + len]);
                len
            }
        };
        pending = here + len;
        sc = Scanner::at(input, pending);
    }
    push_trimmed(&mut tokens, &input[pending..]);
    tokens
}

fn push_trimmed<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    let text = text.trim();
    if !text.is_empty() {
        tokens.push(Token::new(text));
    }
}

fn next_cut(sc: &Scanner<'_>) -> Option<Cut> {
    if let Some(len) = keyword_at(sc) {
        return Some(Cut::Token(len));
    }
    match sc.peek_char()? {
        '(' | ')' => return Some(Cut::Token(1)),
        c if c.is_whitespace() => {
            let mut ws = *sc;
            ws.skip_ws();
            return Some(Cut::Separator(ws.pos() - sc.pos()));
        }
        _ => {}
    }
    functions::match_call(sc).map(|call| Cut::Token(call.len))
}

fn keyword_at(sc: &Scanner<'_>) -> Option<usize> {
    if sc.prev_char().is_some_and(is_word_char) {
        return None;
    }
    ["and", "or", "not"].into_iter().find_map(|kw| {
        if !sc.peek_str_ci(kw) {
            return None;
        }
        let after = sc.rest()[kw.len()..].chars().next();
        (!after.is_some_and(is_word_char)).then_some(kw.len())
    })
}
