//! The six predicate functions of the criteria language.
//!
//! A call is always lexed as one token, e.g. `contains([Name], 'foo')`, so
//! the same recognizer serves the tokenizer (lookahead) and the operand
//! builder (field/value extraction).

use crate::logic;
use crate::scanner::Scanner;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    IsNullOrEmpty,
    Contains,
    StartsWith,
    EndsWith,
    IsNull,
    IsNotNull,
}

impl Predicate {
    pub const ALL: [Predicate; 6] = [
        Predicate::IsNullOrEmpty,
        Predicate::Contains,
        Predicate::StartsWith,
        Predicate::EndsWith,
        Predicate::IsNull,
        Predicate::IsNotNull,
    ];

    /// Lowercase name as written in criteria text.
    pub fn name(self) -> &'static str {
        match self {
            Predicate::IsNullOrEmpty => "isnullorempty",
            Predicate::Contains => "contains",
            Predicate::StartsWith => "startswith",
            Predicate::EndsWith => "endswith",
            Predicate::IsNull => "isnull",
            Predicate::IsNotNull => "isnotnull",
        }
    }

    /// Whether the call carries a second, value argument.
    pub fn takes_value(self) -> bool {
        matches!(
            self,
            Predicate::Contains | Predicate::StartsWith | Predicate::EndsWith
        )
    }

    pub fn build(self, field: &str, value: &str) -> Value {
        let var = logic::var(field);
        match self {
            Predicate::Contains => logic::apply("in", vec![Value::from(value), var]),
            Predicate::StartsWith => logic::apply("startsWith", vec![var, Value::from(value)]),
            Predicate::EndsWith => logic::apply("endsWith", vec![var, Value::from(value)]),
            Predicate::IsNull => logic::apply("==", vec![var, Value::Null]),
            Predicate::IsNotNull => logic::apply("!=", vec![var, Value::Null]),
            Predicate::IsNullOrEmpty => logic::apply(
                "or",
                vec![
                    logic::apply("==", vec![var.clone(), Value::Null]),
                    logic::apply("==", vec![var, Value::from("")]),
                ],
            ),
        }
    }
}

/// One recognized call, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredicateCall<'a> {
    pub predicate: Predicate,
    pub field: &'a str,
    /// Unquoted value; empty for single-argument forms.
    pub value: &'a str,
    /// Byte length of the whole call text.
    pub len: usize,
}

impl PredicateCall<'_> {
    pub fn to_logic(&self) -> Value {
        self.predicate.build(self.field, self.value)
    }
}

/// Try every predicate form at the scanner's position.
pub(crate) fn match_call<'a>(sc: &Scanner<'a>) -> Option<PredicateCall<'a>> {
    Predicate::ALL
        .iter()
        .find_map(|&predicate| match_form(*sc, predicate))
}

/// Recognize `text` as exactly one call, nothing before or after it.
pub fn match_whole(text: &str) -> Option<PredicateCall<'_>> {
    match_call(&Scanner::new(text)).filter(|call| call.len == text.len())
}

fn match_form(mut sc: Scanner<'_>, predicate: Predicate) -> Option<PredicateCall<'_>> {
    let start = sc.pos();
    if !sc.consume_str_ci(predicate.name()) || !sc.consume_str_ci("([") {
        return None;
    }
    if !predicate.takes_value() {
        let field = sc.capture_until("])")?;
        sc.consume_str_ci("])");
        return Some(PredicateCall { predicate, field, value: "", len: sc.pos() - start });
    }
    let field = sc.capture_until("],")?;
    sc.consume_str_ci("],");
    sc.skip_ws();
    let raw = sc.capture_until(")")?;
    sc.consume_char(')');
    Some(PredicateCall {
        predicate,
        field,
        value: unquote(raw.trim()),
        len: sc.pos() - start,
    })
}

/// Either quote character may open or close a value, and they need not match.
fn unquote(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, '\'' | '"'))
}
