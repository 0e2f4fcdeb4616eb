use crate::comparison::ComparisonOp;
use crate::errors::{ConvertError, Result};
use crate::functions;
use crate::logic;
use crate::tokenizer::{date_literal, field_name, Token};
use serde_json::Value;

/// Build one operand starting at `tokens[*cursor]` and move the cursor past
/// every token it used (three for a comparison, otherwise one).
pub fn build_operand(tokens: &[Token<'_>], cursor: &mut usize) -> Result<Value> {
    let token = tokens[*cursor].as_str();

    if let (Some(symbol), Some(value)) = (tokens.get(*cursor + 1), tokens.get(*cursor + 2)) {
        if let Some(op) = ComparisonOp::parse(symbol.as_str()) {
            *cursor += 3;
            return Ok(logic::apply(
                op.logic_name(),
                vec![
                    logic::var(strip_brackets(token)),
                    Value::from(strip_literal(value.as_str())),
                ],
            ));
        }
    }

    let node = if let Some(inner) = date_literal(token) {
        Value::from(inner)
    } else if let Some(call) = functions::match_whole(token) {
        call.to_logic()
    } else if let Some(name) = field_name(token) {
        logic::var(name)
    } else {
        return Err(ConvertError::UnrecognizedToken(token.to_string()));
    };
    *cursor += 1;
    Ok(node)
}

fn strip_brackets(field: &str) -> &str {
    let field = field.strip_prefix('[').unwrap_or(field);
    field.strip_suffix(']').unwrap_or(field)
}

fn strip_literal(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, '#' | '\'' | '"'))
}
