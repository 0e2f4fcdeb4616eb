// src/expression.rs
use crate::errors::{ConvertError, Result};
use crate::logic;
use crate::operand::build_operand;
use crate::tokenizer::Token;
use itertools::Itertools;
use serde_json::Value;

/// Boolean connectives, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
    Not,
}

impl Connective {
    pub fn parse(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Connective::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Connective::Or)
        } else if word.eq_ignore_ascii_case("not") {
            Some(Connective::Not)
        } else {
            None
        }
    }

    /// Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Connective::Or => 1,
            Connective::And => 2,
            Connective::Not => 3,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Not => "not",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Open,
    Op(Connective),
}

/// Operator-precedence parse of a token sequence into one JSONLogic node.
pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<Value> {
    let mut operands: Vec<Value> = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let text = tokens[i].as_str();
        match text {
            "(" => operators.push(Pending::Open),
            ")" => loop {
                match operators.pop() {
                    Some(Pending::Open) => break,
                    Some(Pending::Op(op)) => reduce(&mut operands, op)?,
                    None => return Err(ConvertError::UnbalancedParens(")".into())),
                }
            },
            _ => match Connective::parse(text) {
                Some(Connective::Not) => operators.push(Pending::Op(Connective::Not)),
                Some(op) => {
                    while let Some(&Pending::Op(top)) = operators.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        operators.pop();
                        reduce(&mut operands, top)?;
                    }
                    operators.push(Pending::Op(op));
                }
                None => {
                    operands.push(build_operand(tokens, &mut i)?);
                    continue;
                }
            },
        }
        i += 1;
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Open => return Err(ConvertError::UnbalancedParens("(".into())),
            Pending::Op(op) => reduce(&mut operands, op)?,
        }
    }

    match operands.len() {
        1 => Ok(operands.remove(0)),
        0 => Err(ConvertError::Underflow("no operand found".into())),
        n => Err(ConvertError::Underflow(format!(
            "{n} operands left without a connective: {}",
            operands.iter().join(", ")
        ))),
    }
}

/// Pop the operands `op` needs and push the combined node.
fn reduce(operands: &mut Vec<Value>, op: Connective) -> Result<()> {
    let missing = || ConvertError::Underflow(format!("`{}` is missing an operand", op.keyword()));
    let node = match op {
        Connective::Not => logic::negate(operands.pop().ok_or_else(missing)?),
        Connective::And | Connective::Or => {
            let right = operands.pop().ok_or_else(missing)?;
            let left = operands.pop().ok_or_else(missing)?;
            logic::apply(op.keyword(), vec![left, right])
        }
    };
    operands.push(node);
    Ok(())
}
