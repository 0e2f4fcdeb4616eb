//! Converts boolean criteria expressions such as
//! `[Age] >= 21 and not isnull([Email])` into JSONLogic trees.

pub mod errors;
pub mod context;
pub mod tokenizer;
pub mod expression;
pub mod functions;
pub mod comparison;
pub mod logic;
mod operand;
mod scanner;

use serde_json::Value;
use errors::Result;
use context::Options;
use tokenizer::Token;

pub use errors::ConvertError;

/// A reusable converter. Holds only its options; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    opts: Options,
}

impl Converter {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Tokens of `criteria` after the input options are applied.
    pub fn tokens<'a>(&self, criteria: &'a str) -> Vec<Token<'a>> {
        tokenizer::tokenize(self.opts.prepare(criteria))
    }

    /// Parse `criteria` into a JSONLogic tree.
    pub fn to_logic(&self, criteria: &str) -> Result<Value> {
        expression::parse_tokens(&self.tokens(criteria))
    }

    /// Parse and render as JSON text.
    pub fn convert(&self, criteria: &str) -> Result<String> {
        let node = self.to_logic(criteria)?;
        logic::render(&node, &self.opts)
    }
}

/// Convert with default options: enclosing quotes stripped, indented output.
pub fn convert(criteria: &str) -> Result<String> {
    Converter::default().convert(criteria)
}

/// Convenience: the tree instead of its text.
pub fn to_logic(criteria: &str) -> Result<Value> {
    Converter::default().to_logic(criteria)
}
