use thiserror::Error;

/// Everything that can go wrong while turning a criteria string into JSONLogic.
#[derive(Debug, Error)]
pub enum ConvertError {
    // A `)` with no open `(`, or a `(` never closed
    #[error("unbalanced parentheses near `{0}`")]
    UnbalancedParens(String),

    #[error("unrecognized token: {0}")]
    UnrecognizedToken(String),

    // An operator ran out of operands, or the expression did not reduce to one node
    #[error("malformed expression: {0}")]
    Underflow(String),

    #[error("cannot render JSON: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
