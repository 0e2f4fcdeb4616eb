/// Comparison symbols accepted between a field and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl ComparisonOp {
    /// Exact, whole-token match.
    pub fn parse(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "=" => ComparisonOp::Eq,
            "<>" => ComparisonOp::Ne,
            ">" => ComparisonOp::Gt,
            "<" => ComparisonOp::Lt,
            ">=" => ComparisonOp::Gte,
            "<=" => ComparisonOp::Lte,
            _ => return None,
        })
    }

    /// Operator name in JSONLogic.
    pub fn logic_name(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lte => "<=",
        }
    }
}
