//! Binary operators.
//!
//! Tally only has the four arithmetic operators. Every other symbol the
//! evaluator hands over has no `BinaryOp` and falls back at the call site.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Every operator.
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Resolve an operator from its source symbol.
    ///
    /// Returns `None` for anything that is not `+`, `-`, `*` or `/`.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in trace output to show the exact operator applied.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_symbol())
    }
}
