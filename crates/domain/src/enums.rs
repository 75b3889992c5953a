use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a trade the user fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    /// Input amount is fixed, output is computed.
    ExactInput,
    /// Output amount is fixed, input is computed.
    ExactOutput,
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactInput => write!(f, "EXACT_INPUT"),
            Self::ExactOutput => write!(f, "EXACT_OUTPUT"),
        }
    }
}

/// Rounding direction used when reducing display precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Towards zero.
    Down,
    /// Away from zero whenever any discarded digit is non-zero.
    Up,
    /// Nearest, ties away from zero.
    HalfUp,
}

impl Rounding {
    /// Returns `true` if the discarded digits require bumping the kept ones.
    #[must_use]
    pub fn rounds_up(&self, discarded: &str) -> bool {
        match self {
            Self::Down => false,
            Self::Up => discarded.bytes().any(|b| b != b'0'),
            Self::HalfUp => discarded.bytes().next().is_some_and(|b| b >= b'5'),
        }
    }
}
