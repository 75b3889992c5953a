//! Errors raised while building or validating domain values.

use thiserror::Error;

/// Domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Chain id with no entry in the chain table.
    #[error("Unsupported chain id {0}")]
    UnsupportedChain(u64),
    /// Both sides of a pair are the same token.
    #[error("Pair tokens must be distinct")]
    IdenticalTokens,
    /// Tokens or pairs from different chains were combined.
    #[error("Chain mismatch: expected {expected}, got {actual}")]
    ChainMismatch {
        /// Chain the value was expected on.
        expected: u64,
        /// Chain the value is actually on.
        actual: u64,
    },
    /// A route without pairs.
    #[error("Route must contain at least one pair")]
    EmptyRoute,
    /// A pair that does not continue the route path.
    #[error("Pair {index} does not connect to the route path")]
    DisconnectedRoute {
        /// Position of the offending pair.
        index: usize,
    },
    /// An amount or token is denominated in the wrong currency.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Expected currency.
        expected: String,
        /// Currency found.
        actual: String,
    },
    /// Trade amounts must be non-zero.
    #[error("Amount must be non-zero")]
    ZeroAmount,
    /// Pair reserves cannot satisfy the request.
    #[error("Insufficient reserves")]
    InsufficientReserves,
    /// Input too small to produce any output.
    #[error("Insufficient input amount")]
    InsufficientInputAmount,
    /// A ratio with a zero denominator.
    #[error("Division by zero")]
    DivisionByZero,
    /// Checked arithmetic overflowed.
    #[error("Arithmetic overflow")]
    Overflow,
    /// Integer to decimal conversion failed.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

/// Result alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
