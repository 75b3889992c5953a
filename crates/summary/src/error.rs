use thiserror::Error;
use tradeview_domain::DomainError;

/// Errors raised while deriving display values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// The trade violates its own structural invariants. Showing anything
    /// derived from it would risk displaying wrong financial figures.
    #[error("Malformed trade: {0}")]
    MalformedTrade(#[source] DomainError),
    /// Arithmetic on a well-formed trade failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
