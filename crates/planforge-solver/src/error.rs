//! Errors raised by the list selectors.

use planforge_core::PlanforgeError;
use thiserror::Error;

/// Error type for list selector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListSelectorError {
    /// A triangular number does not fit in `u64`.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    /// A selector was configured or called with an out-of-range argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A collaborator broke its contract, e.g. a never-ending stream ran dry.
    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl From<ListSelectorError> for PlanforgeError {
    fn from(err: ListSelectorError) -> Self {
        match err {
            ListSelectorError::IllegalState(msg) => PlanforgeError::InvalidState(msg),
            other => PlanforgeError::Selector(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ListSelectorError>;
