//! Error types for planforge

use thiserror::Error;

use crate::score::ScoreParseError;

/// Main error type for planforge operations.
///
/// The scoring, solver and config crates convert their own error enums into
/// this one, so callers that drive all of them can use a single `Result`.
#[derive(Debug, Error)]
pub enum PlanforgeError {
    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A score string could not be parsed
    #[error(transparent)]
    ScoreParse(#[from] ScoreParseError),

    /// Error while building or applying a constraint impact
    #[error("Score calculation error: {0}")]
    ScoreCalculation(String),

    /// Error raised by a move selector
    #[error("Selector error: {0}")]
    Selector(String),

    /// Invalid operation for current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for planforge operations
pub type Result<T> = std::result::Result<T, PlanforgeError>;
