//! Errors raised while configuring inliners and building score impacters.

use planforge_config::ConfigError;
use planforge_core::score::ScoreParseError;
use planforge_core::PlanforgeError;
use thiserror::Error;

/// Error type for score inliner operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreInlinerError {
    /// The constraint weight does not fit the inliner's score shape.
    #[error("Invalid constraint weight ({weight}) for constraint ({constraint}): {reason}")]
    InvalidConstraintWeight {
        constraint: String,
        weight: String,
        reason: String,
    },

    /// The score configuration does not describe this inliner.
    #[error("Invalid score configuration: {0}")]
    InvalidConfig(String),
}

impl ScoreInlinerError {
    pub(crate) fn invalid_weight(
        constraint: &planforge_core::ConstraintRef,
        weight: &impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        ScoreInlinerError::InvalidConstraintWeight {
            constraint: constraint.full_name(),
            weight: weight.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ScoreInlinerError> for PlanforgeError {
    fn from(err: ScoreInlinerError) -> Self {
        PlanforgeError::ScoreCalculation(err.to_string())
    }
}

impl From<ConfigError> for ScoreInlinerError {
    fn from(err: ConfigError) -> Self {
        ScoreInlinerError::InvalidConfig(err.to_string())
    }
}

impl From<ScoreParseError> for ScoreInlinerError {
    fn from(err: ScoreParseError) -> Self {
        ScoreInlinerError::InvalidConfig(err.to_string())
    }
}
