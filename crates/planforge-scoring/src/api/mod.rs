//! Constraint diagnostics and weight configuration.
//!
//! This module provides:
//! - Analysis types for constraint matches, indictments and score explanation
//! - Runtime weight override configuration

pub mod analysis;
pub mod weight_overrides;

#[cfg(test)]
mod tests;

pub use analysis::{
    ConstraintAnalysis, ConstraintJustification, ConstraintMatch, ConstraintMatchTotal,
    EntityRef, Indictment, MatchId, ScoreExplanation,
};
pub use weight_overrides::{ConstraintWeightOverrides, WeightProvider};
