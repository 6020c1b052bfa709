//! Planforge Core - Core types and traits for incremental scoring
//!
//! This crate provides the fundamental abstractions for planforge:
//! - Score types for representing solution quality
//! - Constraint identification
//! - List variable supplies for owner/position lookups

pub mod constraint;
pub mod domain;
pub mod error;
pub mod score;

#[cfg(test)]
mod constraint_tests;

pub use constraint::ConstraintRef;
pub use domain::{ElementPosition, ListStateSupply, ListVariableState};
pub use error::{PlanforgeError, Result};
pub use score::{
    BendableDecimalScore, BendableLevels, BendableLongScore, BendableScore,
    HardMediumSoftDecimalScore, HardMediumSoftLevels, HardMediumSoftLongScore,
    HardMediumSoftScore, ParseableScore, Score, ScoreLevel, ScoreNumber, ScoreParseError,
    SimpleScore,
};
