//! Incremental constraint scoring for planforge.
//!
//! This crate keeps the running score of one scoring session:
//! - Score inliners for every score family (`SimpleScoreInliner`,
//!   `HardMediumSoftInliner`, `BendableInliner`)
//! - Weighted impacters and one-shot undo tokens
//! - Optional constraint match diagnostics (match totals, indictments,
//!   score explanations)
//! - Constraint weight overrides
//!
//! # Architecture
//!
//! Inliners are generic over the score's level number and dispatched
//! statically. Undo tokens are plain values carrying the exact delta that
//! was applied; nothing is boxed on the impact path.

pub mod api;
pub mod error;
pub mod inliner;

pub use api::analysis::{
    ConstraintAnalysis, ConstraintJustification, ConstraintMatch, ConstraintMatchTotal,
    EntityRef, Indictment, MatchId, ScoreExplanation,
};
pub use api::weight_overrides::{ConstraintWeightOverrides, WeightProvider};
pub use error::ScoreInlinerError;
pub use inliner::{
    BendableDecimalScoreInliner, BendableImpact, BendableInliner, BendableLongScoreInliner,
    BendableScoreInliner, BendableWeight, ConfiguredScore, ConstraintId, HardMediumSoftDecimalScoreInliner,
    HardMediumSoftImpact, HardMediumSoftInliner, HardMediumSoftLongScoreInliner,
    HardMediumSoftScoreInliner, HardMediumSoftWeight, MatchRegistration, ScoreInliner,
    SimpleScoreInliner, UndoScoreImpacter, WeightedScoreImpacter,
};
