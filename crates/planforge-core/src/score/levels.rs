//! Level-access traits used by the generic score inliners.

use super::{Score, ScoreNumber};

/// A score made of exactly one hard, one medium and one soft level.
pub trait HardMediumSoftLevels: Score {
    /// Numeric kind of every level.
    type Number: ScoreNumber;

    /// Builds a score from its init score and level values.
    fn from_levels(
        init_score: i32,
        hard: Self::Number,
        medium: Self::Number,
        soft: Self::Number,
    ) -> Self;

    fn hard_level(&self) -> Self::Number;

    fn medium_level(&self) -> Self::Number;

    fn soft_level(&self) -> Self::Number;
}

/// A score whose hard and soft level counts are chosen at runtime.
pub trait BendableLevels: Score {
    /// Numeric kind of every level.
    type Number: ScoreNumber;

    /// Builds a score from its init score and level vectors.
    fn from_levels(
        init_score: i32,
        hard_scores: Vec<Self::Number>,
        soft_scores: Vec<Self::Number>,
    ) -> Self;

    fn hard_levels(&self) -> &[Self::Number];

    fn soft_levels(&self) -> &[Self::Number];
}
