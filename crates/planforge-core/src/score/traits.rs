//! Core Score trait definition

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Neg, Sub};

use super::ScoreLevel;

/// Core trait for all score types in planforge.
///
/// Scores represent the quality of a planning solution. They are used to:
/// - Compare solutions (better/worse/equal)
/// - Carry the running totals assembled by a score inliner
/// - Determine feasibility
///
/// All score implementations are immutable values: arithmetic returns new
/// instances. Bendable scores own their level vectors, so the trait asks for
/// `Clone` rather than `Copy`.
///
/// # Init score
///
/// Every score carries an `init_score`. A negative init score `-n` means `n`
/// planning variables are still uninitialized. It is compared before any
/// other level.
pub trait Score:
    Clone
    + Debug
    + Display
    + Send
    + Sync
    + PartialEq
    + Eq
    + Hash
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns the init score (0 when the solution is fully initialized).
    fn init_score(&self) -> i32;

    /// Returns a copy of this score with a different init score.
    fn with_init_score(&self, init_score: i32) -> Self;

    /// Returns true if no planning variable is left uninitialized.
    fn is_solution_initialized(&self) -> bool {
        self.init_score() >= 0
    }

    /// Returns true if this score represents a feasible solution.
    ///
    /// A solution is feasible when it is initialized and every hard level
    /// is >= 0.
    fn is_feasible(&self) -> bool;

    /// Returns the zero score with the same shape as this one.
    ///
    /// Fixed-level scores ignore `self`; bendable scores keep their level counts.
    fn zeroed(&self) -> Self;

    /// Returns true if the init score and every level are zero.
    fn is_zero(&self) -> bool;

    /// Returns true if any level (init score excluded) is negative.
    fn has_negative_level(&self) -> bool;

    /// Returns true if the level at the given index is zero.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn is_level_zero(&self, index: usize) -> bool;

    /// Returns the number of score levels, init score excluded.
    fn levels_count(&self) -> usize;

    /// Returns the semantic label for the score level at the given index.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_label(&self, index: usize) -> ScoreLevel;

    /// Returns the absolute value of this score.
    fn abs(&self) -> Self;

    /// Compares two scores, returning the ordering.
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Returns true if this score is better than the other score.
    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score is worse than the other score.
    fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this score is equal to the other score.
    fn is_equal_to(&self, other: &Self) -> bool {
        self == other
    }
}

/// Marker trait for scores that can be parsed from a string.
pub trait ParseableScore: Score {
    /// Parses a score from a string representation.
    ///
    /// # Format
    /// - SimpleScore: "42" or "-3init/42"
    /// - HardMediumSoftScore: "0hard/0medium/-100soft"
    /// - BendableScore: "[0/-1]hard/[-10/-20]soft"
    fn parse(s: &str) -> Result<Self, ScoreParseError>;

    /// Returns the string representation of this score.
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}

/// Splits an optional `"<n>init/"` prefix off a score string.
pub(crate) fn split_init_score(s: &str) -> Result<(i32, &str), ScoreParseError> {
    match s.split_once('/') {
        Some((head, rest)) if head.trim().ends_with("init") => {
            let head = head.trim();
            let num = &head[..head.len() - "init".len()];
            let init_score = num.parse::<i32>().map_err(|e| ScoreParseError {
                message: format!("Invalid init score '{}': {}", num, e),
            })?;
            Ok((init_score, rest))
        }
        _ => Ok((0, s)),
    }
}
