//! SimpleScore - Single-level score implementation

use std::fmt;

use super::traits::Score;
use super::ScoreLevel;

/// A simple score with a single integer value.
///
/// This is the simplest score type, useful when there's only one
/// type of constraint to optimize.
///
/// # Examples
///
/// ```
/// use planforge_core::{SimpleScore, Score};
///
/// let score1 = SimpleScore::of(-5);
/// let score2 = SimpleScore::of(-3);
///
/// assert!(score2 > score1);  // -3 is better than -5
/// assert!(!score1.is_feasible());  // Negative scores are not feasible
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SimpleScore {
    init_score: i32,
    score: i32,
}

impl SimpleScore {
    /// The zero score.
    pub const ZERO: SimpleScore = SimpleScore {
        init_score: 0,
        score: 0,
    };

    /// A score of 1 (useful for incrementing).
    pub const ONE: SimpleScore = SimpleScore {
        init_score: 0,
        score: 1,
    };

    /// Creates a new SimpleScore with the given value.
    #[inline]
    pub const fn of(score: i32) -> Self {
        SimpleScore {
            init_score: 0,
            score,
        }
    }

    /// Creates a SimpleScore for a partially initialized solution.
    #[inline]
    pub const fn of_uninitialized(init_score: i32, score: i32) -> Self {
        SimpleScore { init_score, score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn score(&self) -> i32 {
        self.score
    }
}

impl Score for SimpleScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.init_score >= 0 && self.score >= 0
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            _ => panic!("SimpleScore has 1 level, got index {}", index),
        }
    }

    impl_score_common!(SimpleScore(i32) { score } => of_uninitialized);
}

impl_score_ops!(SimpleScore { score } => of_uninitialized);

impl fmt::Debug for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleScore({}, {})", self.init_score, self.score)
    }
}

impl fmt::Display for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init_score != 0 {
            write!(f, "{}init/", self.init_score)?;
        }
        write!(f, "{}", self.score)
    }
}

impl_score_parse!(SimpleScore(i32) { score => "" } => of_uninitialized);
