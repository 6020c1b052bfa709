//! HardMediumSoftScore - Three-level score with hard, medium, and soft constraints

use std::fmt;

use super::traits::Score;
use super::ScoreLevel;

/// A score with hard, medium, and soft constraint levels.
///
/// Hard constraints must be satisfied for feasibility.
/// Medium constraints have higher priority than soft constraints.
/// Soft constraints are the lowest priority optimization objectives.
///
/// Comparison order: init > hard > medium > soft
///
/// # Examples
///
/// ```
/// use planforge_core::HardMediumSoftScore;
///
/// let score1 = HardMediumSoftScore::of(0, -10, -100);
/// let score2 = HardMediumSoftScore::of(0, -5, -200);
///
/// // Better medium score wins even with worse soft score
/// assert!(score2 > score1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HardMediumSoftScore {
    init_score: i32,
    hard: i32,
    medium: i32,
    soft: i32,
}

impl HardMediumSoftScore {
    /// The zero score.
    pub const ZERO: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 0);

    /// One hard constraint penalty.
    pub const ONE_HARD: HardMediumSoftScore = HardMediumSoftScore::of(1, 0, 0);

    /// One medium constraint penalty.
    pub const ONE_MEDIUM: HardMediumSoftScore = HardMediumSoftScore::of(0, 1, 0);

    /// One soft constraint penalty.
    pub const ONE_SOFT: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 1);

    /// Creates a new HardMediumSoftScore.
    #[inline]
    pub const fn of(hard: i32, medium: i32, soft: i32) -> Self {
        Self::of_uninitialized(0, hard, medium, soft)
    }

    /// Creates a new HardMediumSoftScore carrying an init score.
    #[inline]
    pub const fn of_uninitialized(init_score: i32, hard: i32, medium: i32, soft: i32) -> Self {
        HardMediumSoftScore {
            init_score,
            hard,
            medium,
            soft,
        }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i32) -> Self {
        Self::of(hard, 0, 0)
    }

    /// Creates a score with only a medium component.
    #[inline]
    pub const fn of_medium(medium: i32) -> Self {
        Self::of(0, medium, 0)
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i32) -> Self {
        Self::of(0, 0, soft)
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i32 {
        self.hard
    }

    /// Returns the medium score component.
    #[inline]
    pub const fn medium(&self) -> i32 {
        self.medium
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i32 {
        self.soft
    }
}

impl Score for HardMediumSoftScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.init_score >= 0 && self.hard >= 0
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Medium,
            2 => ScoreLevel::Soft,
            _ => panic!("HardMediumSoftScore has 3 levels, got index {}", index),
        }
    }

    impl_score_common!(HardMediumSoftScore(i32) { hard, medium, soft } => of_uninitialized);
}

impl_score_ops!(HardMediumSoftScore { hard, medium, soft } => of_uninitialized);
impl_hard_medium_soft_levels!(HardMediumSoftScore(i32));

impl fmt::Debug for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardMediumSoftScore({}, {}, {}, {})",
            self.init_score, self.hard, self.medium, self.soft
        )
    }
}

impl fmt::Display for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init_score != 0 {
            write!(f, "{}init/", self.init_score)?;
        }
        write!(
            f,
            "{}hard/{}medium/{}soft",
            self.hard, self.medium, self.soft
        )
    }
}

impl_score_parse!(HardMediumSoftScore(i32) { hard => "hard", medium => "medium", soft => "soft" } => of_uninitialized);
