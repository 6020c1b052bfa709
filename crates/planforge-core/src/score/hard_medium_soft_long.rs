//! HardMediumSoftLongScore - 64-bit variant of the three-level score

use std::fmt;

use super::traits::Score;
use super::ScoreLevel;

/// A hard/medium/soft score backed by `i64` levels.
///
/// Use it when per-match impacts can overflow `i32`, e.g. distances in
/// meters summed over a large routing plan.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HardMediumSoftLongScore {
    init_score: i32,
    hard: i64,
    medium: i64,
    soft: i64,
}

impl HardMediumSoftLongScore {
    pub const ZERO: HardMediumSoftLongScore = HardMediumSoftLongScore::of(0, 0, 0);
    pub const ONE_HARD: HardMediumSoftLongScore = HardMediumSoftLongScore::of(1, 0, 0);
    pub const ONE_MEDIUM: HardMediumSoftLongScore = HardMediumSoftLongScore::of(0, 1, 0);
    pub const ONE_SOFT: HardMediumSoftLongScore = HardMediumSoftLongScore::of(0, 0, 1);

    #[inline]
    pub const fn of(hard: i64, medium: i64, soft: i64) -> Self {
        Self::of_uninitialized(0, hard, medium, soft)
    }

    #[inline]
    pub const fn of_uninitialized(init_score: i32, hard: i64, medium: i64, soft: i64) -> Self {
        HardMediumSoftLongScore {
            init_score,
            hard,
            medium,
            soft,
        }
    }

    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        Self::of(hard, 0, 0)
    }

    #[inline]
    pub const fn of_medium(medium: i64) -> Self {
        Self::of(0, medium, 0)
    }

    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        Self::of(0, 0, soft)
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn medium(&self) -> i64 {
        self.medium
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }
}

impl Score for HardMediumSoftLongScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.init_score >= 0 && self.hard >= 0
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Medium,
            2 => ScoreLevel::Soft,
            _ => panic!("HardMediumSoftLongScore has 3 levels, got index {}", index),
        }
    }

    impl_score_common!(HardMediumSoftLongScore(i64) { hard, medium, soft } => of_uninitialized);
}

impl_score_ops!(HardMediumSoftLongScore { hard, medium, soft } => of_uninitialized);
impl_hard_medium_soft_levels!(HardMediumSoftLongScore(i64));

impl fmt::Debug for HardMediumSoftLongScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardMediumSoftLongScore({}, {}, {}, {})",
            self.init_score, self.hard, self.medium, self.soft
        )
    }
}

impl fmt::Display for HardMediumSoftLongScore {
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

impl_score_parse!(HardMediumSoftLongScore(i64) { hard => "hard", medium => "medium", soft => "soft" } => of_uninitialized);
