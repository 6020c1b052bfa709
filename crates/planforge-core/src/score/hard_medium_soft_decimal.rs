//! HardMediumSoftDecimalScore - Three-level score with exact decimal levels

use std::fmt;

use rust_decimal::Decimal;

use super::traits::Score;
use super::ScoreLevel;

/// A hard/medium/soft score backed by [`Decimal`] levels.
///
/// Levels keep the scale of the values they were built from, so
/// `"-0.50soft"` displays back as `-0.50soft`. Equality and ordering
/// compare numeric values, not scales.
///
/// # Examples
///
/// ```
/// use planforge_core::HardMediumSoftDecimalScore;
/// use rust_decimal::Decimal;
///
/// let score = HardMediumSoftDecimalScore::of(
///     Decimal::ZERO,
///     Decimal::new(-15, 1),
///     Decimal::new(-2025, 2),
/// );
/// assert_eq!(format!("{}", score), "0hard/-1.5medium/-20.25soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HardMediumSoftDecimalScore {
    init_score: i32,
    hard: Decimal,
    medium: Decimal,
    soft: Decimal,
}

impl HardMediumSoftDecimalScore {
    /// The zero score.
    pub const ZERO: HardMediumSoftDecimalScore =
        HardMediumSoftDecimalScore::of(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

    /// Creates a new HardMediumSoftDecimalScore.
    #[inline]
    pub const fn of(hard: Decimal, medium: Decimal, soft: Decimal) -> Self {
        Self::of_uninitialized(0, hard, medium, soft)
    }

    /// Creates a new HardMediumSoftDecimalScore carrying an init score.
    #[inline]
    pub const fn of_uninitialized(
        init_score: i32,
        hard: Decimal,
        medium: Decimal,
        soft: Decimal,
    ) -> Self {
        HardMediumSoftDecimalScore {
            init_score,
            hard,
            medium,
            soft,
        }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: Decimal) -> Self {
        Self::of(hard, Decimal::ZERO, Decimal::ZERO)
    }

    /// Creates a score with only a medium component.
    #[inline]
    pub const fn of_medium(medium: Decimal) -> Self {
        Self::of(Decimal::ZERO, medium, Decimal::ZERO)
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: Decimal) -> Self {
        Self::of(Decimal::ZERO, Decimal::ZERO, soft)
    }

    #[inline]
    pub const fn hard(&self) -> Decimal {
        self.hard
    }

    #[inline]
    pub const fn medium(&self) -> Decimal {
        self.medium
    }

    #[inline]
    pub const fn soft(&self) -> Decimal {
        self.soft
    }
}

impl Score for HardMediumSoftDecimalScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.init_score >= 0 && self.hard >= Decimal::ZERO
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Medium,
            2 => ScoreLevel::Soft,
            _ => panic!(
                "HardMediumSoftDecimalScore has 3 levels, got index {}",
                index
            ),
        }
    }

    impl_score_common!(HardMediumSoftDecimalScore(Decimal) { hard, medium, soft } => of_uninitialized);
}

impl_score_ops!(HardMediumSoftDecimalScore { hard, medium, soft } => of_uninitialized);
impl_hard_medium_soft_levels!(HardMediumSoftDecimalScore(Decimal));

impl fmt::Debug for HardMediumSoftDecimalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardMediumSoftDecimalScore({}, {}, {}, {})",
            self.init_score, self.hard, self.medium, self.soft
        )
    }
}

impl fmt::Display for HardMediumSoftDecimalScore {
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

impl_score_parse!(HardMediumSoftDecimalScore(Decimal) { hard => "hard", medium => "medium", soft => "soft" } => of_uninitialized);
