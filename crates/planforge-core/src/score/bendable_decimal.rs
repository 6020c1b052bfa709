//! BendableDecimalScore - Bendable score with exact decimal levels

use rust_decimal::Decimal;

/// A bendable score backed by [`Decimal`] levels.
///
/// # Examples
///
/// ```
/// use planforge_core::score::{BendableDecimalScore, ParseableScore};
/// use rust_decimal::Decimal;
///
/// let score = BendableDecimalScore::parse("[0/-1.5]hard/[-2.25]soft").unwrap();
/// assert_eq!(score.hard_score(1), Decimal::new(-15, 1));
/// assert_eq!(score.soft_score(0), Decimal::new(-225, 2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BendableDecimalScore {
    init_score: i32,
    hard_scores: Vec<Decimal>,
    soft_scores: Vec<Decimal>,
}

impl Default for BendableDecimalScore {
    fn default() -> Self {
        BendableDecimalScore::zero_with_levels(1, 1)
    }
}

impl_bendable_score!(BendableDecimalScore(Decimal));
