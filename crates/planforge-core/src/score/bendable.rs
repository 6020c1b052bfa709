//! BendableScore - Runtime-configurable multi-level score

/// A score with a configurable number of hard and soft levels.
///
/// Unlike `HardMediumSoftScore`, the number of levels is determined at runtime.
/// This is useful when the constraint structure varies between problem instances.
///
/// # Examples
///
/// ```
/// use planforge_core::score::{BendableScore, Score};
///
/// // Create a score with 2 hard levels and 3 soft levels
/// let score = BendableScore::of(vec![-1, -2], vec![-10, -20, -30]);
///
/// assert_eq!(score.hard_levels_count(), 2);
/// assert_eq!(score.soft_levels_count(), 3);
/// assert!(!score.is_feasible());  // Negative hard scores
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BendableScore {
    init_score: i32,
    hard_scores: Vec<i32>,
    soft_scores: Vec<i32>,
}

impl Default for BendableScore {
    fn default() -> Self {
        // 1 hard + 1 soft level
        BendableScore::zero_with_levels(1, 1)
    }
}

impl_bendable_score!(BendableScore(i32));
