//! BendableLongScore - Bendable score with `i64` levels

/// A bendable score backed by `i64` levels.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BendableLongScore {
    init_score: i32,
    hard_scores: Vec<i64>,
    soft_scores: Vec<i64>,
}

impl Default for BendableLongScore {
    fn default() -> Self {
        BendableLongScore::zero_with_levels(1, 1)
    }
}

impl_bendable_score!(BendableLongScore(i64));
