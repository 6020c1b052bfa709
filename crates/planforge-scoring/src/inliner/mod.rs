//! Incremental score inliners.
//!
//! A score inliner keeps the running per-level totals of one scoring
//! session. The evaluator builds one [`WeightedScoreImpacter`] per constraint,
//! impacts it once per detected match and keeps the returned
//! [`UndoScoreImpacter`]. Handing the token back to the inliner subtracts
//! exactly the delta that was added.
//!
//! # Architecture
//!
//! - [`SimpleScoreInliner`]: one `i32` level
//! - [`HardMediumSoftInliner`]: three levels, generic over the level number
//! - [`BendableInliner`]: runtime hard/soft level counts, generic over the level number
//!
//! Each inliner picks a fast path per constraint when exactly one weight level
//! is non-zero; the impacter then touches a single scalar and the undo token
//! carries a single delta. Constraint match diagnostics are an optional
//! overlay: with them disabled the justification supplier is never called.
//!
//! Every inliner also has a `from_config` constructor taking a
//! [`ScoreConfig`](planforge_config::ScoreConfig).
//!
//! # Example
//!
//! ```
//! use planforge_core::{ConstraintRef, HardMediumSoftScore};
//! use planforge_scoring::{ConstraintJustification, HardMediumSoftScoreInliner, ScoreInliner};
//!
//! let mut inliner = HardMediumSoftScoreInliner::new(false);
//! let impacter = inliner
//!     .build_weighted_score_impacter(
//!         ConstraintRef::new("routing", "Distance"),
//!         HardMediumSoftScore::of_soft(1),
//!     )
//!     .unwrap();
//!
//! let undo = impacter.impact_score(&mut inliner, -7, ConstraintJustification::empty);
//! assert_eq!(inliner.extract_score(0), HardMediumSoftScore::of_soft(-7));
//!
//! undo.undo(&mut inliner);
//! assert_eq!(inliner.extract_score(0), HardMediumSoftScore::ZERO);
//! ```

mod bendable;
mod configured;
mod hard_medium_soft;
mod registry;
mod simple;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt::Debug;

use planforge_core::score::{Score, ScoreNumber};
use planforge_core::ConstraintRef;

use crate::api::analysis::{
    ConstraintJustification, ConstraintMatchTotal, EntityRef, Indictment, MatchId,
    ScoreExplanation,
};
use crate::api::weight_overrides::WeightProvider;
use crate::error::ScoreInlinerError;

pub use bendable::{
    BendableDecimalScoreInliner, BendableImpact, BendableInliner, BendableLongScoreInliner,
    BendableScoreInliner, BendableWeight,
};
pub use configured::ConfiguredScore;
pub use hard_medium_soft::{
    HardMediumSoftDecimalScoreInliner, HardMediumSoftImpact, HardMediumSoftInliner,
    HardMediumSoftLongScoreInliner, HardMediumSoftScoreInliner, HardMediumSoftWeight,
};
pub(crate) use registry::ConstraintTracker;
pub use simple::SimpleScoreInliner;

/// Index of a constraint inside the inliner that built its impacter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub(crate) usize);

impl ConstraintId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Diagnostic registration carried by an undo token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRegistration {
    pub constraint: ConstraintId,
    pub match_id: MatchId,
}

/// Per-constraint impacter: the constraint's weight, pre-shaped for the
/// inliner's fast or general path.
///
/// Cheap to clone; it holds no reference to the inliner.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScoreImpacter<W> {
    constraint: ConstraintId,
    weight: W,
}

impl<W> WeightedScoreImpacter<W> {
    pub(crate) fn new(constraint: ConstraintId, weight: W) -> Self {
        Self { constraint, weight }
    }

    pub fn constraint_id(&self) -> ConstraintId {
        self.constraint
    }

    /// Returns the shaped weight (which path the impacter takes).
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Applies one match to `inliner`.
    ///
    /// Shorthand for [`ScoreInliner::impact_score`].
    #[inline]
    pub fn impact_score<I, J>(
        &self,
        inliner: &mut I,
        match_weight: I::Number,
        justification: J,
    ) -> UndoScoreImpacter<I::Impact>
    where
        I: ScoreInliner<Weight = W>,
        J: FnOnce() -> ConstraintJustification,
    {
        inliner.impact_score(self, match_weight, justification)
    }
}

/// One-shot token that reverses a single applied match.
///
/// Consumed by [`undo`](Self::undo), so it cannot be applied twice.
/// Tokens must be handed back to the inliner that produced them.
#[derive(Debug)]
#[must_use = "dropping an undo token makes the match impossible to retract"]
pub struct UndoScoreImpacter<D> {
    delta: D,
    registration: Option<MatchRegistration>,
}

impl<D> UndoScoreImpacter<D> {
    pub(crate) fn new(delta: D, registration: Option<MatchRegistration>) -> Self {
        Self {
            delta,
            registration,
        }
    }

    /// Returns the delta this token will subtract.
    pub fn delta(&self) -> &D {
        &self.delta
    }

    /// Returns the diagnostic registration, if diagnostics are enabled.
    pub fn registration(&self) -> Option<MatchRegistration> {
        self.registration
    }

    /// Reverses the match on `inliner`.
    ///
    /// Shorthand for [`ScoreInliner::undo`].
    #[inline]
    pub fn undo<I>(self, inliner: &mut I)
    where
        I: ScoreInliner<Impact = D>,
    {
        inliner.undo(self)
    }

    pub(crate) fn into_parts(self) -> (D, Option<MatchRegistration>) {
        (self.delta, self.registration)
    }
}

/// Running score totals of one scoring session.
///
/// Single writer: every mutation goes through `&mut self`. Undo tokens are
/// expected back in reverse order of application; the inliner does not check it.
pub trait ScoreInliner {
    /// Score type assembled by [`extract_score`](Self::extract_score).
    type Score: Score;
    /// Numeric kind of match weights and levels.
    type Number: ScoreNumber;
    /// Shaped constraint weight held by impacters.
    type Weight: Clone + Debug;
    /// Delta carried by undo tokens.
    type Impact: Debug;

    /// Returns true if matches are tracked for diagnostics.
    fn constraint_match_enabled(&self) -> bool;

    /// Builds the impacter for one constraint.
    ///
    /// Fails if the weight has an init score, a negative level, or (for
    /// bendable scores) a level count different from the inliner's.
    fn build_weighted_score_impacter(
        &mut self,
        constraint: ConstraintRef,
        constraint_weight: Self::Score,
    ) -> Result<WeightedScoreImpacter<Self::Weight>, ScoreInlinerError>;

    /// Builds the impacter with the weight looked up in `overrides` first,
    /// falling back to `default_weight`.
    fn build_weighted_score_impacter_with_overrides<P>(
        &mut self,
        constraint: ConstraintRef,
        default_weight: Self::Score,
        overrides: &P,
    ) -> Result<WeightedScoreImpacter<Self::Weight>, ScoreInlinerError>
    where
        P: WeightProvider<Self::Score> + ?Sized,
    {
        let weight = overrides.weight_or_default(&constraint.full_name(), default_weight);
        self.build_weighted_score_impacter(constraint, weight)
    }

    /// Adds `constraint_weight * match_weight` to the running totals.
    ///
    /// `justification` is only called when diagnostics are enabled.
    fn impact_score<J>(
        &mut self,
        impacter: &WeightedScoreImpacter<Self::Weight>,
        match_weight: Self::Number,
        justification: J,
    ) -> UndoScoreImpacter<Self::Impact>
    where
        J: FnOnce() -> ConstraintJustification;

    /// Subtracts exactly the delta carried by `undo`.
    fn undo(&mut self, undo: UndoScoreImpacter<Self::Impact>);

    /// Assembles the current score. Pure; callable any number of times.
    fn extract_score(&self, init_score: i32) -> Self::Score;

    /// Live match totals by constraint, or `None` when diagnostics are disabled.
    fn constraint_match_totals(
        &self,
    ) -> Option<&HashMap<ConstraintRef, ConstraintMatchTotal<Self::Score>>>;

    /// Live indictments by entity, or `None` when diagnostics are disabled.
    fn indictments(&self) -> Option<&HashMap<EntityRef, Indictment<Self::Score>>>;

    /// Builds a score explanation from the live match totals.
    fn explain_score(&self, init_score: i32) -> Option<ScoreExplanation<Self::Score>> {
        let totals = self.constraint_match_totals()?;
        Some(ScoreExplanation::from_totals(
            self.extract_score(init_score),
            totals.values(),
        ))
    }
}

/// Rejects weights that carry an init score or a negative level.
pub(crate) fn validate_weight<Sc: Score>(
    constraint: &ConstraintRef,
    weight: &Sc,
) -> Result<(), ScoreInlinerError> {
    if weight.init_score() != 0 {
        return Err(ScoreInlinerError::invalid_weight(
            constraint,
            weight,
            "a constraint weight cannot have a non-zero init score",
        ));
    }
    if weight.has_negative_level() {
        return Err(ScoreInlinerError::invalid_weight(
            constraint,
            weight,
            "a constraint weight cannot have a negative level; use a negative match weight to reward",
        ));
    }
    Ok(())
}
