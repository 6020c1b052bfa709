//! Inliner for [`SimpleScore`].

use std::collections::HashMap;

use planforge_core::score::SimpleScore;
use planforge_core::ConstraintRef;
use tracing::{debug, trace};

use super::{
    validate_weight, ConstraintTracker, ScoreInliner, UndoScoreImpacter, WeightedScoreImpacter,
};
use crate::api::analysis::{ConstraintJustification, ConstraintMatchTotal, EntityRef, Indictment};
use crate::error::ScoreInlinerError;

/// Running total of a single-level score.
///
/// A simple score has one level, so every impacter takes the single-level
/// path: the weight is the scalar itself.
#[derive(Debug)]
pub struct SimpleScoreInliner {
    score: i32,
    tracker: ConstraintTracker<SimpleScore>,
}

impl SimpleScoreInliner {
    pub fn new(constraint_match_enabled: bool) -> Self {
        debug!(
            event = "score_inliner_created",
            kind = "simple",
            constraint_match_enabled,
        );
        Self {
            score: 0,
            tracker: ConstraintTracker::new(constraint_match_enabled),
        }
    }
}

impl ScoreInliner for SimpleScoreInliner {
    type Score = SimpleScore;
    type Number = i32;
    type Weight = i32;
    type Impact = i32;

    fn constraint_match_enabled(&self) -> bool {
        self.tracker.constraint_match_enabled()
    }

    fn build_weighted_score_impacter(
        &mut self,
        constraint: ConstraintRef,
        constraint_weight: SimpleScore,
    ) -> Result<WeightedScoreImpacter<i32>, ScoreInlinerError> {
        validate_weight(&constraint, &constraint_weight)?;
        trace!(
            event = "impacter_built",
            constraint = %constraint,
            weight = %constraint_weight,
        );
        let weight = constraint_weight.score();
        let id = self.tracker.add_constraint(constraint, constraint_weight);
        Ok(WeightedScoreImpacter::new(id, weight))
    }

    #[inline]
    fn impact_score<J>(
        &mut self,
        impacter: &WeightedScoreImpacter<i32>,
        match_weight: i32,
        justification: J,
    ) -> UndoScoreImpacter<i32>
    where
        J: FnOnce() -> ConstraintJustification,
    {
        let impact = impacter.weight().wrapping_mul(match_weight);
        self.score = self.score.wrapping_add(impact);
        let registration = self.tracker.register(
            impacter.constraint_id(),
            || SimpleScore::of(impact),
            justification,
        );
        UndoScoreImpacter::new(impact, registration)
    }

    #[inline]
    fn undo(&mut self, undo: UndoScoreImpacter<i32>) {
        let (impact, registration) = undo.into_parts();
        self.score = self.score.wrapping_sub(impact);
        self.tracker.deregister(registration);
    }

    fn extract_score(&self, init_score: i32) -> SimpleScore {
        SimpleScore::of_uninitialized(init_score, self.score)
    }

    fn constraint_match_totals(
        &self,
    ) -> Option<&HashMap<ConstraintRef, ConstraintMatchTotal<SimpleScore>>> {
        self.tracker.totals()
    }

    fn indictments(&self) -> Option<&HashMap<EntityRef, Indictment<SimpleScore>>> {
        self.tracker.indictments()
    }
}
