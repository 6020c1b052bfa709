//! Inliner for the three-level hard/medium/soft scores.

use std::collections::HashMap;

use num_traits::Zero;
use planforge_core::score::{
    HardMediumSoftDecimalScore, HardMediumSoftLevels, HardMediumSoftLongScore,
    HardMediumSoftScore, ScoreNumber,
};
use planforge_core::ConstraintRef;
use tracing::{debug, trace};

use super::{
    validate_weight, ConstraintTracker, ScoreInliner, UndoScoreImpacter, WeightedScoreImpacter,
};
use crate::api::analysis::{ConstraintJustification, ConstraintMatchTotal, EntityRef, Indictment};
use crate::error::ScoreInlinerError;

/// Constraint weight shaped for the impacter path it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardMediumSoftWeight<N> {
    /// Only the hard level is non-zero (also used for the all-zero weight).
    Hard(N),
    /// Only the medium level is non-zero.
    Medium(N),
    /// Only the soft level is non-zero.
    Soft(N),
    /// At least two levels are non-zero.
    Multi { hard: N, medium: N, soft: N },
}

impl<N: Zero + Copy> HardMediumSoftWeight<N> {
    pub(crate) fn shape(hard: N, medium: N, soft: N) -> Self {
        match (hard.is_zero(), medium.is_zero(), soft.is_zero()) {
            (_, true, true) => Self::Hard(hard),
            (true, false, true) => Self::Medium(medium),
            (true, true, false) => Self::Soft(soft),
            _ => Self::Multi { hard, medium, soft },
        }
    }

    /// Name of the impacter path, for logging.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Hard(_) => "hard",
            Self::Medium(_) => "medium",
            Self::Soft(_) => "soft",
            Self::Multi { .. } => "multi",
        }
    }
}

/// Delta applied by one match, as carried by its undo token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardMediumSoftImpact<N> {
    Hard(N),
    Medium(N),
    Soft(N),
    Multi { hard: N, medium: N, soft: N },
}

/// Running totals for [`HardMediumSoftScore`] and its long and decimal variants.
#[derive(Debug)]
pub struct HardMediumSoftInliner<Sc: HardMediumSoftLevels> {
    hard: Sc::Number,
    medium: Sc::Number,
    soft: Sc::Number,
    tracker: ConstraintTracker<Sc>,
}

pub type HardMediumSoftScoreInliner = HardMediumSoftInliner<HardMediumSoftScore>;
pub type HardMediumSoftLongScoreInliner = HardMediumSoftInliner<HardMediumSoftLongScore>;
pub type HardMediumSoftDecimalScoreInliner = HardMediumSoftInliner<HardMediumSoftDecimalScore>;

impl<Sc: HardMediumSoftLevels> HardMediumSoftInliner<Sc> {
    pub fn new(constraint_match_enabled: bool) -> Self {
        debug!(
            event = "score_inliner_created",
            kind = "hard_medium_soft",
            score_type = std::any::type_name::<Sc>(),
            constraint_match_enabled,
        );
        Self {
            hard: Sc::Number::zero(),
            medium: Sc::Number::zero(),
            soft: Sc::Number::zero(),
            tracker: ConstraintTracker::new(constraint_match_enabled),
        }
    }

    fn apply(&mut self, impact: HardMediumSoftImpact<Sc::Number>) {
        match impact {
            HardMediumSoftImpact::Hard(d) => self.hard = self.hard.level_add(d),
            HardMediumSoftImpact::Medium(d) => self.medium = self.medium.level_add(d),
            HardMediumSoftImpact::Soft(d) => self.soft = self.soft.level_add(d),
            HardMediumSoftImpact::Multi { hard, medium, soft } => {
                self.hard = self.hard.level_add(hard);
                self.medium = self.medium.level_add(medium);
                self.soft = self.soft.level_add(soft);
            }
        }
    }

    fn retract(&mut self, impact: HardMediumSoftImpact<Sc::Number>) {
        match impact {
            HardMediumSoftImpact::Hard(d) => self.hard = self.hard.level_sub(d),
            HardMediumSoftImpact::Medium(d) => self.medium = self.medium.level_sub(d),
            HardMediumSoftImpact::Soft(d) => self.soft = self.soft.level_sub(d),
            HardMediumSoftImpact::Multi { hard, medium, soft } => {
                self.hard = self.hard.level_sub(hard);
                self.medium = self.medium.level_sub(medium);
                self.soft = self.soft.level_sub(soft);
            }
        }
    }
}

impl<Sc: HardMediumSoftLevels> Default for HardMediumSoftInliner<Sc> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<Sc: HardMediumSoftLevels> ScoreInliner for HardMediumSoftInliner<Sc> {
    type Score = Sc;
    type Number = Sc::Number;
    type Weight = HardMediumSoftWeight<Sc::Number>;
    type Impact = HardMediumSoftImpact<Sc::Number>;

    fn constraint_match_enabled(&self) -> bool {
        self.tracker.constraint_match_enabled()
    }

    fn build_weighted_score_impacter(
        &mut self,
        constraint: ConstraintRef,
        constraint_weight: Sc,
    ) -> Result<WeightedScoreImpacter<Self::Weight>, ScoreInlinerError> {
        validate_weight(&constraint, &constraint_weight)?;
        let weight = HardMediumSoftWeight::shape(
            constraint_weight.hard_level(),
            constraint_weight.medium_level(),
            constraint_weight.soft_level(),
        );
        trace!(
            event = "impacter_built",
            constraint = %constraint,
            weight = %constraint_weight,
            path = weight.path(),
        );
        let id = self.tracker.add_constraint(constraint, constraint_weight);
        Ok(WeightedScoreImpacter::new(id, weight))
    }

    #[inline]
    fn impact_score<J>(
        &mut self,
        impacter: &WeightedScoreImpacter<Self::Weight>,
        match_weight: Sc::Number,
        justification: J,
    ) -> UndoScoreImpacter<Self::Impact>
    where
        J: FnOnce() -> ConstraintJustification,
    {
        let impact = match *impacter.weight() {
            HardMediumSoftWeight::Hard(w) => {
                HardMediumSoftImpact::Hard(w.level_mul(match_weight))
            }
            HardMediumSoftWeight::Medium(w) => {
                HardMediumSoftImpact::Medium(w.level_mul(match_weight))
            }
            HardMediumSoftWeight::Soft(w) => {
                HardMediumSoftImpact::Soft(w.level_mul(match_weight))
            }
            HardMediumSoftWeight::Multi { hard, medium, soft } => HardMediumSoftImpact::Multi {
                hard: hard.level_mul(match_weight),
                medium: medium.level_mul(match_weight),
                soft: soft.level_mul(match_weight),
            },
        };
        self.apply(impact);
        let registration = self.tracker.register(
            impacter.constraint_id(),
            || impact_score_of::<Sc>(impact),
            justification,
        );
        UndoScoreImpacter::new(impact, registration)
    }

    #[inline]
    fn undo(&mut self, undo: UndoScoreImpacter<Self::Impact>) {
        let (impact, registration) = undo.into_parts();
        self.retract(impact);
        self.tracker.deregister(registration);
    }

    fn extract_score(&self, init_score: i32) -> Sc {
        Sc::from_levels(init_score, self.hard, self.medium, self.soft)
    }

    fn constraint_match_totals(&self) -> Option<&HashMap<ConstraintRef, ConstraintMatchTotal<Sc>>> {
        self.tracker.totals()
    }

    fn indictments(&self) -> Option<&HashMap<EntityRef, Indictment<Sc>>> {
        self.tracker.indictments()
    }
}

fn impact_score_of<Sc: HardMediumSoftLevels>(impact: HardMediumSoftImpact<Sc::Number>) -> Sc {
    let zero = Sc::Number::zero();
    match impact {
        HardMediumSoftImpact::Hard(d) => Sc::from_levels(0, d, zero, zero),
        HardMediumSoftImpact::Medium(d) => Sc::from_levels(0, zero, d, zero),
        HardMediumSoftImpact::Soft(d) => Sc::from_levels(0, zero, zero, d),
        HardMediumSoftImpact::Multi { hard, medium, soft } => {
            Sc::from_levels(0, hard, medium, soft)
        }
    }
}
