//! Inliner for bendable scores, whose level counts are chosen at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use num_traits::Zero;
use planforge_core::score::{
    BendableDecimalScore, BendableLevels, BendableLongScore, BendableScore, ScoreNumber,
};
use planforge_core::ConstraintRef;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{
    validate_weight, ConstraintTracker, ScoreInliner, UndoScoreImpacter, WeightedScoreImpacter,
};
use crate::api::analysis::{ConstraintJustification, ConstraintMatchTotal, EntityRef, Indictment};
use crate::error::ScoreInlinerError;

/// Constraint weight shaped for the impacter path it selects.
///
/// Level indices of `Hard` and `Soft` are relative to their own section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BendableWeight<N> {
    /// Exactly one hard level is non-zero.
    Hard { level: usize, weight: N },
    /// Exactly one soft level is non-zero.
    Soft { level: usize, weight: N },
    /// Zero or at least two non-zero levels; hard levels followed by soft levels.
    Multi(Arc<[N]>),
}

impl<N> BendableWeight<N> {
    /// Name of the impacter path, for logging.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Hard { .. } => "single_hard",
            Self::Soft { .. } => "single_soft",
            Self::Multi(_) => "multi",
        }
    }
}

/// Delta applied by one match, as carried by its undo token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BendableImpact<N> {
    Hard { level: usize, delta: N },
    Soft { level: usize, delta: N },
    /// General path without diagnostics: the delta is recomputed on undo.
    Scaled { weights: Arc<[N]>, match_weight: N },
    /// General path with diagnostics: snapshot of every applied level delta.
    Levels(SmallVec<[N; 4]>),
}

/// Running totals for [`BendableScore`] and its long and decimal variants.
///
/// Every weight handed to this inliner must have exactly the configured
/// number of hard and soft levels.
#[derive(Debug)]
pub struct BendableInliner<Sc: BendableLevels> {
    hard_levels: usize,
    soft_levels: usize,
    /// Hard totals followed by soft totals.
    totals: Vec<Sc::Number>,
    tracker: ConstraintTracker<Sc>,
}

pub type BendableScoreInliner = BendableInliner<BendableScore>;
pub type BendableLongScoreInliner = BendableInliner<BendableLongScore>;
pub type BendableDecimalScoreInliner = BendableInliner<BendableDecimalScore>;

impl<Sc: BendableLevels> BendableInliner<Sc> {
    pub fn new(hard_levels: usize, soft_levels: usize, constraint_match_enabled: bool) -> Self {
        debug!(
            event = "score_inliner_created",
            kind = "bendable",
            score_type = std::any::type_name::<Sc>(),
            hard_levels,
            soft_levels,
            constraint_match_enabled,
        );
        Self {
            hard_levels,
            soft_levels,
            totals: vec![Sc::Number::zero(); hard_levels + soft_levels],
            tracker: ConstraintTracker::new(constraint_match_enabled),
        }
    }

    pub fn hard_levels_count(&self) -> usize {
        self.hard_levels
    }

    pub fn soft_levels_count(&self) -> usize {
        self.soft_levels
    }

    fn shape(&self, weight: &Sc) -> BendableWeight<Sc::Number> {
        let levels: Vec<Sc::Number> = weight
            .hard_levels()
            .iter()
            .chain(weight.soft_levels())
            .copied()
            .collect();
        let mut non_zero = levels.iter().enumerate().filter(|(_, w)| !w.is_zero());
        match (non_zero.next(), non_zero.next()) {
            (Some((index, &weight)), None) if index < self.hard_levels => BendableWeight::Hard {
                level: index,
                weight,
            },
            (Some((index, &weight)), None) => BendableWeight::Soft {
                level: index - self.hard_levels,
                weight,
            },
            _ => BendableWeight::Multi(levels.into()),
        }
    }

    /// Builds the score a single match contributed, for diagnostics.
    fn impact_as_score(&self, impact: &BendableImpact<Sc::Number>) -> Sc {
        let mut hard = vec![Sc::Number::zero(); self.hard_levels];
        let mut soft = vec![Sc::Number::zero(); self.soft_levels];
        match impact {
            BendableImpact::Hard { level, delta } => hard[*level] = *delta,
            BendableImpact::Soft { level, delta } => soft[*level] = *delta,
            BendableImpact::Scaled {
                weights,
                match_weight,
            } => {
                for (i, w) in weights.iter().enumerate() {
                    self.slot(&mut hard, &mut soft, i, w.level_mul(*match_weight));
                }
            }
            BendableImpact::Levels(deltas) => {
                for (i, d) in deltas.iter().enumerate() {
                    self.slot(&mut hard, &mut soft, i, *d);
                }
            }
        }
        Sc::from_levels(0, hard, soft)
    }

    fn slot(&self, hard: &mut [Sc::Number], soft: &mut [Sc::Number], i: usize, value: Sc::Number) {
        if i < self.hard_levels {
            hard[i] = value;
        } else {
            soft[i - self.hard_levels] = value;
        }
    }
}

impl<Sc: BendableLevels> ScoreInliner for BendableInliner<Sc> {
    type Score = Sc;
    type Number = Sc::Number;
    type Weight = BendableWeight<Sc::Number>;
    type Impact = BendableImpact<Sc::Number>;

    fn constraint_match_enabled(&self) -> bool {
        self.tracker.constraint_match_enabled()
    }

    fn build_weighted_score_impacter(
        &mut self,
        constraint: ConstraintRef,
        constraint_weight: Sc,
    ) -> Result<WeightedScoreImpacter<Self::Weight>, ScoreInlinerError> {
        if constraint_weight.hard_levels().len() != self.hard_levels
            || constraint_weight.soft_levels().len() != self.soft_levels
        {
            return Err(ScoreInlinerError::invalid_weight(
                &constraint,
                &constraint_weight,
                format!(
                    "a constraint weight must have {} hard levels and {} soft levels",
                    self.hard_levels, self.soft_levels
                ),
            ));
        }
        validate_weight(&constraint, &constraint_weight)?;
        let weight = self.shape(&constraint_weight);
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
        let impact = match impacter.weight() {
            BendableWeight::Hard { level, weight } => {
                let delta = weight.level_mul(match_weight);
                self.totals[*level] = self.totals[*level].level_add(delta);
                BendableImpact::Hard {
                    level: *level,
                    delta,
                }
            }
            BendableWeight::Soft { level, weight } => {
                let delta = weight.level_mul(match_weight);
                let index = self.hard_levels + *level;
                self.totals[index] = self.totals[index].level_add(delta);
                BendableImpact::Soft {
                    level: *level,
                    delta,
                }
            }
            BendableWeight::Multi(weights) if self.tracker.constraint_match_enabled() => {
                let deltas: SmallVec<[Sc::Number; 4]> =
                    weights.iter().map(|w| w.level_mul(match_weight)).collect();
                for (total, delta) in self.totals.iter_mut().zip(&deltas) {
                    *total = total.level_add(*delta);
                }
                BendableImpact::Levels(deltas)
            }
            BendableWeight::Multi(weights) => {
                for (total, w) in self.totals.iter_mut().zip(weights.iter()) {
                    *total = total.level_add(w.level_mul(match_weight));
                }
                BendableImpact::Scaled {
                    weights: Arc::clone(weights),
                    match_weight,
                }
            }
        };
        let score = self
            .tracker
            .constraint_match_enabled()
            .then(|| self.impact_as_score(&impact));
        let registration = score.and_then(|score| {
            self.tracker
                .register(impacter.constraint_id(), || score, justification)
        });
        UndoScoreImpacter::new(impact, registration)
    }

    #[inline]
    fn undo(&mut self, undo: UndoScoreImpacter<Self::Impact>) {
        let (impact, registration) = undo.into_parts();
        match impact {
            BendableImpact::Hard { level, delta } => {
                self.totals[level] = self.totals[level].level_sub(delta);
            }
            BendableImpact::Soft { level, delta } => {
                let index = self.hard_levels + level;
                self.totals[index] = self.totals[index].level_sub(delta);
            }
            BendableImpact::Scaled {
                weights,
                match_weight,
            } => {
                for (total, w) in self.totals.iter_mut().zip(weights.iter()) {
                    *total = total.level_sub(w.level_mul(match_weight));
                }
            }
            BendableImpact::Levels(deltas) => {
                for (total, delta) in self.totals.iter_mut().zip(&deltas) {
                    *total = total.level_sub(*delta);
                }
            }
        }
        self.tracker.deregister(registration);
    }

    fn extract_score(&self, init_score: i32) -> Sc {
        let (hard, soft) = self.totals.split_at(self.hard_levels);
        Sc::from_levels(init_score, hard.to_vec(), soft.to_vec())
    }

    fn constraint_match_totals(&self) -> Option<&HashMap<ConstraintRef, ConstraintMatchTotal<Sc>>> {
        self.tracker.totals()
    }

    fn indictments(&self) -> Option<&HashMap<EntityRef, Indictment<Sc>>> {
        self.tracker.indictments()
    }
}
