//! Constraint match bookkeeping shared by every inliner.

use std::collections::HashMap;

use planforge_core::score::Score;
use planforge_core::ConstraintRef;

use super::{ConstraintId, MatchRegistration};
use crate::api::analysis::{
    ConstraintJustification, ConstraintMatch, ConstraintMatchTotal, EntityRef, Indictment,
    MatchId,
};

/// Live match totals and indictments of one inliner.
#[derive(Debug)]
pub(crate) struct ConstraintMatchRegistry<Sc: Score> {
    next_match_id: u64,
    totals: HashMap<ConstraintRef, ConstraintMatchTotal<Sc>>,
    indictments: HashMap<EntityRef, Indictment<Sc>>,
}

impl<Sc: Score> ConstraintMatchRegistry<Sc> {
    pub(crate) fn new() -> Self {
        Self {
            next_match_id: 0,
            totals: HashMap::new(),
            indictments: HashMap::new(),
        }
    }

    /// Records one applied match and returns its id.
    pub(crate) fn register(
        &mut self,
        constraint_ref: &ConstraintRef,
        constraint_weight: &Sc,
        score: Sc,
        justification: ConstraintJustification,
    ) -> MatchId {
        let id = MatchId(self.next_match_id);
        self.next_match_id += 1;

        let constraint_match =
            ConstraintMatch::new(id, constraint_ref.clone(), score, justification);
        for entity in constraint_match.justification.distinct_entities() {
            self.indictments
                .entry(entity.clone())
                .or_insert_with(|| Indictment::new(entity.clone(), constraint_weight.zeroed()))
                .add_match(constraint_match.clone());
        }
        self.totals
            .entry(constraint_ref.clone())
            .or_insert_with(|| {
                ConstraintMatchTotal::new(constraint_ref.clone(), constraint_weight.clone())
            })
            .add_match(constraint_match);
        id
    }

    /// Removes a previously registered match. Empty totals and indictments are dropped.
    pub(crate) fn deregister(&mut self, constraint_ref: &ConstraintRef, id: MatchId) {
        let Some(total) = self.totals.get_mut(constraint_ref) else {
            return;
        };
        let Some(removed) = total.remove_match(id) else {
            return;
        };
        if total.is_empty() {
            self.totals.remove(constraint_ref);
        }
        for entity in removed.justification.distinct_entities() {
            if let Some(indictment) = self.indictments.get_mut(entity) {
                indictment.remove_match(constraint_ref, id);
                if indictment.is_empty() {
                    self.indictments.remove(entity);
                }
            }
        }
    }

    pub(crate) fn totals(&self) -> &HashMap<ConstraintRef, ConstraintMatchTotal<Sc>> {
        &self.totals
    }

    pub(crate) fn indictments(&self) -> &HashMap<EntityRef, Indictment<Sc>> {
        &self.indictments
    }
}

/// Constraints known to an inliner plus its optional match registry.
#[derive(Debug)]
pub(crate) struct ConstraintTracker<Sc: Score> {
    constraints: Vec<(ConstraintRef, Sc)>,
    registry: Option<ConstraintMatchRegistry<Sc>>,
}

impl<Sc: Score> ConstraintTracker<Sc> {
    pub(crate) fn new(constraint_match_enabled: bool) -> Self {
        Self {
            constraints: Vec::new(),
            registry: constraint_match_enabled.then(ConstraintMatchRegistry::new),
        }
    }

    pub(crate) fn constraint_match_enabled(&self) -> bool {
        self.registry.is_some()
    }

    pub(crate) fn add_constraint(&mut self, constraint: ConstraintRef, weight: Sc) -> ConstraintId {
        let id = ConstraintId(self.constraints.len());
        self.constraints.push((constraint, weight));
        id
    }

    /// Registers a match when diagnostics are enabled.
    ///
    /// Neither closure is called otherwise.
    #[inline]
    pub(crate) fn register<F, J>(
        &mut self,
        constraint: ConstraintId,
        score: F,
        justification: J,
    ) -> Option<MatchRegistration>
    where
        F: FnOnce() -> Sc,
        J: FnOnce() -> ConstraintJustification,
    {
        let registry = self.registry.as_mut()?;
        let (constraint_ref, weight) = &self.constraints[constraint.0];
        let match_id = registry.register(constraint_ref, weight, score(), justification());
        Some(MatchRegistration {
            constraint,
            match_id,
        })
    }

    #[inline]
    pub(crate) fn deregister(&mut self, registration: Option<MatchRegistration>) {
        if let (Some(registry), Some(registration)) = (self.registry.as_mut(), registration) {
            let (constraint_ref, _) = &self.constraints[registration.constraint.0];
            registry.deregister(constraint_ref, registration.match_id);
        }
    }

    pub(crate) fn totals(&self) -> Option<&HashMap<ConstraintRef, ConstraintMatchTotal<Sc>>> {
        self.registry.as_ref().map(ConstraintMatchRegistry::totals)
    }

    pub(crate) fn indictments(&self) -> Option<&HashMap<EntityRef, Indictment<Sc>>> {
        self.registry.as_ref().map(ConstraintMatchRegistry::indictments)
    }
}
