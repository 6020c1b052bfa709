//! Score analysis types for constraint match diagnostics.
//!
//! When an inliner is built with constraint matching enabled, every applied
//! match is recorded here: per constraint in a [`ConstraintMatchTotal`], and
//! per justifying entity in an [`Indictment`]. Undoing a match removes it
//! again, dropping totals and indictments that become empty.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use planforge_core::score::{Score, ScoreLevel};
use planforge_core::ConstraintRef;

/// Identifier of one registered constraint match, unique per inliner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub(crate) u64);

impl MatchId {
    /// Returns the raw id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an entity involved in a constraint match.
///
/// Uses type erasure to allow storing references to different entity types
/// in a single collection. Equality and hashing use the type name and the
/// display string.
#[derive(Clone)]
pub struct EntityRef {
    /// Type name of the entity (e.g., "Vehicle", "Visit").
    pub type_name: String,
    /// String representation for display.
    pub display: String,
    /// Type-erased entity for programmatic access.
    entity: Arc<dyn Any + Send + Sync>,
}

impl EntityRef {
    /// Creates a new entity reference from a concrete entity.
    pub fn new<T: Clone + Debug + Send + Sync + 'static>(entity: &T) -> Self {
        Self {
            type_name: std::any::type_name::<T>().to_string(),
            display: format!("{:?}", entity),
            entity: Arc::new(entity.clone()),
        }
    }

    /// Creates an entity reference with a custom display string.
    pub fn with_display<T: Clone + Send + Sync + 'static>(entity: &T, display: String) -> Self {
        Self {
            type_name: std::any::type_name::<T>().to_string(),
            display,
            entity: Arc::new(entity.clone()),
        }
    }

    /// Attempts to downcast to the concrete entity type.
    pub fn as_entity<T: 'static>(&self) -> Option<&T> {
        self.entity.downcast_ref::<T>()
    }

    /// Returns the short type name (without module path).
    pub fn short_type_name(&self) -> &str {
        self.type_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.type_name)
    }
}

impl Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRef")
            .field("type", &self.short_type_name())
            .field("display", &self.display)
            .finish()
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.display == other.display
    }
}

impl Eq for EntityRef {}

impl Hash for EntityRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
        self.display.hash(state);
    }
}

/// Justification for why a constraint matched.
#[derive(Debug, Clone)]
pub struct ConstraintJustification {
    /// Entities involved in the match.
    pub entities: Vec<EntityRef>,
    /// Human-readable description of why the constraint matched.
    pub description: String,
}

impl ConstraintJustification {
    /// Creates a justification from entities, auto-generating description.
    pub fn new(entities: Vec<EntityRef>) -> Self {
        let description = if entities.is_empty() {
            "No entities".to_string()
        } else {
            entities
                .iter()
                .map(|e| e.display.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            entities,
            description,
        }
    }

    /// Creates a justification with a custom description.
    pub fn with_description(entities: Vec<EntityRef>, description: String) -> Self {
        Self {
            entities,
            description,
        }
    }

    /// Creates a justification that involves no entity.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the involved entities with duplicates removed, in first-seen order.
    ///
    /// One match can list the same entity twice; it is indicted once.
    pub fn distinct_entities(&self) -> Vec<&EntityRef> {
        let mut distinct: Vec<&EntityRef> = Vec::with_capacity(self.entities.len());
        for entity in &self.entities {
            if !distinct.contains(&entity) {
                distinct.push(entity);
            }
        }
        distinct
    }
}

/// One applied constraint match with its score impact.
#[derive(Debug, Clone)]
pub struct ConstraintMatch<Sc: Score> {
    /// Registration id, unique within the inliner.
    pub id: MatchId,
    /// Reference to the constraint that matched.
    pub constraint_ref: ConstraintRef,
    /// Score impact of this match.
    pub score: Sc,
    /// Justification with involved entities.
    pub justification: ConstraintJustification,
}

impl<Sc: Score> ConstraintMatch<Sc> {
    /// Creates a new constraint match.
    pub fn new(
        id: MatchId,
        constraint_ref: ConstraintRef,
        score: Sc,
        justification: ConstraintJustification,
    ) -> Self {
        Self {
            id,
            constraint_ref,
            score,
            justification,
        }
    }
}

/// Running total of all live matches of one constraint.
#[derive(Debug, Clone)]
pub struct ConstraintMatchTotal<Sc: Score> {
    constraint_ref: ConstraintRef,
    constraint_weight: Sc,
    score: Sc,
    matches: BTreeMap<MatchId, ConstraintMatch<Sc>>,
}

impl<Sc: Score> ConstraintMatchTotal<Sc> {
    /// Creates an empty total for a constraint.
    pub fn new(constraint_ref: ConstraintRef, constraint_weight: Sc) -> Self {
        let score = constraint_weight.zeroed();
        Self {
            constraint_ref,
            constraint_weight,
            score,
            matches: BTreeMap::new(),
        }
    }

    pub fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    pub fn constraint_weight(&self) -> &Sc {
        &self.constraint_weight
    }

    /// Sum of the scores of all live matches.
    pub fn score(&self) -> &Sc {
        &self.score
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the live matches in registration order.
    pub fn matches(&self) -> impl Iterator<Item = &ConstraintMatch<Sc>> {
        self.matches.values()
    }

    /// Adds a match and returns a reference to it.
    pub fn add_match(&mut self, constraint_match: ConstraintMatch<Sc>) -> &ConstraintMatch<Sc> {
        self.score = self.score.clone() + constraint_match.score.clone();
        let id = constraint_match.id;
        self.matches.entry(id).or_insert(constraint_match)
    }

    /// Removes a match, returning it if it was live.
    pub fn remove_match(&mut self, id: MatchId) -> Option<ConstraintMatch<Sc>> {
        let removed = self.matches.remove(&id)?;
        self.score = self.score.clone() - removed.score.clone();
        Some(removed)
    }
}

/// Analysis of how a single entity impacts the score.
#[derive(Debug, Clone)]
pub struct Indictment<Sc: Score> {
    /// The entity being analyzed.
    pub entity: EntityRef,
    /// Total score impact from this entity.
    pub score: Sc,
    /// Matches involving this entity, grouped by constraint.
    pub constraint_matches: HashMap<ConstraintRef, Vec<ConstraintMatch<Sc>>>,
}

impl<Sc: Score> Indictment<Sc> {
    /// Creates a new indictment for an entity, starting from `zero`.
    pub fn new(entity: EntityRef, zero: Sc) -> Self {
        Self {
            entity,
            score: zero,
            constraint_matches: HashMap::new(),
        }
    }

    /// Adds a match to this indictment.
    pub fn add_match(&mut self, constraint_match: ConstraintMatch<Sc>) {
        self.score = self.score.clone() + constraint_match.score.clone();
        self.constraint_matches
            .entry(constraint_match.constraint_ref.clone())
            .or_default()
            .push(constraint_match);
    }

    /// Removes a match by id. Returns true if it was present.
    pub fn remove_match(&mut self, constraint_ref: &ConstraintRef, id: MatchId) -> bool {
        let Some(matches) = self.constraint_matches.get_mut(constraint_ref) else {
            return false;
        };
        let Some(pos) = matches.iter().position(|m| m.id == id) else {
            return false;
        };
        let removed = matches.remove(pos);
        if matches.is_empty() {
            self.constraint_matches.remove(constraint_ref);
        }
        self.score = self.score.clone() - removed.score;
        true
    }

    /// Returns the total number of constraint matches.
    pub fn match_count(&self) -> usize {
        self.constraint_matches.values().map(|v| v.len()).sum::<usize>()
    }

    /// Returns true if no match involves this entity anymore.
    pub fn is_empty(&self) -> bool {
        self.constraint_matches.is_empty()
    }

    /// Returns the constraint refs for all violated constraints.
    pub fn violated_constraints(&self) -> Vec<&ConstraintRef> {
        self.constraint_matches.keys().collect()
    }

    /// Returns the number of distinct constraints violated.
    pub fn constraint_count(&self) -> usize {
        self.constraint_matches.len()
    }
}

/// Per-constraint breakdown in a score explanation.
#[derive(Debug, Clone)]
pub struct ConstraintAnalysis<Sc: Score> {
    /// Constraint reference.
    pub constraint_ref: ConstraintRef,
    /// Constraint weight (score per unit of match weight).
    pub weight: Sc,
    /// Total score from this constraint.
    pub score: Sc,
    /// All live matches for this constraint.
    pub matches: Vec<ConstraintMatch<Sc>>,
    /// Whether the weight's highest non-zero level is a hard level.
    pub is_hard: bool,
}

impl<Sc: Score> ConstraintAnalysis<Sc> {
    /// Builds the analysis of one match total.
    pub fn from_total(total: &ConstraintMatchTotal<Sc>) -> Self {
        Self {
            constraint_ref: total.constraint_ref().clone(),
            weight: total.constraint_weight().clone(),
            score: total.score().clone(),
            matches: total.matches().cloned().collect(),
            is_hard: is_hard_weight(total.constraint_weight()),
        }
    }

    /// Returns the number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Returns the constraint name.
    pub fn name(&self) -> &str {
        &self.constraint_ref.name
    }
}

fn is_hard_weight<Sc: Score>(weight: &Sc) -> bool {
    (0..weight.levels_count())
        .find(|&level| !weight.is_level_zero(level))
        .is_some_and(|level| weight.level_label(level) == ScoreLevel::Hard)
}

/// Complete score explanation with per-constraint breakdown.
#[derive(Debug, Clone)]
pub struct ScoreExplanation<Sc: Score> {
    /// The total score.
    pub score: Sc,
    /// Per-constraint breakdown, sorted by constraint name.
    pub constraint_analyses: Vec<ConstraintAnalysis<Sc>>,
}

impl<Sc: Score> ScoreExplanation<Sc> {
    /// Creates a new score explanation.
    pub fn new(score: Sc, constraint_analyses: Vec<ConstraintAnalysis<Sc>>) -> Self {
        Self {
            score,
            constraint_analyses,
        }
    }

    /// Builds an explanation from live match totals.
    pub fn from_totals<'a, I>(score: Sc, totals: I) -> Self
    where
        I: IntoIterator<Item = &'a ConstraintMatchTotal<Sc>>,
    {
        let mut constraint_analyses: Vec<_> =
            totals.into_iter().map(ConstraintAnalysis::from_total).collect();
        constraint_analyses.sort_by(|a, b| a.constraint_ref.cmp(&b.constraint_ref));
        Self::new(score, constraint_analyses)
    }

    /// Returns the total match count across all constraints.
    pub fn total_match_count(&self) -> usize {
        self.constraint_analyses.iter().map(|a| a.match_count()).sum()
    }

    /// Returns constraints with non-zero scores.
    pub fn non_zero_constraints(&self) -> Vec<&ConstraintAnalysis<Sc>> {
        self.constraint_analyses
            .iter()
            .filter(|a| !a.score.is_zero())
            .collect()
    }

    /// Returns all matches across all constraints.
    pub fn all_matches(&self) -> Vec<&ConstraintMatch<Sc>> {
        self.constraint_analyses
            .iter()
            .flat_map(|a| &a.matches)
            .collect()
    }
}
