//! Uniform random sub-list selection across all entities.
//!
//! # Fairness
//!
//! Each draw first picks a random *value* and takes the entity owning it, so
//! an entity is chosen proportionally to its list length. The sub-list of that
//! entity is then drawn through [`TriangleElementFactory`], uniformly among
//! the sub-lists whose length is within bounds.
//!
//! # Example
//!
//! ```
//! use planforge_core::ListStateSupply;
//! use planforge_solver::heuristic::selector::list::{
//!     ListEntitySelector, ListSelector, ListValueSelector, RandomSubListSelector,
//! };
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! struct Plan { routes: Vec<Vec<usize>> }
//!
//! fn route_count(p: &Plan) -> usize { p.routes.len() }
//! fn route_len(p: &Plan, i: usize) -> usize { p.routes[i].len() }
//! fn stop_count(p: &Plan) -> usize { p.routes.iter().map(Vec::len).sum() }
//! fn stop_at(_: &Plan, i: usize) -> usize { i }
//!
//! let plan = Plan { routes: vec![vec![0, 1, 2], vec![3, 4]] };
//! let supply = ListStateSupply::from_lists(plan.routes.iter().map(|r| r.iter().copied()));
//!
//! let selector = RandomSubListSelector::new(
//!     ListEntitySelector::new(route_count, route_len),
//!     ListValueSelector::new(stop_count, stop_at),
//!     1,
//!     2,
//! )
//! .unwrap();
//! assert_eq!(selector.size(&plan).unwrap(), 5 + 3);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let sub_list = selector.next_sub_list(&plan, &supply, &mut rng).unwrap();
//! assert!(sub_list.length <= 2);
//! assert!(sub_list.to_index() <= plan.routes[sub_list.entity_index].len());
//! ```

use std::fmt::Debug;

use planforge_config::SubListSelectorConfig;
use planforge_core::ListVariableState;
use rand::Rng;
use tracing::{debug, trace};

use super::{ListEntitySelector, ListSelector, ListValueSelector, SubList, TriangleElementFactory};
use crate::error::{ListSelectorError, Result};

/// Draws rejected in a row for a too-short list before the longest list is
/// measured again.
///
/// Drawing keeps going as long as some list reaches the minimum sub-list size.
pub const MAX_REJECTED_DRAWS: usize = 1 << 16;

/// Never-ending, countable selector of random sub-lists.
pub struct RandomSubListSelector<S, V> {
    entity_selector: ListEntitySelector<S>,
    value_selector: ListValueSelector<S, V>,
    factory: TriangleElementFactory,
}

impl<S, V> Debug for RandomSubListSelector<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSubListSelector")
            .field("minimum_sub_list_size", &self.factory.minimum_sub_list_size())
            .field("maximum_sub_list_size", &self.factory.maximum_sub_list_size())
            .finish()
    }
}

impl<S, V: Debug> RandomSubListSelector<S, V> {
    /// Creates a sub-list selector.
    ///
    /// # Errors
    ///
    /// [`ListSelectorError::InvalidArgument`] unless
    /// `1 <= minimum_sub_list_size <= maximum_sub_list_size`.
    pub fn new(
        entity_selector: ListEntitySelector<S>,
        value_selector: ListValueSelector<S, V>,
        minimum_sub_list_size: usize,
        maximum_sub_list_size: usize,
    ) -> Result<Self> {
        let factory = TriangleElementFactory::new(minimum_sub_list_size, maximum_sub_list_size)?;
        debug!(
            event = "selector_created",
            selector = "random_sub_list",
            minimum_sub_list_size,
            maximum_sub_list_size,
        );
        Ok(Self {
            entity_selector,
            value_selector,
            factory,
        })
    }

    /// Creates a sub-list selector with the bounds of `config`.
    pub fn from_config(
        config: &SubListSelectorConfig,
        entity_selector: ListEntitySelector<S>,
        value_selector: ListValueSelector<S, V>,
    ) -> Result<Self> {
        Self::new(
            entity_selector,
            value_selector,
            config.minimum_sub_list_size,
            config.maximum_sub_list_size,
        )
    }

    pub fn minimum_sub_list_size(&self) -> usize {
        self.factory.minimum_sub_list_size()
    }

    pub fn maximum_sub_list_size(&self) -> usize {
        self.factory.maximum_sub_list_size()
    }

    /// Draws one sub-list.
    ///
    /// Owners are resolved through `supply`, which must reflect every move
    /// applied so far.
    ///
    /// # Errors
    ///
    /// [`ListSelectorError::IllegalState`] if the value range is empty, a
    /// drawn value has no owner, or no list reaches the minimum sub-list size.
    pub fn next_sub_list<L, R>(&self, solution: &S, supply: &L, rng: &mut R) -> Result<SubList>
    where
        L: ListVariableState<V>,
        R: Rng,
    {
        let minimum = self.factory.minimum_sub_list_size();
        let mut rejected = 0usize;
        loop {
            let value = self.value_selector.random(solution, rng).ok_or_else(|| {
                ListSelectorError::IllegalState(
                    "the value selector ran out of values; it must never end".to_string(),
                )
            })?;
            let entity_index = supply.inverse_singleton(&value).ok_or_else(|| {
                ListSelectorError::IllegalState(format!(
                    "the value ({value:?}) is not assigned to any entity"
                ))
            })?;
            let list_size = self.entity_selector.list_len(solution, entity_index);
            if list_size < minimum {
                trace!(
                    event = "sub_list_draw_rejected",
                    entity_index,
                    list_size,
                    minimum_sub_list_size = minimum,
                );
                rejected += 1;
                if rejected == MAX_REJECTED_DRAWS {
                    let max_list_len = self.entity_selector.max_list_len(solution);
                    if max_list_len < minimum {
                        return Err(ListSelectorError::IllegalState(format!(
                            "no list reaches the minimum sub-list size ({minimum}); the longest has {max_list_len} elements"
                        )));
                    }
                    rejected = 0;
                }
                continue;
            }
            let element = self.factory.next_element(list_size, rng)?;
            return Ok(SubList::new(
                entity_index,
                (element.index_on_level - 1) as usize,
                list_size - element.level as usize + 1,
            ));
        }
    }

    /// Iterates random sub-lists.
    ///
    /// Never ends, unless no list is as long as the minimum sub-list size
    /// when the iterator is created; it is then empty.
    pub fn iter<'a, L, R>(
        &'a self,
        solution: &'a S,
        supply: &'a L,
        rng: &'a mut R,
    ) -> RandomSubListIter<'a, S, V, L, R>
    where
        L: ListVariableState<V>,
        R: Rng,
    {
        let max_list_len = self.entity_selector.max_list_len(solution);
        let exhausted = max_list_len < self.factory.minimum_sub_list_size();
        if exhausted {
            debug!(
                event = "sub_list_selection_empty",
                max_list_len,
                minimum_sub_list_size = self.factory.minimum_sub_list_size(),
            );
        }
        RandomSubListIter {
            selector: self,
            solution,
            supply,
            rng,
            exhausted,
        }
    }
}

impl<S, V: Debug> ListSelector<S> for RandomSubListSelector<S, V> {
    /// Number of distinct in-bounds sub-lists over every entity.
    fn size(&self, solution: &S) -> Result<u64> {
        self.entity_selector
            .iter(solution)
            .try_fold(0u64, |total, entity_index| {
                let count = self
                    .factory
                    .sub_list_count(self.entity_selector.list_len(solution, entity_index))?;
                total.checked_add(count).ok_or_else(|| {
                    ListSelectorError::ArithmeticOverflow(
                        "the sub-list count exceeds u64".to_string(),
                    )
                })
            })
    }

    fn is_never_ending(&self) -> bool {
        true
    }
}

/// Iterator returned by [`RandomSubListSelector::iter`].
pub struct RandomSubListIter<'a, S, V, L, R> {
    selector: &'a RandomSubListSelector<S, V>,
    solution: &'a S,
    supply: &'a L,
    rng: &'a mut R,
    exhausted: bool,
}

impl<S, V, L, R> Iterator for RandomSubListIter<'_, S, V, L, R>
where
    V: Debug,
    L: ListVariableState<V>,
    R: Rng,
{
    type Item = Result<SubList>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        Some(
            self.selector
                .next_sub_list(self.solution, self.supply, self.rng),
        )
    }
}
