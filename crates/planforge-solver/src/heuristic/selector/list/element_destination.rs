//! Insertion points for list moves.
//!
//! Each entity contributes one destination, the head of its list. Each value
//! contributes the position right after itself in its owner's list. Random
//! selection draws over the union, so every destination is equally likely.

use std::fmt::Debug;

use planforge_config::{DestinationSelectorConfig, SelectionOrder};
use planforge_core::ListVariableState;
use rand::Rng;
use tracing::debug;

use super::{ElementRef, ListEntitySelector, ListSelector, ListValueSelector};
use crate::error::{ListSelectorError, Result};

/// Countable selector of [`ElementRef`] destinations.
///
/// Random order never ends; original order yields every entity head, then
/// the position after every value, and ends.
pub struct ElementDestinationSelector<S, V> {
    entity_selector: ListEntitySelector<S>,
    value_selector: ListValueSelector<S, V>,
    selection_order: SelectionOrder,
}

impl<S, V> Debug for ElementDestinationSelector<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementDestinationSelector")
            .field("selection_order", &self.selection_order)
            .finish()
    }
}

impl<S, V: Debug> ElementDestinationSelector<S, V> {
    /// Creates a destination selector. `Inherit` resolves to `Random`.
    pub fn new(
        entity_selector: ListEntitySelector<S>,
        value_selector: ListValueSelector<S, V>,
        selection_order: SelectionOrder,
    ) -> Self {
        let selection_order = selection_order.resolve(SelectionOrder::Inherit);
        debug!(
            event = "selector_created",
            selector = "element_destination",
            selection_order = ?selection_order,
        );
        Self {
            entity_selector,
            value_selector,
            selection_order,
        }
    }

    pub fn from_config(
        config: &DestinationSelectorConfig,
        entity_selector: ListEntitySelector<S>,
        value_selector: ListValueSelector<S, V>,
    ) -> Self {
        Self::new(entity_selector, value_selector, config.selection_order)
    }

    pub fn selection_order(&self) -> SelectionOrder {
        self.selection_order
    }

    /// `entity_count + value_count`, or 0 without entities.
    fn destination_count(&self, solution: &S) -> usize {
        let entity_count = self.entity_selector.size(solution);
        if entity_count == 0 {
            0
        } else {
            entity_count + self.value_selector.size(solution)
        }
    }

    /// The destination right after `value` in its owner's list.
    ///
    /// # Errors
    ///
    /// [`ListSelectorError::IllegalState`] if `value` is not assigned.
    pub fn destination_after<L>(&self, supply: &L, value: &V) -> Result<ElementRef>
    where
        L: ListVariableState<V>,
    {
        let unassigned = || {
            ListSelectorError::IllegalState(format!(
                "the value ({value:?}) is not assigned to any entity"
            ))
        };
        let entity_index = supply.inverse_singleton(value).ok_or_else(unassigned)?;
        let index = supply.index_of(value).ok_or_else(unassigned)?;
        Ok(ElementRef::new(entity_index, index + 1))
    }

    /// The destination at `position` of the concatenated entity-then-value space.
    fn destination_at<L>(&self, solution: &S, supply: &L, position: usize) -> Result<ElementRef>
    where
        L: ListVariableState<V>,
    {
        let entity_count = self.entity_selector.size(solution);
        if position < entity_count {
            Ok(ElementRef::head(position))
        } else {
            let value = self
                .value_selector
                .value_at(solution, position - entity_count);
            self.destination_after(supply, &value)
        }
    }

    /// Draws one destination uniformly; `Ok(None)` when there is none.
    pub fn next_random<L, R>(
        &self,
        solution: &S,
        supply: &L,
        rng: &mut R,
    ) -> Result<Option<ElementRef>>
    where
        L: ListVariableState<V>,
        R: Rng,
    {
        let size = self.destination_count(solution);
        if size == 0 {
            return Ok(None);
        }
        let position = rng.random_range(0..size);
        self.destination_at(solution, supply, position).map(Some)
    }

    /// Iterates destinations in the configured order.
    ///
    /// The iterator is empty without entities.
    pub fn iter<'a, L, R>(
        &'a self,
        solution: &'a S,
        supply: &'a L,
        rng: &'a mut R,
    ) -> ElementDestinationIter<'a, S, V, L, R>
    where
        L: ListVariableState<V>,
        R: Rng,
    {
        let size = self.destination_count(solution);
        let order = if self.selection_order.is_random() {
            DestinationOrder::Random(rng)
        } else {
            DestinationOrder::Original { next: 0 }
        };
        ElementDestinationIter {
            selector: self,
            solution,
            supply,
            size,
            order,
        }
    }
}

impl<S, V: Debug> ListSelector<S> for ElementDestinationSelector<S, V> {
    fn size(&self, solution: &S) -> Result<u64> {
        Ok(self.destination_count(solution) as u64)
    }

    fn is_never_ending(&self) -> bool {
        self.selection_order.is_random()
    }
}

enum DestinationOrder<'a, R> {
    Random(&'a mut R),
    Original { next: usize },
}

/// Iterator returned by [`ElementDestinationSelector::iter`].
pub struct ElementDestinationIter<'a, S, V, L, R> {
    selector: &'a ElementDestinationSelector<S, V>,
    solution: &'a S,
    supply: &'a L,
    size: usize,
    order: DestinationOrder<'a, R>,
}

impl<S, V, L, R> Iterator for ElementDestinationIter<'_, S, V, L, R>
where
    V: Debug,
    L: ListVariableState<V>,
    R: Rng,
{
    type Item = Result<ElementRef>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        let position = match &mut self.order {
            DestinationOrder::Random(rng) => rng.random_range(0..self.size),
            DestinationOrder::Original { next } => {
                if *next >= self.size {
                    return None;
                }
                *next += 1;
                *next - 1
            }
        };
        Some(
            self.selector
                .destination_at(self.solution, self.supply, position),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.order {
            DestinationOrder::Random(_) if self.size > 0 => (usize::MAX, None),
            DestinationOrder::Random(_) => (0, Some(0)),
            DestinationOrder::Original { next } => {
                let remaining = self.size.saturating_sub(*next);
                (remaining, Some(remaining))
            }
        }
    }
}
