//! Entity side of a list variable.

use std::fmt::Debug;
use std::marker::PhantomData;

use rand::Rng;

/// Selects the entities owning a list variable, by index.
///
/// Reads the solution through plain function pointers, so any solution type
/// works without a descriptor.
pub struct ListEntitySelector<S> {
    entity_count: fn(&S) -> usize,
    list_len: fn(&S, usize) -> usize,
    _phantom: PhantomData<fn() -> S>,
}

impl<S> Clone for ListEntitySelector<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ListEntitySelector<S> {}

impl<S> Debug for ListEntitySelector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEntitySelector").finish_non_exhaustive()
    }
}

impl<S> ListEntitySelector<S> {
    /// Creates an entity selector.
    ///
    /// # Arguments
    /// * `entity_count` - Number of entities in the solution
    /// * `list_len` - Current length of one entity's list
    pub fn new(entity_count: fn(&S) -> usize, list_len: fn(&S, usize) -> usize) -> Self {
        Self {
            entity_count,
            list_len,
            _phantom: PhantomData,
        }
    }

    pub fn size(&self, solution: &S) -> usize {
        (self.entity_count)(solution)
    }

    pub fn list_len(&self, solution: &S, entity_index: usize) -> usize {
        (self.list_len)(solution, entity_index)
    }

    /// Iterates every entity index once, in order.
    pub fn iter(&self, solution: &S) -> std::ops::Range<usize> {
        0..self.size(solution)
    }

    /// Length of the longest list, 0 without entities.
    pub fn max_list_len(&self, solution: &S) -> usize {
        self.iter(solution)
            .map(|entity_index| self.list_len(solution, entity_index))
            .max()
            .unwrap_or(0)
    }

    /// Draws one entity index uniformly, `None` without entities.
    pub fn random<R: Rng>(&self, solution: &S, rng: &mut R) -> Option<usize> {
        let count = self.size(solution);
        (count > 0).then(|| rng.random_range(0..count))
    }
}
