//! Value side of a list variable.

use std::fmt::Debug;
use std::marker::PhantomData;

use rand::Rng;

/// Selects the elements a list variable can hold.
///
/// Values are addressed by position in the value range; `value_at` turns a
/// position into the element.
pub struct ListValueSelector<S, V> {
    value_count: fn(&S) -> usize,
    value_at: fn(&S, usize) -> V,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, V> Clone for ListValueSelector<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for ListValueSelector<S, V> {}

impl<S, V> Debug for ListValueSelector<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListValueSelector").finish_non_exhaustive()
    }
}

impl<S, V> ListValueSelector<S, V> {
    /// Creates a value selector.
    ///
    /// # Arguments
    /// * `value_count` - Size of the value range
    /// * `value_at` - Value at a position of the value range
    pub fn new(value_count: fn(&S) -> usize, value_at: fn(&S, usize) -> V) -> Self {
        Self {
            value_count,
            value_at,
            _phantom: PhantomData,
        }
    }

    pub fn size(&self, solution: &S) -> usize {
        (self.value_count)(solution)
    }

    pub fn value_at(&self, solution: &S, index: usize) -> V {
        (self.value_at)(solution, index)
    }

    /// Iterates every value once, in value range order.
    pub fn iter<'a>(&self, solution: &'a S) -> impl Iterator<Item = V> + 'a
    where
        V: 'a,
    {
        let value_at = self.value_at;
        (0..self.size(solution)).map(move |index| value_at(solution, index))
    }

    /// Draws one value uniformly, `None` for an empty value range.
    pub fn random<R: Rng>(&self, solution: &S, rng: &mut R) -> Option<V> {
        let count = self.size(solution);
        (count > 0).then(|| self.value_at(solution, rng.random_range(0..count)))
    }
}
