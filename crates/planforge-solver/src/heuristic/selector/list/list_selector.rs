//! Contract shared by the move-facing list selectors.

use std::fmt::Debug;

use crate::error::Result;

/// Trait for selectors a move loop pulls list selections from.
///
/// The solution is passed on every call; selectors keep no view of it.
pub trait ListSelector<S>: Debug {
    /// Returns the number of distinct selections on `solution`.
    ///
    /// # Errors
    ///
    /// [`ListSelectorError::ArithmeticOverflow`](crate::ListSelectorError::ArithmeticOverflow)
    /// if the count exceeds `u64`.
    fn size(&self, solution: &S) -> Result<u64>;

    /// Returns true if [`size`](Self::size) is meaningful.
    fn is_countable(&self) -> bool {
        true
    }

    /// Returns true if this selector may return the same selection multiple times.
    fn is_never_ending(&self) -> bool {
        false
    }
}
