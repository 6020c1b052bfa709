//! Supply infrastructure for list variable shadow state.
//!
//! Supplies provide O(1) access to derived information about planning
//! variables that would otherwise require scanning every entity: who owns a
//! value, and where in the owner's list it sits.
//!
//! - [`ListVariableState`]: read-only view consumed by selectors
//! - [`ListStateSupply`]: index-based implementation maintained by the caller

mod list_state;

#[cfg(test)]
mod tests;

pub use list_state::{ElementPosition, ListStateSupply, ListVariableState};
