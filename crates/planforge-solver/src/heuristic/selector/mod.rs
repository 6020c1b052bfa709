//! Selectors for list variable moves.
//!
//! Selectors enumerate or sample the elements the solver considers when
//! building moves.

pub mod list;

pub use list::{
    ElementDestinationSelector, ElementRef, ListEntitySelector, ListSelector, ListValueSelector,
    RandomSubListSelector, SubList,
};
pub use planforge_config::SelectionOrder;
