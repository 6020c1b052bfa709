//! Selectors over list variables.
//!
//! - [`RandomSubListSelector`]: uniform random sub-lists across all entities
//! - [`ElementDestinationSelector`]: insertion points, random or enumerated
//! - [`triangular`]: the O(1) sub-list sampling math both rely on
//!
//! Both implement [`ListSelector`]. Entities are addressed by index. The
//! solution is read through function pointers held by [`ListEntitySelector`]
//! and [`ListValueSelector`]; owner and position lookups go through
//! [`ListVariableState`], passed on every call so they always see the live
//! state.
//!
//! [`ListVariableState`]: planforge_core::ListVariableState

mod element_destination;
mod element_ref;
mod entity;
mod list_selector;
mod random_sub_list;
mod sub_list;
pub mod triangular;
mod value;

#[cfg(test)]
pub(crate) mod tests;

pub use element_destination::{ElementDestinationIter, ElementDestinationSelector};
pub use element_ref::ElementRef;
pub use entity::ListEntitySelector;
pub use list_selector::ListSelector;
pub use random_sub_list::{RandomSubListIter, RandomSubListSelector, MAX_REJECTED_DRAWS};
pub use sub_list::SubList;
pub use triangular::{
    nth_triangle, triangular_root, TriangleElement, TriangleElementFactory,
    MAX_NTH_TRIANGLE_INPUT,
};
pub use value::ListValueSelector;
