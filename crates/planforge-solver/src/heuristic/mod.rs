//! Heuristic components for solving
//!
//! This module contains the selectors that sample sub-lists and destinations
//! of list variables.

pub mod selector;

pub use selector::{
    ElementDestinationSelector, ElementRef, ListEntitySelector, ListSelector, ListValueSelector,
    RandomSubListSelector, SelectionOrder, SubList,
};
