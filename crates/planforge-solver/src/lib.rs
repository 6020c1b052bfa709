//! planforge list variable selection
//!
//! This crate provides the selectors a move loop pulls from:
//! - Uniform random sub-list selection in O(1) per draw
//! - Element destination selection, random or enumerated
//! - Triangular number math backing the sub-list sampling
//! - A session random number generator seeded from the configuration

pub mod error;
pub mod heuristic;
pub mod random;

pub use error::ListSelectorError;
pub use heuristic::selector::list::{
    nth_triangle, triangular_root, ElementDestinationIter, RandomSubListIter, TriangleElement,
    TriangleElementFactory, MAX_NTH_TRIANGLE_INPUT,
};
pub use heuristic::{
    ElementDestinationSelector, ElementRef, ListEntitySelector, ListSelector, ListValueSelector,
    RandomSubListSelector, SelectionOrder, SubList,
};
pub use random::selection_rng;
