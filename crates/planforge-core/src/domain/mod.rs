//! Domain model support for list planning variables.
//!
//! Entities are addressed by index; the shadow state of a list variable
//! (owner and position of each value) lives in a supply.

pub mod supply;

pub use supply::{ElementPosition, ListStateSupply, ListVariableState};
