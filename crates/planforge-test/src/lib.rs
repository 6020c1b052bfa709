//! Shared test fixtures for planforge crates.
//!
//! This crate provides data types and pure functions for testing.
//! It depends on `planforge-core` only, so every other crate can use it as a
//! dev-dependency without creating a cycle.
//!
//! - [`routing`] - Vehicle routing solution with a list variable
//! - [`tracing`] - Test log subscriber
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! planforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use planforge_test::routing::{list_len, RoutingSolution};
//!
//! let solution = RoutingSolution::with_route_lengths(&[3, 5]);
//! assert_eq!(list_len(&solution, 1), 5);
//! ```

pub mod routing;
pub mod tracing;

pub use routing::{RoutingSolution, Vehicle};
pub use tracing::init_test_tracing;
