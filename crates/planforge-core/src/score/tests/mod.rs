//! Tests for score types.

mod decimal_score;
mod simple_score;
