//! Score types for representing solution quality
//!
//! Scores are used to compare solutions and guide the optimization process.
//! All score types are immutable and implement arithmetic operations.

#[macro_use]
mod macros;

mod bendable;
mod bendable_decimal;
mod bendable_long;
mod hard_medium_soft;
mod hard_medium_soft_decimal;
mod hard_medium_soft_long;
mod level;
mod levels;
mod number;
mod simple;
pub(crate) mod traits;

#[cfg(test)]
mod tests;

pub use bendable::BendableScore;
pub use bendable_decimal::BendableDecimalScore;
pub use bendable_long::BendableLongScore;
pub use hard_medium_soft::HardMediumSoftScore;
pub use hard_medium_soft_decimal::HardMediumSoftDecimalScore;
pub use hard_medium_soft_long::HardMediumSoftLongScore;
pub use level::ScoreLevel;
pub use levels::{BendableLevels, HardMediumSoftLevels};
pub use number::ScoreNumber;
pub use simple::SimpleScore;
pub use traits::{ParseableScore, Score, ScoreParseError};
