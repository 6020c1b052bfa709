//! Numeric kinds a score level can be made of.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::Zero;
use rust_decimal::Decimal;

/// A numeric type usable as one score level.
///
/// Implemented for `i32` (plain scores), `i64` (`*Long` scores) and
/// [`Decimal`] (`*Decimal` scores). The impact of a match is always
/// `level_weight * match_weight`, computed in this type.
///
/// Incremental totals go through [`level_mul`](Self::level_mul),
/// [`level_add`](Self::level_add) and [`level_sub`](Self::level_sub): integer
/// levels wrap on overflow in every build profile, so an undo still restores
/// the previous total exactly. `Decimal` panics on overflow.
pub trait ScoreNumber:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Send
    + Sync
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + FromStr
    + 'static
{
    /// Returns true if the value is strictly below zero.
    fn is_negative_number(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns the absolute value.
    fn abs_number(&self) -> Self {
        if self.is_negative_number() {
            -*self
        } else {
            *self
        }
    }

    /// Multiplies a level weight by a match weight.
    fn level_mul(self, rhs: Self) -> Self;

    /// Adds a delta to a running level total.
    fn level_add(self, rhs: Self) -> Self;

    /// Subtracts a delta from a running level total.
    fn level_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_wrapping_score_number {
    ($($num:ty),+) => {
        $(
            impl ScoreNumber for $num {
                #[inline]
                fn level_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn level_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn level_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
            }
        )+
    };
}

impl_wrapping_score_number!(i32, i64);

impl ScoreNumber for Decimal {
    #[inline]
    fn level_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn level_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn level_sub(self, rhs: Self) -> Self {
        self - rhs
    }
}
