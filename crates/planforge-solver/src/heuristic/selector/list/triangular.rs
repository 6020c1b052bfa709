//! Triangular numbers as an index space for sub-lists.
//!
//! A list of length `n` has `nth_triangle(n)` contiguous sub-lists. Sub-lists
//! of the same length form one level of a triangle: level 1 holds the single
//! sub-list spanning the whole list, level `n` holds the `n` one-element
//! sub-lists. Numbering the triangle row by row maps every sub-list to one
//! integer in `1..=nth_triangle(n)`, so a single uniform draw picks a
//! uniformly random sub-list.

use rand::Rng;

use crate::error::{ListSelectorError, Result};

/// Largest `n` for which `n * (n + 1)` fits in a `u64`.
pub const MAX_NTH_TRIANGLE_INPUT: u64 = 4_294_967_295;

/// Returns `n * (n + 1) / 2`.
///
/// # Errors
///
/// [`ListSelectorError::ArithmeticOverflow`] when `n > MAX_NTH_TRIANGLE_INPUT`.
///
/// # Examples
///
/// ```
/// use planforge_solver::heuristic::selector::list::nth_triangle;
///
/// assert_eq!(nth_triangle(4).unwrap(), 10);
/// assert!(nth_triangle(u64::MAX).is_err());
/// ```
pub fn nth_triangle(n: u64) -> Result<u64> {
    n.checked_add(1)
        .and_then(|next| n.checked_mul(next))
        .map(|product| product / 2)
        .ok_or_else(|| {
            ListSelectorError::ArithmeticOverflow(format!(
                "nth_triangle({n}) overflows; the largest supported input is {MAX_NTH_TRIANGLE_INPUT}"
            ))
        })
}

/// Real-valued inverse of [`nth_triangle`].
pub fn triangular_root(x: u64) -> f64 {
    ((8.0 * x as f64 + 1.0).sqrt() - 1.0) / 2.0
}

fn triangle_wide(n: u64) -> u128 {
    let n = u128::from(n);
    n * (n + 1) / 2
}

/// Position of a 1-based index inside the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriangleElement {
    pub index: u64,
    /// Row of the triangle, starting at 1.
    pub level: u64,
    /// Position within the row, starting at 1.
    pub index_on_level: u64,
}

impl TriangleElement {
    /// Decodes a 1-based triangular index.
    ///
    /// `level` is `ceil(triangular_root(index))`, corrected with exact
    /// integer arithmetic where the float root is off by one.
    pub fn value_of(index: u64) -> Result<Self> {
        if index == 0 {
            return Err(ListSelectorError::InvalidArgument(
                "triangle indices start at 1".to_string(),
            ));
        }
        let wide = u128::from(index);
        let mut level = triangular_root(index).ceil() as u64;
        while triangle_wide(level) < wide {
            level += 1;
        }
        while level > 1 && triangle_wide(level - 1) >= wide {
            level -= 1;
        }
        let before = triangle_wide(level - 1);
        Ok(Self {
            index,
            level,
            index_on_level: (wide - before) as u64,
        })
    }
}

/// Maps one random draw to a sub-list `(start, length)` of a list, honoring
/// the minimum and maximum sub-list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleElementFactory {
    minimum_sub_list_size: usize,
    maximum_sub_list_size: usize,
}

impl TriangleElementFactory {
    /// # Errors
    ///
    /// [`ListSelectorError::InvalidArgument`] unless `1 <= minimum <= maximum`.
    pub fn new(minimum_sub_list_size: usize, maximum_sub_list_size: usize) -> Result<Self> {
        if minimum_sub_list_size < 1 {
            return Err(ListSelectorError::InvalidArgument(format!(
                "the minimum sub-list size ({minimum_sub_list_size}) must be at least 1"
            )));
        }
        if minimum_sub_list_size > maximum_sub_list_size {
            return Err(ListSelectorError::InvalidArgument(format!(
                "the minimum sub-list size ({minimum_sub_list_size}) must not exceed the maximum sub-list size ({maximum_sub_list_size})"
            )));
        }
        Ok(Self {
            minimum_sub_list_size,
            maximum_sub_list_size,
        })
    }

    pub fn minimum_sub_list_size(&self) -> usize {
        self.minimum_sub_list_size
    }

    pub fn maximum_sub_list_size(&self) -> usize {
        self.maximum_sub_list_size
    }

    /// Number of sub-lists of a list of `list_size` whose length is within bounds.
    pub fn sub_list_count(&self, list_size: usize) -> Result<u64> {
        if list_size < self.minimum_sub_list_size {
            return Ok(0);
        }
        Ok(self.triangle_size(list_size)? - self.top_triangle_size(list_size)?)
    }

    /// All sub-lists no shorter than the minimum.
    fn triangle_size(&self, list_size: usize) -> Result<u64> {
        nth_triangle((list_size - self.minimum_sub_list_size + 1) as u64)
    }

    /// Sub-lists longer than the maximum; they occupy the first levels.
    fn top_triangle_size(&self, list_size: usize) -> Result<u64> {
        if list_size <= self.maximum_sub_list_size {
            Ok(0)
        } else {
            nth_triangle((list_size - self.maximum_sub_list_size) as u64)
        }
    }

    /// Draws a triangle element uniformly among the in-bounds sub-lists.
    ///
    /// The sub-list starts at `index_on_level - 1` and has length
    /// `list_size - level + 1`.
    ///
    /// # Errors
    ///
    /// [`ListSelectorError::InvalidArgument`] if `list_size` is below the minimum.
    pub fn next_element<R: Rng>(
        &self,
        list_size: usize,
        rng: &mut R,
    ) -> Result<TriangleElement> {
        if list_size < self.minimum_sub_list_size {
            return Err(ListSelectorError::InvalidArgument(format!(
                "the list size ({list_size}) is below the minimum sub-list size ({})",
                self.minimum_sub_list_size
            )));
        }
        let sub_list_count = self.triangle_size(list_size)?;
        let top_triangle_size = self.top_triangle_size(list_size)?;
        let index = rng.random_range(0..sub_list_count - top_triangle_size) + top_triangle_size + 1;
        TriangleElement::value_of(index)
    }
}
