//! Precondition checks shared by every view constructor.
//!
//! Checks run before anything is allocated, so a rejected call never leaves
//! a half-built view behind. Validation never mutates its inputs.
//!
//! Some inputs are rejected before the program runs. Counts are `usize`, so
//! a negative count does not compile:
//!
//! ```compile_fail
//! use collection_views::view::ImmutableVector;
//!
//! let vector = ImmutableVector::copy_from(&[1, 2, 3]);
//! let _ = vector.take(-1);
//! ```
//!
//! Sources are references or owned values, so there is no null source:
//!
//! ```compile_fail
//! use collection_views::view::ImmutableVector;
//!
//! let _ = ImmutableVector::<i32>::copy_from(None);
//! ```

use super::error::ViewError;

/// Checks that a requested range does not run backwards.
///
/// Bounds past the end of the source are accepted here; slicing clamps them.
#[inline]
pub(crate) const fn validate_slice(start: usize, end: usize) -> Result<(), ViewError> {
    if start > end {
        Err(ViewError::OutOfBounds { start, end })
    } else {
        Ok(())
    }
}

/// Checks that `index` addresses an element of a view of `size` elements.
#[inline]
pub(crate) const fn validate_index(index: usize, size: usize) -> Result<(), ViewError> {
    if index < size {
        Ok(())
    } else {
        Err(ViewError::IndexOutOfBounds { index, size })
    }
}

/// Turns an absent non-empty result into [`ViewError::EmptyNotAllowed`].
#[inline]
pub(crate) fn require_non_empty<T>(maybe_non_empty: Option<T>) -> Result<T, ViewError> {
    maybe_non_empty.ok_or(ViewError::EmptyNotAllowed)
}

/// Clamps a range to `[0, size]`. The result never runs backwards.
#[inline]
pub(crate) const fn clamp_range(start: usize, end: usize, size: usize) -> (usize, usize) {
    let end = if end < size { end } else { size };
    let start = if start < end { start } else { end };
    (start, end)
}
