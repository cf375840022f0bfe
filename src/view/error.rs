//! Error types for view construction and access.
//!
//! Every error here is a contract violation by the caller: a bad range, a
//! bad index, or an empty source where a non-empty one was required. None of
//! them are transient, so there is nothing to retry.

use std::fmt;

/// Represents errors that can occur when building or reading a view.
///
/// # Examples
///
/// ```rust
/// use collection_views::view::{ImmutableVector, ViewError};
///
/// let vector = ImmutableVector::copy_from(&[1, 2, 3]);
/// assert_eq!(
///     vector.slice(2, 1),
///     Err(ViewError::OutOfBounds { start: 2, end: 1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewError {
    /// A range was requested whose start lies after its end.
    OutOfBounds {
        /// The requested start index (inclusive).
        start: usize,
        /// The requested end index (exclusive).
        end: usize,
    },
    /// An element index was not smaller than the view's size.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The size of the view.
        size: usize,
    },
    /// A non-empty view was required but the source was empty.
    EmptyNotAllowed,
}

impl fmt::Display for ViewError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { start, end } => write!(
                formatter,
                "slice start {start} must not be greater than end {end}"
            ),
            Self::IndexOutOfBounds { index, size } => write!(
                formatter,
                "index {index} out of bounds for view of size {size}"
            ),
            Self::EmptyNotAllowed => {
                write!(formatter, "non-empty view required but source was empty")
            }
        }
    }
}

impl std::error::Error for ViewError {}
