//! Read-only views over ordered sequences.
//!
//! This module provides immutable views that compose without copying their
//! storage unless copying is the only way to keep the values stable:
//!
//! - [`ImmutableVector`]: an immutable view that may be empty
//! - [`ImmutableNonEmptyVector`]: an immutable view with at least one element
//! - [`SharedListVector`]: a non-copying view over a [`SharedList`] that the
//!   caller may still mutate
//!
//! # Copy or Share
//!
//! Every constructor decides, once, whether the new view may alias existing
//! storage. Storage the library copied itself, or storage moved into it by
//! value, is *vouched for* and is shared freely. Anything else is copied
//! before it is exposed through an immutable view.
//!
//! Derived views (slices, reversals, mappings, index pairings) never copy:
//! they translate an index and delegate to their source.
//!
//! # Examples
//!
//! ```rust
//! use collection_views::view::ImmutableVector;
//!
//! let source = [1, 2, 3, 4, 5];
//! let vector = ImmutableVector::copy_from_with_max(3, &source);
//! assert_eq!(vector, ImmutableVector::copy_from(&[1, 2, 3]));
//!
//! let sliced = vector.slice(1, 4).unwrap();
//! assert_eq!(sliced, ImmutableVector::copy_from(&[2, 3]));
//!
//! let reversed = sliced.reverse();
//! let scaled = reversed.map(|element| element * 10);
//! assert_eq!(scaled, ImmutableVector::copy_from(&[30, 20]));
//! ```
//!
//! ## Fusion
//!
//! Chained `map` calls share one source and one fused function chain:
//!
//! ```rust
//! use collection_views::view::ImmutableVector;
//!
//! let vector = ImmutableVector::copy_from(&[1, 2, 3]);
//! let chained = vector
//!     .map(|element| element + 1)
//!     .map(|element| element * 2)
//!     .map(|element| element.to_string());
//!
//! let collected: Vec<String> = chained.iter().collect();
//! assert_eq!(collected, vec!["4", "6", "8"]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Sharing Bounds
// =============================================================================

/// Marker for values that may live inside a view.
///
/// With the `arc` feature this requires `Send + Sync`, so that views can be
/// read from several threads at once. Without it every type qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Marker for values that may live inside a view.
///
/// With the `arc` feature this requires `Send + Sync`, so that views can be
/// read from several threads at once. Without it every type qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

/// Bound satisfied by every element type a view can expose.
///
/// Elements are handed out by value, so they must be `Clone`. Mapped views
/// erase their source type, which requires `'static`.
pub trait Element: Clone + Shareable + 'static {}

impl<T: Clone + Shareable + 'static> Element for T {}

mod backing;
mod combinator;
mod error;
mod factory;
mod immutable;
mod mapper_chain;
mod node;
mod sequence;
mod shared;
mod slicing;
mod validation;

pub use backing::SharedList;
pub use error::ViewError;
pub use immutable::ImmutableNonEmptyVector;
pub use immutable::ImmutableVector;
pub use sequence::NonEmptySequence;
pub use sequence::Sequence;
pub use sequence::SequenceIterator;
pub use shared::SharedListVector;

// =============================================================================
// Tests
// =============================================================================
