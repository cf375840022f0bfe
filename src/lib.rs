//! # collection-views
//!
//! Read-only views over ordered sequences that compose without copying.
//!
//! ## Overview
//!
//! A view is a cheap handle over shared storage. Derived views (slices,
//! reversals, element-wise mappings, index pairings) are built in constant
//! time and compute their elements on access. Immutable views guarantee
//! that the values they expose never change, whatever happens to the data
//! they were built from: the library copies a source exactly when it cannot
//! prove that nobody else can write to it.
//!
//! - **Immutable views**: [`ImmutableVector`], [`ImmutableNonEmptyVector`]
//! - **Live views**: [`SharedListVector`] over a caller-owned [`SharedList`]
//! - **Capabilities**: [`Sequence`], [`NonEmptySequence`]
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc`, making immutable views `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use collection_views::prelude::*;
//!
//! let vector = ImmutableVector::copy_from(&[1, 2, 3, 4, 5]);
//! let view = vector.drop(1).reverse().map(|element| element * 10);
//! assert_eq!(view.iter().collect::<Vec<_>>(), vec![50, 40, 30, 20]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use collection_views::prelude::*;
/// ```
pub mod prelude {
    pub use crate::view::*;
}

pub mod view;

pub use view::{
    ImmutableNonEmptyVector, ImmutableVector, NonEmptySequence, Sequence, SequenceIterator,
    SharedList, SharedListVector, ViewError,
};
