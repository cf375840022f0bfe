//! A non-copying view over a caller-owned [`SharedList`].
//!
//! A [`SharedListVector`] reads through the list handle on every access. It
//! sees every write the caller makes after wrapping, including changes of
//! size. It is not immutable: call [`Sequence::to_immutable`] to take a copy
//! that no later write can reach.

use std::fmt;

use super::Element;
use super::backing::{Backing, SharedList};
use super::immutable::ImmutableVector;
use super::sequence::{Sequence, SequenceIterator};

/// A live view over a [`SharedList`].
///
/// # Examples
///
/// ```rust
/// use collection_views::view::{Sequence, SharedList, SharedListVector};
///
/// let list = SharedList::new(vec![1, 2, 3]);
/// let live = SharedListVector::wrap(&list);
/// let frozen = live.to_immutable();
///
/// list.set(0, 10);
/// list.push(4);
///
/// assert_eq!(live.get(0), Some(10));
/// assert_eq!(live.size(), 4);
/// assert_eq!(frozen.get(0), Some(1));
/// assert_eq!(frozen.size(), 3);
/// ```
pub struct SharedListVector<A> {
    list: SharedList<A>,
}

impl<A> SharedListVector<A> {
    /// Wraps `list` without copying it.
    #[must_use]
    pub fn wrap(list: &SharedList<A>) -> Self {
        Self { list: list.clone() }
    }

    /// Returns the wrapped list handle.
    #[must_use]
    pub const fn list(&self) -> &SharedList<A> {
        &self.list
    }
}

impl<A: Element> SharedListVector<A> {
    /// Returns an iterator over the elements in index order.
    ///
    /// The length is read from the list when the iterator is created, and
    /// `len()` counts down from it. If the list shrinks during iteration,
    /// `len()` overstates what is left, and the iterator ends for good at the
    /// first index that no longer exists. Elements pushed after creation are
    /// not visited.
    pub fn iter(&self) -> SequenceIterator<'_, Self> {
        SequenceIterator::new(self)
    }
}

impl<A: Element> Sequence for SharedListVector<A> {
    type Item = A;

    #[inline]
    fn size(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<A> {
        self.list.get(index)
    }

    /// Copies the current elements into an immutable view.
    fn to_immutable(&self) -> ImmutableVector<A> {
        ImmutableVector::from_backing(Backing::Shared(self.list.clone()))
    }
}

impl<A> Clone for SharedListVector<A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<A> From<SharedList<A>> for SharedListVector<A> {
    fn from(list: SharedList<A>) -> Self {
        Self { list }
    }
}

impl<A: fmt::Debug> fmt::Debug for SharedListVector<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SharedListVector")
            .field("list", &self.list)
            .finish()
    }
}
