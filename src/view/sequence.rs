//! Capability traits shared by every view.
//!
//! [`Sequence`] is the read-only interface: a size and zero-based access by
//! index. [`NonEmptySequence`] adds access to the first and last element
//! without an `Option`, because its implementors can never be empty.

use std::iter::FusedIterator;

use super::Element;
use super::error::ViewError;
use super::immutable::ImmutableVector;
use super::validation::validate_index;

/// An ordered, finite, indexable collection of elements.
///
/// Elements are returned by value. Views that compute their elements (such
/// as mapped views) have nothing to borrow from.
///
/// # Examples
///
/// ```rust
/// use collection_views::view::Sequence;
///
/// let elements = vec![10, 20, 30];
/// assert_eq!(Sequence::size(&elements), 3);
/// assert_eq!(Sequence::get(&elements, 1), Some(20));
/// assert_eq!(Sequence::get(&elements, 3), None);
/// ```
pub trait Sequence {
    /// The type of element this sequence exposes.
    type Item;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index >= size()`.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the element at `index`, or an error naming the bad index.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IndexOutOfBounds`] if `index >= size()`.
    fn try_get(&self, index: usize) -> Result<Self::Item, ViewError> {
        let size = self.size();
        validate_index(index, size)?;
        self.get(index)
            .ok_or(ViewError::IndexOutOfBounds { index, size })
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    fn iter(&self) -> SequenceIterator<'_, Self> {
        SequenceIterator::new(self)
    }

    /// Returns an immutable view sharing this sequence's storage, if that
    /// storage is vouched for and read without computation.
    ///
    /// Copying constructors use this to skip the copy. The default is `None`.
    #[inline]
    fn as_vouched(&self) -> Option<ImmutableVector<Self::Item>>
    where
        Self::Item: Element,
    {
        None
    }

    /// Returns an immutable view with the same elements.
    ///
    /// Immutable views return themselves; anything else is copied.
    fn to_immutable(&self) -> ImmutableVector<Self::Item>
    where
        Self::Item: Element,
    {
        ImmutableVector::copy_from_sequence(self)
    }
}

/// A [`Sequence`] that is statically known to hold at least one element.
pub trait NonEmptySequence: Sequence {
    /// Returns the first element.
    fn first(&self) -> Self::Item;

    /// Returns the last element.
    fn last(&self) -> Self::Item;
}

impl<A: Clone> Sequence for [A] {
    type Item = A;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<A> {
        <[A]>::get(self, index).cloned()
    }
}

impl<A: Clone> Sequence for Vec<A> {
    type Item = A;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<A> {
        self.as_slice().get(index).cloned()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// An iterator over the elements of any [`Sequence`], in index order.
///
/// Iterates from both ends and knows its exact remaining length. The
/// length is taken from the sequence when the iterator is created. If an
/// index inside that range stops resolving, the iterator ends there and
/// stays ended.
pub struct SequenceIterator<'a, S: ?Sized> {
    sequence: &'a S,
    /// Next index to yield from the front
    front: usize,
    /// One past the next index to yield from the back
    back: usize,
}

impl<'a, S: Sequence + ?Sized> SequenceIterator<'a, S> {
    pub(crate) fn new(sequence: &'a S) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.size(),
        }
    }

    const fn exhaust(&mut self) {
        self.front = self.back;
    }
}

impl<S: Sequence + ?Sized> Iterator for SequenceIterator<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let element = self.sequence.get(self.front);
            self.front += 1;
            if element.is_none() {
                self.exhaust();
            }
            element
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, count: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(count).min(self.back);
        self.next()
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for SequenceIterator<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            let element = self.sequence.get(self.back);
            if element.is_none() {
                self.exhaust();
            }
            element
        } else {
            None
        }
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for SequenceIterator<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for SequenceIterator<'_, S> {}
