//! Constructors for immutable views.
//!
//! Every constructor follows the same policy:
//!
//! 1. A source that is already an immutable view reading straight from
//!    vouched storage is reused, sliced if only part of it is wanted.
//! 2. An empty result is the canonical empty view.
//! 3. Anything else is copied, the minimum number of elements, into a fresh
//!    array the library owns.
//!
//! `wrap_and_vouch_for*` skip the copy by taking the storage by value: once
//! moved in, nothing outside the library can reach it.

use tracing::{debug, trace};

use super::backing::Backing;
use super::error::ViewError;
use super::immutable::{ImmutableNonEmptyVector, ImmutableVector};
use super::node::Node;
use super::sequence::Sequence;
use super::validation::{clamp_range, require_non_empty, validate_slice};
use super::{Element, ReferenceCounter};

impl<A: Element> ImmutableVector<A> {
    /// Builds a view over `backing`, copying it first if it is shared.
    ///
    /// The size is read from the vouched copy. A shared list may change
    /// size until the copy is taken.
    pub(crate) fn from_backing(backing: Backing<A>) -> Self {
        let backing = if backing.is_vouched() {
            backing
        } else {
            let backing = backing.into_vouched();
            debug!(size = backing.size(), "copied shared list into vouched storage");
            backing
        };
        if backing.size() == 0 {
            trace!("empty backing, using canonical empty view");
            return Self::empty();
        }
        Self::from_node(ReferenceCounter::new(Node::Leaf(backing)))
    }

    /// Copies `elements` into a new view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let mut source = vec![1, 2, 3];
    /// let vector = ImmutableVector::copy_from(&source);
    /// source[0] = 100;
    /// assert_eq!(vector.get(0), Some(1));
    /// ```
    #[must_use]
    pub fn copy_from(elements: &[A]) -> Self {
        trace!(size = elements.len(), "copying slice");
        Self::from_backing(Backing::copy_of(elements))
    }

    /// Copies at most the first `max` of `elements` into a new view.
    #[must_use]
    pub fn copy_from_with_max(max: usize, elements: &[A]) -> Self {
        let count = max.min(elements.len());
        trace!(count, "copying slice prefix");
        Self::from_backing(Backing::copy_of(&elements[..count]))
    }

    /// Collects `elements` into a new view.
    #[must_use]
    pub fn copy_from_iter<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::from_backing(Backing::collect(elements))
    }

    /// Collects at most `max` of `elements` into a new view.
    ///
    /// At most `max` elements are pulled from the iterator.
    #[must_use]
    pub fn copy_from_iter_with_max<I>(max: usize, elements: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::from_backing(Backing::collect(elements.into_iter().take(max)))
    }

    /// Returns a view with the elements of `sequence`.
    ///
    /// A sequence that is already an immutable view over vouched storage is
    /// returned as is. Anything else is copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3]);
    /// let reused = ImmutableVector::copy_from_sequence(&vector);
    /// assert!(reused.ptr_eq(&vector));
    /// ```
    #[must_use]
    pub fn copy_from_sequence<S>(sequence: &S) -> Self
    where
        S: Sequence<Item = A> + ?Sized,
    {
        if let Some(vouched) = sequence.as_vouched() {
            trace!("reusing vouched view");
            return vouched;
        }
        trace!(size = sequence.size(), "copying sequence");
        Self::from_backing(Backing::collect(sequence.iter()))
    }

    /// Returns a view with at most the first `max` elements of `sequence`.
    #[must_use]
    pub fn copy_from_sequence_with_max<S>(max: usize, sequence: &S) -> Self
    where
        S: Sequence<Item = A> + ?Sized,
    {
        if let Some(vouched) = sequence.as_vouched() {
            trace!(max, "reusing prefix of vouched view");
            return vouched.take(max);
        }
        trace!(max, "copying sequence prefix");
        Self::from_backing(Backing::collect(sequence.iter().take(max)))
    }

    /// Returns a view with the elements of `sequence` in `[start, end)`.
    ///
    /// `end` past the size of `sequence` is clamped to it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBounds`] if `start > end`. Nothing is
    /// copied in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let source = vec![1, 2, 3, 4, 5];
    /// let vector = ImmutableVector::copy_slice_from(1, 3, &source).unwrap();
    /// assert_eq!(vector.iter().collect::<Vec<_>>(), vec![2, 3]);
    /// assert!(ImmutableVector::copy_slice_from(3, 1, &source).is_err());
    /// ```
    pub fn copy_slice_from<S>(start: usize, end: usize, sequence: &S) -> Result<Self, ViewError>
    where
        S: Sequence<Item = A> + ?Sized,
    {
        validate_slice(start, end)?;
        if let Some(vouched) = sequence.as_vouched() {
            trace!(start, end, "reusing slice of vouched view");
            return vouched.slice(start, end);
        }
        let (start, end) = clamp_range(start, end, sequence.size());
        trace!(start, end, "copying sequence range");
        let elements = (start..end).filter_map(|index| sequence.get(index));
        Ok(Self::from_backing(Backing::collect(elements)))
    }

    /// Takes ownership of `elements` and views them without copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::wrap_and_vouch_for(vec![1, 2, 3]);
    /// assert_eq!(vector.size(), 3);
    ///
    /// let empty = ImmutableVector::<i32>::wrap_and_vouch_for(Vec::new());
    /// assert!(empty.ptr_eq(&ImmutableVector::empty()));
    /// ```
    #[must_use]
    pub fn wrap_and_vouch_for(elements: Vec<A>) -> Self {
        trace!(size = elements.len(), "vouching for list");
        Self::from_backing(Backing::List(ReferenceCounter::new(elements)))
    }

    /// Takes ownership of `elements` and views them without copying.
    #[must_use]
    pub fn wrap_and_vouch_for_array(elements: Box<[A]>) -> Self {
        trace!(size = elements.len(), "vouching for array");
        Self::from_backing(Backing::Array(ReferenceCounter::from(elements)))
    }
}

impl<A: Element> FromIterator<A> for ImmutableVector<A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::copy_from_iter(iter)
    }
}

impl<A: Element> From<Vec<A>> for ImmutableVector<A> {
    #[inline]
    fn from(elements: Vec<A>) -> Self {
        Self::wrap_and_vouch_for(elements)
    }
}

// =============================================================================
// Non-Empty Constructors
// =============================================================================

impl<A: Element> ImmutableNonEmptyVector<A> {
    /// Copies `elements` into a new view, or returns `None` if empty.
    #[must_use]
    pub fn copy_from(elements: &[A]) -> Option<Self> {
        ImmutableVector::copy_from(elements).to_non_empty()
    }

    /// Copies `elements` into a new view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if `elements` is empty.
    pub fn copy_from_or_err(elements: &[A]) -> Result<Self, ViewError> {
        require_non_empty(Self::copy_from(elements))
    }

    /// Copies at most the first `max` of `elements`, or returns `None` if
    /// that leaves nothing.
    #[must_use]
    pub fn copy_from_with_max(max: usize, elements: &[A]) -> Option<Self> {
        ImmutableVector::copy_from_with_max(max, elements).to_non_empty()
    }

    /// Copies at most the first `max` of `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if `max` is zero or
    /// `elements` is empty.
    pub fn copy_from_with_max_or_err(max: usize, elements: &[A]) -> Result<Self, ViewError> {
        require_non_empty(Self::copy_from_with_max(max, elements))
    }

    /// Collects `elements` into a new view, or returns `None` if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableNonEmptyVector;
    ///
    /// let vector = ImmutableNonEmptyVector::copy_from_iter(1..=3).unwrap();
    /// assert_eq!(vector.last(), 3);
    /// assert!(ImmutableNonEmptyVector::copy_from_iter(std::iter::empty::<i32>()).is_none());
    /// ```
    #[must_use]
    pub fn copy_from_iter<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = A>,
    {
        ImmutableVector::copy_from_iter(elements).to_non_empty()
    }

    /// Collects `elements` into a new view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if `elements` yields nothing.
    pub fn copy_from_iter_or_err<I>(elements: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = A>,
    {
        require_non_empty(Self::copy_from_iter(elements))
    }

    /// Collects at most `max` of `elements`, or returns `None` if that
    /// leaves nothing.
    #[must_use]
    pub fn copy_from_iter_with_max<I>(max: usize, elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = A>,
    {
        ImmutableVector::copy_from_iter_with_max(max, elements).to_non_empty()
    }

    /// Collects at most `max` of `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if `max` is zero or
    /// `elements` yields nothing.
    pub fn copy_from_iter_with_max_or_err<I>(max: usize, elements: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = A>,
    {
        require_non_empty(Self::copy_from_iter_with_max(max, elements))
    }

    /// Returns a non-empty view with the elements of `sequence`, or `None`
    /// if it is empty.
    ///
    /// Reuses `sequence` without copying under the same conditions as
    /// [`ImmutableVector::copy_from_sequence`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::{ImmutableNonEmptyVector, ImmutableVector};
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3]);
    /// let non_empty = ImmutableNonEmptyVector::copy_from_sequence(&vector).unwrap();
    /// assert!(non_empty.to_vector().ptr_eq(&vector));
    /// ```
    #[must_use]
    pub fn copy_from_sequence<S>(sequence: &S) -> Option<Self>
    where
        S: Sequence<Item = A> + ?Sized,
    {
        ImmutableVector::copy_from_sequence(sequence).to_non_empty()
    }

    /// Returns a non-empty view with the elements of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if `sequence` is empty.
    pub fn copy_from_sequence_or_err<S>(sequence: &S) -> Result<Self, ViewError>
    where
        S: Sequence<Item = A> + ?Sized,
    {
        require_non_empty(Self::copy_from_sequence(sequence))
    }

    /// Returns a non-empty view with at most the first `max` elements of
    /// `sequence`, or `None` if that leaves nothing.
    #[must_use]
    pub fn copy_from_sequence_with_max<S>(max: usize, sequence: &S) -> Option<Self>
    where
        S: Sequence<Item = A> + ?Sized,
    {
        ImmutableVector::copy_from_sequence_with_max(max, sequence).to_non_empty()
    }

    /// Returns a non-empty view with at most the first `max` elements of
    /// `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if `max` is zero or
    /// `sequence` is empty.
    pub fn copy_from_sequence_with_max_or_err<S>(
        max: usize,
        sequence: &S,
    ) -> Result<Self, ViewError>
    where
        S: Sequence<Item = A> + ?Sized,
    {
        require_non_empty(Self::copy_from_sequence_with_max(max, sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SharedList, SharedListVector};
    use rstest::rstest;

    #[rstest]
    fn test_copy_from_isolates_from_source() {
        let mut source = vec![1, 2, 3];
        let vector = ImmutableVector::copy_from(&source);
        source.push(4);
        source[0] = 9;
        assert_eq!(vector.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(10, vec![1, 2, 3])]
    fn test_copy_from_with_max_clamps(#[case] max: usize, #[case] expected: Vec<i32>) {
        let vector = ImmutableVector::copy_from_with_max(max, &[1, 2, 3]);
        assert_eq!(vector.iter().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_copy_from_iter_with_max_pulls_only_what_it_needs() {
        let mut pulled = 0;
        let source = (0..).inspect(|_| pulled += 1);
        let vector = ImmutableVector::copy_from_iter_with_max(3, source);
        assert_eq!(vector.size(), 3);
        assert_eq!(pulled, 3);
    }

    #[rstest]
    fn test_copy_from_sequence_reuses_primitive_views() {
        let vector = ImmutableVector::copy_from(&[1, 2, 3, 4]);
        let window = vector.drop(1).reverse();
        assert!(ImmutableVector::copy_from_sequence(&window).ptr_eq(&window));
    }

    #[rstest]
    fn test_copy_from_sequence_materializes_mapped_views() {
        let mapped = ImmutableVector::copy_from(&[1, 2, 3]).map(|element| element * 2);
        let copied = ImmutableVector::copy_from_sequence(&mapped);
        assert!(!copied.ptr_eq(&mapped));
        assert_eq!(copied, mapped);
        assert!(copied.node().is_some_and(|node| node.is_primitive()));
    }

    #[rstest]
    fn test_copy_from_sequence_with_max_reuses_prefix() {
        let vector = ImmutableVector::copy_from(&[1, 2, 3, 4]);
        let prefix = ImmutableVector::copy_from_sequence_with_max(2, &vector);
        assert_eq!(prefix.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert!(ImmutableVector::copy_from_sequence_with_max(9, &vector).ptr_eq(&vector));
    }

    #[rstest]
    fn test_copy_from_sequence_with_max_copies_mapped_prefix() {
        let mapped = ImmutableVector::copy_from(&[1, 2, 3]).map(|element| element * 10);
        let prefix = ImmutableVector::copy_from_sequence_with_max(2, &mapped);
        assert!(prefix.node().is_some_and(|node| node.is_primitive()));
        assert_eq!(prefix.iter().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[rstest]
    fn test_copy_from_sequence_with_max_isolates_shared_list() {
        let list = SharedList::new(vec![1, 2, 3]);
        let live = SharedListVector::wrap(&list);
        let prefix = ImmutableVector::copy_from_sequence_with_max(2, &live);

        list.set(0, 100);
        list.update(Vec::clear);

        assert_eq!(prefix.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn test_copy_slice_from_reuses_vouched_storage() {
        let vector = ImmutableVector::copy_from(&[1, 2, 3, 4, 5]);
        let sliced = ImmutableVector::copy_slice_from(1, 4, &vector).unwrap();
        assert_eq!(sliced.iter().collect::<Vec<_>>(), vec![2, 3, 4]);

        let shares_source = sliced.node().is_some_and(|node| match node.as_ref() {
            Node::Slice(slice) => vector
                .node()
                .is_some_and(|source| ReferenceCounter::ptr_eq(slice.source(), source)),
            _ => false,
        });
        assert!(shares_source);
        assert!(ImmutableVector::copy_slice_from(0, 9, &vector).unwrap().ptr_eq(&vector));
    }

    #[rstest]
    fn test_non_empty_copy_from_sequence_reuses_vouched_view() {
        let vector = ImmutableVector::copy_from(&[1, 2, 3]);
        let non_empty = ImmutableNonEmptyVector::copy_from_sequence(&vector).unwrap();
        assert!(non_empty.to_vector().ptr_eq(&vector));

        let prefix = ImmutableNonEmptyVector::copy_from_sequence_with_max(2, &vector).unwrap();
        assert_eq!(prefix.last(), 2);
        assert!(
            ImmutableNonEmptyVector::copy_from_sequence_with_max_or_err(5, &vector)
                .is_ok_and(|whole| whole.to_vector().ptr_eq(&vector))
        );
    }

    #[rstest]
    fn test_non_empty_copy_from_sequence_of_empty_source() {
        let empty = ImmutableVector::<i32>::empty();
        assert!(ImmutableNonEmptyVector::copy_from_sequence(&empty).is_none());
        assert_eq!(
            ImmutableNonEmptyVector::copy_from_sequence_or_err(&empty).map(|vector| vector.size()),
            Err(ViewError::EmptyNotAllowed)
        );
        let vector = ImmutableVector::copy_from(&[1]);
        assert_eq!(
            ImmutableNonEmptyVector::copy_from_sequence_with_max_or_err(0, &vector)
                .map(|vector| vector.size()),
            Err(ViewError::EmptyNotAllowed)
        );
    }

    #[rstest]
    fn test_copy_slice_from_plain_vec() {
        let source = vec![1, 2, 3, 4, 5];
        let vector = ImmutableVector::copy_slice_from(2, 10, &source).unwrap();
        assert_eq!(vector.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(
            ImmutableVector::copy_slice_from(4, 2, &source).map(|vector| vector.size()),
            Err(ViewError::OutOfBounds { start: 4, end: 2 })
        );
    }

    #[rstest]
    fn test_wrap_and_vouch_for_array() {
        let vector = ImmutableVector::wrap_and_vouch_for_array(vec![5, 6].into_boxed_slice());
        assert_eq!(vector.get(1), Some(6));
        assert!(vector.as_vouched().is_some());
    }

    #[rstest]
    fn test_from_backing_copies_shared_list() {
        crate::test_utils::init_test_logging();
        let list = SharedList::new(vec![1, 2]);
        let vector = ImmutableVector::from_backing(Backing::Shared(list.clone()));
        list.set(0, 7);
        assert_eq!(vector.get(0), Some(1));
    }

    #[rstest]
    fn test_collect_into_vector() {
        let vector: ImmutableVector<i32> = (1..=4).collect();
        assert_eq!(vector.size(), 4);
        let empty: ImmutableVector<i32> = std::iter::empty().collect();
        assert!(empty.ptr_eq(&ImmutableVector::empty()));
    }

    #[rstest]
    fn test_non_empty_constructors() {
        assert!(ImmutableNonEmptyVector::<i32>::copy_from(&[]).is_none());
        assert_eq!(
            ImmutableNonEmptyVector::<i32>::copy_from_or_err(&[]).map(|vector| vector.size()),
            Err(ViewError::EmptyNotAllowed)
        );
        assert_eq!(
            ImmutableNonEmptyVector::copy_from_with_max(2, &[1, 2, 3]).map(|vector| vector.last()),
            Some(2)
        );
        assert!(ImmutableNonEmptyVector::copy_from_with_max_or_err(0, &[1]).is_err());
        assert!(ImmutableNonEmptyVector::copy_from_iter_or_err(vec![1]).is_ok());
        assert_eq!(
            ImmutableNonEmptyVector::copy_from_iter_with_max_or_err(0, vec![1])
                .map(|vector| vector.size()),
            Err(ViewError::EmptyNotAllowed)
        );
    }
}
