//! Immutable views: [`ImmutableVector`] and [`ImmutableNonEmptyVector`].
//!
//! Both types are cheap handles to a shared [`Node`]. Cloning a view clones
//! the handle. The values a view exposes never change: every leaf it can
//! reach was copied by the library or moved into it by value.
//!
//! The empty view holds no node at all, so it never allocates and every
//! empty view is the same canonical instance. A non-empty view holds its
//! node unconditionally, which is what rules out size zero.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::ViewError;
use super::node::Node;
use super::sequence::{NonEmptySequence, Sequence, SequenceIterator};
use super::validation::require_non_empty;
use super::{Element, ReferenceCounter};

// =============================================================================
// ImmutableVector Definition
// =============================================================================

/// An immutable, possibly empty view over a sequence of elements.
///
/// # Time Complexity
///
/// | Operation              | Complexity                          |
/// |------------------------|-------------------------------------|
/// | `empty`                | O(1), no allocation                 |
/// | `copy_from`            | O(N)                                |
/// | `wrap_and_vouch_for`   | O(1)                                |
/// | `size` / `is_empty`    | O(1)                                |
/// | `get`                  | O(1) per adapter between view and storage |
/// | `slice` / `take` / `drop` | O(1)                             |
/// | `map` / `reverse` / `zip_with_index` | O(1)                  |
///
/// # Examples
///
/// ```rust
/// use collection_views::view::ImmutableVector;
///
/// let vector = ImmutableVector::copy_from(&[1, 2, 3, 4, 5]);
/// assert_eq!(vector.size(), 5);
/// assert_eq!(vector.get(2), Some(3));
///
/// let middle = vector.drop(1).take(3);
/// assert_eq!(middle.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
pub struct ImmutableVector<A> {
    /// `None` is the canonical empty instance; a present node is never empty.
    node: Option<ReferenceCounter<Node<A>>>,
}

impl<A> ImmutableVector<A> {
    /// Returns the canonical empty view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let empty: ImmutableVector<i32> = ImmutableVector::empty();
    /// assert!(empty.is_empty());
    /// assert!(empty.ptr_eq(&ImmutableVector::empty()));
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// Wraps a node that holds at least one element.
    #[inline]
    pub(crate) const fn from_node(node: ReferenceCounter<Node<A>>) -> Self {
        Self { node: Some(node) }
    }

    /// Returns the underlying node, or `None` for the canonical empty view.
    #[inline]
    pub(crate) const fn node(&self) -> Option<&ReferenceCounter<Node<A>>> {
        self.node.as_ref()
    }

    /// Returns `true` if both views are the same instance.
    ///
    /// Canonical empty views are always the same instance. This is an
    /// identity check, not equality: two views with equal elements built
    /// separately are not the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }
}

impl<A: Element> ImmutableVector<A> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.node.as_ref().map_or(0, |node| node.size())
    }

    /// Returns the element at `index`, or `None` if `index >= size()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<A> {
        self.node.as_ref().and_then(|node| node.get(index))
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    pub fn iter(&self) -> SequenceIterator<'_, Self> {
        SequenceIterator::new(self)
    }

    /// Returns a non-empty view over the same node, or `None` if empty.
    ///
    /// No elements are copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&[7, 8]);
    /// let non_empty = vector.to_non_empty().unwrap();
    /// assert_eq!(non_empty.first(), 7);
    ///
    /// let empty: ImmutableVector<i32> = ImmutableVector::empty();
    /// assert!(empty.to_non_empty().is_none());
    /// ```
    #[must_use]
    pub fn to_non_empty(&self) -> Option<ImmutableNonEmptyVector<A>> {
        self.node
            .as_ref()
            .map(|node| ImmutableNonEmptyVector::from_node(ReferenceCounter::clone(node)))
    }

    /// Returns a non-empty view over the same node.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyNotAllowed`] if the view is empty.
    pub fn to_non_empty_or_err(&self) -> Result<ImmutableNonEmptyVector<A>, ViewError> {
        require_non_empty(self.to_non_empty())
    }
}

impl<A> Clone for ImmutableVector<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<A> Default for ImmutableVector<A> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Element> Sequence for ImmutableVector<A> {
    type Item = A;

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<A> {
        Self::get(self, index)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn as_vouched(&self) -> Option<Self> {
        match &self.node {
            None => Some(Self::empty()),
            Some(node) if node.is_primitive() => Some(self.clone()),
            Some(_) => None,
        }
    }

    #[inline]
    fn to_immutable(&self) -> Self {
        self.clone()
    }
}

// =============================================================================
// ImmutableNonEmptyVector Definition
// =============================================================================

/// An immutable view that always holds at least one element.
///
/// # Examples
///
/// ```rust
/// use collection_views::view::ImmutableNonEmptyVector;
///
/// let vector = ImmutableNonEmptyVector::copy_from(&[3, 1, 2]).unwrap();
/// assert_eq!(vector.first(), 3);
/// assert_eq!(vector.last(), 2);
/// assert_eq!(vector.tail().size(), 2);
/// ```
pub struct ImmutableNonEmptyVector<A> {
    node: ReferenceCounter<Node<A>>,
}

impl<A> ImmutableNonEmptyVector<A> {
    /// Wraps a node that holds at least one element.
    #[inline]
    pub(crate) const fn from_node(node: ReferenceCounter<Node<A>>) -> Self {
        Self { node }
    }

    /// Returns the underlying node.
    #[inline]
    pub(crate) const fn node(&self) -> &ReferenceCounter<Node<A>> {
        &self.node
    }

    /// Returns the same view as a possibly-empty [`ImmutableVector`].
    ///
    /// The node is shared, not copied.
    #[inline]
    #[must_use]
    pub fn to_vector(&self) -> ImmutableVector<A> {
        ImmutableVector::from_node(ReferenceCounter::clone(&self.node))
    }

    /// Returns `true` if both views are the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.node, &other.node)
    }
}

impl<A: Element> ImmutableNonEmptyVector<A> {
    /// Returns the number of elements, never zero.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.node.size()
    }

    /// Returns the element at `index`, or `None` if `index >= size()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<A> {
        self.node.get(index)
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    pub fn iter(&self) -> SequenceIterator<'_, Self> {
        SequenceIterator::new(self)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Does not panic: the view always holds an element at index 0.
    #[must_use]
    pub fn first(&self) -> A {
        self.element(0)
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Does not panic: the view always holds at least one element.
    #[must_use]
    pub fn last(&self) -> A {
        self.element(self.size() - 1)
    }

    /// Returns every element after the first. May be empty.
    #[must_use]
    pub fn tail(&self) -> ImmutableVector<A> {
        self.to_vector().drop(1)
    }

    fn element(&self, index: usize) -> A {
        self.node
            .get(index)
            .expect("index within a non-empty view resolves to an element")
    }
}

impl<A> Clone for ImmutableNonEmptyVector<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            node: ReferenceCounter::clone(&self.node),
        }
    }
}

impl<A: Element> Sequence for ImmutableNonEmptyVector<A> {
    type Item = A;

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<A> {
        Self::get(self, index)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    fn as_vouched(&self) -> Option<ImmutableVector<A>> {
        self.node.is_primitive().then(|| self.to_vector())
    }

    #[inline]
    fn to_immutable(&self) -> ImmutableVector<A> {
        self.to_vector()
    }
}

impl<A: Element> NonEmptySequence for ImmutableNonEmptyVector<A> {
    #[inline]
    fn first(&self) -> A {
        Self::first(self)
    }

    #[inline]
    fn last(&self) -> A {
        Self::last(self)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A> From<ImmutableNonEmptyVector<A>> for ImmutableVector<A> {
    #[inline]
    fn from(vector: ImmutableNonEmptyVector<A>) -> Self {
        Self::from_node(vector.node)
    }
}

impl<A: Element> TryFrom<ImmutableVector<A>> for ImmutableNonEmptyVector<A> {
    type Error = ViewError;

    #[inline]
    fn try_from(vector: ImmutableVector<A>) -> Result<Self, Self::Error> {
        require_non_empty(vector.node.map(Self::from_node))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<'a, A: Element> IntoIterator for &'a ImmutableVector<A> {
    type Item = A;
    type IntoIter = SequenceIterator<'a, ImmutableVector<A>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: Element> IntoIterator for &'a ImmutableNonEmptyVector<A> {
    type Item = A;
    type IntoIter = SequenceIterator<'a, ImmutableNonEmptyVector<A>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Element + PartialEq> PartialEq for ImmutableVector<A> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<A: Element + Eq> Eq for ImmutableVector<A> {}

impl<A: Element + PartialEq> PartialEq for ImmutableNonEmptyVector<A> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<A: Element + Eq> Eq for ImmutableNonEmptyVector<A> {}

impl<A: Element + PartialEq> PartialEq<ImmutableNonEmptyVector<A>> for ImmutableVector<A> {
    fn eq(&self, other: &ImmutableNonEmptyVector<A>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<A: Element + PartialEq> PartialEq<ImmutableVector<A>> for ImmutableNonEmptyVector<A> {
    #[inline]
    fn eq(&self, other: &ImmutableVector<A>) -> bool {
        other == self
    }
}

/// Hashes the size, then each element in order, so that equal views hash
/// equally whatever nodes they are built from.
impl<A: Element + Hash> Hash for ImmutableVector<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<A: Element + Hash> Hash for ImmutableNonEmptyVector<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<A: Element + fmt::Debug> fmt::Debug for ImmutableVector<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: Element + fmt::Debug> fmt::Debug for ImmutableNonEmptyVector<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

fn write_elements<I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: Iterator,
    I::Item: fmt::Display,
{
    write!(formatter, "[")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

impl<A: Element + fmt::Display> fmt::Display for ImmutableVector<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.iter())
    }
}

impl<A: Element + fmt::Display> fmt::Display for ImmutableNonEmptyVector<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.iter())
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableVector<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableNonEmptyVector<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableVector<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableNonEmptyVector<String>: Send, Sync);
