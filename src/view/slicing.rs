//! Range operations: `slice`, `take`, `drop` and their variants.
//!
//! Every range operation reduces to [`slice_node`], which clamps the range,
//! returns the canonical empty or the receiver itself where it can, and
//! otherwise builds one `Slice` node. Slicing a slice points the new node at
//! the original source with the offsets added, so windows never stack.

use super::combinator::SliceNode;
use super::error::ViewError;
use super::immutable::ImmutableVector;
use super::node::Node;
use super::validation::{clamp_range, validate_slice};
use super::{Element, ReferenceCounter};

/// Returns the view over `[start, end)` of `node`, clamped to its size.
///
/// `None` stands for the canonical empty view.
fn slice_node<A: Element>(
    node: &ReferenceCounter<Node<A>>,
    start: usize,
    end: usize,
) -> Option<ReferenceCounter<Node<A>>> {
    let size = node.size();
    let (start, end) = clamp_range(start, end, size);
    let length = end - start;

    if length == 0 {
        return None;
    }
    if length == size {
        return Some(ReferenceCounter::clone(node));
    }

    let slice = match node.as_ref() {
        Node::Slice(inner) => SliceNode::new(
            ReferenceCounter::clone(inner.source()),
            inner.offset() + start,
            length,
        ),
        _ => SliceNode::new(ReferenceCounter::clone(node), start, length),
    };
    Some(ReferenceCounter::new(Node::Slice(slice)))
}

/// Counts the leading elements that satisfy `predicate`.
///
/// Elements are tested in index order and testing stops at the first
/// failure, so `predicate` never sees an element after it.
fn prefix_length<A, P>(vector: &ImmutableVector<A>, mut predicate: P) -> usize
where
    A: Element,
    P: FnMut(&A) -> bool,
{
    vector.iter().take_while(|element| predicate(element)).count()
}

impl<A: Element> ImmutableVector<A> {
    fn clamped_slice(&self, start: usize, end: usize) -> Self {
        self.node()
            .and_then(|node| slice_node(node, start, end))
            .map_or_else(Self::empty, Self::from_node)
    }

    /// Returns the view over `[start, end)`.
    ///
    /// `end` past the size is clamped to the size.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBounds`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::{ImmutableVector, ViewError};
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3, 4, 5]);
    /// let middle = vector.slice(1, 4).unwrap();
    /// assert_eq!(middle.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    ///
    /// assert_eq!(vector.slice(1, 100).unwrap().size(), 4);
    /// assert_eq!(
    ///     vector.slice(3, 1).unwrap_err(),
    ///     ViewError::OutOfBounds { start: 3, end: 1 }
    /// );
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, ViewError> {
        validate_slice(start, end)?;
        Ok(self.clamped_slice(start, end))
    }

    /// Returns the first `count` elements, or all of them if `count >= size()`.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.clamped_slice(0, count)
    }

    /// Returns the last `count` elements, or all of them if `count >= size()`.
    #[must_use]
    pub fn take_right(&self, count: usize) -> Self {
        let size = self.size();
        self.clamped_slice(size.saturating_sub(count), size)
    }

    /// Returns every element after the first `count`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3]);
    /// assert_eq!(vector.drop(1).iter().collect::<Vec<_>>(), vec![2, 3]);
    /// assert!(vector.drop(3).is_empty());
    /// assert!(vector.drop(0).ptr_eq(&vector));
    /// ```
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        self.clamped_slice(count, self.size())
    }

    /// Returns every element except the last `count`.
    #[must_use]
    pub fn drop_right(&self, count: usize) -> Self {
        self.clamped_slice(0, self.size().saturating_sub(count))
    }

    /// Returns the longest prefix whose elements all satisfy `predicate`.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.take(prefix_length(self, predicate))
    }

    /// Returns the view after the longest prefix whose elements all satisfy
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3, 4, 1]);
    /// let rest = vector.drop_while(|element| *element < 3);
    /// assert_eq!(rest.iter().collect::<Vec<_>>(), vec![3, 4, 1]);
    /// ```
    #[must_use]
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.drop(prefix_length(self, predicate))
    }
}
