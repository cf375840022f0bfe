//! Lazy adapters: slicing nodes, reversal, mapping and index pairing.
//!
//! Every adapter is O(1) to build. It holds its source by a shared handle
//! and computes each element only when asked for it.

use tracing::trace;

use super::immutable::{ImmutableNonEmptyVector, ImmutableVector};
use super::mapper_chain::MappedNode;
use super::node::{Computed, ErasedSource, Node};
use super::{Element, ReferenceCounter, Shareable};

// =============================================================================
// SliceNode
// =============================================================================

/// A contiguous window `[offset, offset + length)` over a source.
pub(crate) struct SliceNode<A> {
    source: ReferenceCounter<Node<A>>,
    offset: usize,
    length: usize,
}

impl<A: Element> SliceNode<A> {
    pub(crate) const fn new(
        source: ReferenceCounter<Node<A>>,
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            source,
            offset,
            length,
        }
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.length
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<A> {
        if index < self.length {
            self.source.get(self.offset + index)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn source(&self) -> &ReferenceCounter<Node<A>> {
        &self.source
    }

    #[inline]
    pub(crate) const fn offset(&self) -> usize {
        self.offset
    }
}

// =============================================================================
// ReverseNode
// =============================================================================

/// A source read from its last element to its first.
pub(crate) struct ReverseNode<A> {
    source: ReferenceCounter<Node<A>>,
    size: usize,
}

impl<A: Element> ReverseNode<A> {
    pub(crate) fn new(source: ReferenceCounter<Node<A>>) -> Self {
        let size = source.size();
        Self { source, size }
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<A> {
        if index < self.size {
            self.source.get(self.size - 1 - index)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn source(&self) -> &ReferenceCounter<Node<A>> {
        &self.source
    }
}

// =============================================================================
// ZipWithIndexNode
// =============================================================================

/// Pairs every element of a source with its position.
struct ZipWithIndexNode<S> {
    source: ReferenceCounter<Node<S>>,
}

impl<S: Element> Computed<(S, usize)> for ZipWithIndexNode<S> {
    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<(S, usize)> {
        self.source.get(index).map(|element| (element, index))
    }
}

// =============================================================================
// Node Builders
// =============================================================================

fn map_node<A, B, F>(node: &ReferenceCounter<Node<A>>, function: F) -> ReferenceCounter<Node<B>>
where
    A: Element,
    B: Element,
    F: Fn(A) -> B + Shareable + 'static,
{
    let mapped = if let Node::Mapped(mapped) = node.as_ref() {
        let fused = mapped.then(function);
        trace!(depth = fused.depth(), "fused map into existing chain");
        fused
    } else {
        let source: ReferenceCounter<Node<A>> = ReferenceCounter::clone(node);
        MappedNode::new(source as ReferenceCounter<dyn ErasedSource>, function)
    };
    ReferenceCounter::new(Node::Mapped(mapped))
}

fn reverse_node<A: Element>(node: &ReferenceCounter<Node<A>>) -> ReferenceCounter<Node<A>> {
    match node.as_ref() {
        Node::Reverse(reverse) => ReferenceCounter::clone(reverse.source()),
        _ if node.size() < 2 => ReferenceCounter::clone(node),
        _ => {
            let reverse = ReverseNode::new(ReferenceCounter::clone(node));
            ReferenceCounter::new(Node::Reverse(reverse))
        }
    }
}

fn zip_with_index_node<A: Element>(
    node: &ReferenceCounter<Node<A>>,
) -> ReferenceCounter<Node<(A, usize)>> {
    let computed: ReferenceCounter<dyn Computed<(A, usize)>> =
        ReferenceCounter::new(ZipWithIndexNode {
            source: ReferenceCounter::clone(node),
        });
    ReferenceCounter::new(Node::Computed(computed))
}

// =============================================================================
// Public Combinators
// =============================================================================

impl<A: Element> ImmutableVector<A> {
    /// Returns a view whose element `i` is `function(self.get(i))`.
    ///
    /// Nothing is computed until an element is read, and `function` runs
    /// again on every read. Mapping a mapped view extends its function chain
    /// instead of wrapping it, so reads stay flat however many maps are
    /// chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3]);
    /// let doubled = vector.map(|element| element * 2);
    /// assert_eq!(doubled.get(2), Some(6));
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> ImmutableVector<B>
    where
        B: Element,
        F: Fn(A) -> B + Shareable + 'static,
    {
        self.node().map_or_else(ImmutableVector::empty, |node| {
            ImmutableVector::from_node(map_node(node, function))
        })
    }

    /// Returns a view of the elements in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&[1, 2, 3]);
    /// assert_eq!(vector.reverse().iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.node()
            .map_or_else(Self::empty, |node| Self::from_node(reverse_node(node)))
    }

    /// Returns a view pairing every element with its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collection_views::view::ImmutableVector;
    ///
    /// let vector = ImmutableVector::copy_from(&['a', 'b']);
    /// let zipped = vector.zip_with_index();
    /// assert_eq!(zipped.get(1), Some(('b', 1)));
    /// ```
    #[must_use]
    pub fn zip_with_index(&self) -> ImmutableVector<(A, usize)> {
        self.node().map_or_else(ImmutableVector::empty, |node| {
            ImmutableVector::from_node(zip_with_index_node(node))
        })
    }
}

impl<A: Element> ImmutableNonEmptyVector<A> {
    /// Returns a non-empty view whose element `i` is `function(self.get(i))`.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> ImmutableNonEmptyVector<B>
    where
        B: Element,
        F: Fn(A) -> B + Shareable + 'static,
    {
        ImmutableNonEmptyVector::from_node(map_node(self.node(), function))
    }

    /// Returns a non-empty view of the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_node(reverse_node(self.node()))
    }

    /// Returns a non-empty view pairing every element with its index.
    #[must_use]
    pub fn zip_with_index(&self) -> ImmutableNonEmptyVector<(A, usize)> {
        ImmutableNonEmptyVector::from_node(zip_with_index_node(self.node()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::backing::Backing;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn leaf(elements: &[i32]) -> ReferenceCounter<Node<i32>> {
        ReferenceCounter::new(Node::Leaf(Backing::copy_of(elements)))
    }

    #[rstest]
    fn test_slice_node_translates_indices() {
        let slice = SliceNode::new(leaf(&[1, 2, 3, 4, 5]), 1, 3);
        assert_eq!(slice.size(), 3);
        assert_eq!(slice.get(0), Some(2));
        assert_eq!(slice.get(2), Some(4));
        assert_eq!(slice.get(3), None);
    }

    #[rstest]
    fn test_reverse_node_translates_indices() {
        let reverse = ReverseNode::new(leaf(&[1, 2, 3]));
        assert_eq!(reverse.get(0), Some(3));
        assert_eq!(reverse.get(2), Some(1));
        assert_eq!(reverse.get(3), None);
    }

    #[rstest]
    fn test_reverse_of_reverse_returns_source() {
        let vector = ImmutableVector::copy_from(&[1, 2, 3]);
        assert!(vector.reverse().reverse().ptr_eq(&vector));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[42])]
    fn test_reverse_of_short_view_is_identity(#[case] elements: &[i32]) {
        let vector = ImmutableVector::copy_from(elements);
        assert!(vector.reverse().ptr_eq(&vector));
    }

    #[rstest]
    fn test_map_fuses_into_single_node() {
        let vector = ImmutableVector::copy_from(&[1, 2, 3]);
        let chained = vector
            .map(|element| element + 1)
            .map(|element| element * 10)
            .map(|element| element.to_string());

        let depth = chained.node().and_then(|node| match node.as_ref() {
            Node::Mapped(mapped) => Some(mapped.depth()),
            _ => None,
        });
        assert_eq!(depth, Some(3));
        assert_eq!(chained.iter().collect::<Vec<_>>(), vec!["20", "30", "40"]);
    }

    #[rstest]
    fn test_map_is_lazy_and_recomputes_on_each_read() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let vector = ImmutableVector::copy_from(&[1, 2, 3]);

        let mapped = vector.map(move |element| {
            counter.fetch_add(1, Ordering::SeqCst);
            element
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(mapped.get(1), Some(2));
        assert_eq!(mapped.get(1), Some(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn test_map_of_empty_stays_canonical_empty() {
        let vector: ImmutableVector<i32> = ImmutableVector::empty();
        assert!(vector.map(|element| element + 1).ptr_eq(&ImmutableVector::empty()));
    }

    #[rstest]
    fn test_zip_with_index_pairs_positions() {
        let vector = ImmutableVector::copy_from(&[10, 20, 30]).reverse();
        let zipped = vector.zip_with_index();
        assert_eq!(
            zipped.iter().collect::<Vec<_>>(),
            vec![(30, 0), (20, 1), (10, 2)]
        );
        assert_eq!(zipped.get(3), None);
    }

    #[rstest]
    fn test_non_empty_combinators_stay_non_empty() {
        let vector = ImmutableNonEmptyVector::copy_from(&[1, 2]).unwrap();
        assert_eq!(vector.map(|element| element * 3).last(), 6);
        assert_eq!(vector.reverse().first(), 2);
        assert_eq!(vector.zip_with_index().last(), (2, 1));
    }
}
