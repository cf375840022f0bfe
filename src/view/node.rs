//! The closed set of view nodes.
//!
//! Every view is a [`Node`]: a leaf over storage, or an adapter holding one
//! shared source plus a small descriptor. Adapters that keep the element
//! type (slice, reverse) name their source as a `Node<A>`. Adapters that
//! change it reach their source through a trait object: [`ErasedSource`]
//! for mapping, [`Computed`] for index pairing.
//!
//! Node accessors never panic: an index past the end yields `None`.

use std::any::Any;

use super::backing::Backing;
use super::combinator::{ReverseNode, SliceNode};
use super::mapper_chain::MappedNode;
use super::{Element, ReferenceCounter, Shareable};

// =============================================================================
// Node Definition
// =============================================================================

/// A view over a sequence of `A`.
pub(crate) enum Node<A> {
    /// Vouched storage.
    Leaf(Backing<A>),
    /// A contiguous sub-range of a source.
    Slice(SliceNode<A>),
    /// A source read back to front.
    Reverse(ReverseNode<A>),
    /// A source read through a fused function chain.
    Mapped(MappedNode<A>),
    /// A type-changing adapter computing each element on access.
    Computed(ReferenceCounter<dyn Computed<A>>),
}

impl<A: Element> Node<A> {
    /// Returns the number of elements.
    pub(crate) fn size(&self) -> usize {
        match self {
            Self::Leaf(backing) => backing.size(),
            Self::Slice(slice) => slice.size(),
            Self::Reverse(reverse) => reverse.size(),
            Self::Mapped(mapped) => mapped.size(),
            Self::Computed(computed) => computed.size(),
        }
    }

    /// Returns the element at `index`, or `None` past the end.
    pub(crate) fn get(&self, index: usize) -> Option<A> {
        match self {
            Self::Leaf(backing) => backing.get(index),
            Self::Slice(slice) => slice.get(index),
            Self::Reverse(reverse) => reverse.get(index),
            Self::Mapped(mapped) => mapped.get(index),
            Self::Computed(computed) => computed.get(index),
        }
    }

    /// Returns `true` if elements are read straight out of vouched storage,
    /// with no function applied on the way.
    pub(crate) fn is_primitive(&self) -> bool {
        match self {
            Self::Leaf(backing) => backing.is_vouched(),
            Self::Slice(slice) => slice.source().is_primitive(),
            Self::Reverse(reverse) => reverse.source().is_primitive(),
            Self::Mapped(_) | Self::Computed(_) => false,
        }
    }
}

// =============================================================================
// Trait-Object Seams
// =============================================================================

/// A node whose element type has been erased, read by mapped views.
pub(crate) trait ErasedSource: Shareable {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the element at `index` as a type-erased value.
    fn get_erased(&self, index: usize) -> Option<Box<dyn Any>>;
}

impl<S: Element> ErasedSource for Node<S> {
    #[inline]
    fn size(&self) -> usize {
        Node::size(self)
    }

    #[inline]
    fn get_erased(&self, index: usize) -> Option<Box<dyn Any>> {
        Node::get(self, index).map(|element| Box::new(element) as Box<dyn Any>)
    }
}

/// An adapter that computes element `index` from a source of another type.
pub(crate) trait Computed<A>: Shareable {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<A>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leaf(elements: &[i32]) -> ReferenceCounter<Node<i32>> {
        ReferenceCounter::new(Node::Leaf(Backing::copy_of(elements)))
    }

    #[rstest]
    fn test_leaf_is_primitive() {
        let node = leaf(&[1, 2, 3]);
        assert_eq!(node.size(), 3);
        assert_eq!(node.get(2), Some(3));
        assert_eq!(node.get(3), None);
        assert!(node.is_primitive());
    }

    #[rstest]
    fn test_erased_source_boxes_elements() {
        let node = leaf(&[5, 6]);
        let source: ReferenceCounter<dyn ErasedSource> = node;
        assert_eq!(source.size(), 2);

        let element = source
            .get_erased(1)
            .and_then(|value| value.downcast::<i32>().ok());
        assert_eq!(element.map(|value| *value), Some(6));
        assert!(source.get_erased(2).is_none());
    }
}
