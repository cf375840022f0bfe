//! Fused element transformations.
//!
//! A [`MapperChain`] is the composition of every function passed to a chain
//! of `map` calls. Mapping a mapped view does not wrap the old view: it
//! extends the chain and points the new view at the original source. The
//! chain runs its steps in a loop, so reading an element costs one access
//! to the source plus one call per step, with no nested wrappers.
//!
//! Element types change from step to step, so steps exchange type-erased
//! values (`Box<dyn Any>`). Each step checks the type it receives; only the
//! typed constructors below can add steps, so those checks always pass.

use std::any::Any;
use std::marker::PhantomData;

use smallvec::SmallVec;

use super::node::ErasedSource;
use super::{Element, ReferenceCounter, Shareable};

/// A value travelling between steps of a chain.
type Erased = Box<dyn Any>;

#[cfg(not(feature = "arc"))]
type Step = dyn Fn(Erased) -> Option<Erased>;

#[cfg(feature = "arc")]
type Step = dyn Fn(Erased) -> Option<Erased> + Send + Sync;

/// Number of steps stored without a heap allocation.
const INLINE_STEPS: usize = 4;

// =============================================================================
// MapperChain Definition
// =============================================================================

/// An ordered list of type-erased functions applied one after another.
#[derive(Clone)]
pub(crate) struct MapperChain {
    steps: SmallVec<[ReferenceCounter<Step>; INLINE_STEPS]>,
}

impl MapperChain {
    /// Creates a chain holding the single function `function`.
    pub(crate) fn single<A, B, F>(function: F) -> Self
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Shareable + 'static,
    {
        Self {
            steps: SmallVec::new(),
        }
        .then(function)
    }

    /// Returns a new chain that runs this chain, then `function`.
    ///
    /// The receiver is left untouched; steps are shared, not copied.
    pub(crate) fn then<A, B, F>(&self, function: F) -> Self
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Shareable + 'static,
    {
        let step: ReferenceCounter<Step> = ReferenceCounter::new(move |value: Erased| {
            value
                .downcast::<A>()
                .ok()
                .map(|value| Box::new(function(*value)) as Erased)
        });
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Runs every step, in order, on `value`.
    pub(crate) fn apply(&self, value: Erased) -> Option<Erased> {
        self.steps.iter().try_fold(value, |value, step| step(value))
    }

    /// Returns the number of fused functions.
    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }
}

// =============================================================================
// MappedNode Definition
// =============================================================================

/// A lazily mapped view: an untyped source plus the chain that turns its
/// elements into `A`.
pub(crate) struct MappedNode<A> {
    source: ReferenceCounter<dyn ErasedSource>,
    chain: MapperChain,
    output: PhantomData<fn() -> A>,
}

impl<A: Element> MappedNode<A> {
    /// Maps `source` through `function`.
    pub(crate) fn new<S, F>(source: ReferenceCounter<dyn ErasedSource>, function: F) -> Self
    where
        S: Element,
        F: Fn(S) -> A + Shareable + 'static,
    {
        Self {
            source,
            chain: MapperChain::single(function),
            output: PhantomData,
        }
    }

    /// Returns a node over the same source that also applies `function`.
    pub(crate) fn then<B, F>(&self, function: F) -> MappedNode<B>
    where
        B: Element,
        F: Fn(A) -> B + Shareable + 'static,
    {
        MappedNode {
            source: ReferenceCounter::clone(&self.source),
            chain: self.chain.then(function),
            output: PhantomData,
        }
    }

    /// Returns the source's size; mapping never changes it.
    pub(crate) fn size(&self) -> usize {
        self.source.size()
    }

    /// Reads element `index` from the source and runs the chain on it.
    pub(crate) fn get(&self, index: usize) -> Option<A> {
        let value = self.chain.apply(self.source.get_erased(index)?)?;
        value.downcast::<A>().ok().map(|value| *value)
    }

    /// Returns the number of functions fused into this node.
    pub(crate) fn depth(&self) -> usize {
        self.chain.len()
    }
}
