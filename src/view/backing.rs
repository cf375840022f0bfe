//! Leaf storage behind every view.
//!
//! A [`Backing`] is either vouched for, meaning no reference to its storage
//! escapes the library, or shared with a caller who may still mutate it.
//! Only vouched backings ever sit under an immutable view.

use std::fmt;

use super::{Element, ReferenceCounter};

#[cfg(not(feature = "arc"))]
type ListCell<A> = std::cell::RefCell<Vec<A>>;

#[cfg(feature = "arc")]
type ListCell<A> = parking_lot::RwLock<Vec<A>>;

// =============================================================================
// Backing Definition
// =============================================================================

/// Leaf storage for a view.
pub(crate) enum Backing<A> {
    /// Fixed-size buffer the library allocated itself, or received by value.
    Array(ReferenceCounter<[A]>),
    /// Growable list whose ownership was moved into the library.
    List(ReferenceCounter<Vec<A>>),
    /// List still reachable through a caller's [`SharedList`] handle.
    Shared(SharedList<A>),
}

impl<A> Backing<A> {
    /// Returns `true` if no reference to this storage escapes the library.
    #[inline]
    pub(crate) const fn is_vouched(&self) -> bool {
        !matches!(self, Self::Shared(_))
    }
}

impl<A: Element> Backing<A> {
    /// Copies `elements` into a freshly allocated buffer.
    #[inline]
    pub(crate) fn copy_of(elements: &[A]) -> Self {
        Self::Array(ReferenceCounter::from(elements))
    }

    /// Collects `elements` into a freshly allocated buffer.
    #[inline]
    pub(crate) fn collect<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::Array(elements.into_iter().collect())
    }

    /// Returns the number of elements currently stored.
    pub(crate) fn size(&self) -> usize {
        match self {
            Self::Array(elements) => elements.len(),
            Self::List(elements) => elements.len(),
            Self::Shared(list) => list.len(),
        }
    }

    /// Returns the element at `index`, or `None` past the end.
    pub(crate) fn get(&self, index: usize) -> Option<A> {
        match self {
            Self::Array(elements) => elements.get(index).cloned(),
            Self::List(elements) => elements.get(index).cloned(),
            Self::Shared(list) => list.get(index),
        }
    }

    /// Returns a backing that is safe to put under an immutable view.
    ///
    /// Vouched backings are returned as they are. A shared list is copied
    /// into a new array, so later writes through the caller's handle are not
    /// observed.
    pub(crate) fn into_vouched(self) -> Self {
        match self {
            Self::Shared(list) => list.read(Self::copy_of),
            vouched => vouched,
        }
    }
}

// =============================================================================
// SharedList Definition
// =============================================================================

/// A mutable list that can be seen through views without being copied.
///
/// Cloning a `SharedList` clones the handle, not the elements: every clone
/// reads and writes the same list. A [`SharedListVector`] built from a handle
/// therefore observes writes made through any other handle.
///
/// With the `arc` feature the list is guarded by a `parking_lot::RwLock`;
/// otherwise by a `RefCell`.
///
/// [`SharedListVector`]: super::SharedListVector
///
/// # Examples
///
/// ```rust
/// use collection_views::view::SharedList;
///
/// let list = SharedList::new(vec![1, 2]);
/// let handle = list.clone();
/// handle.push(3);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(2), Some(3));
/// ```
pub struct SharedList<A> {
    cell: ReferenceCounter<ListCell<A>>,
}

impl<A> SharedList<A> {
    /// Creates a shared list holding `elements`.
    #[must_use]
    pub fn new(elements: Vec<A>) -> Self {
        Self {
            cell: ReferenceCounter::new(ListCell::new(elements)),
        }
    }

    /// Runs `reader` against the current elements.
    ///
    /// # Panics
    ///
    /// Without the `arc` feature, panics if called from inside
    /// [`SharedList::update`] on the same list.
    pub fn read<R>(&self, reader: impl FnOnce(&[A]) -> R) -> R {
        #[cfg(not(feature = "arc"))]
        let guard = self.cell.borrow();
        #[cfg(feature = "arc")]
        let guard = self.cell.read();
        reader(guard.as_slice())
    }

    /// Runs `writer` with mutable access to the elements.
    ///
    /// # Panics
    ///
    /// Without the `arc` feature, panics if the list is already being read
    /// or written on this thread.
    pub fn update<R>(&self, writer: impl FnOnce(&mut Vec<A>) -> R) -> R {
        #[cfg(not(feature = "arc"))]
        let mut guard = self.cell.borrow_mut();
        #[cfg(feature = "arc")]
        let mut guard = self.cell.write();
        writer(&mut *guard)
    }

    /// Appends an element.
    pub fn push(&self, element: A) {
        self.update(|elements| elements.push(element));
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the list untouched if `index` is past the end.
    pub fn set(&self, index: usize, element: A) -> Option<A> {
        self.update(|elements| {
            elements
                .get_mut(index)
                .map(|slot| std::mem::replace(slot, element))
        })
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read(<[A]>::len)
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: Clone> SharedList<A> {
    /// Returns a clone of the element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<A> {
        self.read(|elements| elements.get(index).cloned())
    }
}

impl<A> Clone for SharedList<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cell: ReferenceCounter::clone(&self.cell),
        }
    }
}

impl<A> From<Vec<A>> for SharedList<A> {
    #[inline]
    fn from(elements: Vec<A>) -> Self {
        Self::new(elements)
    }
}

impl<A: fmt::Debug> fmt::Debug for SharedList<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|elements| formatter.debug_list().entries(elements).finish())
    }
}
