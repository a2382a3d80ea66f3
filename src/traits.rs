//! Common traits for indexed heap data structures
//!
//! This module provides the seams shared by every heap in this crate:
//!
//! - [`Compare`]: the ordering strategy a heap is parameterized over
//! - [`Heap`]: base priority-queue operations (push, pop, peek)
//! - [`IndexedHeap`]: value lookups backed by a position index, plus
//!   in-place `update` and arbitrary `remove`
//!
//! Ordering and identity are deliberately separate: the comparator decides
//! which element is extremal, while `Eq`/`Hash` decide which stored elements
//! a lookup matches.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A branching factor of zero was requested
    ZeroArity,
    /// The value is not stored in the heap
    NotFound,
    /// The element at `position` precedes its parent under the comparator
    HeapOrderViolated {
        /// Slot of the offending child
        position: usize,
    },
    /// The index does not record `position` exactly once for the value stored there
    IndexMismatch {
        /// Slot whose index entry is missing or duplicated
        position: usize,
    },
    /// The index holds a position past the end of the heap or an empty entry
    StaleIndexEntry,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::ZeroArity => write!(f, "branching factor must be at least 1"),
            HeapError::NotFound => write!(f, "value is not present in the heap"),
            HeapError::HeapOrderViolated { position } => {
                write!(f, "element at position {position} precedes its parent")
            }
            HeapError::IndexMismatch { position } => {
                write!(f, "position index does not track position {position} exactly once")
            }
            HeapError::StaleIndexEntry => {
                write!(f, "position index holds a stale position or an empty entry")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Strict ordering strategy for a heap
///
/// `less(a, b)` returns true when `a` must come out of the heap before `b`.
/// It must be a strict weak ordering: irreflexive and transitive. The root of
/// a heap is always an element that no other element is `less` than.
///
/// Implemented for any `Fn(&T, &T) -> bool`, so a closure can be passed
/// directly:
///
/// ```rust
/// use dary_indexed_heap::{DaryHeap, Heap};
///
/// let mut heap = DaryHeap::new(3, |a: &i32, b: &i32| a.abs() < b.abs());
/// heap.push(-7);
/// heap.push(2);
/// assert_eq!(heap.pop(), Some(2));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` strictly precedes `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first (min-heap), via `Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first (max-heap), via `Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the extremal element
/// - `peek` returns the extremal element without removing it
///
/// Which element is extremal is decided by the heap's [`Compare`] strategy,
/// so the same trait covers min-heaps and max-heaps. Empty heaps answer
/// `None`; use [`is_empty`](Heap::is_empty) when the distinction matters
/// before calling.
///
/// # Example
///
/// ```rust
/// use dary_indexed_heap::{DaryHeap, Heap};
///
/// let mut heap = DaryHeap::min_heap(4);
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_d n) amortized for a d-ary heap.
    fn push(&mut self, value: T);

    /// Returns the extremal element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the extremal element
    ///
    /// # Time Complexity
    /// O(d log_d n) for a d-ary heap.
    fn pop(&mut self) -> Option<T>;
}

/// Heap trait extended with value lookups
///
/// Implementors keep an index from each stored value to the slots holding it,
/// which makes membership tests and single-occurrence lookups O(1) expected,
/// and lets `update` and `remove` find their target without a scan.
///
/// # Example
///
/// ```rust
/// use dary_indexed_heap::{DaryHeap, Heap, IndexedHeap};
///
/// let mut heap = DaryHeap::min_heap(2);
/// heap.push(10);
/// heap.push(20);
/// heap.push(30);
///
/// assert!(heap.contains(&20));
/// heap.update(&30, 5).unwrap();
/// assert_eq!(heap.peek(), Some(&5));
/// assert_eq!(heap.remove(&10), Some(10));
/// assert!(!heap.contains(&10));
/// ```
pub trait IndexedHeap<T>: Heap<T> {
    /// Returns true if at least one element equal to `value` is stored
    fn contains(&self, value: &T) -> bool;

    /// Returns the stored element at the first tracked position for `value`
    ///
    /// The result is equal to `value` under `Eq`, but is the instance held by
    /// the heap, which matters when `T` carries data `Eq` ignores.
    fn get(&self, value: &T) -> Option<&T>;

    /// Replaces one occurrence of `old` with `new` and restores heap order
    ///
    /// Works in either direction: the replaced slot moves toward the root if
    /// `new` precedes its parent, otherwise toward the leaves.
    ///
    /// # Errors
    /// Returns `HeapError::NotFound` if `old` is not stored.
    ///
    /// # Time Complexity
    /// O(d log_d n)
    fn update(&mut self, old: &T, new: T) -> Result<T, HeapError>;

    /// Removes one occurrence of `value`, returning the stored element
    ///
    /// # Time Complexity
    /// O(d log_d n)
    fn remove(&mut self, value: &T) -> Option<T>;
}
