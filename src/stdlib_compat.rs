//! Standard library compatibility layer
//!
//! Provides a stand-in for `std::collections::BinaryHeap` that also answers
//! membership queries and removes arbitrary values.
//!
//! # Differences from BinaryHeap
//!
//! - **Bounds**: items must be `Clone + Hash` as well as `Ord`, since they are
//!   kept in the position index.
//! - **Lookups**: `contains`, `get` and `remove` take O(1) expected /
//!   O(log n) instead of requiring a scan.
//!
//! Like `BinaryHeap` this is a binary max-heap; use `std::cmp::Reverse<T>` for
//! min-heap behavior, or [`DaryHeap`] directly for another arity or ordering.
//!
//! # Example
//!
//! ```rust
//! use dary_indexed_heap::stdlib_compat::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7));
//! assert!(heap.contains(&3));
//! assert_eq!(heap.remove(&3), Some(3));
//! assert_eq!(heap.into_sorted_vec(), vec![5, 7]);
//! ```

use crate::dary::DaryHeap;
use crate::options::HeapOptions;
use crate::traits::{Heap, IndexedHeap, MaxFirst};
use std::fmt;
use std::hash::Hash;

/// A `BinaryHeap`-shaped wrapper over a binary [`DaryHeap`]
#[derive(Clone)]
pub struct IndexedBinaryHeap<T> {
    heap: DaryHeap<T, MaxFirst>,
}

impl<T: Ord + Clone + Hash> IndexedBinaryHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: DaryHeap::max_heap(2),
        }
    }

    /// Creates a new empty heap with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: DaryHeap::with_options(2, MaxFirst, HeapOptions::new().capacity(capacity)),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of items the heap holds without reallocating
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.heap.push(item)
    }

    /// Returns the greatest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the greatest item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Returns true if an item equal to `item` is in the heap
    pub fn contains(&self, item: &T) -> bool {
        self.heap.contains(item)
    }

    /// Returns the stored item equal to `item`
    pub fn get(&self, item: &T) -> Option<&T> {
        self.heap.get(item)
    }

    /// Removes one item equal to `item`
    pub fn remove(&mut self, item: &T) -> Option<T> {
        self.heap.remove(item)
    }

    /// Drops all items
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Iterates over the items in arbitrary order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Consumes the heap, returning a vector in arbitrary order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Consumes the heap, returning a vector in ascending order
    ///
    /// This matches `BinaryHeap::into_sorted_vec`.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted
    }

    /// The underlying d-ary heap
    pub fn as_dary(&self) -> &DaryHeap<T, MaxFirst> {
        &self.heap
    }
}

impl<T: Ord + Clone + Hash> Default for IndexedBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone + Hash> From<Vec<T>> for IndexedBinaryHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self {
            heap: DaryHeap::from_vec(2, MaxFirst, vec),
        }
    }
}

impl<T: Ord + Clone + Hash> FromIterator<T> for IndexedBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord + Clone + Hash> Extend<T> for IndexedBinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedBinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.as_slice()).finish()
    }
}
