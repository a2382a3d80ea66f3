//! Indexed d-ary heap implementation
//!
//! An array-backed heap where every node has up to `d` children, paired with
//! a [`PositionIndex`] that records which slots hold each stored value. The
//! index turns membership tests and lookups into hash-map hits and lets
//! `update` and `remove` reach an arbitrary element without scanning.
//!
//! # Layout
//!
//! The tree is implicit in the array: the parent of slot `i` is
//! `(i - 1) / d` and its k-th child (k = 1..=d) is `d * i + k`. Larger `d`
//! gives a shallower tree, so `push` and `update` toward the root touch
//! fewer levels, at the cost of comparing more children per level on the way
//! down.
//!
//! Every slot-to-slot move goes through one private `swap`, which rewrites
//! the index entries of both moved values. Duplicates are tracked by their
//! exact positions, so equal values never leave the index pointing at a slot
//! that holds something else.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity          |
//! |------------|---------------------|
//! | `push`     | O(log_d n) amortized|
//! | `pop`      | O(d log_d n)        |
//! | `peek`     | O(1)                |
//! | `contains` | O(1) expected       |
//! | `get`      | O(1) expected       |
//! | `update`   | O(d log_d n)        |
//! | `remove`   | O(d log_d n)        |
//! | `from_vec` | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use dary_indexed_heap::{DaryHeap, Heap, IndexedHeap};
//!
//! let mut heap = DaryHeap::max_heap(4);
//! heap.push(5);
//! heap.push(3);
//! heap.push(4);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Some(&5));
//! assert!(heap.contains(&3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(4));
//! ```

use crate::index::PositionIndex;
use crate::options::HeapOptions;
use crate::traits::{Compare, Heap, HeapError, IndexedHeap, MaxFirst, MinFirst};
use std::fmt;
use std::hash::Hash;
use std::ops::Range;
use tracing::{debug, trace};

/// A d-ary heap with a value-to-position index
///
/// The branching factor is fixed at construction. Arity 1 is accepted: each
/// node then has a single child and the heap behaves like a sorted list,
/// with O(n) `push`. Arity 0 is rejected.
///
/// Ordering comes from the comparator `C`; lookups match on `T`'s `Eq` and
/// `Hash`. The two may look at different parts of `T`.
#[derive(Clone)]
pub struct DaryHeap<T, C> {
    /// Elements in implicit-tree order
    data: Vec<T>,
    /// Slots holding each distinct value
    index: PositionIndex<T>,
    /// Branching factor
    arity: usize,
    cmp: C,
}

impl<T, C> DaryHeap<T, C>
where
    T: Clone + Eq + Hash,
    C: Compare<T>,
{
    /// Creates an empty heap with branching factor `d`
    ///
    /// # Panics
    /// Panics if `d` is zero. Use [`try_new`](Self::try_new) to get an error instead.
    pub fn new(d: usize, cmp: C) -> Self {
        Self::with_options(d, cmp, HeapOptions::default())
    }

    /// Creates an empty heap with branching factor `d` and the given options
    ///
    /// # Panics
    /// Panics if `d` is zero.
    pub fn with_options(d: usize, cmp: C, options: HeapOptions) -> Self {
        match Self::try_with_options(d, cmp, options) {
            Ok(heap) => heap,
            Err(err) => panic!("cannot build a {d}-ary heap: {err}"),
        }
    }

    /// Creates an empty heap, rejecting a zero branching factor
    ///
    /// # Errors
    /// Returns `HeapError::ZeroArity` if `d` is zero.
    pub fn try_new(d: usize, cmp: C) -> Result<Self, HeapError> {
        Self::try_with_options(d, cmp, HeapOptions::default())
    }

    /// Creates an empty heap with options, rejecting a zero branching factor
    ///
    /// # Errors
    /// Returns `HeapError::ZeroArity` if `d` is zero.
    pub fn try_with_options(d: usize, cmp: C, options: HeapOptions) -> Result<Self, HeapError> {
        if d == 0 {
            return Err(HeapError::ZeroArity);
        }
        if d == 1 {
            debug!("building an arity 1 heap; it degenerates into a sorted list");
        }

        let capacity = options.capacity_hint();
        Ok(DaryHeap {
            data: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
            arity: d,
            cmp,
        })
    }

    /// Builds a heap from `data` in O(n)
    ///
    /// # Panics
    /// Panics if `d` is zero. Use [`try_from_vec`](Self::try_from_vec) to get an error instead.
    pub fn from_vec(d: usize, cmp: C, data: Vec<T>) -> Self {
        match Self::try_from_vec(d, cmp, data) {
            Ok(heap) => heap,
            Err(err) => panic!("cannot build a {d}-ary heap: {err}"),
        }
    }

    /// Builds a heap from `data` in O(n), rejecting a zero branching factor
    ///
    /// # Errors
    /// Returns `HeapError::ZeroArity` if `d` is zero.
    pub fn try_from_vec(d: usize, cmp: C, data: Vec<T>) -> Result<Self, HeapError> {
        let mut heap = Self::try_new(d, cmp)?;
        heap.index.reserve(data.len());
        for (position, value) in data.iter().enumerate() {
            heap.index.record(value.clone(), position);
        }
        heap.data = data;
        heap.heapify();
        Ok(heap)
    }

    /// Returns every slot currently holding `value`
    pub fn positions(&self, value: &T) -> &[usize] {
        self.index.positions(value)
    }

    /// Removes all elements, keeping the allocations
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        self.index.reserve(additional);
    }

    /// Releases unused capacity in the backing store and the index
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
        self.index.shrink_to_fit();
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks heap order and index consistency
    ///
    /// # Errors
    /// Returns the first violation found:
    /// - `HeapOrderViolated` if a child precedes its parent
    /// - `IndexMismatch` if a slot cannot be reached through its value's entry
    /// - `StaleIndexEntry` if the index records a slot past the end, a slot
    ///   under the wrong value, a slot twice, or an empty entry
    pub fn validate(&self) -> Result<(), HeapError> {
        let len = self.data.len();

        for position in 1..len {
            let parent = self.parent(position);
            if self.cmp.less(&self.data[position], &self.data[parent]) {
                return Err(HeapError::HeapOrderViolated { position });
            }
        }

        for (position, value) in self.data.iter().enumerate() {
            if !self.index.tracks(value, position) {
                return Err(HeapError::IndexMismatch { position });
            }
        }

        for (value, positions) in self.index.iter() {
            if positions.is_empty() || positions.iter().any(|&p| p >= len || self.data[p] != *value) {
                return Err(HeapError::StaleIndexEntry);
            }
        }
        if self.index.total_positions() != len {
            return Err(HeapError::StaleIndexEntry);
        }

        Ok(())
    }

    /// Slots of the children of `position` that exist
    #[inline]
    fn children(&self, position: usize) -> Range<usize> {
        let len = self.data.len();
        let first = position.saturating_mul(self.arity).saturating_add(1);
        first.min(len)..first.saturating_add(self.arity).min(len)
    }

    #[inline]
    fn parent(&self, position: usize) -> usize {
        debug_assert!(position > 0);
        (position - 1) / self.arity
    }

    /// Swaps two slots and moves their index entries with them
    ///
    /// This is the only place elements change slots.
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.data.swap(i, j);
        // Equal values share an entry that already lists both slots
        if self.data[i] == self.data[j] {
            return;
        }
        let exchanged = self.index.exchange(&self.data[i], i, &self.data[j], j);
        debug_assert!(exchanged, "position index out of sync at slots {i} and {j}");
    }

    /// Move element at position toward the root while it precedes its parent
    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = self.parent(position);
            if !self.cmp.less(&self.data[position], &self.data[parent]) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    /// Move element at position toward the leaves while a child precedes it
    ///
    /// Among equal children the lowest slot wins.
    fn sift_down(&mut self, mut position: usize) {
        loop {
            let mut best = position;
            for child in self.children(position) {
                if self.cmp.less(&self.data[child], &self.data[best]) {
                    best = child;
                }
            }

            if best == position {
                break;
            }
            self.swap(position, best);
            position = best;
        }
    }

    /// Restore order around a slot whose element changed arbitrarily
    fn sift(&mut self, position: usize) {
        if position > 0 && self.cmp.less(&self.data[position], &self.data[self.parent(position)]) {
            self.sift_up(position);
        } else {
            self.sift_down(position);
        }
    }

    fn heapify(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        debug!(len, arity = self.arity, "heapifying");
        for position in (0..=self.parent(len - 1)).rev() {
            self.sift_down(position);
        }
    }
}

impl<T, C> DaryHeap<T, C> {
    /// The branching factor
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of elements the backing store holds without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The comparator this heap orders by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Elements in heap (array) order; the first one is the root
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap (array) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in heap (array) order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord + Clone + Hash> DaryHeap<T, MinFirst> {
    /// Creates an empty min-heap with branching factor `d`
    ///
    /// # Panics
    /// Panics if `d` is zero.
    pub fn min_heap(d: usize) -> Self {
        Self::new(d, MinFirst)
    }
}

impl<T: Ord + Clone + Hash> DaryHeap<T, MaxFirst> {
    /// Creates an empty max-heap with branching factor `d`
    ///
    /// # Panics
    /// Panics if `d` is zero.
    pub fn max_heap(d: usize) -> Self {
        Self::new(d, MaxFirst)
    }
}

impl<T, C> Heap<T> for DaryHeap<T, C>
where
    T: Clone + Eq + Hash,
    C: Compare<T>,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: T) {
        let position = self.data.len();
        self.index.record(value.clone(), position);
        self.data.push(value);
        self.sift_up(position);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.data.pop()?;
        let forgotten = self.index.forget(&top, last);
        debug_assert!(forgotten, "popped value was not indexed at slot {last}");

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(top)
    }
}

impl<T, C> IndexedHeap<T> for DaryHeap<T, C>
where
    T: Clone + Eq + Hash,
    C: Compare<T>,
{
    fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    fn get(&self, value: &T) -> Option<&T> {
        self.index.first(value).map(|position| &self.data[position])
    }

    fn update(&mut self, old: &T, new: T) -> Result<T, HeapError> {
        let Some(position) = self.index.first(old) else {
            trace!(len = self.data.len(), "update target not in heap");
            return Err(HeapError::NotFound);
        };

        self.index.forget(old, position);
        self.index.record(new.clone(), position);
        let replaced = std::mem::replace(&mut self.data[position], new);
        self.sift(position);

        Ok(replaced)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let Some(position) = self.index.first(value) else {
            trace!(len = self.data.len(), "remove target not in heap");
            return None;
        };

        let last = self.data.len() - 1;
        self.swap(position, last);
        let removed = self.data.pop()?;
        let forgotten = self.index.forget(&removed, last);
        debug_assert!(forgotten, "removed value was not indexed at slot {last}");

        if position < self.data.len() {
            self.sift(position);
        }

        Some(removed)
    }
}

impl<T, C> Extend<T> for DaryHeap<T, C>
where
    T: Clone + Eq + Hash,
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DaryHeap")
            .field("arity", &self.arity)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One step of a scripted scenario
    enum Op {
        Push(i32),
        Peek(Option<i32>),
        /// Expected result and array layout afterwards
        Pop(Option<i32>, &'static [i32]),
    }

    fn run<C: Compare<i32>>(mut heap: DaryHeap<i32, C>, ops: &[Op]) {
        for op in ops {
            match op {
                Op::Push(value) => heap.push(*value),
                Op::Peek(want) => assert_eq!(heap.peek().copied(), *want),
                Op::Pop(want, layout) => {
                    assert_eq!(heap.pop(), *want);
                    assert_eq!(heap.as_slice(), *layout);
                    assert_eq!(heap.len(), layout.len());
                }
            }
            assert_eq!(heap.validate(), Ok(()));
        }
    }

    #[test]
    fn test_min_heap_binary() {
        use Op::*;
        run(
            DaryHeap::min_heap(2),
            &[
                Push(5),
                Push(3),
                Peek(Some(3)),
                Push(4),
                Pop(Some(3), &[4, 5]),
                Push(1),
                Pop(Some(1), &[4, 5]),
                Pop(Some(4), &[5]),
                Pop(Some(5), &[]),
            ],
        );
    }

    #[test]
    fn test_min_heap_quaternary() {
        use Op::*;
        run(
            DaryHeap::min_heap(4),
            &[
                Push(5),
                Push(3),
                Push(4),
                Push(1),
                Peek(Some(1)),
                Pop(Some(1), &[3, 5, 4]),
                Pop(Some(3), &[4, 5]),
                Push(4),
                Pop(Some(4), &[4, 5]),
                Pop(Some(4), &[5]),
                Pop(Some(5), &[]),
            ],
        );
    }

    #[test]
    fn test_max_heap_binary() {
        use Op::*;
        run(
            DaryHeap::max_heap(2),
            &[
                Push(5),
                Push(3),
                Peek(Some(5)),
                Push(4),
                Pop(Some(5), &[4, 3]),
                Push(1),
                Pop(Some(4), &[3, 1]),
                Pop(Some(3), &[1]),
                Pop(Some(1), &[]),
            ],
        );
    }

    #[test]
    fn test_max_heap_quaternary() {
        use Op::*;
        run(
            DaryHeap::max_heap(4),
            &[
                Push(5),
                Push(3),
                Push(4),
                Push(1),
                Peek(Some(5)),
                Pop(Some(5), &[4, 3, 1]),
                Pop(Some(4), &[3, 1]),
                Push(4),
                Pop(Some(4), &[3, 1]),
                Pop(Some(3), &[1]),
                Pop(Some(1), &[]),
            ],
        );
    }

    #[test]
    fn test_all_elements_same() {
        use Op::*;
        run(
            DaryHeap::min_heap(3),
            &[
                Push(1),
                Push(1),
                Push(1),
                Peek(Some(1)),
                Pop(Some(1), &[1, 1]),
                Pop(Some(1), &[1]),
                Pop(Some(1), &[]),
            ],
        );
    }

    #[test]
    fn test_ascending_and_descending_push() {
        use Op::*;
        run(
            DaryHeap::min_heap(2),
            &[Push(1), Push(2), Push(3), Peek(Some(1)), Pop(Some(1), &[2, 3])],
        );
        run(
            DaryHeap::min_heap(2),
            &[Push(3), Push(2), Push(1), Peek(Some(1)), Pop(Some(1), &[2, 3])],
        );
        run(
            DaryHeap::max_heap(2),
            &[Push(1), Push(2), Push(3), Peek(Some(3)), Pop(Some(3), &[2, 1])],
        );
        run(
            DaryHeap::max_heap(2),
            &[Push(3), Push(2), Push(1), Peek(Some(3)), Pop(Some(3), &[2, 1])],
        );
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: DaryHeap<i32, MaxFirst> = DaryHeap::max_heap(2);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_contains_with_duplicates() {
        let mut heap = DaryHeap::min_heap(2);
        for value in [5, 3, 4, 1, 1] {
            heap.push(value);
        }

        assert!(heap.contains(&5));
        assert!(heap.contains(&3));
        assert!(!heap.contains(&2));
        assert_eq!(heap.positions(&1).len(), 2);

        assert_eq!(heap.pop(), Some(1));
        assert!(heap.contains(&1));

        assert_eq!(heap.pop(), Some(1));
        assert!(!heap.contains(&1));
        assert_eq!(heap.validate(), Ok(()));
    }

    #[test]
    fn test_get_with_duplicates() {
        let mut heap = DaryHeap::min_heap(2);
        for value in [5, 3, 4, 1, 1] {
            heap.push(value);
        }

        assert_eq!(heap.get(&5), Some(&5));
        assert_eq!(heap.get(&3), Some(&3));
        assert_eq!(heap.get(&2), None);

        heap.pop();
        assert_eq!(heap.get(&1), Some(&1));

        heap.pop();
        assert_eq!(heap.get(&1), None);
    }

    #[derive(Debug, Clone)]
    struct Task {
        id: u32,
        label: &'static str,
    }

    impl PartialEq for Task {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Task {}

    impl Hash for Task {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    #[test]
    fn test_get_returns_stored_instance() {
        let mut heap = DaryHeap::new(3, |a: &Task, b: &Task| a.id < b.id);
        heap.push(Task { id: 2, label: "second" });
        heap.push(Task { id: 1, label: "first" });

        let key = Task { id: 1, label: "key" };
        assert_eq!(heap.get(&key).map(|t| t.label), Some("first"));
    }

    #[test]
    fn test_update_both_directions() {
        let mut heap = DaryHeap::min_heap(3);
        heap.extend([10, 20, 30, 40, 50, 60, 70]);

        assert_eq!(heap.update(&60, 5), Ok(60));
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.validate(), Ok(()));

        assert_eq!(heap.update(&5, 100), Ok(5));
        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(heap.validate(), Ok(()));

        assert_eq!(heap.update(&999, 1), Err(HeapError::NotFound));
        assert_eq!(
            heap.into_sorted_vec(),
            vec![10, 20, 30, 40, 50, 70, 100]
        );
    }

    #[test]
    fn test_update_to_equal_value() {
        let mut heap = DaryHeap::min_heap(2);
        heap.extend([3, 3, 1]);
        assert_eq!(heap.update(&3, 3), Ok(3));
        assert_eq!(heap.positions(&3).len(), 2);
        assert_eq!(heap.validate(), Ok(()));
    }

    #[test]
    fn test_remove_interior_and_last() {
        let mut heap = DaryHeap::min_heap(2);
        heap.extend([1, 8, 2, 9, 10, 3, 4]);

        // Interior removal where the moved-in last element must sift up
        assert_eq!(heap.remove(&9), Some(9));
        assert_eq!(heap.validate(), Ok(()));

        let last = *heap.as_slice().last().unwrap();
        assert_eq!(heap.remove(&last), Some(last));
        assert_eq!(heap.validate(), Ok(()));

        assert_eq!(heap.remove(&42), None);
        assert_eq!(heap.len(), 5);
    }

    #[test]
    fn test_remove_duplicate() {
        let mut heap = DaryHeap::max_heap(2);
        heap.extend([7, 7, 7, 2]);
        assert_eq!(heap.remove(&7), Some(7));
        assert_eq!(heap.positions(&7).len(), 2);
        assert_eq!(heap.validate(), Ok(()));
        assert_eq!(heap.into_sorted_vec(), vec![7, 7, 2]);
    }

    #[test]
    fn test_arity_one() {
        let mut heap = DaryHeap::min_heap(1);
        heap.extend([4, 2, 5, 1, 3]);
        assert_eq!(heap.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(heap.validate(), Ok(()));
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_arity_rejected() {
        let heap = DaryHeap::<i32, _>::try_new(0, MinFirst);
        assert!(matches!(heap, Err(HeapError::ZeroArity)));
    }

    #[test]
    #[should_panic(expected = "branching factor must be at least 1")]
    fn test_zero_arity_panics() {
        let _heap: DaryHeap<i32, MinFirst> = DaryHeap::min_heap(0);
    }

    #[test]
    fn test_huge_arity() {
        let mut heap = DaryHeap::min_heap(usize::MAX);
        heap.extend([3, 1, 2]);
        assert_eq!(heap.as_slice()[0], 1);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = DaryHeap::from_vec(3, MaxFirst, vec![1, 9, 4, 9, 2, 7, 3, 8]);
        assert_eq!(heap.validate(), Ok(()));
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.positions(&9).len(), 2);
        assert_eq!(heap.into_sorted_vec(), vec![9, 9, 8, 7, 4, 3, 2, 1]);
    }

    #[test]
    fn test_try_from_vec() {
        let heap = DaryHeap::try_from_vec(2, MinFirst, vec![3, 1, 2]);
        assert_eq!(heap.map(|h| h.into_sorted_vec()), Ok(vec![1, 2, 3]));

        let heap = DaryHeap::try_from_vec(0, MinFirst, vec![3, 1, 2]);
        assert!(matches!(heap, Err(HeapError::ZeroArity)));
    }

    #[test]
    #[should_panic(expected = "branching factor must be at least 1")]
    fn test_from_vec_zero_arity_panics() {
        let _heap = DaryHeap::from_vec(0, MaxFirst, vec![1]);
    }

    #[test]
    fn test_validate_detects_heap_order_violation() {
        let mut heap = DaryHeap::min_heap(2);
        heap.extend([1, 2, 3]);
        heap.data.swap(0, 1);
        assert_eq!(
            heap.validate(),
            Err(HeapError::HeapOrderViolated { position: 1 })
        );
    }

    #[test]
    fn test_validate_detects_misplaced_position() {
        let mut heap = DaryHeap::min_heap(2);
        heap.extend([1, 2, 3]);
        // Point the index entry for 2 at the slot holding 3
        assert!(heap.index.forget(&2, 1));
        heap.index.record(2, 2);
        assert_eq!(
            heap.validate(),
            Err(HeapError::IndexMismatch { position: 1 })
        );
    }

    #[test]
    fn test_validate_detects_stale_position() {
        let mut heap = DaryHeap::min_heap(2);
        heap.extend([1, 2, 3]);
        heap.index.record(3, 10);
        assert_eq!(heap.validate(), Err(HeapError::StaleIndexEntry));
    }

    #[test]
    fn test_validate_detects_forgotten_position() {
        let mut heap = DaryHeap::min_heap(3);
        heap.extend([4, 4, 4, 9]);
        assert!(heap.index.forget(&4, 2));
        assert_eq!(
            heap.validate(),
            Err(HeapError::IndexMismatch { position: 2 })
        );
    }

    #[test]
    fn test_many_equal_values() {
        // Each swap and pop must not depend on how many copies are stored
        let mut heap = DaryHeap::min_heap(4);
        for _ in 0..100_000 {
            heap.push(7u32);
        }
        heap.push(3);
        assert_eq!(heap.positions(&7).len(), 100_000);
        assert_eq!(heap.validate(), Ok(()));

        assert_eq!(heap.pop(), Some(3));
        let mut popped = 0;
        while let Some(value) = heap.pop() {
            assert_eq!(value, 7);
            popped += 1;
        }
        assert_eq!(popped, 100_000);
        assert!(!heap.contains(&7));
    }

    #[test]
    fn test_comparator_and_shrink() {
        let mut heap = DaryHeap::new(2, |a: &i32, b: &i32| a % 10 < b % 10);
        heap.extend([19, 21, 35]);
        assert!(heap.comparator()(&21, &19));
        assert_eq!(heap.peek(), Some(&21));

        heap.reserve(1_000);
        heap.pop();
        heap.shrink_to_fit();
        assert!(heap.capacity() < 1_000);
        assert_eq!(heap.validate(), Ok(()));
        assert_eq!(heap.into_sorted_vec(), vec![35, 19]);
    }

    #[test]
    fn test_capacity_hint_and_clear() {
        let mut heap: DaryHeap<u64, MinFirst> =
            DaryHeap::with_options(2, MinFirst, HeapOptions::new().capacity(64));
        assert!(heap.capacity() >= 64);

        heap.extend(0..40);
        let capacity = heap.capacity();
        while heap.pop().is_some() {}
        assert_eq!(heap.capacity(), capacity);

        heap.extend(0..10);
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&3));
        assert_eq!(heap.capacity(), capacity);
    }

    #[test]
    fn test_debug_output() {
        let mut heap = DaryHeap::min_heap(2);
        heap.push(1);
        assert_eq!(
            format!("{heap:?}"),
            "DaryHeap { arity: 2, data: [1], .. }"
        );
    }
}
