//! Position index: value -> slots currently holding that value
//!
//! Values are not required to be unique, so each distinct value maps to a
//! small list of positions. Lists are kept exact: a position is recorded when
//! an element lands in a slot and forgotten when it leaves, and an entry is
//! dropped as soon as its list empties.
//!
//! Alongside the lists, `offsets[p]` holds where slot `p` sits inside its
//! value's list. That back-reference makes `forget` and `exchange` O(1) no
//! matter how many copies of a value are stored; lists are unordered
//! multisets and `forget` fills the hole with the list's last position.
//!
//! Position lists are `SmallVec`s sized for the common case of one or two
//! duplicates, so a typical entry needs no allocation of its own.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

type Positions = SmallVec<[usize; 2]>;

/// Multiset index from stored values to their heap positions
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    entries: FxHashMap<T, Positions>,
    /// Offset of each live slot inside its value's position list
    offsets: Vec<usize>,
}

impl<T: Eq + Hash> PositionIndex<T> {
    /// Creates an empty index
    pub fn new() -> Self {
        PositionIndex {
            entries: FxHashMap::default(),
            offsets: Vec::new(),
        }
    }

    /// Creates an empty index with room for `capacity` positions
    pub fn with_capacity(capacity: usize) -> Self {
        PositionIndex {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            offsets: Vec::with_capacity(capacity),
        }
    }

    /// Number of distinct values tracked
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no value is tracked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of positions across all entries
    pub fn total_positions(&self) -> usize {
        self.entries.values().map(|p| p.len()).sum()
    }

    /// Returns true if `value` has at least one recorded position
    pub fn contains(&self, value: &T) -> bool {
        self.entries.get(value).is_some_and(|p| !p.is_empty())
    }

    /// First recorded position of `value`
    pub fn first(&self, value: &T) -> Option<usize> {
        self.entries.get(value).and_then(|p| p.first().copied())
    }

    /// All recorded positions of `value` in no particular order, empty if absent
    pub fn positions(&self, value: &T) -> &[usize] {
        self.entries.get(value).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Returns true if `position` is recorded under `value` and its offset points back at it
    pub fn tracks(&self, value: &T, position: usize) -> bool {
        self.offset_in(value, position).is_some()
    }

    /// Adds `position` to the entry for `value`, creating the entry if needed
    pub fn record(&mut self, value: T, position: usize) {
        let positions = self.entries.entry(value).or_default();
        positions.push(position);
        if self.offsets.len() <= position {
            self.offsets.resize(position + 1, 0);
        }
        self.offsets[position] = positions.len() - 1;
    }

    /// Removes `position` from the entry for `value`
    ///
    /// Returns false if that position was not recorded for `value`. The entry
    /// is dropped when its last position goes.
    pub fn forget(&mut self, value: &T, position: usize) -> bool {
        let Some(offset) = self.offset_in(value, position) else {
            return false;
        };
        let Some(positions) = self.entries.get_mut(value) else {
            return false;
        };

        positions.swap_remove(offset);
        if let Some(&moved) = positions.get(offset) {
            self.offsets[moved] = offset;
        }
        if positions.is_empty() {
            self.entries.remove(value);
        }
        true
    }

    /// Records that the elements at slots `i` and `j` traded places
    ///
    /// `now_at_i` is the value that moved from `j` into `i`, `now_at_j` the
    /// one that moved from `i` into `j`. Returns false if either slot was not
    /// recorded under the value that left it.
    pub fn exchange(&mut self, now_at_i: &T, i: usize, now_at_j: &T, j: usize) -> bool {
        let (Some(from_j), Some(from_i)) =
            (self.offset_in(now_at_i, j), self.offset_in(now_at_j, i))
        else {
            return false;
        };

        if let Some(positions) = self.entries.get_mut(now_at_i) {
            positions[from_j] = i;
        }
        if let Some(positions) = self.entries.get_mut(now_at_j) {
            positions[from_i] = j;
        }
        self.offsets.swap(i, j);
        true
    }

    /// Iterates over `(value, positions)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &[usize])> {
        self.entries.iter().map(|(v, p)| (v, p.as_slice()))
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.entries.clear();
        self.offsets.clear();
    }

    /// Reserves room for at least `additional` more positions
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.offsets.reserve(additional);
    }

    /// Shrinks the table as much as possible
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
        self.offsets.shrink_to_fit();
    }

    /// Offset of `position` inside the list for `value`, if it is really there
    fn offset_in(&self, value: &T, position: usize) -> Option<usize> {
        let offset = *self.offsets.get(position)?;
        let positions = self.entries.get(value)?;
        (positions.get(offset) == Some(&position)).then_some(offset)
    }
}

impl<T: Eq + Hash> Default for PositionIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
