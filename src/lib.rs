//! Indexed d-ary heaps for Rust
//!
//! This crate provides a d-ary heap (each node has up to `d` children) over any
//! element type, ordered by a caller-supplied comparator, that also keeps an
//! index from each stored value to the slots holding it.
//!
//! # Features
//!
//! - **Configurable arity**: any branching factor `d >= 1`, fixed at construction
//! - **Pluggable ordering**: min-heap, max-heap or any closure via [`Compare`]
//! - **Position index**: O(1) expected `contains` and `get`, duplicates included
//! - **In-place changes**: `update` and `remove` of arbitrary values in O(d log_d n)
//! - **BinaryHeap stand-in**: [`stdlib_compat::IndexedBinaryHeap`]
//!
//! # Example
//!
//! ```rust
//! use dary_indexed_heap::{DaryHeap, Heap, IndexedHeap};
//!
//! let mut heap = DaryHeap::min_heap(2);
//! for value in [5, 3, 4, 1] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert!(heap.contains(&4));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod dary;
pub mod index;
pub mod options;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use dary::DaryHeap;
pub use options::HeapOptions;
pub use traits::{Compare, Heap, HeapError, IndexedHeap, MaxFirst, MinFirst};
