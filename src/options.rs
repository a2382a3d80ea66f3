//! Construction options for [`DaryHeap`](crate::dary::DaryHeap)

/// Settings applied when a heap is built
///
/// ```rust
/// use dary_indexed_heap::{DaryHeap, HeapOptions, MinFirst};
///
/// let heap: DaryHeap<u32, MinFirst> =
///     DaryHeap::with_options(4, MinFirst, HeapOptions::new().capacity(1024));
/// assert!(heap.capacity() >= 1024);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapOptions {
    capacity: usize,
}

impl HeapOptions {
    /// Options with no preallocation
    pub const fn new() -> Self {
        HeapOptions { capacity: 0 }
    }

    /// Preallocates the backing store and the position index for `capacity` elements
    pub const fn capacity(self, capacity: usize) -> Self {
        HeapOptions { capacity, ..self }
    }

    /// The requested capacity hint
    pub const fn capacity_hint(&self) -> usize {
        self.capacity
    }
}
