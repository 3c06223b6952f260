//! PriorityQueue: array-backed binary max-heap of `(element, priority)` pairs.
//!
//! Heap order: every parent's priority is `>=` both children's. Equal
//! priorities come out in heap-structural order, not insertion order.
//!
//! The heap grows by default. `bounded` restores a hard cap; inserts past
//! the cap are rejected with the pair handed back and the heap untouched.

use core::fmt;
use tracing::{debug, warn};

/// Cap used by [`PriorityQueue::bounded_default`] and [`HeapConfig::default`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Construction options for [`PriorityQueue::with_config`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HeapConfig {
    /// Hard cap on stored pairs; `None` means unbounded.
    pub max_len: Option<usize>,
    /// Slots reserved up front.
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            max_len: Some(DEFAULT_CAPACITY),
            initial_capacity: 0,
        }
    }
}

/// Returned by `insert` on a full bounded heap. Carries the rejected pair.
#[derive(Debug, PartialEq)]
pub struct CapacityError<E, P> {
    pub element: E,
    pub priority: P,
    pub capacity: usize,
}

impl<E, P> CapacityError<E, P> {
    pub fn into_inner(self) -> (E, P) {
        (self.element, self.priority)
    }
}

impl<E, P> fmt::Display for CapacityError<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "priority queue is full (capacity {})", self.capacity)
    }
}

impl<E: fmt::Debug, P: fmt::Debug> std::error::Error for CapacityError<E, P> {}

#[derive(Clone)]
pub struct PriorityQueue<E, P> {
    heap: Vec<(E, P)>,
    max_len: Option<usize>,
}

impl<E, P: Ord> PriorityQueue<E, P> {
    /// Unbounded heap.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            max_len: None,
        }
    }

    /// Heap that rejects inserts once it holds `max_len` pairs.
    pub fn bounded(max_len: usize) -> Self {
        Self {
            heap: Vec::new(),
            max_len: Some(max_len),
        }
    }

    pub fn bounded_default() -> Self {
        Self::bounded(DEFAULT_CAPACITY)
    }

    /// `initial_capacity` is clamped to `max_len` and reserved fallibly; a
    /// reservation the allocator refuses leaves the heap empty and growable.
    pub fn with_config(config: HeapConfig) -> Self {
        let wanted = match config.max_len {
            Some(cap) => config.initial_capacity.min(cap),
            None => config.initial_capacity,
        };
        let mut heap: Vec<(E, P)> = Vec::new();
        if let Err(err) = heap.try_reserve_exact(wanted) {
            warn!(wanted, %err, "priority queue reservation failed; starting empty");
        }
        Self {
            heap,
            max_len: config.max_len,
        }
    }

    /// Slots allocated for pairs, stored or not.
    pub fn allocated(&self) -> usize {
        self.heap.capacity()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.max_len
    }

    pub fn is_full(&self) -> bool {
        self.max_len.is_some_and(|cap| self.heap.len() >= cap)
    }

    pub fn insert(&mut self, element: E, priority: P) -> Result<(), CapacityError<E, P>> {
        if let Some(capacity) = self.max_len.filter(|&cap| self.heap.len() >= cap) {
            debug!(capacity, "priority queue full; insert rejected");
            return Err(CapacityError {
                element,
                priority,
                capacity,
            });
        }
        self.heap.push((element, priority));
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Remove and return the element with the highest priority.
    pub fn extract_max(&mut self) -> Option<E> {
        self.extract_max_with_priority().map(|(e, _)| e)
    }

    pub fn extract_max_with_priority(&mut self) -> Option<(E, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    pub fn peek(&self) -> Option<&E> {
        self.heap.first().map(|(e, _)| e)
    }

    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.first().map(|(_, p)| p)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Pairs in storage order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = (&E, &P)> + '_ {
        self.heap.iter().map(|(e, p)| (e, p))
    }

    /// Drain into a vector ordered by descending priority.
    pub fn into_sorted_vec(mut self) -> Vec<(E, P)> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(pair) = self.extract_max_with_priority() {
            out.push(pair);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].1 <= self.heap[parent].1 {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut largest = i;
            if left < n && self.heap[left].1 > self.heap[largest].1 {
                largest = left;
            }
            if right < n && self.heap[right].1 > self.heap[largest].1 {
                largest = right;
            }
            if largest == i {
                return;
            }
            self.heap.swap(i, largest);
            i = largest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].1 >= self.heap[i].1)
    }
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug, P: fmt::Debug> fmt::Debug for PriorityQueue<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .field("max_len", &self.max_len)
            .finish()
    }
}
