//! The ordered open-set queue.
//!
//! [`OrderedQueue`] keeps entries sorted by ascending priority with FIFO
//! order among equal priorities. All mutating operations are linear scans;
//! the open sets this queue backs are small enough that the simple ordered
//! sequence beats a decrease-key heap in clarity, and the tie-break order is
//! part of the observable contract.

use std::collections::VecDeque;

/// An element paired with the priority it was enqueued at.
///
/// The priority is a snapshot taken at insertion time, never a live read of
/// the element. If an element's priority changes while queued, the caller
/// removes the stale entry and enqueues a fresh one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry<T> {
    pub element: T,
    pub priority: f64,
}

/// A priority queue over an ascending ordered sequence.
///
/// Invariant: for every pair of adjacent entries, the earlier entry's
/// priority is less than or equal to the later entry's.
#[derive(Clone, Debug, Default)]
pub struct OrderedQueue<T> {
    entries: VecDeque<QueueEntry<T>>,
}

impl<T> OrderedQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Insert `element` at its ordered position.
    ///
    /// The entry lands immediately before the first existing entry with a
    /// strictly greater priority, so equal-priority entries dequeue in
    /// insertion order. Returns the insertion position, or `None` for a
    /// non-finite priority (the queue is left unmodified).
    pub fn enqueue(&mut self, element: T, priority: f64) -> Option<usize> {
        if !priority.is_finite() {
            return None;
        }
        let pos = self
            .entries
            .iter()
            .position(|e| e.priority > priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, QueueEntry { element, priority });
        Some(pos)
    }

    /// Remove and return the lowest-priority element.
    pub fn dequeue_min(&mut self) -> Option<T> {
        self.entries.pop_front().map(|e| e.element)
    }

    /// Remove and return the highest-priority element.
    pub fn dequeue_max(&mut self) -> Option<T> {
        self.entries.pop_back().map(|e| e.element)
    }

    /// Peek at the lowest-priority entry.
    #[inline]
    pub fn min(&self) -> Option<&QueueEntry<T>> {
        self.entries.front()
    }

    /// Peek at the highest-priority entry.
    #[inline]
    pub fn max(&self) -> Option<&QueueEntry<T>> {
        self.entries.back()
    }

    /// Priority of the head entry, if any.
    #[inline]
    pub fn min_priority(&self) -> Option<f64> {
        self.min().map(|e| e.priority)
    }

    /// Priority of the tail entry, if any.
    #[inline]
    pub fn max_priority(&self) -> Option<f64> {
        self.max().map(|e| e.priority)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in ascending priority order.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry<T>> {
        self.entries.iter()
    }
}

impl<T: PartialEq> OrderedQueue<T> {
    /// Remove the first entry whose element equals `element`, scanning from
    /// the head. Returns the removed entry, or `None` if absent.
    pub fn remove(&mut self, element: &T) -> Option<QueueEntry<T>> {
        let pos = self.entries.iter().position(|e| &e.element == element)?;
        self.entries.remove(pos)
    }

    /// Whether any entry holds `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.entries.iter().any(|e| &e.element == element)
    }
}
