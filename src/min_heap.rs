use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::Result;

struct Entry<T> {
    key: f64,
    sequence: u64,
    payload: T,
}

/// A min-priority queue over arbitrary finite floating point keys.
///
/// Entries with equal keys come out in insertion order, so every
/// algorithm built on top of this queue is deterministic. There is no
/// decrease-key operation; Prim and Dijkstra push duplicate entries and
/// skip stale ones on pop (lazy deletion).
pub struct MinHeap<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_sequence: u64,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, key: f64, payload: T) {
        let entry = Entry {
            key,
            sequence: self.next_sequence,
            payload,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes and returns the entry with the minimum key.
    pub fn pop_min(&mut self) -> Result<(f64, T)> {
        let Reverse(entry) = self.heap.pop().ok_or(Error::PoppedEmptyQueue)?;
        Ok((entry.key, entry.payload))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
