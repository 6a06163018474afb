//! Short-term memory of recently applied moves.

use super::types::SubsetSwap;
use std::collections::{HashMap, VecDeque};

/// Bounded FIFO of recently applied swaps.
///
/// The queue fixes eviction order; the count map gives O(1) membership.
/// With capacity 0 nothing is ever retained, which turns the search into
/// plain best-neighbor descent without memory.
///
/// # Examples
///
/// ```
/// use spp_tabu::tabu::{SubsetSwap, TabuMemory};
///
/// let mut memory = TabuMemory::new(2);
/// memory.record(SubsetSwap::new(0, 1));
/// memory.record(SubsetSwap::new(0, 2));
/// memory.record(SubsetSwap::new(0, 3));
/// assert!(!memory.contains(SubsetSwap::new(1, 0)));
/// assert!(memory.contains(SubsetSwap::new(3, 0)));
/// assert_eq!(memory.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<SubsetSwap>,
    counts: HashMap<SubsetSwap, usize>,
}

impl TabuMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Whether `swap` (in either orientation) is currently tabu.
    pub fn contains(&self, swap: SubsetSwap) -> bool {
        self.counts.contains_key(&swap)
    }

    /// Appends `swap`, evicting the oldest entries first if at capacity.
    pub fn record(&mut self, swap: SubsetSwap) {
        if self.capacity == 0 {
            return;
        }
        while self.queue.len() >= self.capacity {
            if let Some(old) = self.queue.pop_front() {
                if let Some(count) = self.counts.get_mut(&old) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(&old);
                    }
                }
            }
        }
        self.queue.push_back(swap);
        *self.counts.entry(swap).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &SubsetSwap> {
        self.queue.iter()
    }
}
