use std::cmp::Ordering;
use std::collections::BinaryHeap as StdBinaryHeap;

use super::PriorityQueue;

/// Reference min-heap implementation: `O(log n)` push/pop, no quantization,
/// no stale-entry handling beyond what the consumer already does via
/// `closed[]`. Sufficient for correctness; serves as the baseline the other
/// two queues are checked against.
#[derive(Default)]
pub struct BinaryHeap {
    heap: StdBinaryHeap<Entry>,
    pushes: u64,
    pops: u64,
}

#[derive(PartialEq)]
struct Entry {
    priority: f64,
    key: usize,
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: std's BinaryHeap is a max-heap, we want the minimum.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
    }
}

impl BinaryHeap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriorityQueue<usize> for BinaryHeap {
    fn push(&mut self, key: usize, priority: f64) {
        self.heap.push(Entry { priority, key });
        self.pushes += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        let entry = self.heap.pop()?;
        self.pops += 1;
        Some(entry.key)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push_count(&self) -> u64 {
        self.pushes
    }

    fn pop_count(&self) -> u64 {
        self.pops
    }

    fn reset_stats(&mut self) {
        self.pushes = 0;
        self.pops = 0;
    }
}
