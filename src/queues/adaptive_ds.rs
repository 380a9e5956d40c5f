use std::cmp::Ordering;
use std::collections::BinaryHeap as StdBinaryHeap;

/// A simpler sibling of `EfficientDataStructure`: a capped min-heap. Useful
/// when block ordering is desirable but a `pull` must still return globally
/// minimal entries (unlike `EfficientDataStructure::pull`, which is only
/// locally minimal).
pub struct AdaptiveDataStructure {
    heap: StdBinaryHeap<VertexDistance>,
    capacity: usize,
    bound: f64,
    inserts: u64,
    pulled: u64,
}

#[derive(PartialEq)]
struct VertexDistance {
    v: usize,
    d: f64,
}

impl Eq for VertexDistance {}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: a min-heap over `d`.
        other.d.partial_cmp(&self.d).unwrap_or(Ordering::Equal)
    }
}

impl AdaptiveDataStructure {
    pub fn new(capacity: usize, bound: f64) -> Self {
        AdaptiveDataStructure {
            heap: StdBinaryHeap::new(),
            capacity,
            bound,
            inserts: 0,
            pulled: 0,
        }
    }

    /// Items with `d >= bound` or non-finite `d` are silently dropped.
    pub fn insert(&mut self, v: usize, d: f64) {
        if d < self.bound && d.is_finite() {
            self.heap.push(VertexDistance { v, d });
            self.inserts += 1;
        }
    }

    pub fn batch_prepend(&mut self, items: Vec<(usize, f64)>) {
        for (v, d) in items {
            self.insert(v, d);
        }
    }

    /// Returns up to `capacity` least-distance entries and
    /// `min_remaining = min(bound, top-of-heap-or-infinity)`.
    pub fn pull(&mut self) -> (f64, Vec<usize>) {
        let mut out = Vec::with_capacity(self.capacity);
        for _ in 0..self.capacity {
            match self.heap.pop() {
                Some(vd) => out.push(vd.v),
                None => break,
            }
        }
        let min_remaining = self
            .heap
            .peek()
            .map_or(self.bound, |top| self.bound.min(top.d));
        self.pulled += out.len() as u64;
        (min_remaining, out)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total accepted `insert` calls (drops excluded).
    pub fn insert_count(&self) -> u64 {
        self.inserts
    }

    /// Total vertices handed out across all `pull` calls.
    pub fn pulled_count(&self) -> u64 {
        self.pulled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_respects_capacity_and_order() {
        let mut ds = AdaptiveDataStructure::new(2, f64::INFINITY);
        ds.insert(1, 3.0);
        ds.insert(2, 1.0);
        ds.insert(3, 2.0);
        let (min_remaining, out) = ds.pull();
        assert_eq!(out, vec![2, 3]);
        assert_eq!(min_remaining, 3.0);
    }

    #[test]
    fn bound_filters_on_insert() {
        let mut ds = AdaptiveDataStructure::new(4, 5.0);
        ds.insert(1, 5.0); // not < bound, dropped
        ds.insert(2, f64::INFINITY); // non-finite, dropped
        ds.insert(3, 4.9);
        let (_, out) = ds.pull();
        assert_eq!(out, vec![3]);
    }
}
