use std::collections::VecDeque;

/// Block-partitioned structure: holds items until a block is pulled, at
/// which point only *that* block is sorted. A `pull()` is locally minimal,
/// not globally minimal, so the consumer (Block-SSSP) compensates with
/// `closed[]`/`dist[]` checks.
///
/// This does not implement `PriorityQueue<K>`: its contract (`insert`,
/// `batch_prepend`, `pull`, `peek_min`) is block-oriented, not a single-item
/// push/pop pair.
pub struct EfficientDataStructure {
    batch_blocks: VecDeque<Vec<(usize, f64)>>,
    sorted_blocks: Vec<Vec<(usize, f64)>>,
    block_size: usize,
    bound: f64,
    inserts: u64,
    pulled: u64,
}

impl EfficientDataStructure {
    pub fn new(block_size: usize, bound: f64) -> Self {
        EfficientDataStructure {
            batch_blocks: VecDeque::new(),
            sorted_blocks: Vec::new(),
            block_size,
            bound,
            inserts: 0,
            pulled: 0,
        }
    }

    /// Appends `(v, d)` to the current open `sorted_blocks` block, opening a
    /// new one if the top block is full or absent. Items with `d >= bound`
    /// or non-finite `d` are silently dropped.
    pub fn insert(&mut self, v: usize, d: f64) {
        if !(d < self.bound) || !d.is_finite() {
            return;
        }
        match self.sorted_blocks.last() {
            Some(block) if block.len() < self.block_size => {}
            _ => self.sorted_blocks.push(Vec::with_capacity(self.block_size)),
        }
        self.sorted_blocks
            .last_mut()
            .expect("just ensured a block exists")
            .push((v, d));
        self.inserts += 1;
    }

    /// Pushes a whole unsorted block to the front of the batch queue.
    pub fn batch_prepend(&mut self, items: Vec<(usize, f64)>) {
        if items.is_empty() {
            return;
        }
        self.batch_blocks.push_front(items);
    }

    /// Pops one block (FIFO from `batch_blocks`, else LIFO from
    /// `sorted_blocks`), sorts it ascending by distance, and returns
    /// `(min_remaining, vertex_ids)`. `min_remaining` is the best `d` still
    /// held anywhere, or `bound` if nothing remains.
    pub fn pull(&mut self) -> (f64, Vec<usize>) {
        let block = if let Some(mut block) = self.batch_blocks.pop_front() {
            block.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
            block
        } else if let Some(mut block) = self.sorted_blocks.pop() {
            block.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
            block
        } else {
            return (self.bound, Vec::new());
        };

        let min_remaining = self.peek_min().unwrap_or(self.bound);
        self.pulled += block.len() as u64;
        let vertices = block.into_iter().map(|(v, _)| v).collect();
        (min_remaining, vertices)
    }

    /// Total accepted `insert` calls (drops excluded), analogous to a
    /// priority queue's `push_count`.
    pub fn insert_count(&self) -> u64 {
        self.inserts
    }

    /// Total vertices handed out across all `pull` calls, analogous to a
    /// priority queue's `pop_count`.
    pub fn pulled_count(&self) -> u64 {
        self.pulled
    }

    /// `O(n)` scan over every item still held, for pacing only.
    pub fn peek_min(&self) -> Option<f64> {
        let batch_min = self
            .batch_blocks
            .iter()
            .flatten()
            .map(|&(_, d)| d)
            .fold(f64::INFINITY, f64::min);
        let sorted_min = self
            .sorted_blocks
            .iter()
            .flatten()
            .map(|&(_, d)| d)
            .fold(f64::INFINITY, f64::min);
        let m = batch_min.min(sorted_min);
        m.is_finite().then_some(m)
    }

    pub fn is_empty(&self) -> bool {
        self.batch_blocks.is_empty() && self.sorted_blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_sorts_one_block_ascending() {
        let mut ds = EfficientDataStructure::new(4, f64::INFINITY);
        ds.insert(1, 3.0);
        ds.insert(2, 1.0);
        ds.insert(3, 2.0);
        let (_, vs) = ds.pull();
        assert_eq!(vs, vec![2, 3, 1]);
    }

    #[test]
    fn insert_caps_block_size() {
        let mut ds = EfficientDataStructure::new(2, f64::INFINITY);
        ds.insert(1, 1.0);
        ds.insert(2, 2.0);
        ds.insert(3, 3.0); // opens a second block
        let (_, first) = ds.pull();
        assert_eq!(first.len(), 1);
        let (_, second) = ds.pull();
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn out_of_bound_items_are_dropped() {
        let mut ds = EfficientDataStructure::new(4, 5.0);
        ds.insert(1, 5.0); // not < bound
        ds.insert(2, f64::INFINITY);
        ds.insert(3, 4.0);
        let (_, vs) = ds.pull();
        assert_eq!(vs, vec![3]);
    }

    #[test]
    fn batch_blocks_drain_before_sorted_blocks() {
        let mut ds = EfficientDataStructure::new(4, f64::INFINITY);
        ds.insert(1, 1.0);
        ds.batch_prepend(vec![(2, 9.0)]);
        let (_, vs) = ds.pull();
        assert_eq!(vs, vec![2]);
        let (_, vs2) = ds.pull();
        assert_eq!(vs2, vec![1]);
    }
}
