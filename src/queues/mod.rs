//! The priority-queue family: a common capability set with three concrete
//! backings of differing ordering discipline.

mod adaptive_ds;
mod binary_heap;
mod efficient_ds;
mod po_queue;

pub use adaptive_ds::AdaptiveDataStructure;
pub use binary_heap::BinaryHeap;
pub use efficient_ds::EfficientDataStructure;
pub use po_queue::POQueue;

/// Shared capability set for the engines' frontier. Implementations must
/// tolerate stale entries: a key may be pushed twice with different
/// priorities, and the consumer filters duplicates via its own `closed[]`
/// array.
pub trait PriorityQueue<K> {
    fn push(&mut self, key: K, priority: f64);
    fn pop(&mut self) -> Option<K>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;

    fn push_count(&self) -> u64;
    fn pop_count(&self) -> u64;
    fn reset_stats(&mut self);
}
