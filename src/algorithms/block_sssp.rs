use std::time::Instant;

use super::{not_found_result, reconstruct_path, validate_endpoints};
use crate::grid::GridMap;
use crate::queues::{AdaptiveDataStructure, EfficientDataStructure};
use crate::result::{PathResult, SearchStats};

/// Which block-partitioned structure backs a `BlockSsspSolver`.
///
/// The base spec defines `AdaptiveDataStructure` but doesn't wire it into
/// any engine, leaving its pairing as "an implementation choice" (this
/// repo makes that choice explicit rather than leaving the type dead).
pub enum BlockSsspQueueKind {
    Efficient,
    Adaptive,
}

#[derive(Clone, Copy)]
pub struct BlockSsspParams {
    pub block_size: usize,
    pub bound: f64,
}

impl Default for BlockSsspParams {
    fn default() -> Self {
        BlockSsspParams {
            block_size: 1024,
            bound: f64::INFINITY,
        }
    }
}

/// Dijkstra with the global heap replaced by a block-partitioned structure.
/// Each outer iteration pulls one block and relaxes every node in it in
/// sequence. A pulled block is only locally sorted, so a node is marked
/// `closed` the moment it is popped and its distance is accepted, and improved
/// distances that arrive in a later block simply get re-inserted and
/// re-popped, and monotonic relaxation guarantees eventual closure at the
/// optimum.
pub struct BlockSsspSolver {
    params: BlockSsspParams,
    queue_kind: BlockSsspQueueKind,
}

impl Default for BlockSsspSolver {
    fn default() -> Self {
        BlockSsspSolver {
            params: BlockSsspParams::default(),
            queue_kind: BlockSsspQueueKind::Efficient,
        }
    }
}

impl BlockSsspSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: BlockSsspParams) -> Self {
        BlockSsspSolver {
            params,
            queue_kind: BlockSsspQueueKind::Efficient,
        }
    }

    pub fn with_queue_kind(mut self, kind: BlockSsspQueueKind) -> Self {
        self.queue_kind = kind;
        self
    }

    pub fn solve(
        &self,
        map: &GridMap,
        sx: usize,
        sy: usize,
        gx: usize,
        gy: usize,
        allow_diagonal: bool,
    ) -> PathResult {
        let Some((start_id, goal_id)) = validate_endpoints(map, sx, sy, gx, gy) else {
            return not_found_result();
        };

        let n = map.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut parent = vec![-1i64; n];
        let mut closed = vec![false; n];

        let mut ds = match self.queue_kind {
            BlockSsspQueueKind::Efficient => {
                Backing::Efficient(EfficientDataStructure::new(self.params.block_size, self.params.bound))
            }
            BlockSsspQueueKind::Adaptive => {
                Backing::Adaptive(AdaptiveDataStructure::new(self.params.block_size, self.params.bound))
            }
        };

        dist[start_id] = 0.0;
        ds.insert(start_id, 0.0);

        let t0 = Instant::now();
        let mut expanded: u64 = 0;

        'outer: loop {
            let (_min_remaining, batch) = ds.pull();
            if batch.is_empty() {
                break;
            }

            for u in batch {
                if closed[u] {
                    continue;
                }
                if u == goal_id {
                    closed[u] = true;
                    break 'outer;
                }
                closed[u] = true;
                expanded += 1;

                let (ux, uy) = map.xy(u);
                for (v, w) in map.neighbors(ux, uy, allow_diagonal) {
                    if closed[v] {
                        continue;
                    }
                    let candidate = dist[u] + w;
                    if candidate < dist[v] {
                        dist[v] = candidate;
                        parent[v] = u as i64;
                        if candidate < self.params.bound {
                            ds.insert(v, candidate);
                        }
                    }
                }
            }
        }

        let millis = t0.elapsed().as_secs_f64() * 1000.0;
        let stats = SearchStats {
            expanded,
            pushes: ds.insert_count(),
            pops: ds.pulled_count(),
            millis,
        };

        if !dist[goal_id].is_finite() {
            return PathResult {
                found: false,
                path: Vec::new(),
                cost: 0.0,
                stats,
            };
        }

        PathResult {
            found: true,
            cost: dist[goal_id],
            path: reconstruct_path(&parent, start_id, goal_id),
            stats,
        }
    }
}

enum Backing {
    Efficient(EfficientDataStructure),
    Adaptive(AdaptiveDataStructure),
}

impl Backing {
    fn insert(&mut self, v: usize, d: f64) {
        match self {
            Backing::Efficient(ds) => ds.insert(v, d),
            Backing::Adaptive(ds) => ds.insert(v, d),
        }
    }

    fn pull(&mut self) -> (f64, Vec<usize>) {
        match self {
            Backing::Efficient(ds) => ds.pull(),
            Backing::Adaptive(ds) => ds.pull(),
        }
    }

    fn insert_count(&self) -> u64 {
        match self {
            Backing::Efficient(ds) => ds.insert_count(),
            Backing::Adaptive(ds) => ds.insert_count(),
        }
    }

    fn pulled_count(&self) -> u64 {
        match self {
            Backing::Efficient(ds) => ds.pulled_count(),
            Backing::Adaptive(ds) => ds.pulled_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{AStar, Dijkstra};
    use crate::heuristic::Heuristic;

    #[test]
    fn s6_five_by_five_all_engines_agree() {
        let map = GridMap::from_rows(&["......", "......", "......", "......", "......"]);
        let dj = Dijkstra::new().solve(&map, 0, 0, 4, 4, true);
        let a = AStar::new().solve(&map, 0, 0, 4, 4, true, Heuristic::Octile);
        let dmm = BlockSsspSolver::new().solve(&map, 0, 0, 4, 4, true);
        assert!(dj.found && a.found && dmm.found);
        assert!((dj.cost - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(dj.path.len(), 5);
        assert!((dj.cost - a.cost).abs() < 1e-9);
        assert!((dj.cost - dmm.cost).abs() < 1e-9);
    }

    #[test]
    fn small_block_size_forces_multiple_pulls() {
        let map = GridMap::from_rows(&["..........", "..........", ".........."]);
        let params = BlockSsspParams {
            block_size: 2,
            bound: f64::INFINITY,
        };
        let r = BlockSsspSolver::with_params(params).solve(&map, 0, 0, 9, 2, true);
        let baseline = Dijkstra::new().solve(&map, 0, 0, 9, 2, true);
        assert!(r.found);
        assert!((r.cost - baseline.cost).abs() < 1e-9);
    }

    #[test]
    fn adaptive_backing_agrees_with_efficient_backing() {
        let map = GridMap::from_rows(&["......", ".@@...", "......", "...@@.", "......"]);
        let efficient = BlockSsspSolver::new().solve(&map, 0, 0, 5, 4, true);
        let adaptive = BlockSsspSolver::new()
            .with_queue_kind(BlockSsspQueueKind::Adaptive)
            .solve(&map, 0, 0, 5, 4, true);
        assert_eq!(efficient.found, adaptive.found);
        assert!((efficient.cost - adaptive.cost).abs() < 1e-9);
    }

    #[test]
    fn no_path_through_fully_blocked_map() {
        let map = GridMap::from_rows(&[".@", "@."]);
        let r = BlockSsspSolver::new().solve(&map, 0, 0, 1, 1, true);
        assert!(!r.found);
    }
}
