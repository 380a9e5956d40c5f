use std::time::Instant;

use super::{not_found_result, reconstruct_path, validate_endpoints};
use crate::grid::GridMap;
use crate::heuristic::Heuristic;
use crate::queues::{BinaryHeap, PriorityQueue, POQueue};
use crate::result::{PathResult, SearchStats};

/// A* with priority `f(v) = g(v) + h(v, goal)`, generic over its backing
/// queue. With a consistent heuristic (all four shipped heuristics qualify
/// under the 8-neighbor/unit/sqrt(2) cost model) the first pop of goal is
/// optimal; it is also the termination event, counted *before* the node is
/// marked closed.
///
/// `AStar` (binary heap) and `AStarPo` (windowed bucket queue) are the two
/// instantiations named in the base spec; POQueue correctness here hinges
/// on the same consistency property that keeps popped `f` monotone
/// non-decreasing.
#[derive(Default)]
pub struct AStarSolver<Q> {
    _queue: std::marker::PhantomData<Q>,
}

pub type AStar = AStarSolver<BinaryHeap>;
pub type AStarPo = AStarSolver<POQueue>;

impl<Q> AStarSolver<Q>
where
    Q: PriorityQueue<usize> + Default,
{
    pub fn new() -> Self {
        AStarSolver {
            _queue: std::marker::PhantomData,
        }
    }

    pub fn solve(
        &self,
        map: &GridMap,
        sx: usize,
        sy: usize,
        gx: usize,
        gy: usize,
        allow_diagonal: bool,
        heuristic: Heuristic,
    ) -> PathResult {
        let Some((start_id, goal_id)) = validate_endpoints(map, sx, sy, gx, gy) else {
            return not_found_result();
        };

        let n = map.len();
        let mut g = vec![f64::INFINITY; n];
        let mut parent = vec![-1i64; n];
        let mut closed = vec![false; n];

        let mut open = Q::default();
        g[start_id] = 0.0;
        open.push(start_id, heuristic.call(sx, sy, gx, gy));

        let t0 = Instant::now();
        let mut expanded: u64 = 0;

        while let Some(u) = open.pop() {
            if closed[u] {
                continue; // stale pop
            }
            if u == goal_id {
                break; // goal pop is the termination event, before closing it
            }
            closed[u] = true;
            expanded += 1;

            let (ux, uy) = map.xy(u);
            for (v, w) in map.neighbors(ux, uy, allow_diagonal) {
                if closed[v] {
                    continue;
                }
                let candidate = g[u] + w;
                if candidate < g[v] {
                    g[v] = candidate;
                    parent[v] = u as i64;
                    let (vx, vy) = map.xy(v);
                    let f = candidate + heuristic.call(vx, vy, gx, gy);
                    open.push(v, f);
                }
            }
        }

        let millis = t0.elapsed().as_secs_f64() * 1000.0;
        let stats = SearchStats {
            expanded,
            pushes: open.push_count(),
            pops: open.pop_count(),
            millis,
        };

        if !g[goal_id].is_finite() {
            return PathResult {
                found: false,
                path: Vec::new(),
                cost: 0.0,
                stats,
            };
        }

        PathResult {
            found: true,
            cost: g[goal_id],
            path: reconstruct_path(&parent, start_id, goal_id),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Dijkstra;

    #[test]
    fn matches_dijkstra_cost_under_octile() {
        let map = GridMap::from_rows(&["......", "......", "......", "......", "......"]);
        let dj = Dijkstra::new().solve(&map, 0, 0, 4, 4, true);
        let a = AStar::new().solve(&map, 0, 0, 4, 4, true, Heuristic::Octile);
        assert!(dj.found && a.found);
        assert!((dj.cost - a.cost).abs() < 1e-9);
    }

    #[test]
    fn heuristic_safety_zero_vs_octile_same_cost() {
        let map = GridMap::from_rows(&["...", "...", "..."]);
        let zero = AStar::new().solve(&map, 0, 0, 1, 1, true, Heuristic::Zero);
        let octile = AStar::new().solve(&map, 0, 0, 1, 1, true, Heuristic::Octile);
        assert!((zero.cost - octile.cost).abs() < 1e-9);
        assert!((zero.cost - std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!(octile.stats.expanded <= zero.stats.expanded);
    }

    #[test]
    fn astar_po_matches_astar_binary_heap() {
        let map = GridMap::from_rows(&["......", ".@@@..", "......", "..@@..", "......"]);
        let heap = AStar::new().solve(&map, 0, 0, 5, 4, true, Heuristic::Octile);
        let po = AStarPo::new().solve(&map, 0, 0, 5, 4, true, Heuristic::Octile);
        assert_eq!(heap.found, po.found);
        assert!((heap.cost - po.cost).abs() < 1e-9);
    }

    #[test]
    fn corner_cut_blocks_diagonal_only_path() {
        let map = GridMap::from_rows(&[".@", "@."]);
        let r = AStar::new().solve(&map, 0, 0, 1, 1, true, Heuristic::Octile);
        assert!(!r.found);
    }
}
