use std::time::Instant;

use super::{not_found_result, reconstruct_path, validate_endpoints};
use crate::grid::GridMap;
use crate::queues::{BinaryHeap, PriorityQueue, POQueue};
use crate::result::{PathResult, SearchStats};

/// Classical Dijkstra with lazy deletion, generic over its backing queue.
///
/// `Dijkstra` (binary heap) and `DijkstraPo` (windowed bucket queue) are
/// the two instantiations the base spec names; both share this one body,
/// mirroring how the original C++ `dijkstra.hpp`/`dijkstra_po.hpp` differ
/// only in which queue they construct.
#[derive(Default)]
pub struct DijkstraSolver<Q> {
    _queue: std::marker::PhantomData<Q>,
}

pub type Dijkstra = DijkstraSolver<BinaryHeap>;
pub type DijkstraPo = DijkstraSolver<POQueue>;

impl<Q> DijkstraSolver<Q>
where
    Q: PriorityQueue<usize> + Default,
{
    pub fn new() -> Self {
        DijkstraSolver {
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
        open.push(start_id, 0.0);

        let t0 = Instant::now();
        let mut expanded: u64 = 0;

        while let Some(u) = open.pop() {
            if closed[u] {
                continue; // stale pop
            }
            if u == goal_id {
                break;
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
                    open.push(v, candidate);
                }
            }
        }

        let millis = t0.elapsed().as_secs_f64() * 1000.0;

        if !g[goal_id].is_finite() {
            return PathResult {
                found: false,
                path: Vec::new(),
                cost: 0.0,
                stats: SearchStats {
                    expanded,
                    pushes: open.push_count(),
                    pops: open.pop_count(),
                    millis,
                },
            };
        }

        PathResult {
            found: true,
            cost: g[goal_id],
            path: reconstruct_path(&parent, start_id, goal_id),
            stats: SearchStats {
                expanded,
                pushes: open.push_count(),
                pops: open.pop_count(),
                millis,
            },
        }
    }
}
