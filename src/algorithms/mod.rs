//! The search-engine family: Dijkstra, A*, and Block-SSSP share a node/edge
//! contract (`GridMap` + node ids) and a `PathResult`/`SearchStats` output
//! shape, but differ in the ordering discipline they impose on the
//! frontier.

mod astar;
mod block_sssp;
mod dijkstra;

pub use astar::{AStar, AStarPo, AStarSolver};
pub use block_sssp::{BlockSsspParams, BlockSsspQueueKind, BlockSsspSolver};
pub use dijkstra::{Dijkstra, DijkstraPo, DijkstraSolver};

use crate::grid::GridMap;
use crate::result::PathResult;

/// Bounds-checks start/goal and fails fast per the `BadInput` taxonomy:
/// out-of-range or blocked endpoints return `{found: false}` before any
/// work is done. Returns the node ids on success.
fn validate_endpoints(
    map: &GridMap,
    sx: usize,
    sy: usize,
    gx: usize,
    gy: usize,
) -> Option<(usize, usize)> {
    if map.is_empty() {
        return None;
    }
    if sx >= map.width() || gx >= map.width() || sy >= map.height() || gy >= map.height() {
        return None;
    }
    if !map.is_free(sx as i64, sy as i64) || !map.is_free(gx as i64, gy as i64) {
        return None;
    }
    Some((map.id(sx, sy), map.id(gx, gy)))
}

/// Shared path reconstruction: chase `parent[]` from goal to start and
/// reverse. `start == goal` yields a single-element path, per the
/// `start==goal` boundary case.
fn reconstruct_path(parent: &[i64], start_id: usize, goal_id: usize) -> Vec<usize> {
    let mut reversed = Vec::new();
    let mut cur = goal_id as i64;
    loop {
        reversed.push(cur as usize);
        if cur as usize == start_id {
            break;
        }
        cur = parent[cur as usize];
        if cur < 0 {
            break;
        }
    }
    reversed.reverse();
    reversed
}

fn not_found_result() -> PathResult {
    PathResult::not_found()
}
