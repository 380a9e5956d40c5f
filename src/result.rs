//! Result / stats plumbing shared by all three search engines.

/// Work counters for a single `solve()` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    pub expanded: u64,
    pub pushes: u64,
    pub pops: u64,
    pub millis: f64,
}

/// Outcome of a single-source shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub found: bool,
    /// Node ids from start to goal, inclusive. Empty when `!found`.
    pub path: Vec<usize>,
    pub cost: f64,
    pub stats: SearchStats,
}

impl PathResult {
    /// The `BadInput`/`NoPath` shape: not found, zeroed stats.
    pub fn not_found() -> Self {
        PathResult {
            found: false,
            path: Vec::new(),
            cost: 0.0,
            stats: SearchStats::default(),
        }
    }
}

impl Default for PathResult {
    fn default() -> Self {
        Self::not_found()
    }
}
