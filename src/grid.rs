use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathLabError, Result};

/// Orthogonal step cost.
pub const STEP_ORTHOGONAL: f64 = 1.0;
/// Diagonal step cost (`sqrt(2)`).
pub const STEP_DIAGONAL: f64 = std::f64::consts::SQRT_2;

const DX: [i64; 8] = [1, -1, 0, 0, 1, 1, -1, -1];
const DY: [i64; 8] = [0, 0, 1, -1, 1, -1, 1, -1];
const WEIGHT: [f64; 8] = [
    STEP_ORTHOGONAL,
    STEP_ORTHOGONAL,
    STEP_ORTHOGONAL,
    STEP_ORTHOGONAL,
    STEP_DIAGONAL,
    STEP_DIAGONAL,
    STEP_DIAGONAL,
    STEP_DIAGONAL,
];

/// An immutable binary-occupancy grid, read-only once loaded.
///
/// Cells outside `[0, width) x [0, height)` are conceptually blocked.
pub struct GridMap {
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
}

impl GridMap {
    /// Builds a map directly from already-decoded rows of free/blocked flags.
    /// Mostly used by tests that want to avoid writing a fixture file.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let rows = rows.iter().map(|row| row.bytes().collect()).collect();
        GridMap {
            width,
            height,
            rows,
        }
    }

    /// Loads a MovingAI-style map file.
    ///
    /// Lines before the literal line `map` are header and ignored. Each
    /// subsequent non-empty line is one grid row; a trailing `\r` is
    /// stripped. `width` is the length of the first row, `height` the
    /// number of rows.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| PathLabError::IoFailure {
            path: path.clone(),
            source,
        })?;

        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut in_map_section = false;
        for line in contents.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line == "map" {
                in_map_section = true;
                continue;
            }
            if !in_map_section {
                continue;
            }
            if !line.is_empty() {
                rows.push(line.bytes().collect());
            }
        }

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(PathLabError::EmptyMap { path });
        }

        log::debug!("loaded map {}x{} from {}", width, height, path.display());
        Ok(GridMap {
            width,
            height,
            rows,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node id for a cell: `v = y * width + x`.
    pub fn id(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Inverse of `id`: recovers `(x, y)` from a node id.
    pub fn xy(&self, v: usize) -> (usize, usize) {
        (v % self.width, v / self.width)
    }

    /// Out-of-range coordinates are blocked; only `.` denotes free.
    pub fn is_free(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.rows[y][x] == b'.'
    }

    /// Admissible neighbors of `(x, y)`: the 4 orthogonal neighbors always,
    /// plus the 4 diagonals when `allow_diagonal` is set, with corner-cutting
    /// forbidden (a diagonal step is only taken if both orthogonal mediators
    /// are free). Blocked or off-grid neighbors are skipped.
    pub fn neighbors(&self, x: usize, y: usize, allow_diagonal: bool) -> Vec<(usize, f64)> {
        let count = if allow_diagonal { 8 } else { 4 };
        let (ix, iy) = (x as i64, y as i64);
        let mut out = Vec::with_capacity(count);
        for k in 0..count {
            let nx = ix + DX[k];
            let ny = iy + DY[k];
            if !self.is_free(nx, ny) {
                continue;
            }
            if k >= 4 {
                // Corner-cutting: both orthogonal mediators must be free.
                let mediator_a = self.is_free(ix + DX[k], iy);
                let mediator_b = self.is_free(ix, iy + DY[k]);
                if !mediator_a || !mediator_b {
                    continue;
                }
            }
            out.push((self.id(nx as usize, ny as usize), WEIGHT[k]));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_blocked() {
        let g = GridMap::from_rows(&["..", ".."]);
        assert!(!g.is_free(-1, 0));
        assert!(!g.is_free(0, -1));
        assert!(!g.is_free(2, 0));
        assert!(!g.is_free(0, 2));
    }

    #[test]
    fn only_dot_is_free() {
        let g = GridMap::from_rows(&[".@T"]);
        assert!(g.is_free(0, 0));
        assert!(!g.is_free(1, 0));
        assert!(!g.is_free(2, 0));
    }

    #[test]
    fn corner_cut_forbidden() {
        // .@
        // @.
        let g = GridMap::from_rows(&[".@", "@."]);
        let neighbors = g.neighbors(0, 0, true);
        // (1,1) is diagonal, but both mediators (1,0) and (0,1) are blocked.
        assert!(!neighbors.iter().any(|&(v, _)| v == g.id(1, 1)));
    }

    #[test]
    fn orthogonal_only_when_diagonal_disallowed() {
        let g = GridMap::from_rows(&["...", "...", "..."]);
        let neighbors = g.neighbors(1, 1, false);
        assert_eq!(neighbors.len(), 4);
        assert!(neighbors.iter().all(|&(_, w)| w == STEP_ORTHOGONAL));
    }

    #[test]
    fn load_from_file_strips_header_and_cr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.map");
        std::fs::write(&path, "type octile\nheight 2\nwidth 2\nmap\n..\r\n..\r\n").unwrap();
        let g = GridMap::load_from_file(&path).unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
        assert!(g.is_free(0, 0));
    }

    #[test]
    fn empty_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.map");
        std::fs::write(&path, "type octile\nmap\n").unwrap();
        assert!(GridMap::load_from_file(&path).is_err());
    }
}
