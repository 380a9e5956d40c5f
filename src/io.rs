//! Loaders for the two MovingAI-style text formats PathLab reads: map files
//! (`GridMap::load_from_file`, in `grid.rs`) and scenario files (here).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathLabError, Result};

/// One benchmark case from a `.scen` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub bucket: u32,
    pub map_name: String,
    pub map_width: usize,
    pub map_height: usize,
    pub sx: usize,
    pub sy: usize,
    pub gx: usize,
    pub gy: usize,
    pub optimal_length: f64,
}

/// Convenience re-export so callers can `io::load_map` alongside
/// `io::load_scenarios` without reaching into `grid` directly.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<crate::grid::GridMap> {
    crate::grid::GridMap::load_from_file(path)
}

/// Parses a MovingAI `.scen` file. Lines starting with `v` or `t` are
/// headers and ignored (the format's version line and its alternative-tool
/// tab-separated variant); any other non-empty line must have exactly the
/// nine whitespace-separated fields
/// `bucket map_name map_w map_h sx sy gx gy optimal_length`, or the line
/// is rejected with `BadScenarioLine`.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let contents = fs::read_to_string(&path).map_err(|source| PathLabError::IoFailure {
        path: path.clone(),
        source,
    })?;

    let mut scenarios = Vec::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('v') || trimmed.starts_with('t') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 9 {
            return Err(PathLabError::BadScenarioLine {
                path,
                line_no: idx + 1,
            });
        }

        let parse_err = || PathLabError::BadScenarioLine {
            path: path.clone(),
            line_no: idx + 1,
        };

        let bucket: u32 = fields[0].parse().map_err(|_| parse_err())?;
        let map_name = fields[1].to_string();
        let map_width: usize = fields[2].parse().map_err(|_| parse_err())?;
        let map_height: usize = fields[3].parse().map_err(|_| parse_err())?;
        let sx: usize = fields[4].parse().map_err(|_| parse_err())?;
        let sy: usize = fields[5].parse().map_err(|_| parse_err())?;
        let gx: usize = fields[6].parse().map_err(|_| parse_err())?;
        let gy: usize = fields[7].parse().map_err(|_| parse_err())?;
        let optimal_length: f64 = fields[8].parse().map_err(|_| parse_err())?;

        scenarios.push(Scenario {
            bucket,
            map_name,
            map_width,
            map_height,
            sx,
            sy,
            gx,
            gy,
            optimal_length,
        });
    }

    log::debug!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_lines_and_skips_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.map.scen");
        std::fs::write(
            &path,
            "version 1\n0\ttiny.map\t4\t4\t0\t0\t3\t3\t4.24264069\n0 tiny.map 4 4 1 1 2 2 1.41421356\n",
        )
        .unwrap();
        let scenarios = load_scenarios(&path).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].map_name, "tiny.map");
        assert_eq!((scenarios[0].sx, scenarios[0].sy), (0, 0));
        assert_eq!((scenarios[0].gx, scenarios[0].gy), (3, 3));
        assert!((scenarios[1].optimal_length - std::f64::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn malformed_line_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.scen");
        std::fs::write(&path, "version 1\n0 tiny.map 4 4 0 0\n").unwrap();
        let err = load_scenarios(&path).unwrap_err();
        assert!(matches!(err, PathLabError::BadScenarioLine { .. }));
    }

    #[test]
    fn missing_file_is_io_failure() {
        let err = load_scenarios("/nonexistent/path.scen").unwrap_err();
        assert!(matches!(err, PathLabError::IoFailure { .. }));
    }
}
