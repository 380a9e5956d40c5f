use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the external-facing loaders (`io`).
///
/// `solve()` never returns one of these: a failed search is represented in
/// `PathResult` instead, per the crate's error-handling design.
#[derive(Debug, Error)]
pub enum PathLabError {
    #[error("failed to open {path}: {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map file {path} contained no map section (or it was empty)")]
    EmptyMap { path: PathBuf },

    #[error("malformed scenario line {line_no} in {path}")]
    BadScenarioLine { path: PathBuf, line_no: usize },
}

pub type Result<T> = std::result::Result<T, PathLabError>;
