//! PathLab: a benchmarking laboratory for single-source shortest-path
//! search on 2D grid maps in the MovingAI tradition.
//!
//! The crate is organized around two families: the search engines
//! ([`algorithms`]: Dijkstra, A\*, Block-SSSP) and the priority queues that
//! back their frontiers ([`queues`]: `BinaryHeap`, `POQueue`,
//! `EfficientDataStructure`, `AdaptiveDataStructure`). [`grid`] and
//! [`heuristic`] hold the shared grid/edge model and distance estimates;
//! [`io`] and [`error`] are the file-loading boundary; [`result`] is the
//! common output shape every engine returns.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod io;
pub mod queues;
pub mod result;

pub use error::{PathLabError, Result};
pub use grid::GridMap;
pub use heuristic::Heuristic;
pub use io::Scenario;
pub use result::{PathResult, SearchStats};
