use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which search engine to benchmark.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Binary-heap A\*.
    Astar,
    /// Windowed-bucket-queue A\*.
    AstarPo,
    /// Block-partitioned SSSP.
    Dmm,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// MovingAI `.map` file.
    pub map: PathBuf,

    /// MovingAI `.scen` file.
    pub scen: PathBuf,

    /// Which engine to run every scenario through.
    #[arg(long, value_enum, default_value_t = Engine::Astar)]
    pub engine: Engine,

    /// Heuristic name: auto, manhattan, octile, euclidean, zero.
    #[arg(long, default_value = "auto")]
    pub heuristic: String,

    /// Disable diagonal movement.
    #[arg(long, default_value_t = false)]
    pub no_diag: bool,

    /// Block size for the `--engine dmm` backing structure.
    #[arg(long, default_value_t = 1024)]
    pub dmm_block: usize,

    /// Number of per-case result lines to print.
    #[arg(long, default_value_t = 10)]
    pub print: usize,

    /// Stop after this many scenarios (0 = no limit).
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
}
