use anyhow::Context;
use clap::Parser;

use pathlab::algorithms::{AStar, AStarPo, BlockSsspParams, BlockSsspSolver};
use pathlab::config::{Config, Engine};
use pathlab::heuristic::Heuristic;
use pathlab::io;
use pathlab::result::PathResult;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    if let Err(err) = run(&config) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let map = io::load_map(&config.map)
        .with_context(|| format!("loading map {}", config.map.display()))?;
    let scenarios = io::load_scenarios(&config.scen)
        .with_context(|| format!("loading scenarios {}", config.scen.display()))?;

    let allow_diagonal = !config.no_diag;
    let heuristic = Heuristic::from_name(&config.heuristic, allow_diagonal);

    let cases: Vec<_> = if config.limit > 0 {
        scenarios.iter().take(config.limit).collect()
    } else {
        scenarios.iter().collect()
    };

    let mut solved = 0usize;
    let mut sum_expanded = 0u64;
    let mut sum_pushes = 0u64;
    let mut sum_pops = 0u64;
    let mut sum_millis = 0f64;

    for (i, scenario) in cases.iter().enumerate() {
        let result = solve_one(config, &map, scenario, allow_diagonal, heuristic);

        if result.found {
            solved += 1;
        }
        sum_expanded += result.stats.expanded;
        sum_pushes += result.stats.pushes;
        sum_pops += result.stats.pops;
        sum_millis += result.stats.millis;

        if i < config.print {
            println!(
                "Case[{}] {} cost={:.4} expanded={} pushes={} pops={} time_ms={:.3}",
                i,
                if result.found { "FOUND" } else { "FAIL" },
                result.cost,
                result.stats.expanded,
                result.stats.pushes,
                result.stats.pops,
                result.stats.millis,
            );
        }
    }

    let n = cases.len().max(1) as f64;
    println!(
        "solved {}/{} engine={:?} heuristic={} diag={} avg_expanded={:.2} avg_pushes={:.2} avg_pops={:.2} avg_time_ms={:.4}",
        solved,
        cases.len(),
        config.engine,
        heuristic.name(),
        allow_diagonal,
        sum_expanded as f64 / n,
        sum_pushes as f64 / n,
        sum_pops as f64 / n,
        sum_millis / n,
    );

    Ok(())
}

fn solve_one(
    config: &Config,
    map: &pathlab::GridMap,
    scenario: &io::Scenario,
    allow_diagonal: bool,
    heuristic: Heuristic,
) -> PathResult {
    let (sx, sy, gx, gy) = (scenario.sx, scenario.sy, scenario.gx, scenario.gy);
    match config.engine {
        Engine::Astar => AStar::new().solve(map, sx, sy, gx, gy, allow_diagonal, heuristic),
        Engine::AstarPo => AStarPo::new().solve(map, sx, sy, gx, gy, allow_diagonal, heuristic),
        Engine::Dmm => {
            let params = BlockSsspParams {
                block_size: config.dmm_block,
                ..BlockSsspParams::default()
            };
            BlockSsspSolver::with_params(params).solve(map, sx, sy, gx, gy, allow_diagonal)
        }
    }
}
