//! Lifegrid Quickstart: build, seed, step and render an automaton.
//!
//! Demonstrates:
//!   1. Building a grid from an `AutomatonConfig`
//!   2. Stepping and printing frames
//!   3. Reading per-generation deltas
//!   4. Swapping to a stochastic rule via the factory
//!
//! Run with:
//!   RUST_LOG=lifegrid_engine=debug cargo run --example quickstart

use lifegrid_core::pattern;
use lifegrid_engine::{AutomatonConfig, AutomatonFactory, InitialCondition, RuleKind};
use tracing_subscriber::EnvFilter;

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Lifegrid Quickstart ===\n");

    // 1. A glider on a small torus.
    let config = AutomatonConfig {
        width: 12,
        height: 8,
        toroidal: true,
        rule: RuleKind::Conway,
        initial: InitialCondition::Pattern("glider".into()),
        ..AutomatonConfig::default()
    };
    let mut grid = AutomatonFactory::from_config(&config)?;
    println!(
        "Grid: {}x{} {}, rule={}, seed={}\n",
        grid.width(),
        grid.height(),
        grid.topology().name(),
        grid.rule().name(),
        grid.seed()
    );

    // 2. Step and draw.
    for _ in 0..4 {
        println!("generation {}:\n{}\n", grid.generation(), grid.cells());
        let previous = grid.cells().clone();
        grid.step();

        // 3. Delta between consecutive generations.
        if let Some(delta) = grid.cells().delta_from(&previous) {
            println!(
                "  births={} deaths={} population={}\n",
                delta.births, delta.deaths, delta.population
            );
        }
    }

    // 4. A noisy R-pentomino.
    let mut noisy = AutomatonFactory::with_seed(42).build(40, 20, false, "probabilistic", 0.95)?;
    noisy.set_pattern(pattern("r-pentomino")?, (18, 9));
    println!("Probabilistic rule (certainty 0.95), 50 generations:");
    for _ in 0..5 {
        noisy.step_n(10);
        println!(
            "  generation {:>3}: population={}",
            noisy.generation(),
            noisy.population()
        );
    }
    println!("\n{}", noisy.cells());

    Ok(())
}
