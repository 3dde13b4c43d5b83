//! Benchmark profiles for the lifegrid engine.
//!
//! - [`reference_profile`]: 100x100 bounded Conway grid at 30% density
//! - [`stress_profile`]: 316x316 toroidal grid (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_engine::{AutomatonConfig, AutomatonFactory, ConfigError, Grid, RuleKind};

/// Build a reference benchmark grid: 100x100 (10K cells), bounded edges.
pub fn reference_profile(rule: RuleKind, seed: u64) -> Result<Grid, ConfigError> {
    AutomatonFactory::from_config(&AutomatonConfig {
        width: 100,
        height: 100,
        rule,
        seed,
        ..AutomatonConfig::default()
    })
}

/// Build a stress benchmark grid: 316x316 (~100K cells), toroidal.
///
/// Same density as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(rule: RuleKind, seed: u64) -> Result<Grid, ConfigError> {
    AutomatonFactory::from_config(&AutomatonConfig {
        width: 316,
        height: 316,
        toroidal: true,
        rule,
        seed,
        ..AutomatonConfig::default()
    })
}
