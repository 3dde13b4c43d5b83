//! Lifegrid: two-dimensional cellular automata with pluggable topologies
//! and stochastic rules.
//!
//! This is the top-level facade crate that re-exports the public API from
//! every lifegrid sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let mut grid = AutomatonFactory::with_seed(1)
//!     .build(8, 8, true, "conway", 0.9)
//!     .unwrap();
//! grid.set_pattern(pattern("glider").unwrap(), (2, 2));
//! grid.step_n(4);
//! assert_eq!(grid.generation(), 4);
//! assert_eq!(grid.population(), 5);
//!
//! let before = grid.cells().clone();
//! grid.step();
//! let delta = grid.cells().delta_from(&before).unwrap();
//! assert_eq!(delta.population, 5);
//! assert_eq!(delta.births, delta.deaths);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | Cell state, cell matrix, generation deltas, pattern catalog |
//! | [`space`] | `lifegrid-space` | `Topology` trait, bounded and toroidal neighbourhoods |
//! | [`rule`] | `lifegrid-rule` | `Rule` trait, Conway, probabilistic and graduated rules |
//! | [`engine`] | `lifegrid-engine` | `Grid`, configuration and the automaton factory |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell, matrix and pattern types (`lifegrid-core`).
pub use lifegrid_core as types;

/// Neighbourhood topologies (`lifegrid-space`).
///
/// Provides the [`space::Topology`] trait and the [`space::Bounded`] and
/// [`space::Toroidal`] strategies.
pub use lifegrid_space as space;

/// Transition rules (`lifegrid-rule`).
///
/// The [`rule::Rule`] trait is the extension point for custom rules.
pub use lifegrid_rule as rule;

/// Grid stepping and construction (`lifegrid-engine`).
pub use lifegrid_engine as engine;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lifegrid_core::{pattern, CellMatrix, CellState, Coord, GenerationDelta, Pattern};

    // Errors
    pub use lifegrid_core::PatternError;
    pub use lifegrid_engine::ConfigError;
    pub use lifegrid_rule::RuleError;

    // Topology
    pub use lifegrid_space::{Bounded, Toroidal, Topology};

    // Rules
    pub use lifegrid_rule::{Conway, Graduated, GraduatedTable, Probabilistic, Rule};

    // Engine
    pub use lifegrid_engine::{AutomatonConfig, AutomatonFactory, Grid, InitialCondition, RuleKind};
}
