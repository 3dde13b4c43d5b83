//! Grid stepping and automaton assembly for lifegrid.
//!
//! [`Grid`] owns the cell matrix, the generation counter and one seeded
//! random stream, and composes a [`Topology`](lifegrid_space::Topology)
//! with a [`Rule`](lifegrid_rule::Rule) to advance the automaton one
//! synchronous generation at a time.
//!
//! [`AutomatonFactory`] builds a configured grid from a topology flag, a
//! rule name and rule parameters, or from a full [`AutomatonConfig`]
//! including the initial condition.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod factory;
pub mod grid;

pub use config::{AutomatonConfig, ConfigError, InitialCondition, RuleKind};
pub use factory::AutomatonFactory;
pub use grid::Grid;
