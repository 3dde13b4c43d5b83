//! Transition rules for lifegrid automata.
//!
//! A [`Rule`] maps a cell's current state and its living-neighbour count to
//! the cell's next state. Rules never see neighbour identities, only the
//! aggregate count, so any rule pairs with any topology.
//!
//! # Rule families
//!
//! - [`Conway`]: deterministic B3/S23
//! - [`Probabilistic`]: Conway's outcome applied with a fixed certainty,
//!   its negation otherwise
//! - [`Graduated`]: survival/birth probability depends on the count
//!
//! Stochastic rules draw from the `RngCore` the caller passes in, so a
//! grid that owns a seeded generator replays identically.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conway;
pub mod error;
pub mod graduated;
pub mod probabilistic;
pub mod rule;

pub use conway::{conway_next, Conway};
pub use error::RuleError;
pub use graduated::{Graduated, GraduatedTable};
pub use probabilistic::Probabilistic;
pub use rule::Rule;
