//! Neighbourhood topologies for lifegrid automata.
//!
//! This crate defines the [`Topology`] trait, the strategy a grid uses to
//! find the Moore neighbourhood of a cell, along with its two backends.
//!
//! # Backends
//!
//! - [`Bounded`]: cells past the grid edge do not exist ([`EdgeBehavior::Absorb`])
//! - [`Toroidal`]: opposite edges are adjacent ([`EdgeBehavior::Wrap`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod edge;
pub(crate) mod grid2d;
pub mod toroidal;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounded::Bounded;
pub use edge::EdgeBehavior;
pub use grid2d::MOORE_OFFSETS;
pub use toroidal::Toroidal;
pub use topology::{topology_for, Neighbours, Topology};
