//! Core types for the lifegrid cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data every other crate passes around: the binary [`CellState`], the
//! dense [`CellMatrix`] a grid owns, the [`GenerationDelta`] consumers
//! derive between two generations, and the static [`Pattern`] catalog used
//! to seed initial conditions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod matrix;
pub mod pattern;

pub use cell::{CellState, Coord};
pub use error::{CellStateError, PatternError};
pub use matrix::{CellMatrix, GenerationDelta};
pub use pattern::{pattern, patterns, Pattern};
