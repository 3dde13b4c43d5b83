//! Error types for core data conversions and pattern lookup.

use std::error::Error;
use std::fmt;

/// Errors from [`pattern()`](crate::pattern::pattern) lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// No catalog entry with this name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "pattern '{name}' not found"),
        }
    }
}

impl Error for PatternError {}

/// A numeric value that is not a valid [`CellState`](crate::CellState).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStateError {
    /// The rejected value.
    pub value: u8,
}

impl fmt::Display for CellStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell state must be 0 or 1, got {}", self.value)
    }
}

impl Error for CellStateError {}
