//! Error types for rule construction.

use std::error::Error;
use std::fmt;

/// Errors arising from rule parameter validation.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleError {
    /// A probability parameter is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// Which parameter was rejected.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability { what, value } => {
                write!(f, "{what} must be in [0, 1], got {value}")
            }
        }
    }
}

impl Error for RuleError {}

/// Validate that `value` is a probability.
pub(crate) fn check_probability(what: &'static str, value: f64) -> Result<f64, RuleError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RuleError::InvalidProbability { what, value })
    }
}
