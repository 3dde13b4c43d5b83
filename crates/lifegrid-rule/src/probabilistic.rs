//! Conway's rule applied with a fixed certainty.

use crate::conway::conway_next;
use crate::error::{check_probability, RuleError};
use crate::rule::Rule;
use lifegrid_core::CellState;
use rand::{Rng, RngCore};

/// Uniform-certainty stochastic Conway.
///
/// Each call computes Conway's intended outcome, then draws `u` in
/// `[0, 1)`: `u < certainty` applies the outcome, anything else applies
/// its negation. With `certainty = 1.0` the rule is exactly [`Conway`](crate::Conway);
/// with `0.0` it is Conway inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probabilistic {
    certainty: f64,
}

impl Probabilistic {
    /// Certainty used by [`Probabilistic::default`].
    pub const DEFAULT_CERTAINTY: f64 = 0.9;

    /// Create the rule with the given certainty.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidProbability`] if `certainty` is NaN or
    /// outside `[0, 1]`.
    pub fn new(certainty: f64) -> Result<Self, RuleError> {
        Ok(Self {
            certainty: check_probability("certainty", certainty)?,
        })
    }

    /// Probability that Conway's outcome is applied.
    pub fn certainty(&self) -> f64 {
        self.certainty
    }
}

impl Default for Probabilistic {
    fn default() -> Self {
        Self {
            certainty: Self::DEFAULT_CERTAINTY,
        }
    }
}

impl Rule for Probabilistic {
    fn name(&self) -> &str {
        "probabilistic"
    }

    fn is_stochastic(&self) -> bool {
        true
    }

    fn next_state(&self, current: CellState, living: u8, rng: &mut dyn RngCore) -> CellState {
        let intended = conway_next(current, living);
        if rng.random::<f64>() < self.certainty {
            intended
        } else {
            !intended
        }
    }
}
