//! Conway's deterministic B3/S23 rule.

use crate::rule::Rule;
use lifegrid_core::CellState;
use rand::RngCore;

/// B3/S23: a living cell survives with 2 or 3 living neighbours, a dead
/// cell is born with exactly 3; everything else dies or stays dead.
#[inline]
pub fn conway_next(current: CellState, living: u8) -> CellState {
    match current {
        CellState::Alive => CellState::from(living == 2 || living == 3),
        CellState::Dead => CellState::from(living == 3),
    }
}

/// The classic Game of Life rule. Never draws randomness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Conway;

impl Rule for Conway {
    fn name(&self) -> &str {
        "conway"
    }

    fn next_state(&self, current: CellState, living: u8, _rng: &mut dyn RngCore) -> CellState {
        conway_next(current, living)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_core::CellState::{Alive, Dead};

    #[test]
    fn survival_table() {
        let expected = [Dead, Dead, Alive, Alive, Dead, Dead, Dead, Dead, Dead];
        for (living, want) in expected.into_iter().enumerate() {
            assert_eq!(conway_next(Alive, living as u8), want, "alive with {living}");
        }
    }

    #[test]
    fn birth_table() {
        for living in 0..=8u8 {
            let want = if living == 3 { Alive } else { Dead };
            assert_eq!(conway_next(Dead, living), want, "dead with {living}");
        }
    }

    #[test]
    fn conway_is_not_stochastic() {
        assert!(!Conway.is_stochastic());
        assert_eq!(Conway.name(), "conway");
    }
}
