//! Neighbour-count-dependent survival and birth probabilities.

use crate::error::{check_probability, RuleError};
use crate::rule::Rule;
use lifegrid_core::CellState;
use rand::{Rng, RngCore};

/// Probability of a cell being alive next generation, per situation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraduatedTable {
    /// Living cell with fewer than 2 living neighbours.
    pub alive_underpopulated: f64,
    /// Living cell with 2 or 3 living neighbours.
    pub alive_stable: f64,
    /// Living cell with more than 3 living neighbours.
    pub alive_overcrowded: f64,
    /// Dead cell with exactly 3 living neighbours.
    pub dead_three: f64,
    /// Dead cell with exactly 2 living neighbours.
    pub dead_two: f64,
    /// Dead cell with any other count.
    pub dead_other: f64,
}

impl Default for GraduatedTable {
    fn default() -> Self {
        Self {
            alive_underpopulated: 0.10,
            alive_stable: 0.95,
            alive_overcrowded: 0.20,
            dead_three: 0.90,
            dead_two: 0.10,
            dead_other: 0.01,
        }
    }
}

impl GraduatedTable {
    /// A table whose every entry is 0 or 1 and agrees with B3/S23.
    pub fn deterministic() -> Self {
        Self {
            alive_underpopulated: 0.0,
            alive_stable: 1.0,
            alive_overcrowded: 0.0,
            dead_three: 1.0,
            dead_two: 0.0,
            dead_other: 0.0,
        }
    }

    /// Probability of being alive next generation.
    pub fn probability(&self, current: CellState, living: u8) -> f64 {
        match (current, living) {
            (CellState::Alive, 0..=1) => self.alive_underpopulated,
            (CellState::Alive, 2..=3) => self.alive_stable,
            (CellState::Alive, _) => self.alive_overcrowded,
            (CellState::Dead, 3) => self.dead_three,
            (CellState::Dead, 2) => self.dead_two,
            (CellState::Dead, _) => self.dead_other,
        }
    }

    fn validate(self) -> Result<Self, RuleError> {
        check_probability("alive_underpopulated", self.alive_underpopulated)?;
        check_probability("alive_stable", self.alive_stable)?;
        check_probability("alive_overcrowded", self.alive_overcrowded)?;
        check_probability("dead_three", self.dead_three)?;
        check_probability("dead_two", self.dead_two)?;
        check_probability("dead_other", self.dead_other)?;
        Ok(self)
    }
}

/// Graduated stochastic rule.
///
/// One draw `u` in `[0, 1)` per call: the cell is alive next generation
/// iff `u < p`, where `p` comes from the [`GraduatedTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Graduated {
    table: GraduatedTable,
}

impl Graduated {
    /// Graduated rule with the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Graduated rule with a custom table.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidProbability`] naming the first entry that
    /// is NaN or outside `[0, 1]`.
    pub fn with_table(table: GraduatedTable) -> Result<Self, RuleError> {
        Ok(Self {
            table: table.validate()?,
        })
    }

    /// The probability table in use.
    pub fn table(&self) -> &GraduatedTable {
        &self.table
    }
}

impl Rule for Graduated {
    fn name(&self) -> &str {
        "graduated"
    }

    fn is_stochastic(&self) -> bool {
        true
    }

    fn next_state(&self, current: CellState, living: u8, rng: &mut dyn RngCore) -> CellState {
        let p = self.table.probability(current, living);
        CellState::from(rng.random::<f64>() < p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conway::conway_next;
    use lifegrid_core::CellState::{Alive, Dead};
    use lifegrid_test_utils::FixedDrawRng;
    use proptest::prelude::*;

    fn arb_table() -> impl Strategy<Value = GraduatedTable> {
        proptest::array::uniform6(0.0f64..=1.0).prop_map(|p| GraduatedTable {
            alive_underpopulated: p[0],
            alive_stable: p[1],
            alive_overcrowded: p[2],
            dead_three: p[3],
            dead_two: p[4],
            dead_other: p[5],
        })
    }

    #[test]
    fn default_table_matches_documented_values() {
        let t = GraduatedTable::default();
        assert_eq!(t.probability(Alive, 0), 0.10);
        assert_eq!(t.probability(Alive, 1), 0.10);
        assert_eq!(t.probability(Alive, 2), 0.95);
        assert_eq!(t.probability(Alive, 3), 0.95);
        assert_eq!(t.probability(Alive, 4), 0.20);
        assert_eq!(t.probability(Alive, 8), 0.20);
        assert_eq!(t.probability(Dead, 3), 0.90);
        assert_eq!(t.probability(Dead, 2), 0.10);
        assert_eq!(t.probability(Dead, 0), 0.01);
        assert_eq!(t.probability(Dead, 4), 0.01);
    }

    #[test]
    fn draw_below_probability_is_alive() {
        let rule = Graduated::new();
        let mut low = FixedDrawRng::from_draw(0.05);
        assert_eq!(rule.next_state(Dead, 2, &mut low), Alive); // 0.05 < 0.10
        assert_eq!(rule.next_state(Dead, 0, &mut low), Dead); // 0.05 >= 0.01

        let mut mid = FixedDrawRng::from_draw(0.5);
        assert_eq!(rule.next_state(Alive, 3, &mut mid), Alive);
        assert_eq!(rule.next_state(Alive, 5, &mut mid), Dead);
        assert_eq!(rule.next_state(Dead, 3, &mut mid), Alive);
    }

    #[test]
    fn deterministic_table_reproduces_conway() {
        let rule = Graduated::with_table(GraduatedTable::deterministic()).unwrap();
        for mut rng in [FixedDrawRng::lowest(), FixedDrawRng::highest()] {
            for living in 0..=8 {
                for current in [Alive, Dead] {
                    assert_eq!(
                        rule.next_state(current, living, &mut rng),
                        conway_next(current, living),
                        "{current:?} with {living}"
                    );
                }
            }
        }
    }

    #[test]
    fn with_table_rejects_bad_entry() {
        let table = GraduatedTable {
            dead_two: 1.2,
            ..GraduatedTable::default()
        };
        assert_eq!(
            Graduated::with_table(table),
            Err(RuleError::InvalidProbability {
                what: "dead_two",
                value: 1.2
            })
        );
    }

    proptest! {
        #[test]
        fn alive_iff_draw_below_table_entry(
            table in arb_table(),
            alive in any::<bool>(),
            living in 0u8..=8,
            draw in 0.0f64..1.0,
        ) {
            let rule = Graduated::with_table(table).unwrap();
            let current = CellState::from(alive);
            // The fixed source truncates the draw to 53 bits.
            let effective = (draw * (1u64 << 53) as f64).floor() / (1u64 << 53) as f64;
            let next = rule.next_state(current, living, &mut FixedDrawRng::from_draw(draw));
            prop_assert_eq!(next, CellState::from(effective < table.probability(current, living)));
            prop_assert!(next.as_u8() <= 1);
        }
    }

    #[test]
    fn graduated_is_stochastic() {
        assert!(Graduated::new().is_stochastic());
        assert_eq!(Graduated::new().name(), "graduated");
    }
}
