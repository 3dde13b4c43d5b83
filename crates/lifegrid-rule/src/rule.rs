//! The `Rule` trait.

use lifegrid_core::CellState;
use rand::RngCore;

/// Maps `(current state, living-neighbour count)` to the next state.
///
/// # Contract
///
/// - `living` is in `0..=8`.
/// - Deterministic rules must not touch `rng`.
/// - Stochastic rules draw exactly one value from `rng` per call, so the
///   number of draws per generation equals the cell count.
/// - Rules hold parameters only, never per-cell state.
///
/// Object-safe; grids hold rules as `Box<dyn Rule>`. `Send` lets a grid
/// move between threads.
pub trait Rule: Send + 'static {
    /// Short identifier, e.g. `"conway"`.
    fn name(&self) -> &str;

    /// Whether this rule consumes randomness.
    fn is_stochastic(&self) -> bool {
        false
    }

    /// Next state of a cell.
    fn next_state(&self, current: CellState, living: u8, rng: &mut dyn RngCore) -> CellState;
}
