//! Edge (boundary) behavior for the Moore neighbourhood.

/// How a topology treats neighbours that fall past the grid edge.
///
/// # Examples
///
/// ```
/// use lifegrid_space::{Bounded, Toroidal, Topology};
///
/// // Absorb: a corner has 3 neighbours, an interior cell 8.
/// assert_eq!(Bounded.neighbours(0, 0, 4, 4).len(), 3);
/// assert_eq!(Bounded.neighbours(1, 1, 4, 4).len(), 8);
///
/// // Wrap: every cell has exactly 8 neighbours (torus).
/// assert_eq!(Toroidal.neighbours(0, 0, 4, 4).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}
