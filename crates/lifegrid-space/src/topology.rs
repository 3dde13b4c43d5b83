//! The core `Topology` trait.

use crate::bounded::Bounded;
use crate::edge::EdgeBehavior;
use crate::toroidal::Toroidal;
use lifegrid_core::Coord;
use smallvec::SmallVec;

/// Neighbour list returned by [`Topology::neighbours`].
///
/// Eight inline slots cover the whole Moore neighbourhood, so no call ever
/// allocates.
pub type Neighbours = SmallVec<[Coord; 8]>;

/// Maps a cell to its Moore neighbourhood under an edge policy.
///
/// Implementations are stateless: the grid dimensions are passed on every
/// call, so one instance can serve grids of any size. Only the count of
/// living neighbours is used downstream, so the order of the returned
/// coordinates is fixed per backend but carries no meaning.
///
/// `Sync` is required so a grid holding `Box<dyn Topology>` stays `Send`.
pub trait Topology: Send + Sync + 'static {
    /// Short identifier, e.g. `"bounded"`.
    fn name(&self) -> &str;

    /// Edge policy this topology applies.
    fn edge_behavior(&self) -> EdgeBehavior;

    /// Neighbours of `(x, y)` on a `width × height` grid.
    ///
    /// Every returned coordinate is in bounds. At most 8 entries; `(x, y)`
    /// itself is never produced by an offset of `(0, 0)`, though it can
    /// reappear on a torus narrower than 3 cells.
    fn neighbours(&self, x: i32, y: i32, width: u32, height: u32) -> Neighbours;
}

/// Build the topology for a wrap-around flag.
pub fn topology_for(toroidal: bool) -> Box<dyn Topology> {
    if toroidal {
        Box::new(Toroidal)
    } else {
        Box::new(Bounded)
    }
}
