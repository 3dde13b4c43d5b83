//! Bounded Moore neighbourhood: the grid ends at its edges.

use crate::edge::EdgeBehavior;
use crate::grid2d;
use crate::topology::{Neighbours, Topology};

/// Moore neighbourhood with [`EdgeBehavior::Absorb`].
///
/// Neighbours past the edge are dropped, so corner cells have 3
/// neighbours, edge cells 5 and interior cells 8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounded;

impl Topology for Bounded {
    fn name(&self) -> &str {
        "bounded"
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        EdgeBehavior::Absorb
    }

    fn neighbours(&self, x: i32, y: i32, width: u32, height: u32) -> Neighbours {
        grid2d::moore_neighbours(x, y, width, height, EdgeBehavior::Absorb)
    }
}
