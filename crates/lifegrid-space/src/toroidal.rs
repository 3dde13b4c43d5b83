//! Toroidal Moore neighbourhood: opposite edges are adjacent.

use crate::edge::EdgeBehavior;
use crate::grid2d;
use crate::topology::{Neighbours, Topology};

/// Moore neighbourhood with [`EdgeBehavior::Wrap`].
///
/// Coordinates wrap modulo the grid dimensions, so every cell has exactly
/// 8 neighbours and there are no edge effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toroidal;

impl Topology for Toroidal {
    fn name(&self) -> &str {
        "toroidal"
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        EdgeBehavior::Wrap
    }

    fn neighbours(&self, x: i32, y: i32, width: u32, height: u32) -> Neighbours {
        grid2d::moore_neighbours(x, y, width, height, EdgeBehavior::Wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    #[test]
    fn neighbours_wrap_corner() {
        let n = Toroidal.neighbours(0, 0, 5, 5);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&(4, 4))); // NW wraps on both axes
        assert!(n.contains(&(0, 4))); // N wraps
        assert!(n.contains(&(4, 0))); // W wraps
        assert!(n.contains(&(1, 1)));
    }

    #[test]
    fn neighbours_wrap_far_corner() {
        let n = Toroidal.neighbours(4, 4, 5, 5);
        assert!(n.contains(&(0, 0)));
        assert!(n.contains(&(0, 4)));
        assert!(n.contains(&(4, 0)));
    }

    #[test]
    fn non_square_wraps_each_axis_independently() {
        let n = Toroidal.neighbours(0, 0, 6, 3);
        assert!(n.contains(&(5, 2)));
        assert!(n.contains(&(5, 0)));
        assert!(n.contains(&(0, 2)));
    }

    #[test]
    fn single_cell_wraps_to_itself() {
        let n = Toroidal.neighbours(0, 0, 1, 1);
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|&c| c == (0, 0)));
    }

    #[test]
    fn compliance_toroidal() {
        compliance::run_full_compliance(&Toroidal, 6, 4);
        compliance::run_full_compliance(&Toroidal, 3, 3);
        compliance::run_full_compliance(&Toroidal, 1, 5);
    }

    proptest! {
        #[test]
        fn always_eight_neighbours(
            width in 1u32..12,
            height in 1u32..12,
            x in 0i32..12, y in 0i32..12,
        ) {
            let x = x % width as i32;
            let y = y % height as i32;
            prop_assert_eq!(Toroidal.neighbours(x, y, width, height).len(), 8);
        }

        #[test]
        fn every_cell_is_equivalent(
            width in 3u32..12,
            height in 3u32..12,
            x in 0i32..12, y in 0i32..12,
        ) {
            // Translating a cell translates its neighbourhood.
            let x = x % width as i32;
            let y = y % height as i32;
            let mut shifted: Vec<(i32, i32)> = Toroidal
                .neighbours(0, 0, width, height)
                .iter()
                .map(|&(nx, ny)| ((nx + x) % width as i32, (ny + y) % height as i32))
                .collect();
            let mut direct: Vec<(i32, i32)> =
                Toroidal.neighbours(x, y, width, height).into_iter().collect();
            shifted.sort();
            direct.sort();
            prop_assert_eq!(shifted, direct);
        }
    }
}
