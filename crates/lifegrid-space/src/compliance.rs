//! Topology trait compliance test helpers.
//!
//! These functions verify that a Topology implementation satisfies the
//! invariants required by the trait contract. Reused by both backend test
//! modules.

use crate::edge::EdgeBehavior;
use crate::topology::Topology;
use indexmap::IndexSet;

fn cells(width: u32, height: u32) -> impl Iterator<Item = (i32, i32)> {
    (0..height as i32).flat_map(move |y| (0..width as i32).map(move |x| (x, y)))
}

/// Assert that every neighbour lies inside the grid.
pub fn assert_neighbours_in_bounds(topo: &dyn Topology, width: u32, height: u32) {
    for (x, y) in cells(width, height) {
        for (nx, ny) in topo.neighbours(x, y, width, height) {
            assert!(
                nx >= 0 && ny >= 0 && (nx as u32) < width && (ny as u32) < height,
                "neighbour ({nx}, {ny}) of ({x}, {y}) outside {width}x{height}"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(topo: &dyn Topology, width: u32, height: u32) {
    for a in cells(width, height) {
        for b in topo.neighbours(a.0, a.1, width, height) {
            let back = topo.neighbours(b.0, b.1, width, height);
            assert!(
                back.contains(&a),
                "neighbour symmetry violated: {b:?} in N({a:?}) but {a:?} not in N({b:?})"
            );
        }
    }
}

/// Assert the neighbour count never exceeds 8, and on grids at least 3
/// wide and tall contains no duplicates and never the cell itself.
pub fn assert_neighbours_distinct(topo: &dyn Topology, width: u32, height: u32) {
    for (x, y) in cells(width, height) {
        let n = topo.neighbours(x, y, width, height);
        assert!(n.len() <= 8, "({x}, {y}) has {} neighbours", n.len());
        if width >= 3 && height >= 3 {
            let unique: IndexSet<(i32, i32)> = n.iter().copied().collect();
            assert_eq!(unique.len(), n.len(), "duplicate neighbours for ({x}, {y})");
            assert!(!unique.contains(&(x, y)), "({x}, {y}) is its own neighbour");
        }
    }
}

/// Assert the total neighbour count matches the edge policy.
///
/// Wrap: exactly `8 * cells`. Absorb: each unordered adjacent pair counted
/// twice, which for a `w × h` grid is
/// `2 * ((w-1)h + w(h-1) + 2(w-1)(h-1))`.
pub fn assert_degree_sum(topo: &dyn Topology, width: u32, height: u32) {
    let total: usize = cells(width, height)
        .map(|(x, y)| topo.neighbours(x, y, width, height).len())
        .sum();
    let (w, h) = (width as usize, height as usize);
    let expected = match topo.edge_behavior() {
        EdgeBehavior::Wrap => 8 * w * h,
        EdgeBehavior::Absorb => {
            2 * ((w - 1) * h + w * (h - 1) + 2 * (w - 1) * (h - 1))
        }
    };
    assert_eq!(total, expected, "degree sum for {width}x{height}");
}

/// Two calls with the same arguments produce the same sequence.
pub fn assert_deterministic_order(topo: &dyn Topology, width: u32, height: u32) {
    for (x, y) in cells(width, height) {
        assert_eq!(
            topo.neighbours(x, y, width, height),
            topo.neighbours(x, y, width, height)
        );
    }
}

/// Run every compliance check against one grid shape.
pub fn run_full_compliance(topo: &dyn Topology, width: u32, height: u32) {
    assert_neighbours_in_bounds(topo, width, height);
    assert_neighbours_symmetric(topo, width, height);
    assert_neighbours_distinct(topo, width, height);
    assert_degree_sum(topo, width, height);
    assert_deterministic_order(topo, width, height);
}
