//! Shared Moore-neighbourhood arithmetic for the 2D topologies.

use crate::edge::EdgeBehavior;
use crate::topology::Neighbours;

/// The 8 Moore offsets `(dx, dy)`, scanned row by row: NW, N, NE, W, E, SW, S, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(value)` in range, or `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i64;
    if val >= 0 && val < n {
        return Some(val as i32);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n) as i32),
    }
}

/// Moore neighbourhood of `(x, y)` on a `width × height` grid.
///
/// Axis arithmetic is done in `i64` so cells on an `i32::MAX`-wide grid
/// do not overflow when stepping past the last column.
pub(crate) fn moore_neighbours(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    edge: EdgeBehavior,
) -> Neighbours {
    let mut result = Neighbours::new();
    if width == 0 || height == 0 {
        return result;
    }
    for (dx, dy) in MOORE_OFFSETS {
        let nx = resolve_axis(x as i64 + dx as i64, width, edge);
        let ny = resolve_axis(y as i64 + dy as i64, height, edge);
        if let (Some(nx), Some(ny)) = (nx, ny) {
            result.push((nx, ny));
        }
    }
    result
}
