//! Static catalog of named seed patterns.
//!
//! Every entry is a compiled-in list of `(x, y)` offsets relative to the
//! pattern's top-left corner. Lookup is by name; hyphens and underscores
//! are interchangeable, so `"r-pentomino"` finds `r_pentomino`.

use crate::cell::Coord;
use crate::error::PatternError;

/// A named, immutable set of cells to switch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    cells: &'static [Coord],
}

impl Pattern {
    /// Catalog name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Relative offsets of the living cells.
    pub fn cells(&self) -> &'static [Coord] {
        self.cells
    }

    /// Number of living cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the pattern has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(width, height)` of the smallest box containing every cell.
    pub fn bounding_box(&self) -> (u32, u32) {
        let w = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (w as u32, h as u32)
    }
}

const GLIDER: &[Coord] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
const BLINKER: &[Coord] = &[(0, 1), (1, 1), (2, 1)];
const BLOCK: &[Coord] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
const BEACON: &[Coord] = &[(0, 0), (1, 0), (0, 1), (2, 3), (3, 2), (3, 3)];
const TOAD: &[Coord] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];
const R_PENTOMINO: &[Coord] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];
/// Gosper glider gun: emits a glider every 30 generations.
const GLIDER_GUN: &[Coord] = &[
    (24, 0),
    (22, 1),
    (24, 1),
    (12, 2),
    (13, 2),
    (20, 2),
    (21, 2),
    (34, 2),
    (35, 2),
    (11, 3),
    (15, 3),
    (20, 3),
    (21, 3),
    (34, 3),
    (35, 3),
    (0, 4),
    (1, 4),
    (10, 4),
    (16, 4),
    (20, 4),
    (21, 4),
    (0, 5),
    (1, 5),
    (10, 5),
    (14, 5),
    (16, 5),
    (17, 5),
    (22, 5),
    (24, 5),
    (10, 6),
    (16, 6),
    (24, 6),
    (11, 7),
    (15, 7),
    (12, 8),
    (13, 8),
];

static CATALOG: [Pattern; 7] = [
    Pattern {
        name: "glider",
        cells: GLIDER,
    },
    Pattern {
        name: "blinker",
        cells: BLINKER,
    },
    Pattern {
        name: "block",
        cells: BLOCK,
    },
    Pattern {
        name: "beacon",
        cells: BEACON,
    },
    Pattern {
        name: "toad",
        cells: TOAD,
    },
    Pattern {
        name: "r_pentomino",
        cells: R_PENTOMINO,
    },
    Pattern {
        name: "glider_gun",
        cells: GLIDER_GUN,
    },
];

/// Every catalog entry, in catalog order.
pub fn patterns() -> &'static [Pattern] {
    &CATALOG
}

/// Catalog names, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|p| p.name)
}

/// Look up a pattern by name.
///
/// # Errors
///
/// Returns [`PatternError::NotFound`] if no entry matches.
pub fn pattern(name: &str) -> Result<&'static Pattern, PatternError> {
    let wanted = name.trim();
    CATALOG
        .iter()
        .find(|p| {
            p.name.len() == wanted.len()
                && p.name
                    .bytes()
                    .zip(wanted.bytes())
                    .all(|(a, b)| a == b || (a == b'_' && b == b'-'))
        })
        .ok_or_else(|| PatternError::NotFound {
            name: name.to_string(),
        })
}
