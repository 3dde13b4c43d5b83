//! Dense row-major cell storage and generation deltas.

use crate::cell::{CellState, Coord};
use std::fmt;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// A dense `height × width` matrix of [`CellState`].
///
/// Cells are stored row-major: the cell at `(x, y)` lives at index
/// `y * width + x`. Dimensions are fixed at construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CellMatrix {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl CellMatrix {
    /// Create an all-dead matrix of `width × height` cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Dead; (width as usize) * (height as usize)],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(x, y)`, or `None` if it lies outside the matrix.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// State of the cell at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// Returns `false` (and changes nothing) when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[CellState] {
        &self.cells
    }

    /// Mutable access to all cells in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Iterate over rows, top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every living cell, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// The matrix as `0`/`1` bytes in row-major order.
    pub fn to_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.as_u8()).collect()
    }

    /// FNV-1a hash of the dimensions and every cell.
    ///
    /// Not cryptographic; used for cheap equality checks when comparing
    /// trajectories.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET;
        hash = fnv1a_u32(hash, self.width);
        hash = fnv1a_u32(hash, self.height);
        for c in &self.cells {
            hash = fnv1a_byte(hash, c.as_u8());
        }
        hash
    }

    /// Births, deaths and population going from `previous` to `self`.
    ///
    /// Returns `None` if the two matrices have different dimensions.
    pub fn delta_from(&self, previous: &CellMatrix) -> Option<GenerationDelta> {
        if self.width != previous.width || self.height != previous.height {
            return None;
        }
        let mut delta = GenerationDelta::default();
        for (&before, &after) in previous.cells.iter().zip(&self.cells) {
            match (before, after) {
                (CellState::Dead, CellState::Alive) => delta.births += 1,
                (CellState::Alive, CellState::Dead) => delta.deaths += 1,
                _ => {}
            }
            if after.is_alive() {
                delta.population += 1;
            }
        }
        Some(delta)
    }
}

impl fmt::Debug for CellMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellMatrix")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

/// Renders living cells as `#` and dead cells as `.`, one line per row.
impl fmt::Display for CellMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for c in row {
                f.write_str(if c.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Change between two consecutive generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    /// Cells that went from dead to alive.
    pub births: usize,
    /// Cells that went from alive to dead.
    pub deaths: usize,
    /// Living cells in the newer generation.
    pub population: usize,
}
