//! The binary cell state and the [`Coord`] type alias.

use crate::error::CellStateError;
use std::fmt;
use std::ops::Not;

/// A cell coordinate as `(x, y)`.
///
/// Signed so that pattern offsets and edge-adjacent addressing can fall
/// off the grid and be clipped rather than wrapping around `u32`. A
/// coordinate is in bounds when `0 <= x < width` and `0 <= y < height`.
pub type Coord = (i32, i32);

/// State of a single cell: dead (`0`) or alive (`1`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// Dead cell (`0`).
    #[default]
    Dead = 0,
    /// Living cell (`1`).
    Alive = 1,
}

impl CellState {
    /// Returns `true` for [`CellState::Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// Numeric value of the state: `0` or `1`.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Not for CellState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state.as_u8()
    }
}

impl TryFrom<u8> for CellState {
    type Error = CellStateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dead),
            1 => Ok(Self::Alive),
            other => Err(CellStateError { value: other }),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
