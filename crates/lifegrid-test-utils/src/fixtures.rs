//! ASCII-art fixtures for cell matrices.

use lifegrid_core::{CellMatrix, CellState};

/// Build a matrix from rows of ASCII art.
///
/// `#`, `O`, `*` and `1` are alive; `.`, `_`, `0` and space are dead. All
/// rows must have the same length.
///
/// # Panics
///
/// On ragged rows or any other character.
pub fn matrix_from_ascii(rows: &[&str]) -> CellMatrix {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut m = CellMatrix::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count() as u32,
            width,
            "row {y} has length {}, expected {width}",
            row.chars().count()
        );
        for (x, ch) in row.chars().enumerate() {
            let state = match ch {
                '#' | 'O' | '*' | '1' => CellState::Alive,
                '.' | '_' | '0' | ' ' => CellState::Dead,
                other => panic!("unexpected fixture character {other:?} at ({x}, {y})"),
            };
            m.set(x as i32, y as i32, state);
        }
    }
    m
}

/// Render a matrix as rows of `#` and `.`.
pub fn matrix_to_ascii(matrix: &CellMatrix) -> Vec<String> {
    matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| if c.is_alive() { '#' } else { '.' })
                .collect()
        })
        .collect()
}
