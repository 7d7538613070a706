//! Win detection over the 5x5 mark grid.
//!
//! Pure functions: no side effects, callable any number of times, the
//! result depends only on the current grid shape. The free space
//! contributes as an always-marked cell because `PlayerCard` projects
//! it that way.

use serde::{Deserialize, Serialize};

use crate::cards::GRID_SIZE;

/// The 5x5 boolean mark grid projected from a player card.
pub type MarkGrid = [[bool; GRID_SIZE]; GRID_SIZE];

/// A completed winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

impl Line {
    /// The five grid positions making up this line, for UI highlighting.
    #[must_use]
    pub fn cells(self) -> [(usize, usize); GRID_SIZE] {
        let mut cells = [(0, 0); GRID_SIZE];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = match self {
                Line::Row(row) => (row, i),
                Line::Column(col) => (i, col),
                Line::Diagonal => (i, i),
                Line::AntiDiagonal => (i, GRID_SIZE - 1 - i),
            };
        }
        cells
    }
}

/// Whether any row, column, or diagonal is fully marked.
#[must_use]
pub fn has_win(grid: &MarkGrid) -> bool {
    winning_line(grid).is_some()
}

/// The first completed line, if any: rows, then columns, then the two
/// diagonals.
#[must_use]
pub fn winning_line(grid: &MarkGrid) -> Option<Line> {
    for row in 0..GRID_SIZE {
        if grid[row].iter().all(|&marked| marked) {
            return Some(Line::Row(row));
        }
    }
    for col in 0..GRID_SIZE {
        if (0..GRID_SIZE).all(|row| grid[row][col]) {
            return Some(Line::Column(col));
        }
    }
    if (0..GRID_SIZE).all(|i| grid[i][i]) {
        return Some(Line::Diagonal);
    }
    if (0..GRID_SIZE).all(|i| grid[i][GRID_SIZE - 1 - i]) {
        return Some(Line::AntiDiagonal);
    }
    None
}
