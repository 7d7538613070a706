//! Card layouts - static 5x5 number grids.
//!
//! A layout is the immutable face of a bingo card: 24 distinct numbers
//! plus the center free space. Runtime state (which cells the player
//! has marked) is stored separately in `player::PlayerCard`.
//!
//! Column ranges follow the standard 75-ball game: the B column holds
//! 1-15, I holds 16-30, N holds 31-45 (minus the center), G holds
//! 46-60, and O holds 61-75.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Cards per grid side.
pub const GRID_SIZE: usize = 5;

/// Numbers per column range.
pub const COLUMN_SPAN: u8 = 15;

/// Sentinel value for the center free space.
pub const FREE_SPACE: u8 = 0;

/// Lowest card identifier on the selection board.
pub const CARD_ID_MIN: u8 = 1;

/// Highest card identifier on the selection board.
pub const CARD_ID_MAX: u8 = 99;

/// Identifier for a card layout in the catalog.
///
/// Card ids index the fixed catalog; the selection board shows ids
/// 1 through 99. An id is not guaranteed to be present in a custom
/// catalog - lookups go through `CardCatalog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fixed 5x5 card layout.
///
/// Row 2, column 2 holds the `FREE_SPACE` sentinel; every other cell
/// holds a distinct number within its column range. Layouts are static
/// data, so an invalid grid is a programmer error and panics at
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    grid: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl CardLayout {
    /// Create a layout from a row-major grid.
    ///
    /// Panics if the center cell is not the free space, a cell falls
    /// outside its column range, or two cells share a number.
    #[must_use]
    pub fn new(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let center = GRID_SIZE / 2;
        assert!(
            grid[center][center] == FREE_SPACE,
            "center cell must be the free space"
        );

        let mut seen = [false; 76];
        for (row, cells) in grid.iter().enumerate() {
            for (col, &number) in cells.iter().enumerate() {
                if row == center && col == center {
                    continue;
                }
                let range = Self::column_range(col);
                assert!(
                    range.contains(&number),
                    "cell ({row},{col}) value {number} outside column range {}-{}",
                    range.start(),
                    range.end()
                );
                assert!(!seen[number as usize], "duplicate number {number} in layout");
                seen[number as usize] = true;
            }
        }

        Self { grid }
    }

    /// The inclusive number range for a column (0 = B through 4 = O).
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn column_range(col: usize) -> RangeInclusive<u8> {
        assert!(col < GRID_SIZE, "column {col} out of bounds");
        let base = col as u8 * COLUMN_SPAN;
        base + 1..=base + COLUMN_SPAN
    }

    /// The number at a cell, `FREE_SPACE` for the center.
    #[must_use]
    pub fn number_at(&self, row: usize, col: usize) -> u8 {
        self.grid[row][col]
    }

    /// Row-major view of the grid.
    #[must_use]
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    /// Iterate the 24 numbers on the card (free space excluded).
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.grid
            .iter()
            .flatten()
            .copied()
            .filter(|&n| n != FREE_SPACE)
    }

    /// Whether the card carries this number.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        number != FREE_SPACE && self.numbers().any(|n| n == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> [[u8; GRID_SIZE]; GRID_SIZE] {
        [
            [1, 16, 31, 46, 61],
            [2, 17, 32, 47, 62],
            [3, 18, 0, 48, 63],
            [4, 19, 33, 49, 64],
            [5, 20, 34, 50, 65],
        ]
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId::new(44).to_string(), "44");
        assert_eq!(CardId::new(44).raw(), 44);
    }

    #[test]
    fn test_valid_layout() {
        let layout = CardLayout::new(sample_grid());

        assert_eq!(layout.number_at(2, 2), FREE_SPACE);
        assert_eq!(layout.number_at(0, 0), 1);
        assert_eq!(layout.number_at(4, 4), 65);
        assert_eq!(layout.numbers().count(), 24);
        assert!(layout.contains(34));
        assert!(!layout.contains(75));
        assert!(!layout.contains(FREE_SPACE));
    }

    #[test]
    fn test_column_ranges() {
        assert_eq!(CardLayout::column_range(0), 1..=15);
        assert_eq!(CardLayout::column_range(1), 16..=30);
        assert_eq!(CardLayout::column_range(2), 31..=45);
        assert_eq!(CardLayout::column_range(3), 46..=60);
        assert_eq!(CardLayout::column_range(4), 61..=75);
    }

    #[test]
    #[should_panic(expected = "center cell")]
    fn test_missing_free_space_panics() {
        let mut grid = sample_grid();
        grid[2][2] = 35;
        let _ = CardLayout::new(grid);
    }

    #[test]
    #[should_panic(expected = "outside column range")]
    fn test_out_of_range_cell_panics() {
        let mut grid = sample_grid();
        grid[0][0] = 16; // B column is 1-15
        let _ = CardLayout::new(grid);
    }

    #[test]
    #[should_panic(expected = "duplicate number")]
    fn test_duplicate_number_panics() {
        let mut grid = sample_grid();
        grid[1][0] = 1; // already at (0,0)
        let _ = CardLayout::new(grid);
    }

    #[test]
    fn test_serde_round_trip() {
        let layout = CardLayout::new(sample_grid());
        let json = serde_json::to_string(&layout).unwrap();
        let back: CardLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, back);
    }
}
