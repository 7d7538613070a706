//! Player card state - the runtime side of a card layout.
//!
//! A `PlayerCard` is generated from a catalog layout when the round
//! starts: 24 numbered cells plus the pre-marked center free space.
//! Cells are independent; marking one never affects another. The free
//! space can never be unmarked.

use serde::{Deserialize, Serialize};

use crate::calls::CallEngine;
use crate::cards::{CardCatalog, CardId, CardLayout, FREE_SPACE, GRID_SIZE};
use crate::error::GameError;
use crate::win::MarkGrid;

/// What a cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// The center free space.
    Free,
    /// A numbered cell remembering its source number.
    Number(u8),
}

/// A single card cell: its value and current mark state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub marked: bool,
}

/// Result of a mark toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    /// The cell is now marked.
    Marked,
    /// The cell is now unmarked.
    Unmarked,
    /// Nothing changed: the free space, or a number not on this card.
    Ignored,
}

/// The player's card for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    id: CardId,
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl PlayerCard {
    /// Generate the card for a catalog id.
    ///
    /// Fails with `UnknownCard` when the id is not in the catalog.
    pub fn generate(catalog: &CardCatalog, id: CardId) -> Result<Self, GameError> {
        let layout = catalog.layout(id)?;
        Ok(Self::from_layout(id, layout))
    }

    /// Build the card from a layout, free space pre-marked.
    #[must_use]
    pub fn from_layout(id: CardId, layout: &CardLayout) -> Self {
        let mut cells = [[Cell {
            value: CellValue::Free,
            marked: false,
        }; GRID_SIZE]; GRID_SIZE];

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let number = layout.number_at(row, col);
                cells[row][col] = if number == FREE_SPACE {
                    Cell {
                        value: CellValue::Free,
                        marked: true,
                    }
                } else {
                    Cell {
                        value: CellValue::Number(number),
                        marked: false,
                    }
                };
            }
        }

        Self { id, cells }
    }

    /// The catalog id this card was generated from.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The cell at a grid position.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Whether the cell carrying `number` is currently marked.
    #[must_use]
    pub fn is_marked(&self, number: u8) -> bool {
        self.position_of(number)
            .map(|(row, col)| self.cells[row][col].marked)
            .unwrap_or(false)
    }

    /// Iterate the 24 numbers on the card.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().filter_map(|cell| match cell.value {
            CellValue::Number(n) => Some(n),
            CellValue::Free => None,
        })
    }

    /// Toggle the cell carrying `number`, validated against the calls
    /// made so far.
    ///
    /// The free space (`FREE_SPACE`) and numbers not on this card are
    /// ignored. A number that has not been called yet is rejected with
    /// `NotYetCalled` and no state change - a player may only mark
    /// numbers that have actually been drawn.
    pub fn toggle(&mut self, number: u8, calls: &CallEngine) -> Result<MarkOutcome, GameError> {
        if number == FREE_SPACE {
            log::debug!("free space stays marked");
            return Ok(MarkOutcome::Ignored);
        }

        let (row, col) = match self.position_of(number) {
            Some(position) => position,
            None => {
                log::debug!("number {number} is not on card {}", self.id);
                return Ok(MarkOutcome::Ignored);
            }
        };

        if !calls.is_called(number) {
            return Err(GameError::NotYetCalled(number));
        }

        let cell = &mut self.cells[row][col];
        cell.marked = !cell.marked;
        Ok(if cell.marked {
            MarkOutcome::Marked
        } else {
            MarkOutcome::Unmarked
        })
    }

    /// Project the 5x5 boolean mark grid for win detection.
    #[must_use]
    pub fn mark_grid(&self) -> MarkGrid {
        let mut grid = [[false; GRID_SIZE]; GRID_SIZE];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                grid[row][col] = self.cells[row][col].marked;
            }
        }
        grid
    }

    fn position_of(&self, number: u8) -> Option<(usize, usize)> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col].value == CellValue::Number(number) {
                    return Some((row, col));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn sample_layout() -> CardLayout {
        CardLayout::new([
            [1, 16, 31, 46, 61],
            [2, 17, 32, 47, 62],
            [3, 18, 0, 48, 63],
            [4, 19, 33, 49, 64],
            [5, 20, 34, 50, 65],
        ])
    }

    fn card_and_calls() -> (PlayerCard, CallEngine) {
        let card = PlayerCard::from_layout(CardId::new(44), &sample_layout());
        (card, CallEngine::new())
    }

    /// Draw until `number` has been called.
    fn call_number(calls: &mut CallEngine, rng: &mut GameRng, number: u8) {
        while !calls.is_called(number) {
            calls.draw(rng).unwrap();
        }
    }

    #[test]
    fn test_generate_from_catalog() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardId::new(44), sample_layout());

        let card = PlayerCard::generate(&catalog, CardId::new(44)).unwrap();
        assert_eq!(card.id(), CardId::new(44));

        assert_eq!(
            PlayerCard::generate(&catalog, CardId::new(45)),
            Err(GameError::UnknownCard(CardId::new(45)))
        );
    }

    #[test]
    fn test_free_space_pre_marked() {
        let (card, _) = card_and_calls();

        assert_eq!(card.cell(2, 2).value, CellValue::Free);
        assert!(card.cell(2, 2).marked);

        // The other 24 cells start unmarked and keep their numbers.
        let marked_count = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| card.cell(r, c).marked)
            .count();
        assert_eq!(marked_count, 1);
        assert_eq!(card.numbers().count(), 24);
    }

    #[test]
    fn test_toggle_free_space_never_changes_state() {
        let (mut card, calls) = card_and_calls();

        assert_eq!(card.toggle(FREE_SPACE, &calls), Ok(MarkOutcome::Ignored));
        assert!(card.cell(2, 2).marked);
    }

    #[test]
    fn test_toggle_rejected_before_call() {
        let (mut card, calls) = card_and_calls();

        assert_eq!(card.toggle(5, &calls), Err(GameError::NotYetCalled(5)));
        assert!(!card.is_marked(5));
    }

    #[test]
    fn test_toggle_flips_after_call() {
        let (mut card, mut calls) = card_and_calls();
        let mut rng = GameRng::new(42);
        call_number(&mut calls, &mut rng, 5);

        assert_eq!(card.toggle(5, &calls), Ok(MarkOutcome::Marked));
        assert!(card.is_marked(5));

        assert_eq!(card.toggle(5, &calls), Ok(MarkOutcome::Unmarked));
        assert!(!card.is_marked(5));
    }

    #[test]
    fn test_toggle_number_not_on_card() {
        let (mut card, mut calls) = card_and_calls();
        let mut rng = GameRng::new(42);
        call_number(&mut calls, &mut rng, 75);

        // 75 has been called but is not on this card.
        assert_eq!(card.toggle(75, &calls), Ok(MarkOutcome::Ignored));
    }

    #[test]
    fn test_cells_are_independent() {
        let (mut card, mut calls) = card_and_calls();
        let mut rng = GameRng::new(42);
        call_number(&mut calls, &mut rng, 5);
        call_number(&mut calls, &mut rng, 20);

        card.toggle(5, &calls).unwrap();
        card.toggle(20, &calls).unwrap();
        card.toggle(5, &calls).unwrap();

        assert!(!card.is_marked(5));
        assert!(card.is_marked(20));
    }

    #[test]
    fn test_mark_grid_projection() {
        let (mut card, mut calls) = card_and_calls();
        let mut rng = GameRng::new(42);
        call_number(&mut calls, &mut rng, 1);

        card.toggle(1, &calls).unwrap();
        let grid = card.mark_grid();

        assert!(grid[0][0]); // number 1
        assert!(grid[2][2]); // free space
        assert!(!grid[4][4]);
    }
}
