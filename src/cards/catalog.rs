//! Card catalog - id to layout lookup.
//!
//! The catalog is consumed read-only by the session: selection locks
//! in an id, and the Playing transition resolves it to a layout. The
//! built-in `standard` catalog covers ids 1 through 99 and is
//! identical in every process; hosts shipping their own card data use
//! `register` instead.

use rustc_hash::FxHashMap;

use crate::core::GameRng;
use crate::error::GameError;

use super::layout::{CardId, CardLayout, CARD_ID_MAX, CARD_ID_MIN, FREE_SPACE, GRID_SIZE};

/// Seed for the built-in card table. Fixed so every process generates
/// the same 99 layouts.
const STANDARD_SEED: u64 = 0x42_49_4E_47_4F; // "BINGO"

/// Registry of card layouts.
///
/// ## Example
///
/// ```
/// use bingo_engine::cards::{CardCatalog, CardId};
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 99);
/// assert!(catalog.contains(CardId::new(44)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardLayout>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in fixed card table, ids 1 through 99.
    ///
    /// Generated from a fixed seed by sampling five numbers per column
    /// range, so the table never changes between runs.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let mut rng = GameRng::new(STANDARD_SEED);

        for id in CARD_ID_MIN..=CARD_ID_MAX {
            let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
            for col in 0..GRID_SIZE {
                let mut pool: Vec<u8> = CardLayout::column_range(col).collect();
                rng.shuffle(&mut pool);
                for row in 0..GRID_SIZE {
                    grid[row][col] = pool[row];
                }
            }
            grid[GRID_SIZE / 2][GRID_SIZE / 2] = FREE_SPACE;

            catalog.register(CardId::new(id), CardLayout::new(grid));
        }

        catalog
    }

    /// Register a layout under an id.
    ///
    /// Panics if the id is already registered.
    pub fn register(&mut self, id: CardId, layout: CardLayout) {
        if self.cards.contains_key(&id) {
            panic!("card {id} already registered");
        }
        self.cards.insert(id, layout);
    }

    /// Get a layout by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardLayout> {
        self.cards.get(&id)
    }

    /// Get a layout by id, or `UnknownCard` on a lookup miss.
    pub fn layout(&self, id: CardId) -> Result<&CardLayout, GameError> {
        self.cards.get(&id).ok_or(GameError::UnknownCard(id))
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered cards.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CardLayout)> {
        self.cards.iter().map(|(&id, layout)| (id, layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> CardLayout {
        CardLayout::new([
            [1, 16, 31, 46, 61],
            [2, 17, 32, 47, 62],
            [3, 18, 0, 48, 63],
            [4, 19, 33, 49, 64],
            [5, 20, 34, 50, 65],
        ])
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardId::new(44), sample_layout());

        assert!(catalog.get(CardId::new(44)).is_some());
        assert!(catalog.get(CardId::new(45)).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_layout_lookup_miss() {
        let catalog = CardCatalog::new();

        assert_eq!(
            catalog.layout(CardId::new(7)),
            Err(GameError::UnknownCard(CardId::new(7)))
        );
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardId::new(1), sample_layout());
        catalog.register(CardId::new(1), sample_layout());
    }

    #[test]
    fn test_standard_covers_all_ids() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 99);
        for id in CARD_ID_MIN..=CARD_ID_MAX {
            assert!(catalog.contains(CardId::new(id)), "missing card {id}");
        }
    }

    #[test]
    fn test_standard_is_deterministic() {
        let a = CardCatalog::standard();
        let b = CardCatalog::standard();

        for (id, layout) in a.iter() {
            assert_eq!(Some(layout), b.get(id));
        }
    }

    #[test]
    fn test_standard_layouts_are_distinct() {
        // Sampling 24 of 75 numbers per card makes a collision
        // effectively impossible; a duplicate would mean the generator
        // is not advancing the RNG between cards.
        let catalog = CardCatalog::standard();
        let layouts: Vec<_> = catalog.iter().map(|(_, l)| l.clone()).collect();

        for (i, a) in layouts.iter().enumerate() {
            for b in layouts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
