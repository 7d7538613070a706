//! Card system: identifiers, fixed layouts, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card layout, 1 through 99 on the board
//! - `CardLayout`: Static 5x5 grid with the center free space
//! - `CardCatalog`: Layout lookup plus the built-in standard table

pub mod catalog;
pub mod layout;

pub use catalog::CardCatalog;
pub use layout::{
    CardId, CardLayout, CARD_ID_MAX, CARD_ID_MIN, COLUMN_SPAN, FREE_SPACE, GRID_SIZE,
};
