//! Player card state: cells, marks, and toggle validation.

pub mod card;

pub use card::{Cell, CellValue, MarkOutcome, PlayerCard};
