//! Win detection: pure functions over the 5x5 mark grid.

pub mod detector;

pub use detector::{has_win, winning_line, Line, MarkGrid};
