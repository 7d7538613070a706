//! B/I/N/G/O category letters.
//!
//! Every number in the 75-ball pool belongs to one of five 15-number
//! ranges; the letter is derived, never stored independently of the
//! number.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A bingo category letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// All letters in column order.
    pub const ALL: [Letter; 5] = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];

    /// The letter for a pool number, `None` outside 1-75.
    #[must_use]
    pub fn for_number(number: u8) -> Option<Letter> {
        match number {
            1..=15 => Some(Letter::B),
            16..=30 => Some(Letter::I),
            31..=45 => Some(Letter::N),
            46..=60 => Some(Letter::G),
            61..=75 => Some(Letter::O),
            _ => None,
        }
    }

    /// The inclusive number range this letter covers.
    #[must_use]
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            Letter::B => 1..=15,
            Letter::I => 16..=30,
            Letter::N => 31..=45,
            Letter::G => 46..=60,
            Letter::O => 61..=75,
        }
    }

    /// The letter as a character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Letter::B => 'B',
            Letter::I => 'I',
            Letter::N => 'N',
            Letter::G => 'G',
            Letter::O => 'O',
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
