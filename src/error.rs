//! Error taxonomy.
//!
//! None of these are fatal: every variant marks an invalid action that
//! degrades to a no-op at the session boundary, usually with optional
//! user feedback. The engine has no crash path in normal operation.

use thiserror::Error;

use crate::cards::CardId;

/// Non-fatal game errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Catalog lookup miss. Logged; the session continues as spectator.
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    /// All 75 numbers have been called. The call display enters a
    /// terminal "no more calls" state; the round itself continues.
    #[error("all numbers have been called")]
    ExhaustedPool,

    /// Mark attempted on a number that has not been drawn yet.
    #[error("number {0} has not been called yet")]
    NotYetCalled(u8),

    /// Claim issued without a completed line. The UI shows a transient
    /// notice and reverts.
    #[error("no completed line to claim")]
    NotYetWinning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GameError::UnknownCard(CardId::new(44)).to_string(),
            "card 44 is not in the catalog"
        );
        assert_eq!(
            GameError::NotYetCalled(17).to_string(),
            "number 17 has not been called yet"
        );
        assert_eq!(
            GameError::ExhaustedPool.to_string(),
            "all numbers have been called"
        );
        assert_eq!(
            GameError::NotYetWinning.to_string(),
            "no completed line to claim"
        );
    }
}
