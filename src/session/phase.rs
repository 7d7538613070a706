//! Session phases.
//!
//! Each phase variant owns the state that only exists while the phase
//! is active: its timers, the call engine, the player card, the
//! selection board. Transitioning replaces the variant, which drops
//! that state - a timer can never fire after its phase is exited, and
//! the call pool can never be drawn after it is discarded.

use serde::{Deserialize, Serialize};

use crate::calls::CallEngine;
use crate::core::{Cadence, Countdown};
use crate::player::PlayerCard;

use super::selection::SelectionBoard;

/// Which phase a session is in. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseKind {
    /// The landing screen: stake choice, nothing running.
    Idle,
    /// Card selection under the selection countdown.
    Selecting,
    /// The round: automatic calls under the game clock.
    Playing,
    /// Terminal indicator held briefly before the next round.
    Resolved,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// An accepted claim.
    Win,
    /// The game clock ran out.
    Timeout,
}

#[derive(Clone, Debug)]
pub(crate) struct SelectingState {
    pub countdown: Countdown,
    pub board: SelectionBoard,
}

#[derive(Clone, Debug)]
pub(crate) struct PlayingState {
    pub calls: CallEngine,
    /// `None` in spectator mode.
    pub card: Option<PlayerCard>,
    /// `None` once calling has stopped (pool exhausted).
    pub cadence: Option<Cadence>,
    pub clock: Countdown,
    /// Live while a rejected claim notice is showing.
    pub claim_notice: Option<Countdown>,
    pub win_available: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct ResolvedState {
    pub outcome: Outcome,
    pub hold: Countdown,
}

#[derive(Clone, Debug)]
pub(crate) enum Phase {
    Idle,
    Selecting(SelectingState),
    Playing(PlayingState),
    Resolved(ResolvedState),
}

impl Phase {
    pub(crate) fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Selecting(_) => PhaseKind::Selecting,
            Phase::Playing(_) => PhaseKind::Playing,
            Phase::Resolved(_) => PhaseKind::Resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_kind_projection() {
        assert_eq!(Phase::Idle.kind(), PhaseKind::Idle);

        let resolved = Phase::Resolved(ResolvedState {
            outcome: Outcome::Timeout,
            hold: Countdown::start(3),
        });
        assert_eq!(resolved.kind(), PhaseKind::Resolved);
    }
}
