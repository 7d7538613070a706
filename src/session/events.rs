//! Session events for the presentation layer.
//!
//! The engine never reaches into a UI tree. Commands and ticks append
//! events to a queue; the presentation layer drains it with
//! `Session::take_events` and re-renders what changed.

use serde::{Deserialize, Serialize};

use crate::calls::Call;
use crate::cards::CardId;

use super::phase::{Outcome, PhaseKind};

/// Something the presentation layer may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The session moved to a new phase.
    PhaseChanged(PhaseKind),
    /// A card was selected on the board.
    CardSelected(CardId),
    /// The selection was locked in.
    CardConfirmed(CardId),
    /// The call engine drew a number.
    NumberCalled(Call),
    /// All 75 numbers have been called; the call display shows its
    /// terminal state.
    PoolExhausted,
    /// A card cell changed mark state.
    CellMarked { number: u8, marked: bool },
    /// The card now holds a completed line; a claim would succeed.
    WinAvailable,
    /// A claim was rejected; show the transient notice.
    ClaimRejected,
    /// The round ended.
    Resolved(Outcome),
}
