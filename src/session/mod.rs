//! Session orchestration: phases, timers, commands, events.
//!
//! ## Key Types
//!
//! - `Session`: owns all game state, exposes commands and queries
//! - `PhaseKind` / `Outcome`: where the session is and how a round ended
//! - `SelectionBoard`: the taken-card board shown while Selecting
//! - `SessionEvent`: the feed the presentation layer drains

pub mod controller;
pub mod events;
pub mod phase;
pub mod selection;

pub use controller::Session;
pub use events::SessionEvent;
pub use phase::{Outcome, PhaseKind};
pub use selection::SelectionBoard;
