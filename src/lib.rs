//! # bingo-engine
//!
//! A single-player bingo mini-game engine: a phase-flow controller, a
//! timer-driven number caller, and a win-condition checker over pure
//! in-memory grid state. Rendering, button wiring, and the host
//! platform handshake are external collaborators that issue commands
//! and render engine state.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: a `Session` owns everything - phase,
//!    timers, the call pool, the player card. Phase-local state lives
//!    inside the phase variant, so leaving a phase cancels its timers
//!    structurally.
//!
//! 2. **Commands in, events out**: the host calls explicit command
//!    methods and drains a `SessionEvent` queue; the engine never
//!    reaches into a UI tree.
//!
//! 3. **Injectable randomness**: every random decision flows through
//!    a seedable `GameRng`, so tests replay exact sessions.
//!
//! 4. **Cooperative time**: the host calls `tick()` once per logical
//!    second; nothing fires on its own and no operation blocks.
//!
//! ## Modules
//!
//! - `core`: RNG, logical timers, session configuration
//! - `cards`: card identifiers, fixed layouts, the catalog
//! - `calls`: B/I/N/G/O letters, the 75-number pool, draw history
//! - `player`: the player's card and mark validation
//! - `win`: pure win detection over the 5x5 mark grid
//! - `session`: the phase state machine and its commands
//! - `error`: the non-fatal error taxonomy

pub mod calls;
pub mod cards;
pub mod core;
pub mod error;
pub mod player;
pub mod session;
pub mod win;

// Re-export commonly used types
pub use crate::core::{Cadence, Countdown, GameRng, SessionConfig};

pub use crate::cards::{
    CardCatalog, CardId, CardLayout, CARD_ID_MAX, CARD_ID_MIN, FREE_SPACE, GRID_SIZE,
};

pub use crate::calls::{Call, CallEngine, Letter, POOL_SIZE, RECENT_CALLS};

pub use crate::player::{Cell, CellValue, MarkOutcome, PlayerCard};

pub use crate::win::{has_win, winning_line, Line, MarkGrid};

pub use crate::session::{Outcome, PhaseKind, SelectionBoard, Session, SessionEvent};

pub use crate::error::GameError;
