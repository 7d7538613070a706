//! Core building blocks: RNG, logical timers, session configuration.
//!
//! These types are game-agnostic plumbing; the bingo semantics live in
//! the `calls`, `cards`, `player`, `win`, and `session` modules.

pub mod config;
pub mod rng;
pub mod timer;

pub use config::SessionConfig;
pub use rng::GameRng;
pub use timer::{Cadence, Countdown};
