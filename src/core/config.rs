//! Session configuration.
//!
//! All durations are logical seconds (host ticks). The defaults
//! reproduce the production pacing: a 45-second card selection window,
//! a 30-second round with a call every 3 seconds, a 3-second hold on
//! the result screen, and a 1-second "not yet" notice after a rejected
//! claim.

use serde::{Deserialize, Serialize};

/// Tunable timing and simulation parameters for a session.
///
/// Hosts construct one with `Default::default()` and override fields
/// directly:
///
/// ```
/// use bingo_engine::core::SessionConfig;
///
/// let config = SessionConfig {
///     call_interval_secs: 1,
///     ..SessionConfig::default()
/// };
/// assert_eq!(config.selection_secs, 45);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Card selection window, in ticks.
    pub selection_secs: u32,

    /// Round duration, in ticks.
    pub play_secs: u32,

    /// Interval between automatic calls, in ticks.
    pub call_interval_secs: u32,

    /// How long the result screen holds before the next round, in ticks.
    pub resolved_hold_secs: u32,

    /// How long a rejected claim notice stays up, in ticks.
    pub claim_notice_secs: u32,

    /// Probability that a selection-board card shows as already taken.
    ///
    /// Purely local display noise simulating contention; nothing is
    /// verified against a server.
    pub taken_probability: f64,

    /// Stake preselected on the landing screen. Display-only.
    pub default_stake: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            selection_secs: 45,
            play_secs: 30,
            call_interval_secs: 3,
            resolved_hold_secs: 3,
            claim_notice_secs: 1,
            taken_probability: 0.2,
            default_stake: 10,
        }
    }
}
