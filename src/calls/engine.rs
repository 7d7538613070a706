//! The call engine: the 75-number pool and its draw history.
//!
//! The engine owns two views of the same progression: the called-set
//! (for membership checks when validating marks and rendering the
//! master board) and the ordered history (draw order, for the current
//! call and the recent-calls strip). Both are persistent structures,
//! so a UI layer can clone a snapshot in O(1).
//!
//! ## Invariants
//!
//! - A number is never drawn twice: history length always equals
//!   called-set size.
//! - Called and uncalled partition the pool; the called-set only grows
//!   within a session.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;
use crate::error::GameError;

use super::letter::Letter;

/// Size of the number pool.
pub const POOL_SIZE: u8 = 75;

/// How many recent calls the history strip shows.
pub const RECENT_CALLS: usize = 4;

/// A drawn number paired with its category letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Call {
    pub letter: Letter,
    pub number: u8,
}

impl Call {
    /// Build the call for a pool number, `None` outside 1-75.
    #[must_use]
    pub fn for_number(number: u8) -> Option<Call> {
        Letter::for_number(number).map(|letter| Call { letter, number })
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.letter, self.number)
    }
}

/// Owns the pool of 75 numbers, the called-set, and the draw history.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CallEngine {
    called: ImHashSet<u8>,
    history: Vector<Call>,
}

impl CallEngine {
    /// Create an engine with a fresh, fully uncalled pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next number uniformly at random from the uncalled
    /// remainder.
    ///
    /// Returns `Err(ExhaustedPool)` once all 75 numbers have been
    /// called; callers treat that as a terminal display state, not a
    /// failure.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Call, GameError> {
        let uncalled: Vec<u8> = (1..=POOL_SIZE)
            .filter(|n| !self.called.contains(n))
            .collect();

        let number = *rng.choose(&uncalled).ok_or(GameError::ExhaustedPool)?;
        let call = Call::for_number(number).expect("pool numbers are 1-75");

        self.called.insert(number);
        self.history.push_back(call);
        log::debug!("called {call}");

        Ok(call)
    }

    /// Clear the called-set and history, restoring the full pool.
    pub fn reset(&mut self) {
        self.called.clear();
        self.history.clear();
    }

    /// Whether a number has been called this session.
    #[must_use]
    pub fn is_called(&self, number: u8) -> bool {
        self.called.contains(&number)
    }

    /// How many numbers have been called.
    #[must_use]
    pub fn called_count(&self) -> usize {
        self.called.len()
    }

    /// Whether every number in the pool has been called.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.called.len() == POOL_SIZE as usize
    }

    /// The most recent call, if any.
    #[must_use]
    pub fn current(&self) -> Option<Call> {
        self.history.last().copied()
    }

    /// The full draw history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Call> {
        &self.history
    }

    /// The most recent `n` calls, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> SmallVec<[Call; RECENT_CALLS]> {
        self.history.iter().rev().take(n).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_for_number() {
        let call = Call::for_number(5).unwrap();
        assert_eq!(call.letter, Letter::B);
        assert_eq!(call.number, 5);
        assert_eq!(call.to_string(), "B-5");

        assert!(Call::for_number(0).is_none());
        assert!(Call::for_number(76).is_none());
    }

    #[test]
    fn test_draw_updates_both_views() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(42);

        let call = engine.draw(&mut rng).unwrap();

        assert!(engine.is_called(call.number));
        assert_eq!(engine.called_count(), 1);
        assert_eq!(engine.current(), Some(call));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_no_repeats_over_full_pool() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(7);

        for _ in 0..POOL_SIZE {
            engine.draw(&mut rng).unwrap();
            assert_eq!(engine.history().len(), engine.called_count());
        }

        let mut numbers: Vec<u8> = engine.history().iter().map(|c| c.number).collect();
        numbers.sort_unstable();
        let expected: Vec<u8> = (1..=POOL_SIZE).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_exhausted_pool() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(7);

        for _ in 0..POOL_SIZE {
            engine.draw(&mut rng).unwrap();
        }

        assert!(engine.is_exhausted());
        assert_eq!(engine.draw(&mut rng), Err(GameError::ExhaustedPool));
        // The failed draw records nothing.
        assert_eq!(engine.history().len(), POOL_SIZE as usize);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(42);

        for _ in 0..6 {
            engine.draw(&mut rng).unwrap();
        }

        let recent = engine.recent(RECENT_CALLS);
        assert_eq!(recent.len(), 4);

        let history = engine.history();
        assert_eq!(recent[0], history[5]);
        assert_eq!(recent[3], history[2]);
    }

    #[test]
    fn test_recent_when_short() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(42);

        assert!(engine.recent(RECENT_CALLS).is_empty());

        engine.draw(&mut rng).unwrap();
        assert_eq!(engine.recent(RECENT_CALLS).len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(42);

        for _ in 0..10 {
            engine.draw(&mut rng).unwrap();
        }
        engine.reset();

        assert_eq!(engine.called_count(), 0);
        assert!(engine.history().is_empty());
        assert!(engine.current().is_none());
        assert!(!engine.is_exhausted());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut engine = CallEngine::new();
        let mut rng = GameRng::new(42);
        engine.draw(&mut rng).unwrap();

        let snapshot = engine.clone();
        engine.draw(&mut rng).unwrap();

        assert_eq!(snapshot.called_count(), 1);
        assert_eq!(engine.called_count(), 2);
    }
}
