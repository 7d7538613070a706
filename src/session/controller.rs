//! The session controller.
//!
//! `Session` owns all game state - no ambient globals - and exposes
//! explicit commands plus a `tick` driver. The host wires its buttons
//! to commands, calls `tick` once per logical second, drains events,
//! and renders the queried state.
//!
//! ## Phase flow
//!
//! Idle -> Selecting -> Playing -> Resolved -> Selecting -> ...
//!
//! `exit` returns to Idle from anywhere; `refresh` abandons a running
//! or resolved round and starts a new selection.

use log::{debug, warn};
use smallvec::SmallVec;

use crate::calls::{Call, CallEngine, RECENT_CALLS};
use crate::cards::{CardCatalog, CardId};
use crate::core::{Cadence, Countdown, GameRng, SessionConfig};
use crate::error::GameError;
use crate::player::{MarkOutcome, PlayerCard};
use crate::win::has_win;

use super::events::SessionEvent;
use super::phase::{Outcome, Phase, PhaseKind, PlayingState, ResolvedState, SelectingState};
use super::selection::SelectionBoard;

/// Deferred phase switch decided inside `tick`.
enum Transition {
    StartPlaying(Option<CardId>),
    ResolveTimeout,
    NextRound,
}

/// A single-player bingo session.
///
/// ## Example
///
/// ```
/// use bingo_engine::cards::CardCatalog;
/// use bingo_engine::session::{PhaseKind, Session};
///
/// let mut session = Session::with_seed(CardCatalog::standard(), Default::default(), 42);
/// session.play();
/// assert_eq!(session.phase(), PhaseKind::Selecting);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    catalog: CardCatalog,
    rng: GameRng,
    stake: u32,
    phase: Phase,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Create a session with the default configuration and an
    /// entropy-seeded RNG.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self::with_rng(catalog, SessionConfig::default(), GameRng::from_entropy())
    }

    /// Create a session with a custom configuration.
    #[must_use]
    pub fn with_config(catalog: CardCatalog, config: SessionConfig) -> Self {
        Self::with_rng(catalog, config, GameRng::from_entropy())
    }

    /// Create a session with a fixed RNG seed. Draws, the taken-card
    /// simulation, and therefore entire rounds replay exactly.
    #[must_use]
    pub fn with_seed(catalog: CardCatalog, config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(catalog, config, GameRng::new(seed))
    }

    fn with_rng(catalog: CardCatalog, config: SessionConfig, rng: GameRng) -> Self {
        let stake = config.default_stake;
        Self {
            config,
            catalog,
            rng,
            stake,
            phase: Phase::Idle,
            events: Vec::new(),
        }
    }

    // === Commands ===

    /// Choose the stake shown for this session. Display-only; allowed
    /// on the landing screen.
    pub fn choose_stake(&mut self, stake: u32) {
        match self.phase {
            Phase::Idle => self.stake = stake,
            _ => debug!("stake is locked once a session starts"),
        }
    }

    /// Start playing with the chosen stake: Idle -> Selecting.
    pub fn play(&mut self) {
        match self.phase {
            Phase::Idle => self.enter_selecting(),
            _ => debug!("play ignored, session already running"),
        }
    }

    /// Select a card on the board, replacing any previous selection.
    ///
    /// Returns true if the selection took effect. Taken cards, a
    /// confirmed board, and any phase but Selecting leave state
    /// unchanged.
    pub fn select_card(&mut self, id: CardId) -> bool {
        match &mut self.phase {
            Phase::Selecting(sel) => {
                if sel.board.select(id) {
                    self.events.push(SessionEvent::CardSelected(id));
                    true
                } else {
                    false
                }
            }
            _ => {
                debug!("select_card ignored outside selection");
                false
            }
        }
    }

    /// Lock in the selected card and disable further selection.
    ///
    /// Returns true if the confirmation took effect.
    pub fn confirm_card(&mut self) -> bool {
        match &mut self.phase {
            Phase::Selecting(sel) => {
                if sel.board.confirm() {
                    let id = sel.board.selected().expect("confirm requires a selection");
                    self.events.push(SessionEvent::CardConfirmed(id));
                    true
                } else {
                    false
                }
            }
            _ => {
                debug!("confirm_card ignored outside selection");
                false
            }
        }
    }

    /// Toggle the mark on the cell carrying `number`.
    ///
    /// Only numbers that have been called can be marked; the free
    /// space and numbers not on the card are ignored. A successful
    /// mark runs a win check, surfaced via `WinAvailable` and
    /// `win_available`.
    pub fn toggle_mark(&mut self, number: u8) -> Result<MarkOutcome, GameError> {
        let play = match &mut self.phase {
            Phase::Playing(play) => play,
            _ => {
                debug!("toggle_mark ignored outside play");
                return Ok(MarkOutcome::Ignored);
            }
        };
        let card = match play.card.as_mut() {
            Some(card) => card,
            None => {
                debug!("no card to mark in spectator mode");
                return Ok(MarkOutcome::Ignored);
            }
        };

        let outcome = card.toggle(number, &play.calls)?;
        match outcome {
            MarkOutcome::Marked => {
                self.events.push(SessionEvent::CellMarked {
                    number,
                    marked: true,
                });
                if !play.win_available && has_win(&card.mark_grid()) {
                    play.win_available = true;
                    self.events.push(SessionEvent::WinAvailable);
                }
            }
            MarkOutcome::Unmarked => {
                self.events.push(SessionEvent::CellMarked {
                    number,
                    marked: false,
                });
                play.win_available = has_win(&card.mark_grid());
            }
            MarkOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Claim a win.
    ///
    /// Succeeds only if the card currently holds a completed line, and
    /// resolves the round. Otherwise `NotYetWinning`: no state change
    /// beyond a transient notice that reverts after
    /// `claim_notice_secs`.
    pub fn claim(&mut self) -> Result<(), GameError> {
        match &mut self.phase {
            Phase::Playing(play) => {
                let winning = play
                    .card
                    .as_ref()
                    .map_or(false, |card| has_win(&card.mark_grid()));
                if !winning {
                    play.claim_notice = Some(Countdown::start(self.config.claim_notice_secs));
                    self.events.push(SessionEvent::ClaimRejected);
                    return Err(GameError::NotYetWinning);
                }
            }
            _ => {
                debug!("claim ignored outside play");
                return Ok(());
            }
        }
        self.enter_resolved(Outcome::Win);
        Ok(())
    }

    /// Leave the session: any non-Idle phase -> Idle. All pending
    /// timers die with the phase.
    pub fn exit(&mut self) {
        if matches!(self.phase, Phase::Idle) {
            return;
        }
        self.phase = Phase::Idle;
        self.events.push(SessionEvent::PhaseChanged(PhaseKind::Idle));
    }

    /// Abandon the current round and start a new selection. Available
    /// while Playing or Resolved; the stake carries over.
    pub fn refresh(&mut self) {
        match self.phase {
            Phase::Playing(_) | Phase::Resolved(_) => self.enter_selecting(),
            _ => debug!("refresh ignored outside a round"),
        }
    }

    // === Clock ===

    /// Advance the session by one logical second.
    ///
    /// Within a Playing tick the game clock is evaluated before the
    /// call cadence: a clock expiring mid-interval suppresses that
    /// tick's draw.
    pub fn tick(&mut self) {
        let mut transition = None;

        match &mut self.phase {
            Phase::Idle => {}
            Phase::Selecting(sel) => {
                if sel.countdown.tick() {
                    transition = Some(Transition::StartPlaying(sel.board.confirmed_card()));
                }
            }
            Phase::Playing(play) => {
                if let Some(notice) = play.claim_notice.as_mut() {
                    if notice.tick() {
                        play.claim_notice = None;
                    }
                }
                if play.clock.tick() {
                    transition = Some(Transition::ResolveTimeout);
                } else if let Some(cadence) = play.cadence.as_mut() {
                    if cadence.tick() {
                        match play.calls.draw(&mut self.rng) {
                            Ok(call) => self.events.push(SessionEvent::NumberCalled(call)),
                            Err(_) => {
                                // ExhaustedPool: stop calling, keep playing.
                                play.cadence = None;
                                self.events.push(SessionEvent::PoolExhausted);
                            }
                        }
                    }
                }
            }
            Phase::Resolved(res) => {
                if res.hold.tick() {
                    transition = Some(Transition::NextRound);
                }
            }
        }

        match transition {
            Some(Transition::StartPlaying(confirmed)) => self.enter_playing(confirmed),
            Some(Transition::ResolveTimeout) => self.enter_resolved(Outcome::Timeout),
            Some(Transition::NextRound) => self.enter_selecting(),
            None => {}
        }
    }

    /// Advance the session by `secs` logical seconds.
    pub fn advance(&mut self, secs: u32) {
        for _ in 0..secs {
            self.tick();
        }
    }

    // === Queries ===

    /// The active phase.
    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// The stake shown for this session.
    #[must_use]
    pub fn stake(&self) -> u32 {
        self.stake
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The card catalog backing this session.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The selection board, while Selecting.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectionBoard> {
        match &self.phase {
            Phase::Selecting(sel) => Some(&sel.board),
            _ => None,
        }
    }

    /// The call engine, while Playing.
    #[must_use]
    pub fn calls(&self) -> Option<&CallEngine> {
        match &self.phase {
            Phase::Playing(play) => Some(&play.calls),
            _ => None,
        }
    }

    /// The player card, while Playing with a confirmed card.
    #[must_use]
    pub fn card(&self) -> Option<&PlayerCard> {
        match &self.phase {
            Phase::Playing(play) => play.card.as_ref(),
            _ => None,
        }
    }

    /// The most recent call.
    #[must_use]
    pub fn current_call(&self) -> Option<Call> {
        self.calls().and_then(CallEngine::current)
    }

    /// The most recent calls, newest first, at most `RECENT_CALLS`.
    #[must_use]
    pub fn recent_calls(&self) -> SmallVec<[Call; RECENT_CALLS]> {
        self.calls()
            .map(|calls| calls.recent(RECENT_CALLS))
            .unwrap_or_default()
    }

    /// Whether a number has been called this round. False outside
    /// Playing.
    #[must_use]
    pub fn is_called(&self, number: u8) -> bool {
        self.calls().map_or(false, |calls| calls.is_called(number))
    }

    /// Whether all 75 numbers have been called this round.
    #[must_use]
    pub fn pool_exhausted(&self) -> bool {
        self.calls().map_or(false, CallEngine::is_exhausted)
    }

    /// Whether the card currently holds a completed line.
    #[must_use]
    pub fn win_available(&self) -> bool {
        match &self.phase {
            Phase::Playing(play) => play.win_available,
            _ => false,
        }
    }

    /// Whether a rejected-claim notice is currently showing.
    #[must_use]
    pub fn claim_notice_active(&self) -> bool {
        match &self.phase {
            Phase::Playing(play) => play.claim_notice.is_some(),
            _ => false,
        }
    }

    /// How the round ended, while Resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.phase {
            Phase::Resolved(res) => Some(res.outcome),
            _ => None,
        }
    }

    /// Seconds left on the phase countdown: the selection window while
    /// Selecting, the game clock while Playing.
    #[must_use]
    pub fn time_left(&self) -> Option<u32> {
        match &self.phase {
            Phase::Selecting(sel) => Some(sel.countdown.remaining()),
            Phase::Playing(play) => Some(play.clock.remaining()),
            _ => None,
        }
    }

    /// Drain the pending events for the presentation layer.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Transitions ===

    fn enter_selecting(&mut self) {
        let board = SelectionBoard::simulate(&mut self.rng, self.config.taken_probability);
        self.phase = Phase::Selecting(SelectingState {
            countdown: Countdown::start(self.config.selection_secs),
            board,
        });
        self.events
            .push(SessionEvent::PhaseChanged(PhaseKind::Selecting));
    }

    fn enter_playing(&mut self, confirmed: Option<CardId>) {
        let card = confirmed.and_then(|id| match PlayerCard::generate(&self.catalog, id) {
            Ok(card) => Some(card),
            Err(err) => {
                warn!("{err}, continuing as spectator");
                None
            }
        });

        self.phase = Phase::Playing(PlayingState {
            calls: CallEngine::new(),
            card,
            cadence: Some(Cadence::every(self.config.call_interval_secs)),
            clock: Countdown::start(self.config.play_secs),
            claim_notice: None,
            win_available: false,
        });
        self.events
            .push(SessionEvent::PhaseChanged(PhaseKind::Playing));
    }

    fn enter_resolved(&mut self, outcome: Outcome) {
        self.phase = Phase::Resolved(ResolvedState {
            outcome,
            hold: Countdown::start(self.config.resolved_hold_secs),
        });
        self.events.push(SessionEvent::Resolved(outcome));
        self.events
            .push(SessionEvent::PhaseChanged(PhaseKind::Resolved));
    }
}
