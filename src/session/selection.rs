//! The card selection board.
//!
//! Shown during the Selecting phase: ids 1 through 99, each
//! independently marked "already taken" with a configured probability.
//! The taken flags are local display noise simulating contention -
//! nothing is verified against a server, and two concurrent players
//! would see different boards.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CARD_ID_MAX, CARD_ID_MIN};
use crate::core::GameRng;

/// Selection state for one round: taken flags, the current selection,
/// and the confirmation lock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionBoard {
    taken: ImHashSet<CardId>,
    selected: Option<CardId>,
    confirmed: bool,
}

impl SelectionBoard {
    /// Build a board with each id independently taken with the given
    /// probability.
    #[must_use]
    pub(crate) fn simulate(rng: &mut GameRng, taken_probability: f64) -> Self {
        let mut taken = ImHashSet::new();
        for id in CARD_ID_MIN..=CARD_ID_MAX {
            if rng.gen_bool(taken_probability) {
                taken.insert(CardId::new(id));
            }
        }
        Self {
            taken,
            selected: None,
            confirmed: false,
        }
    }

    /// All ids shown on the board, in display order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> {
        (CARD_ID_MIN..=CARD_ID_MAX).map(CardId::new)
    }

    /// Whether an id shows as already taken.
    #[must_use]
    pub fn is_taken(&self, id: CardId) -> bool {
        self.taken.contains(&id)
    }

    /// How many ids are still selectable.
    #[must_use]
    pub fn available_count(&self) -> usize {
        (CARD_ID_MAX - CARD_ID_MIN + 1) as usize - self.taken.len()
    }

    /// The currently selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    /// Whether the selection has been confirmed.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// The locked-in id: the selection, once confirmed.
    #[must_use]
    pub fn confirmed_card(&self) -> Option<CardId> {
        if self.confirmed {
            self.selected
        } else {
            None
        }
    }

    /// Select an id, replacing any previous selection.
    ///
    /// Returns false (no state change) for taken ids and after
    /// confirmation.
    pub(crate) fn select(&mut self, id: CardId) -> bool {
        if self.confirmed {
            log::debug!("selection is locked, card {id} ignored");
            return false;
        }
        if self.is_taken(id) {
            log::debug!("card {id} is taken");
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Lock in the current selection.
    ///
    /// Returns false with no selection or when already confirmed.
    pub(crate) fn confirm(&mut self) -> bool {
        if self.confirmed || self.selected.is_none() {
            return false;
        }
        self.confirmed = true;
        true
    }
}
