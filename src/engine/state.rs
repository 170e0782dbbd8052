//! Per-game state.
//!
//! ## Phase
//!
//! ```text
//! Idle ──start──▶ Running ◀──toggle──▶ Paused
//!                    │
//!                    └──last pair──▶ Completed
//! ```
//!
//! Starting a new game from any phase replaces the whole `GameState`.
//!
//! ## PlayClock
//!
//! Elapsed play time is `now - started_at - paused_total`, frozen while paused
//! and once the game is completed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::timer::Epoch;
use crate::core::{Card, CardId};

/// Game-level state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game dealt yet.
    #[default]
    Idle,
    /// Accepting selections.
    Running,
    /// Clock stopped, selections ignored.
    Paused,
    /// All pairs found. Terminal.
    Completed,
}

/// Elapsed-time bookkeeping for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayClock {
    started_at: Duration,
    paused_at: Option<Duration>,
    paused_total: Duration,
    stopped_at: Option<Duration>,
}

impl PlayClock {
    /// Start counting at `now`.
    #[must_use]
    pub fn started(now: Duration) -> Self {
        Self {
            started_at: now,
            ..Self::default()
        }
    }

    /// Freeze the clock. No-op if already paused or stopped.
    pub fn pause(&mut self, now: Duration) {
        if self.paused_at.is_none() && self.stopped_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Continue from the frozen value.
    pub fn resume(&mut self, now: Duration) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.saturating_sub(paused_at);
        }
    }

    /// Stop for good.
    pub fn stop(&mut self, now: Duration) {
        self.resume(now);
        if self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    /// Play time as of `now`.
    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        let end = self.stopped_at.or(self.paused_at).unwrap_or(now);
        end.saturating_sub(self.started_at)
            .saturating_sub(self.paused_total)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}

/// State of a single dealt game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Game generation.
    pub epoch: Epoch,

    /// Where the game is in its lifecycle.
    pub phase: Phase,

    /// The deck, in board order. `cards[i].id == i`.
    pub cards: Vec<Card>,

    /// Face-up cards awaiting evaluation (at most two).
    pub pending: SmallVec<[CardId; 2]>,

    /// Pairs found so far.
    pub matched_pairs: u32,

    /// Completed two-card attempts.
    pub moves: u32,

    /// Points earned.
    pub score: u32,

    /// Elapsed play time.
    pub clock: PlayClock,
}

impl GameState {
    /// State before any game is dealt.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            epoch: Epoch::default(),
            phase: Phase::Idle,
            cards: Vec::new(),
            pending: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            score: 0,
            clock: PlayClock::default(),
        }
    }

    /// A freshly dealt, running game.
    #[must_use]
    pub fn dealt(epoch: Epoch, cards: Vec<Card>, now: Duration) -> Self {
        Self {
            epoch,
            phase: Phase::Running,
            cards,
            clock: PlayClock::started(now),
            ..Self::idle()
        }
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.matched_pairs == self.total_pairs()
    }

    /// Get a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Get a mutable card.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }
}
