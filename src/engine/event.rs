//! Engine events and selection outcomes.
//!
//! The engine never reaches into presentation. It records what happened as
//! `GameEvent`s, which the owner drains and renders however it likes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timer::Epoch;
use crate::core::{CardId, Symbol};

/// Payload of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCompleted {
    /// Game that finished.
    pub epoch: Epoch,
    /// Final score.
    pub score: u32,
    /// Two-card attempts taken.
    pub moves: u32,
    /// Play time, pauses excluded.
    pub elapsed_seconds: u64,
    /// Wall-clock completion time.
    pub finished_at: DateTime<Utc>,
}

/// Something that happened inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt.
    GameStarted { epoch: Epoch },

    /// A card was turned face up.
    CardRevealed { card: CardId, symbol: Symbol },

    /// Two cards with the same symbol were turned up.
    PairMatched { first: CardId, second: CardId, score: u32 },

    /// Two different cards were turned up. They revert when the revert timer fires.
    PairMismatched { first: CardId, second: CardId },

    /// The match-confirm delay for a pair elapsed.
    MatchConfirmed { first: CardId, second: CardId },

    /// A mismatched pair turned face down.
    CardsHidden { first: CardId, second: CardId },

    /// Play clock stopped.
    Paused,

    /// Play clock restarted.
    Resumed,

    /// Every pair was found.
    GameCompleted(GameCompleted),
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No game has been started.
    NotStarted,
    /// The game is paused.
    Paused,
    /// The game is over.
    GameOver,
    /// No card with that id.
    UnknownCard,
    /// The card is already face up.
    AlreadyFlipped,
    /// The card is part of a found pair.
    AlreadyMatched,
    /// Two cards are already awaiting evaluation.
    PairPending,
}

/// Result of `GameEngine::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(Rejection),

    /// First card of an attempt turned up.
    Revealed(CardId),

    /// Second card completed a pair.
    Matched {
        first: CardId,
        second: CardId,
        /// This pair finished the game.
        completed: bool,
    },

    /// Second card did not match the first.
    Mismatched { first: CardId, second: CardId },
}

impl SelectOutcome {
    /// Did the selection change game state?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }

    /// Did this selection finish an attempt (a move)?
    #[must_use]
    pub fn completes_move(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. })
    }
}
