//! The presentation side of the game.
//!
//! A `Session` owns one `GameEngine` and one `HighScoreStore`. It turns
//! player commands into engine calls, turns engine events into notices and
//! display state, and records finished games. It never decides game rules.
//!
//! Display-only state lives here, not in the engine:
//! - which cards are mid-flip (the reveal animation)
//! - which matched pairs have been confirmed on screen
//! - the current notice

mod command;
mod notice;
pub mod render;

pub use command::Command;
pub use notice::{Notice, Tone};

use std::time::Duration;

use log::{error, info, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{CardId, Clock};
use crate::engine::{GameCompleted, GameEngine, GameEvent, SelectOutcome};
use crate::scores::{format_clock, HighScoreEntry, HighScoreStore, HighScoreTable, KeyValueStore};

/// How the app was launched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Deal immediately instead of waiting for the player.
    pub start_new_game: bool,
}

/// A finished game and where it landed in the high-score list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionRecord {
    pub result: GameCompleted,
    pub rank: Option<usize>,
}

/// Engine plus everything needed to show it to a player.
pub struct Session<C: Clock + Clone, S: KeyValueStore> {
    engine: GameEngine<C>,
    scores: HighScoreStore<S>,
    high_scores: HighScoreTable,
    clock: C,
    notice: Option<Notice>,
    turning: FxHashMap<CardId, Duration>,
    confirmed: FxHashSet<CardId>,
    last_completion: Option<CompletionRecord>,
}

impl<C: Clock + Clone, S: KeyValueStore> Session<C, S> {
    /// Wrap an engine. `clock` must be the engine's clock (or share its time).
    pub fn new(engine: GameEngine<C>, scores: HighScoreStore<S>, clock: C) -> Self {
        let high_scores = scores.load();
        Self {
            engine,
            scores,
            high_scores,
            clock,
            notice: None,
            turning: FxHashMap::default(),
            confirmed: FxHashSet::default(),
            last_completion: None,
        }
    }

    /// Apply launch options.
    pub fn launch(&mut self, options: LaunchOptions) {
        if options.start_new_game {
            info!("launched with new-game action");
            self.handle(Command::NewGame);
        }
    }

    /// Apply a command and process whatever it caused.
    ///
    /// Returns the events that were processed; empty means nothing visible
    /// changed apart from possibly the clock.
    pub fn handle(&mut self, command: Command) -> Vec<GameEvent> {
        match command {
            Command::Select(id) => {
                if let SelectOutcome::Ignored(reason) = self.engine.select_card(id) {
                    trace!("selection of {} ignored: {:?}", id, reason);
                }
            }
            Command::NewGame => self.engine.start_new_game(),
            Command::TogglePause => {
                self.engine.toggle_pause();
            }
            Command::Tick | Command::Quit => {}
        }

        self.engine.advance();
        let events = self.engine.drain_events();
        for event in &events {
            self.apply(event);
        }
        self.expire();

        events
    }

    /// Earliest clock time at which something on screen changes by itself.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        let flip = self.engine.config().timing.flip_reveal();
        [
            self.engine.next_timer_due(),
            self.notice.as_ref().map(|n| n.expires_at),
            self.turning.values().min().map(|&at| at + flip),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // === Display state ===

    #[must_use]
    pub fn engine(&self) -> &GameEngine<C> {
        &self.engine
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    #[must_use]
    pub fn last_completion(&self) -> Option<&CompletionRecord> {
        self.last_completion.as_ref()
    }

    /// Card is still in its flip animation.
    #[must_use]
    pub fn is_turning(&self, id: CardId) -> bool {
        let flip = self.engine.config().timing.flip_reveal();
        self.turning
            .get(&id)
            .is_some_and(|&at| self.clock.now() < at + flip)
    }

    /// Matched card whose confirmation delay has passed.
    #[must_use]
    pub fn is_confirmed(&self, id: CardId) -> bool {
        self.confirmed.contains(&id)
    }

    // === Internals ===

    fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { .. } => {
                self.turning.clear();
                self.confirmed.clear();
                self.last_completion = None;
                self.say("New game started! Find all matching pairs.", Tone::Success);
            }
            GameEvent::CardRevealed { card, .. } => {
                self.turning.insert(*card, self.clock.now());
            }
            GameEvent::PairMatched { .. } => self.say("Great match!", Tone::Success),
            GameEvent::PairMismatched { .. } => self.say("Try again!", Tone::Error),
            GameEvent::MatchConfirmed { first, second } => {
                self.confirmed.insert(*first);
                self.confirmed.insert(*second);
            }
            GameEvent::CardsHidden { first, second } => {
                self.turning.remove(first);
                self.turning.remove(second);
            }
            GameEvent::Paused => self.say("Game paused", Tone::Error),
            GameEvent::Resumed => self.say("Game resumed", Tone::Success),
            GameEvent::GameCompleted(done) => self.record(done),
        }
    }

    fn record(&mut self, done: &GameCompleted) {
        let mut text = format!(
            "🎉 Congratulations! You completed the game in {} with {} moves!",
            format_clock(done.elapsed_seconds),
            done.moves
        );

        let rank = match self.scores.record(HighScoreEntry::from(done)) {
            Ok(rank) => rank,
            Err(e) => {
                error!("could not save high score: {e}");
                text.push_str(" (high score not saved)");
                None
            }
        };
        self.high_scores = self.scores.load();
        self.last_completion = Some(CompletionRecord {
            result: done.clone(),
            rank,
        });
        self.say(text, Tone::Success);
    }

    fn say(&mut self, text: impl Into<String>, tone: Tone) {
        let ttl = self.engine.config().timing.message_ttl();
        self.notice = Some(Notice::new(text, tone, self.clock.now(), ttl));
    }

    fn expire(&mut self) {
        let now = self.clock.now();
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }

        let flip = self.engine.config().timing.flip_reveal();
        self.turning.retain(|_, at| now < *at + flip);
    }
}
