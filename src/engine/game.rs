//! The memory-game engine.

use log::{debug, info, trace};

use super::deck;
use super::event::{GameCompleted, GameEvent, Rejection, SelectOutcome};
use super::state::{GameState, Phase};
use super::timer::{Epoch, ScheduledTask, TimerKind, TimerQueue};
use crate::core::{Card, CardId, Clock, ConfigError, GameConfig, GameRng, GameRngState, Symbol, SystemClock};

/// Owns one memory game at a time.
///
/// All mutation goes through `&mut self`, so a host that shares the engine
/// across threads has to serialize access itself (one owning task, or a
/// mutex around the whole engine).
///
/// ```
/// use memory_match::core::{CardId, GameConfig, ManualClock};
/// use memory_match::engine::{GameEngine, SelectOutcome};
/// use memory_match::core::GameRng;
///
/// let clock = ManualClock::new();
/// let mut engine = GameEngine::with_clock(GameConfig::default(), clock, GameRng::new(7)).unwrap();
/// engine.start_new_game();
///
/// let outcome = engine.select_card(CardId::new(0));
/// assert_eq!(outcome, SelectOutcome::Revealed(CardId::new(0)));
/// ```
pub struct GameEngine<C: Clock = SystemClock> {
    config: GameConfig,
    glyphs: Vec<String>,
    clock: C,
    rng: GameRng,
    state: GameState,
    timers: TimerQueue,
    events: Vec<GameEvent>,
}

impl<C: Clock> GameEngine<C> {
    /// Engine with an explicit clock and RNG.
    ///
    /// The engine starts `Idle`; call `start_new_game` to deal.
    pub fn with_clock(config: GameConfig, clock: C, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let glyphs = config
            .distinct_symbols()
            .into_iter()
            .take(config.pair_count)
            .map(str::to_string)
            .collect();

        Ok(Self {
            config,
            glyphs,
            clock,
            rng,
            state: GameState::idle(),
            timers: TimerQueue::new(),
            events: Vec::new(),
        })
    }

    // === Lifecycle ===

    /// Throw away the current game and deal a new one.
    ///
    /// Timers still queued for the old game are left in place and discarded
    /// when they fire, because their epoch no longer matches.
    pub fn start_new_game(&mut self) {
        let epoch = self.state.epoch.next();
        let cards = deck::deal(self.config.pair_count, &mut self.rng);
        debug_assert!(deck::is_well_paired(&cards));

        self.state = GameState::dealt(epoch, cards, self.clock.now());
        self.events.push(GameEvent::GameStarted { epoch });
        info!("started game {} with {} cards", epoch, self.state.cards.len());
    }

    /// Turn a card face up.
    ///
    /// Invalid selections change nothing and report why. When the second card
    /// of an attempt is turned, the attempt is evaluated immediately: the move
    /// is counted, a pair is marked matched (or a revert timer is scheduled)
    /// and the pending list is cleared.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if let Err(rejection) = self.check_selectable(id) {
            trace!("ignored selection of {}: {:?}", id, rejection);
            return SelectOutcome::Ignored(rejection);
        }

        let Some(card) = self.state.card_mut(id) else {
            return SelectOutcome::Ignored(Rejection::UnknownCard);
        };
        card.is_flipped = true;
        let symbol = card.symbol;

        self.state.pending.push(id);
        self.events.push(GameEvent::CardRevealed { card: id, symbol });
        debug!("revealed {} ({})", id, symbol);

        if self.state.pending.len() == 2 {
            self.evaluate_pending()
        } else {
            SelectOutcome::Revealed(id)
        }
    }

    /// Pause or resume.
    ///
    /// Returns whether the game is paused afterwards. Idle and completed games
    /// cannot be paused.
    pub fn toggle_pause(&mut self) -> bool {
        let now = self.clock.now();
        match self.state.phase {
            Phase::Running => {
                self.state.phase = Phase::Paused;
                self.state.clock.pause(now);
                self.events.push(GameEvent::Paused);
                debug!("paused {} at {}s", self.state.epoch, self.elapsed_seconds());
                true
            }
            Phase::Paused => {
                self.state.phase = Phase::Running;
                self.state.clock.resume(now);
                self.events.push(GameEvent::Resumed);
                debug!("resumed {}", self.state.epoch);
                false
            }
            Phase::Idle | Phase::Completed => false,
        }
    }

    /// Whole seconds of play, pauses excluded.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        match self.state.phase {
            Phase::Idle => 0,
            _ => self.state.clock.elapsed(self.clock.now()).as_secs(),
        }
    }

    /// Fire every timer that is due. Returns how many took effect.
    ///
    /// Timers from an earlier game are dropped without effect.
    pub fn advance(&mut self) -> usize {
        let now = self.clock.now();
        let mut applied = 0;

        while let Some(task) = self.timers.pop_due(now) {
            if task.epoch != self.state.epoch {
                debug!("dropped stale {:?} from {}", task.kind, task.epoch);
                continue;
            }
            self.fire(task.kind);
            applied += 1;
        }

        applied
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.state.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.state.card(id)
    }

    /// Cards turned up in the current, unfinished attempt.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.state.pending
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.state.moves
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.state.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.state.total_pairs()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state.phase == Phase::Paused
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.phase == Phase::Completed
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.state.epoch
    }

    /// Timers still queued, including stale ones.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Clock time at which the next timer becomes due.
    #[must_use]
    pub fn next_timer_due(&self) -> Option<std::time::Duration> {
        self.timers.next_due()
    }

    /// Display glyph for a symbol.
    #[must_use]
    pub fn symbol_glyph(&self, symbol: Symbol) -> &str {
        self.glyphs
            .get(usize::from(symbol.raw()))
            .map_or("?", String::as_str)
    }

    /// RNG position, for replaying the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Internals ===

    fn check_selectable(&self, id: CardId) -> Result<(), Rejection> {
        match self.state.phase {
            Phase::Idle => return Err(Rejection::NotStarted),
            Phase::Paused => return Err(Rejection::Paused),
            Phase::Completed => return Err(Rejection::GameOver),
            Phase::Running => {}
        }

        let card = self.state.card(id).ok_or(Rejection::UnknownCard)?;
        if card.is_matched {
            return Err(Rejection::AlreadyMatched);
        }
        if card.is_flipped {
            return Err(Rejection::AlreadyFlipped);
        }
        if self.state.pending.len() >= 2 {
            return Err(Rejection::PairPending);
        }

        Ok(())
    }

    fn evaluate_pending(&mut self) -> SelectOutcome {
        let (first, second) = (self.state.pending[0], self.state.pending[1]);
        self.state.pending.clear();
        self.state.moves += 1;

        let is_pair = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        if is_pair {
            for id in [first, second] {
                if let Some(card) = self.state.card_mut(id) {
                    card.is_matched = true;
                }
            }
            self.state.matched_pairs += 1;
            self.state.score += self.config.match_award;
            self.schedule(self.config.timing.match_confirm(), TimerKind::ConfirmMatch { first, second });
            self.events.push(GameEvent::PairMatched {
                first,
                second,
                score: self.state.score,
            });
            debug!("matched {} and {}, score {}", first, second, self.state.score);

            let completed = self.state.all_matched();
            if completed {
                self.complete();
            }
            SelectOutcome::Matched {
                first,
                second,
                completed,
            }
        } else {
            self.schedule(self.config.timing.mismatch_revert(), TimerKind::RevertMismatch { first, second });
            self.events.push(GameEvent::PairMismatched { first, second });
            debug!("mismatch {} and {}", first, second);
            SelectOutcome::Mismatched { first, second }
        }
    }

    fn complete(&mut self) {
        self.state.clock.stop(self.clock.now());
        self.state.phase = Phase::Completed;

        let completed = GameCompleted {
            epoch: self.state.epoch,
            score: self.state.score,
            moves: self.state.moves,
            elapsed_seconds: self.elapsed_seconds(),
            finished_at: self.clock.wall_now(),
        };
        info!(
            "completed {} in {}s with {} moves, score {}",
            completed.epoch, completed.elapsed_seconds, completed.moves, completed.score
        );
        self.events.push(GameEvent::GameCompleted(completed));
    }

    fn schedule(&mut self, delay: std::time::Duration, kind: TimerKind) {
        self.timers.schedule(ScheduledTask {
            epoch: self.state.epoch,
            due: self.clock.now() + delay,
            kind,
        });
    }

    fn fire(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::ConfirmMatch { first, second } => {
                self.events.push(GameEvent::MatchConfirmed { first, second });
            }
            TimerKind::RevertMismatch { first, second } => {
                for id in [first, second] {
                    if let Some(card) = self.state.card_mut(id) {
                        if !card.is_matched {
                            card.is_flipped = false;
                        }
                    }
                }
                self.events.push(GameEvent::CardsHidden { first, second });
                trace!("hid {} and {}", first, second);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use smallvec::smallvec;

    fn engine() -> (GameEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let engine = GameEngine::with_clock(GameConfig::default(), clock.clone(), GameRng::new(42)).unwrap();
        (engine, clock)
    }

    #[test]
    fn test_idle_engine() {
        let (mut engine, _) = engine();

        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.elapsed_seconds(), 0);
        assert_eq!(
            engine.select_card(CardId::new(0)),
            SelectOutcome::Ignored(Rejection::NotStarted)
        );
        assert!(!engine.toggle_pause());
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_third_card_with_pair_pending_is_ignored() {
        let (mut engine, _) = engine();
        engine.start_new_game();

        // Two cards awaiting evaluation can only be observed mid-selection;
        // set it up directly.
        for id in [0u16, 1] {
            engine.state.cards[id as usize].is_flipped = true;
        }
        engine.state.pending = smallvec![CardId::new(0), CardId::new(1)];
        let before = engine.state.clone();

        assert_eq!(
            engine.select_card(CardId::new(2)),
            SelectOutcome::Ignored(Rejection::PairPending)
        );
        assert_eq!(engine.state, before);
    }

    #[test]
    fn test_glyphs_follow_distinct_symbols() {
        let config = GameConfig::default()
            .with_symbols(["A", "A", "B", "C", "B"])
            .with_pair_count(3);
        let engine = GameEngine::with_clock(config, ManualClock::new(), GameRng::new(1)).unwrap();

        assert_eq!(engine.symbol_glyph(Symbol::new(0)), "A");
        assert_eq!(engine.symbol_glyph(Symbol::new(1)), "B");
        assert_eq!(engine.symbol_glyph(Symbol::new(2)), "C");
        assert_eq!(engine.symbol_glyph(Symbol::new(3)), "?");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_symbols(["A"]).with_pair_count(2);
        assert!(GameEngine::with_clock(config, ManualClock::new(), GameRng::new(1)).is_err());
    }

    #[test]
    fn test_new_game_replaces_state() {
        let (mut engine, clock) = engine();
        engine.start_new_game();
        engine.select_card(CardId::new(0));
        clock.advance_secs(4);

        engine.start_new_game();

        assert_eq!(engine.epoch(), Epoch::new(2));
        assert!(engine.pending().is_empty());
        assert!(engine.cards().iter().all(Card::is_hidden));
        assert_eq!(engine.elapsed_seconds(), 0);
    }
}
