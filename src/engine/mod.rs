//! The memory-matching game engine.
//!
//! - `deck`: dealing shuffled pairs
//! - `state`: per-game state, phase machine, play clock
//! - `timer`: epoch-tagged resolution timers
//! - `event`: events and selection outcomes
//! - `game`: `GameEngine`, which ties them together
//!
//! ## Example
//!
//! ```
//! use memory_match::core::{GameConfig, GameRng, ManualClock};
//! use memory_match::engine::{GameEngine, GameEvent, SelectOutcome};
//!
//! let clock = ManualClock::new();
//! let mut engine = GameEngine::with_clock(GameConfig::default(), clock.clone(), GameRng::new(1)).unwrap();
//! engine.start_new_game();
//!
//! // Turn up the two cards of the first card's pair
//! let first = engine.cards()[0].clone();
//! let partner = engine
//!     .cards()
//!     .iter()
//!     .find(|c| c.pairs_with(&first))
//!     .map(|c| c.id)
//!     .unwrap();
//!
//! engine.select_card(first.id);
//! let outcome = engine.select_card(partner);
//! assert!(matches!(outcome, SelectOutcome::Matched { .. }));
//! assert_eq!(engine.score(), 100);
//!
//! // The match-confirm timer fires once its delay has passed
//! clock.advance_millis(500);
//! engine.advance();
//! assert!(engine
//!     .drain_events()
//!     .iter()
//!     .any(|e| matches!(e, GameEvent::MatchConfirmed { .. })));
//! ```

pub mod deck;
pub mod state;
pub mod timer;
pub mod event;
mod game;

pub use game::GameEngine;
pub use state::{GameState, Phase, PlayClock};
pub use timer::{Epoch, ScheduledTask, TimerKind, TimerQueue};
pub use event::{GameCompleted, GameEvent, Rejection, SelectOutcome};
