//! # memory-match
//!
//! A memory-matching card game: sixteen face-down cards, eight pairs, turn two
//! at a time until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: The game is a `GameEngine` value owned by
//!    whoever drives the UI loop. No globals, no singletons.
//!
//! 2. **Synchronous Decisions**: A pair is judged the moment its second card is
//!    turned. Delays only affect what the player sees afterwards.
//!
//! 3. **Timers as Data**: Resolution delays are queued tasks tagged with the
//!    game's epoch, fired by the owner. Starting a new game makes every older
//!    task stale.
//!
//! 4. **Deterministic**: Deals come from a seeded `GameRng` and time from a
//!    `Clock`, so any game can be replayed in tests.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, clocks, configuration, errors
//! - `engine`: Deck dealing, game state, timers, events, `GameEngine`
//! - `scores`: High-score list and its key/value persistence
//! - `session`: Presentation adapter: commands, notices, text rendering

pub mod core;
pub mod engine;
pub mod scores;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Symbol,
    GameRng, GameRngState,
    Clock, ManualClock, SystemClock,
    GameConfig, TimingConfig,
    ConfigError, StoreError,
};

pub use crate::engine::{
    GameEngine, GameState, Phase,
    Epoch, GameEvent, GameCompleted,
    SelectOutcome, Rejection,
};

pub use crate::scores::{
    HighScoreEntry, HighScoreTable, HighScoreStore,
    KeyValueStore, MemoryStore, FileStore,
};

pub use crate::session::{Command, LaunchOptions, Notice, Session, Tone};
