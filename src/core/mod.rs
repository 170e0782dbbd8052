//! Core types: cards, RNG, clocks, configuration, errors.
//!
//! Nothing here knows about game flow. The engine composes these.

pub mod card;
pub mod rng;
pub mod clock;
pub mod config;
pub mod error;

pub use card::{Card, CardId, Symbol};
pub use rng::{GameRng, GameRngState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, TimingConfig, DEFAULT_MATCH_AWARD, DEFAULT_PAIR_COUNT, DEFAULT_SYMBOLS};
pub use error::{ConfigError, StoreError};
