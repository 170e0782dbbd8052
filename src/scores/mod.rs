//! High-score persistence.
//!
//! Completed games are recorded into a list of at most ten entries, sorted by
//! descending score, stored as JSON under one key of a `KeyValueStore`.

pub mod entry;
pub mod table;
pub mod store;

pub use entry::{format_clock, HighScoreEntry};
pub use table::{HighScoreTable, MAX_ENTRIES};
pub use store::{FileStore, HighScoreStore, KeyValueStore, MemoryStore, HIGH_SCORES_KEY};
