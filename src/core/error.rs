//! Error types.
//!
//! Gameplay itself never fails: rejected selections are reported through
//! `SelectOutcome`, not errors. What can fail is loading a configuration and
//! writing the high-score list.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with a `GameConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("a game needs at least one pair")]
    NoPairs,
    #[error("{pairs} pairs do not fit in a deck addressable by card id")]
    TooManyPairs { pairs: usize },
    #[error("need {needed} distinct symbols, only {available} configured")]
    NotEnoughSymbols { needed: usize, available: usize },
    #[error("could not read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config is not valid JSON")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Problems persisting the high-score list.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failed for key {key:?}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode high scores")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}
