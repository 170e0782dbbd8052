//! Game configuration types.
//!
//! - `TimingConfig`: presentation delays and tick rates
//! - `GameConfig`: symbols, scoring, timing
//!
//! Both deserialize from JSON with every field optional, so a config file only
//! needs to mention what it changes.

use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Card faces, in deal order. The first `pair_count` distinct entries are used.
pub const DEFAULT_SYMBOLS: [&str; 10] = ["🎯", "🎨", "🎭", "🎪", "🎫", "🎬", "🎮", "🎲", "🎸", "🎹"];

/// Pairs on the board (16 cards).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Points awarded per matched pair.
pub const DEFAULT_MATCH_AWARD: u32 = 100;

/// Delays used around card flips.
///
/// `match_confirm_ms` and `mismatch_revert_ms` are separate knobs. With the
/// defaults a miss stays on screen twice as long as a hit takes to confirm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Flip animation length (presentation only).
    pub flip_reveal_ms: u64,

    /// Delay before a found pair is shown as matched.
    pub match_confirm_ms: u64,

    /// Delay before a mismatched pair turns face down again.
    pub mismatch_revert_ms: u64,

    /// How long a notice stays on screen.
    pub message_ttl_ms: u64,

    /// Display refresh interval for the clock.
    pub tick_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            flip_reveal_ms: 300,
            match_confirm_ms: 500,
            mismatch_revert_ms: 1000,
            message_ttl_ms: 3000,
            tick_interval_ms: 1000,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn flip_reveal(&self) -> Duration {
        Duration::from_millis(self.flip_reveal_ms)
    }

    #[must_use]
    pub fn match_confirm(&self) -> Duration {
        Duration::from_millis(self.match_confirm_ms)
    }

    #[must_use]
    pub fn mismatch_revert(&self) -> Duration {
        Duration::from_millis(self.mismatch_revert_ms)
    }

    #[must_use]
    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Set both card resolution delays.
    #[must_use]
    pub fn with_resolution_delays(mut self, match_confirm_ms: u64, mismatch_revert_ms: u64) -> Self {
        self.match_confirm_ms = match_confirm_ms;
        self.mismatch_revert_ms = mismatch_revert_ms;
        self
    }

    /// Set the notice lifetime.
    #[must_use]
    pub fn with_message_ttl(mut self, ttl_ms: u64) -> Self {
        self.message_ttl_ms = ttl_ms;
        self
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Card faces. Duplicates are ignored when dealing.
    pub symbols: Vec<String>,

    /// Pairs per deal. Fixed for the shipped game; not read from config files.
    #[serde(skip, default = "default_pair_count")]
    pub pair_count: usize,

    /// Score added for each found pair.
    pub match_award: u32,

    /// Presentation and timer delays.
    pub timing: TimingConfig,
}

fn default_pair_count() -> usize {
    DEFAULT_PAIR_COUNT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| (*s).to_string()).collect(),
            pair_count: DEFAULT_PAIR_COUNT,
            match_award: DEFAULT_MATCH_AWARD,
            timing: TimingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Replace the symbol list.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of pairs per deal.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self
    }

    /// Set the per-match score award.
    #[must_use]
    pub fn with_match_award(mut self, award: u32) -> Self {
        self.match_award = award;
        self
    }

    /// Replace the timing configuration.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Cards per deal.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Symbols with duplicates removed, first occurrence wins.
    #[must_use]
    pub fn distinct_symbols(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.symbols
            .iter()
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Check that a deck can be dealt from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.card_count() > usize::from(u16::MAX) {
            return Err(ConfigError::TooManyPairs {
                pairs: self.pair_count,
            });
        }

        let available = self.distinct_symbols().len();
        if available < self.pair_count {
            return Err(ConfigError::NotEnoughSymbols {
                needed: self.pair_count,
                available,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.pair_count, 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.match_award, 100);
        assert_eq!(config.timing.match_confirm(), Duration::from_millis(500));
        assert_eq!(config.timing.mismatch_revert(), Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_symbols(["a", "b", "c"])
            .with_pair_count(3)
            .with_match_award(10)
            .with_timing(TimingConfig::default().with_resolution_delays(0, 50));

        assert_eq!(config.symbols, vec!["a", "b", "c"]);
        assert_eq!(config.card_count(), 6);
        assert_eq!(config.match_award, 10);
        assert_eq!(config.timing.mismatch_revert_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_distinct_symbols_keep_first_occurrence() {
        let config = GameConfig::default().with_symbols(["x", "y", "x", "z", "y"]);
        assert_eq!(config.distinct_symbols(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_duplicate_symbols_do_not_count_twice() {
        let config = GameConfig::default()
            .with_symbols(["🎯", "🎨", "🎯", "🎨"])
            .with_pair_count(3);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotEnoughSymbols { needed: 3, available: 2 })
        ));
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let config = GameConfig::default().with_pair_count(0);
        assert!(matches!(config.validate(), Err(ConfigError::NoPairs)));
    }

    #[test]
    fn test_too_many_pairs_rejected() {
        let config = GameConfig::default().with_pair_count(40_000);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyPairs { pairs: 40_000 })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{ "match_award": 250, "timing": { "mismatch_revert_ms": 1500 } }"#)
            .unwrap();

        assert_eq!(config.match_award, 250);
        assert_eq!(config.timing.mismatch_revert_ms, 1500);
        // Untouched fields keep defaults
        assert_eq!(config.timing.match_confirm_ms, 500);
        assert_eq!(config.pair_count, DEFAULT_PAIR_COUNT);
        assert_eq!(config.symbols.len(), DEFAULT_SYMBOLS.len());
    }

    #[test]
    fn test_from_json_ignores_pair_count() {
        let config = GameConfig::from_json(r#"{ "pair_count": 2 }"#).unwrap();
        assert_eq!(config.pair_count, DEFAULT_PAIR_COUNT);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            GameConfig::from_json(r#"{ "symbols": ["a"] }"#),
            Err(ConfigError::NotEnoughSymbols { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load("/definitely/not/here/memory.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
