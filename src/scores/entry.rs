//! A single high-score record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::GameCompleted;

/// One completed game, as persisted.
///
/// Field names match the stored JSON: `{ score, moves, time, date }`, with
/// `time` in whole seconds and `date` as an ISO-8601 UTC timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub moves: u32,
    #[serde(rename = "time")]
    pub elapsed_seconds: u64,
    pub date: DateTime<Utc>,
}

impl HighScoreEntry {
    #[must_use]
    pub fn new(score: u32, moves: u32, elapsed_seconds: u64, date: DateTime<Utc>) -> Self {
        Self {
            score,
            moves,
            elapsed_seconds,
            date,
        }
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn time_display(&self) -> String {
        format_clock(self.elapsed_seconds)
    }
}

impl From<&GameCompleted> for HighScoreEntry {
    fn from(done: &GameCompleted) -> Self {
        Self::new(done.score, done.moves, done.elapsed_seconds, done.finished_at)
    }
}

/// Seconds as zero-padded `MM:SS`. Minutes keep growing past 99.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
