//! Transient messages shown to the player.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a notice should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Error,
}

/// A message that disappears after a while.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
    /// Clock time after which the notice is gone.
    pub expires_at: Duration,
}

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>, tone: Tone, now: Duration, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            tone,
            expires_at: now + ttl,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at
    }
}
