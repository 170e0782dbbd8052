//! Epoch-tagged timers.
//!
//! Card resolution delays are data, not callbacks. The engine schedules a
//! `ScheduledTask` stamped with the current `Epoch`; the owner of the engine
//! pumps `GameEngine::advance` and due tasks fire in deadline order. A task
//! whose epoch no longer matches the running game is dropped, so a timer
//! queued before "new game" can never touch the new deck.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Game generation. Bumped on every new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Epoch(pub u64);

impl Epoch {
    /// Create a new epoch.
    #[must_use]
    pub const fn new(epoch: u64) -> Self {
        Self(epoch)
    }

    /// The epoch after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Show a found pair as matched. Mutates nothing.
    ConfirmMatch { first: CardId, second: CardId },

    /// Turn a mismatched pair face down.
    RevertMismatch { first: CardId, second: CardId },
}

/// A pending timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Game the task was scheduled under.
    pub epoch: Epoch,

    /// Clock time at which the task becomes due.
    pub due: Duration,

    /// Action to take.
    pub kind: TimerKind,
}

/// Deadline-ordered queue. Tasks with equal deadlines fire in schedule order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    tasks: VecDeque<ScheduledTask>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task.
    pub fn schedule(&mut self, task: ScheduledTask) {
        let at = self.tasks.partition_point(|t| t.due <= task.due);
        self.tasks.insert(at, task);
    }

    /// Remove and return the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledTask> {
        if self.tasks.front()?.due <= now {
            self.tasks.pop_front()
        } else {
            None
        }
    }

    /// Deadline of the earliest task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.front().map(|t| t.due)
    }

    /// Number of queued tasks, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
