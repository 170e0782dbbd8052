//! Time sources for the engine.
//!
//! The engine never reads the system clock directly. It asks a `Clock` for
//! two things:
//!
//! - `now()`: monotonic time since an arbitrary origin, used for elapsed play
//!   time and timer deadlines
//! - `wall_now()`: UTC wall-clock time, used to stamp completed games
//!
//! `SystemClock` is the real thing. `ManualClock` only moves when told to, and
//! clones share the same time so a test can keep a handle while the engine
//! owns the other.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of monotonic and wall-clock time.
pub trait Clock {
    /// Monotonic time since this clock's origin.
    fn now(&self) -> Duration;

    /// Current UTC time.
    fn wall_now(&self) -> DateTime<Utc>;
}

/// Clock backed by `Instant` and the system wall clock.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wall_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock.
///
/// Wall time is `base + now()`, so completion stamps stay deterministic.
#[derive(Clone, Debug)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
    base: DateTime<Utc>,
}

impl ManualClock {
    /// Clock at zero, with wall time anchored at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(DateTime::<Utc>::default())
    }

    /// Clock at zero, with wall time anchored at `base`.
    #[must_use]
    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(0)),
            base,
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    /// Move time forward by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    /// Move time forward by milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }

    fn wall_now(&self) -> DateTime<Utc> {
        self.base + chrono::Duration::milliseconds(self.millis.load(Ordering::SeqCst) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.wall_now(), DateTime::<Utc>::default());
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance_secs(3);
        handle.advance_millis(250);

        assert_eq!(clock.now(), Duration::from_millis(3250));
        assert_eq!(
            clock.wall_now(),
            DateTime::<Utc>::default() + chrono::Duration::milliseconds(3250)
        );
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
