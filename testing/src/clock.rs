//! Deterministic clocks for tests.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;
use taskpad_core::environment::Clock;

/// Clock that always returns the same instant.
///
/// Useful for asserting exact creation timestamps.
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Clock that advances by a fixed step on every call.
///
/// Gives successive creations strictly increasing timestamps, which makes
/// list-ordering assertions exact.
#[derive(Debug)]
pub struct TickingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl TickingClock {
    /// Creates a clock starting at `start`, advancing by `step` per call.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// Clock starting at the unix epoch with one-second steps.
    #[must_use]
    pub fn from_epoch() -> Self {
        Self::new(DateTime::UNIX_EPOCH, Duration::seconds(1))
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        #[allow(clippy::unwrap_used)] // poisoning cannot happen: no panics while held
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next += self.step;
        now
    }
}
