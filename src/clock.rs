//! Time sources
//!
//! Transactions are stamped through a [`Clock`] so tests can supply fixed
//! instants instead of the wall clock.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Source of the current time
pub trait Clock {
    /// Get the current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that returns a fixed instant, optionally advancing by `step`
/// after every reading
#[derive(Debug, Clone)]
pub struct FixedClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    /// Always return `at`
    pub fn new(at: DateTime<Utc>) -> Self {
        Self::stepping(at, Duration::zero())
    }

    /// Return `start`, then `start + step`, then `start + 2 * step`, ...
    pub fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}
