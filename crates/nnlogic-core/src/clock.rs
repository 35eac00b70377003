//! Injected time source.
//!
//! The core never reads a global clock. Operators take a `&dyn Clock`, so
//! tests replay deterministically with [`MockClock`].

use chrono::Utc;

/// A source of "now", in seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall clock: seconds since the Unix epoch with microsecond resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        let now = Utc::now();
        now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
    }
}

/// Manually driven clock for tests and deterministic replay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MockClock {
    time: f64,
}

impl MockClock {
    pub fn new(start: f64) -> Self {
        Self { time: start }
    }

    pub fn advance(&mut self, seconds: f64) {
        self.time += seconds;
    }

    pub fn set(&mut self, time: f64) {
        self.time = time;
    }
}

impl Clock for MockClock {
    fn now(&self) -> f64 {
        self.time
    }
}
