//! Clock abstraction so timer-driven UI state can be tested with virtual time

use std::time::Instant;

/// Source of monotonic time for timers and animations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current monotonic instant
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Test clock advanced manually, shared through an `Arc`
#[cfg(test)]
pub struct ManualClock {
    start: Instant,
    offset: std::sync::Mutex<std::time::Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            start: Instant::now(),
            offset: std::sync::Mutex::new(std::time::Duration::ZERO),
        })
    }

    /// Move the clock forward
    pub fn advance(&self, by: std::time::Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock().unwrap()
    }
}
