//! Deterministic clock abstraction for testable expiry checks.

use chrono::{DateTime, Utc};

/// Clock trait for deterministic time in tests.
///
/// Implementations must be thread-safe; a signer shared across threads
/// calls [`Clock::now_utc`] concurrently.
pub trait Clock: Send + Sync {
    /// Get the current UTC time. A fresh timestamp every call, never cached.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System clock using actual wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock clock for deterministic testing.
#[cfg(any(test, feature = "test-seams"))]
#[derive(Debug, Clone)]
pub struct MockClock {
    now: DateTime<Utc>,
}

#[cfg(any(test, feature = "test-seams"))]
impl MockClock {
    /// Create a mock clock frozen at the given time.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Create a mock clock frozen at the given unix timestamp (seconds).
    pub fn at_unix(secs: i64) -> Self {
        Self {
            now: DateTime::from_timestamp(secs, 0).expect("valid unix timestamp"),
        }
    }

    /// Advance the clock by a duration.
    pub fn advance(&mut self, duration: chrono::Duration) {
        self.now = self.now + duration;
    }
}

#[cfg(any(test, feature = "test-seams"))]
impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_time() {
        let clock = SystemClock;
        let now = clock.now_utc();
        // Just verify it doesn't panic and returns something reasonable
        assert!(now.year() >= 2024);
    }

    #[test]
    fn mock_clock_is_deterministic() {
        let clock = MockClock::at_unix(1600000000);
        assert_eq!(clock.now_utc().timestamp(), 1600000000);
        assert_eq!(clock.now_utc().timestamp(), 1600000000);
    }

    #[test]
    fn mock_clock_advances() {
        let mut clock = MockClock::at_unix(1600000000);
        clock.advance(chrono::Duration::seconds(1));
        assert_eq!(clock.now_utc().timestamp(), 1600000001);
    }
}
