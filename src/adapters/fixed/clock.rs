//! Fixed clock serving a settable instant.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::ports::clock::Clock;

/// Clock that reports a fixed, caller-controlled instant.
///
/// Staleness and cache-expiry tests set or advance the instant instead of
/// sleeping.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(instant) }
    }

    /// Replaces the reported instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().expect("fixed clock lock poisoned") = instant;
    }

    /// Moves the reported instant forward by `span`.
    pub fn advance(&self, span: Duration) {
        let mut now = self.now.lock().expect("fixed clock lock poisoned");
        *now = *now + span;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("fixed clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_and_advances_the_fixed_instant() {
        let start: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        let clock = FixedClock::at(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(10));
        assert_eq!(clock.now(), start + Duration::minutes(10));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
