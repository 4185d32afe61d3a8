//! # Clock Capability
//!
//! "Now" as an injected capability instead of an ambient global.
//!
//! The validator compares the requested reservation instant against the
//! current time. Reading the wall clock directly would make every caller
//! time-dependent and every test flaky, so the current time always arrives
//! through the [`Clock`] trait: production code passes [`SystemClock`],
//! tests pass [`FixedClock`].
//!
//! All times are naive wall-clock values in the restaurant's time zone.
//! Callers that serve other time zones own the conversion.

use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock time.
pub trait Clock {
    /// Current date and time in the restaurant's time zone.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant. Intended for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock that always reports `now`.
    pub const fn at(now: NaiveDateTime) -> Self {
        FixedClock(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_clock_reports_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let clock = FixedClock::at(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
