//! Clock providers for schedule evaluation.
//!
//! "Now" is read fresh from the configured clock on every query, so repeated
//! queries observe clock drift between calls. Tests substitute the clock
//! through [`ScheduleBuilder::clock`](crate::ScheduleBuilder::clock) instead
//! of touching any shared global state.

use chrono::{DateTime, Utc};

/// A source of the current instant.
///
/// Any zero-argument closure returning a [`DateTime<Utc>`] is also a clock,
/// so callers can write `builder.clock(|| some_instant)` directly.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// The system clock. This is the default for every schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let instant = Utc.with_ymd_and_hms(2018, 12, 17, 10, 0, 0).unwrap();
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_closure_is_a_clock() {
        let instant = Utc.with_ymd_and_hms(2018, 12, 17, 10, 0, 0).unwrap();
        let clock = move || instant;

        assert_eq!(Clock::now(&clock), instant);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
