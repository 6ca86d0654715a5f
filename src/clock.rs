use chrono::{Local, NaiveDateTime};

/// Source of "now" for the meetup-time lower bound and the picker's `min`
/// attribute. Injected so tests can pin the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock, local time — meetup times are naive local moments, matching
/// the datetime-local input.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, for tests.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
