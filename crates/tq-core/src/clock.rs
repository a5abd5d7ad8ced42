//! Wall-clock abstraction.
//!
//! Business-hours gating compares the local time of day against schedule
//! boundaries, so every time-dependent component reads "now" through the
//! [`Clock`] trait instead of calling `chrono::Local::now()` directly.
//! Production code uses [`LocalClock`]; tests pin time with [`FixedClock`].

use std::sync::Mutex;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    /// Current local (timezone-naive) date and time.
    fn now(&self) -> NaiveDateTime;
}

// ── LocalClock ────────────────────────────────────────────────────────────────

/// Reads the host's local wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

// ── FixedClock ────────────────────────────────────────────────────────────────

/// A clock frozen at a chosen instant.  [`set`][Self::set] moves it.
#[derive(Debug)]
pub struct FixedClock(Mutex<NaiveDateTime>);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        FixedClock(Mutex::new(at))
    }

    /// Build a clock at `y-m-d h:mi:00`.
    ///
    /// Returns `None` if the components do not form a valid date-time.
    pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, mi, 0))
            .map(FixedClock::new)
    }

    /// Move the clock to `at`.
    pub fn set(&self, at: NaiveDateTime) {
        match self.0.lock() {
            Ok(mut guard) => *guard = at,
            Err(poisoned) => *poisoned.into_inner() = at,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.0.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
