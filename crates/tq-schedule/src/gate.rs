//! Business-hours gate.
//!
//! All day/time semantics live here so the simulation jobs stay declarative:
//! ask the gate, then act.  The gate has a single switch, `enabled`, fixed at
//! construction.  With gating off every check passes and TTLs fall back to
//! [`FALLBACK_TTL_MINUTES`].
//!
//! # Time arithmetic
//!
//! Minute differences are taken between time-of-day values on the same day
//! and truncated toward zero:
//!
//! ```text
//! minutes_until(now = 08:58:30, target = 09:00) = 1
//! minutes_until(now = 08:59:30, target = 09:00) = 0
//! minutes_until(now = 18:30,    target = 18:00) = -30
//! ```

use chrono::{Datelike, NaiveTime, Weekday};
use tracing::debug;

use tq_core::{Clock, LocalClock};

use crate::{ScheduleResult, ScheduleWindow};

/// TTL handed out when gating is disabled.
pub const FALLBACK_TTL_MINUTES: i64 = 60;

/// Decides whether counters may be touched "now" and for how long they live.
pub struct TimeWindowGate<C: Clock = LocalClock> {
    enabled: bool,
    clock:   C,
}

impl TimeWindowGate<LocalClock> {
    /// Gate reading the host's local clock.
    pub fn new(enabled: bool) -> Self {
        Self::with_clock(enabled, LocalClock)
    }
}

impl<C: Clock> TimeWindowGate<C> {
    pub fn with_clock(enabled: bool, clock: C) -> Self {
        Self { enabled, clock }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// `false` on Saturdays and Sundays when gating is enabled.
    pub fn is_allowed_by_day(&self) -> bool {
        if !self.enabled {
            return true;
        }
        !matches!(self.clock.now().weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// `true` while the schedule's **open** boundary is still strictly in the
    /// future (at least one whole minute away).
    ///
    /// Only the open boundary is consulted; the close boundary plays no part.
    pub fn is_allowed_by_time(&self, schedule: &str) -> ScheduleResult<bool> {
        if !self.enabled {
            return Ok(true);
        }
        let window = ScheduleWindow::parse(schedule)?;
        let diff = self.minutes_until(window.open());
        debug!(schedule, open = %window.open(), diff, "time gate");
        Ok(diff > 0)
    }

    /// Minutes from now until the schedule's **close** boundary.
    ///
    /// Negative once the close time has passed.
    pub fn time_to_live(&self, schedule: &str) -> ScheduleResult<i64> {
        if !self.enabled {
            return Ok(FALLBACK_TTL_MINUTES);
        }
        let window = ScheduleWindow::parse(schedule)?;
        Ok(self.minutes_until(window.close()))
    }

    /// Day check first, then time check.  The schedule is not parsed at all
    /// on a disallowed day.
    pub fn admits(&self, schedule: &str) -> ScheduleResult<bool> {
        if !self.is_allowed_by_day() {
            return Ok(false);
        }
        self.is_allowed_by_time(schedule)
    }

    fn minutes_until(&self, target: NaiveTime) -> i64 {
        target.signed_duration_since(self.clock.now().time()).num_minutes()
    }
}
