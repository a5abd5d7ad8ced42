//! Unit tests for tq-schedule.

use chrono::{Duration, NaiveTime};

use tq_core::{Clock, FixedClock};

use crate::{FALLBACK_TTL_MINUTES, ScheduleError, ScheduleWindow, TimeWindowGate};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Enabled gate pinned to Monday 2024-06-17 at `h:m`.
fn monday_gate(h: u32, m: u32) -> TimeWindowGate<FixedClock> {
    TimeWindowGate::with_clock(true, FixedClock::at(2024, 6, 17, h, m).unwrap())
}

// ── Grammar ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grammar {
    use super::*;

    #[test]
    fn bare_range() {
        let w = ScheduleWindow::parse("09:00-18:00").unwrap();
        assert_eq!(w.open(), hm(9, 0));
        assert_eq!(w.close(), hm(18, 0));
    }

    #[test]
    fn range_inside_free_text() {
        let w = ScheduleWindow::parse("пн-пт: 10:30-19:45, сб: выходной").unwrap();
        assert_eq!(w.open(), hm(10, 30));
        assert_eq!(w.close(), hm(19, 45));
    }

    #[test]
    fn mixed_separators() {
        let w = ScheduleWindow::parse("Mon-Fri 09.15-17:00").unwrap();
        assert_eq!(w.open(), hm(9, 15));
        assert_eq!(w.close(), hm(17, 0));
    }

    #[test]
    fn first_range_wins() {
        let w = ScheduleWindow::parse("08:00-12:00 13:00-17:00").unwrap();
        assert_eq!(w.open(), hm(8, 0));
        assert_eq!(w.close(), hm(12, 0));
    }

    #[test]
    fn no_range_is_parse_error() {
        let err = ScheduleWindow::parse("weekdays").unwrap_err();
        match err {
            ScheduleError::Parse { input, pattern } => {
                assert_eq!(input, "weekdays");
                assert!(pattern.contains("[:.]"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn single_digit_hours_do_not_match() {
        assert!(matches!(
            ScheduleWindow::parse("9:00-18:00"),
            Err(ScheduleError::Parse { .. })
        ));
    }

    #[test]
    fn out_of_range_time_rejected() {
        assert!(matches!(
            ScheduleWindow::parse("25:00-26:00"),
            Err(ScheduleError::InvalidTime { .. })
        ));
        assert!(matches!(
            ScheduleWindow::parse("09:75-18:00"),
            Err(ScheduleError::InvalidTime { .. })
        ));
    }
}

// ── Gate disabled ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate_disabled {
    use super::*;

    #[test]
    fn everything_allowed_with_fallback_ttl() {
        // Sunday night, malformed schedule: still allowed when gating is off.
        let gate = TimeWindowGate::with_clock(false, FixedClock::at(2024, 6, 16, 23, 0).unwrap());
        assert!(gate.is_allowed_by_day());
        assert!(gate.is_allowed_by_time("09:00-18:00").unwrap());
        assert!(gate.is_allowed_by_time("weekdays").unwrap());
        assert_eq!(gate.time_to_live("09:00-18:00").unwrap(), FALLBACK_TTL_MINUTES);
        assert_eq!(gate.time_to_live("garbage").unwrap(), 60);
        assert!(gate.admits("garbage").unwrap());
    }
}

// ── Gate enabled ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate_enabled {
    use super::*;

    #[test]
    fn weekend_days_blocked() {
        let sat = TimeWindowGate::with_clock(true, FixedClock::at(2024, 6, 15, 8, 0).unwrap());
        let sun = TimeWindowGate::with_clock(true, FixedClock::at(2024, 6, 16, 8, 0).unwrap());
        assert!(!sat.is_allowed_by_day());
        assert!(!sun.is_allowed_by_day());
        assert!(monday_gate(8, 0).is_allowed_by_day());
    }

    #[test]
    fn allowed_only_before_open() {
        assert!(monday_gate(7, 0).is_allowed_by_time("09:00-18:00").unwrap());
        assert!(monday_gate(8, 58).is_allowed_by_time("09:00-18:00").unwrap());
        assert!(!monday_gate(9, 0).is_allowed_by_time("09:00-18:00").unwrap());
        assert!(!monday_gate(12, 0).is_allowed_by_time("09:00-18:00").unwrap());
        assert!(!monday_gate(19, 0).is_allowed_by_time("09:00-18:00").unwrap());
    }

    #[test]
    fn sub_minute_gap_to_open_is_not_allowed() {
        let clock = FixedClock::at(2024, 6, 17, 8, 59).unwrap();
        clock.set(clock.now() + Duration::seconds(30));
        let gate = TimeWindowGate::with_clock(true, clock);
        assert!(!gate.is_allowed_by_time("09:00-18:00").unwrap());
    }

    #[test]
    fn ttl_counts_minutes_to_close() {
        assert_eq!(monday_gate(17, 0).time_to_live("09:00-18:00").unwrap(), 60);
        assert_eq!(monday_gate(8, 0).time_to_live("09:00-18:00").unwrap(), 600);
        assert_eq!(monday_gate(18, 0).time_to_live("09:00-18:00").unwrap(), 0);
        assert!(monday_gate(18, 30).time_to_live("09:00-18:00").unwrap() < 0);
    }

    #[test]
    fn malformed_schedule_fails() {
        let gate = monday_gate(8, 0);
        assert!(matches!(
            gate.is_allowed_by_time("weekdays"),
            Err(ScheduleError::Parse { .. })
        ));
        assert!(gate.time_to_live("weekdays").is_err());
    }

    #[test]
    fn weekend_short_circuits_before_parsing() {
        let sat = TimeWindowGate::with_clock(true, FixedClock::at(2024, 6, 15, 8, 0).unwrap());
        assert!(!sat.admits("weekdays").unwrap());
        assert!(monday_gate(8, 0).admits("weekdays").is_err());
        assert!(monday_gate(8, 0).admits("09:00-18:00").unwrap());
    }

    #[test]
    fn clock_moves_through_the_day() {
        let gate = monday_gate(8, 0);
        assert!(gate.is_allowed_by_time("09:00-18:00").unwrap());
        gate.clock().set(FixedClock::at(2024, 6, 17, 9, 30).unwrap().now());
        assert!(!gate.is_allowed_by_time("09:00-18:00").unwrap());
    }
}
