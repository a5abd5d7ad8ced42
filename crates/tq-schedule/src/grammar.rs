//! Schedule-string grammar.
//!
//! Upstream schedules are free text ("пн-пт: 09:00-18:00", "Mon–Fri 09.30-17.00
//! lunch 13-14", …).  The only part the simulator understands is the first
//! substring of the form
//!
//! ```text
//! HH[:.]MM-HH[:.]MM
//! ```
//!
//! which is split on `-` into an *open* and a *close* boundary.  Each boundary
//! picks its own separator, so `09.00-18:00` is accepted.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::{ScheduleError, ScheduleResult};

/// Grammar namespace; holds the pattern source reported in parse errors.
pub struct ScheduleGrammar;

impl ScheduleGrammar {
    /// Regex source for one open-close range.
    pub const PATTERN: &'static str = r"[0-9]{2}[:.][0-9]{2}-[0-9]{2}[:.][0-9]{2}";

    /// Locate the range in `schedule` and return it as `(open, close)` tokens.
    pub fn find(schedule: &str) -> ScheduleResult<(&str, &str)> {
        static RANGE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(ScheduleGrammar::PATTERN).expect("schedule range regex is valid")
        });

        let m = RANGE.find(schedule).ok_or_else(|| ScheduleError::Parse {
            input:   schedule.to_owned(),
            pattern: Self::PATTERN,
        })?;

        // The pattern contains exactly one '-', between the two boundaries.
        let (open, close) = m.as_str().split_once('-').ok_or_else(|| ScheduleError::Parse {
            input:   schedule.to_owned(),
            pattern: Self::PATTERN,
        })?;
        Ok((open, close))
    }

    /// Parse one `HH:MM` / `HH.MM` boundary.
    pub fn parse_time(token: &str) -> ScheduleResult<NaiveTime> {
        let format = match token.as_bytes().get(2) {
            Some(b':') => "%H:%M",
            Some(b'.') => "%H.%M",
            _ => return Err(ScheduleError::InvalidTime { token: token.to_owned() }),
        };
        NaiveTime::parse_from_str(token, format)
            .map_err(|_| ScheduleError::InvalidTime { token: token.to_owned() })
    }
}

// ── ScheduleWindow ────────────────────────────────────────────────────────────

/// A parsed business window: the open and close times of one day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleWindow {
    open:  NaiveTime,
    close: NaiveTime,
}

impl ScheduleWindow {
    /// Extract the window from a free-text schedule string.
    pub fn parse(schedule: &str) -> ScheduleResult<ScheduleWindow> {
        let (open, close) = ScheduleGrammar::find(schedule)?;
        Ok(ScheduleWindow {
            open:  ScheduleGrammar::parse_time(open)?,
            close: ScheduleGrammar::parse_time(close)?,
        })
    }

    #[inline]
    pub fn open(&self) -> NaiveTime {
        self.open
    }

    #[inline]
    pub fn close(&self) -> NaiveTime {
        self.close
    }
}
