//! `tq-schedule`: schedule grammar and the business-hours gate.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`grammar`] | `ScheduleGrammar`, `ScheduleWindow`                    |
//! | [`gate`]    | `TimeWindowGate`, `FALLBACK_TTL_MINUTES`               |
//! | [`error`]   | `ScheduleError`, `ScheduleResult<T>`                   |
//!
//! # Gate model (summary)
//!
//! ```text
//! allowed(now, schedule) = weekday(now) ∉ {Sat, Sun}
//!                        ∧ minutes(now → open(schedule)) > 0
//! ttl(now, schedule)     = minutes(now → close(schedule))
//! ```
//!
//! Both collapse to `true` / 60 when gating is disabled.

pub mod error;
pub mod gate;
pub mod grammar;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use gate::{FALLBACK_TTL_MINUTES, TimeWindowGate};
pub use grammar::{ScheduleGrammar, ScheduleWindow};
