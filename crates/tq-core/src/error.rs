//! Base error type.
//!
//! Sub-crates define their own error enums (`ScheduleError`, `StoreError`,
//! `SimError`, …).  `TqError` covers the handful of failures that can occur
//! in `tq-core` itself: decoding counter keys and person-type codes.

use thiserror::Error;

/// The error type for `tq-core`.
#[derive(Debug, Error)]
pub enum TqError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tq-core`.
pub type TqResult<T> = Result<T, TqError>;
