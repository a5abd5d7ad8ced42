use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No `HH:MM-HH:MM` range anywhere in the schedule string.
    #[error("could not find any match in {input:?} for pattern {pattern}")]
    Parse {
        input:   String,
        pattern: &'static str,
    },

    /// The range matched the pattern but a boundary is not a time of day.
    #[error("invalid time of day {token:?}")]
    InvalidTime { token: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
