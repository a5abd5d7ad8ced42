use thiserror::Error;

use tq_catalog::CatalogError;
use tq_core::DepartmentId;
use tq_schedule::ScheduleError;
use tq_store::StoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulator configuration error: {0}")]
    Config(String),

    #[error("department catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("counter {key} holds non-integer value {value:?}")]
    InvalidCounter { key: String, value: String },

    /// A fail-fast job stopped its pass at `department`.
    #[error("{job} aborted at department {department}: {source}")]
    Aborted {
        job:        &'static str,
        department: DepartmentId,
        #[source]
        source:     Box<SimError>,
    },

    #[error("failed to spawn job thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("job thread {0} panicked")]
    JobPanicked(&'static str),
}

impl SimError {
    /// The underlying cause, looking through [`SimError::Aborted`].
    pub fn root(&self) -> &SimError {
        match self {
            SimError::Aborted { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
