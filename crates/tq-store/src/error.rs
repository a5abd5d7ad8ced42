//! Error types for tq-store.

use thiserror::Error;

/// Errors a [`KeyValueStore`][crate::KeyValueStore] backend can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport or backend failure (connection lost, lock poisoned, …).
    #[error("store backend error: {0}")]
    Backend(String),

    /// The TTL is not positive, or too large for the backend to represent.
    #[error("invalid TTL {ttl_minutes} min for key {key:?}")]
    InvalidTtl { key: String, ttl_minutes: i64 },
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
