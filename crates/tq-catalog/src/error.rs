use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("department JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("department CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("department fetch from {url} failed: {reason}")]
    Http { url: String, reason: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
