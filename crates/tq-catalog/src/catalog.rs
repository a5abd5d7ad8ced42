//! The `DepartmentCatalog` trait and its file-backed implementations.

use std::path::PathBuf;

use tracing::info;

use crate::loader::{load_departments_csv, load_departments_json};
use crate::{CatalogResult, Department};

/// Source of the department list.
///
/// Called exactly once, before any simulation job starts.  A failure here is
/// fatal to startup; implementations should not retry internally.
pub trait DepartmentCatalog {
    /// Return every department, in catalog order.
    fn load(&self) -> CatalogResult<Vec<Department>>;
}

/// A fixed in-memory list.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog(pub Vec<Department>);

impl DepartmentCatalog for StaticCatalog {
    fn load(&self) -> CatalogResult<Vec<Department>> {
        Ok(self.0.clone())
    }
}

/// Departments read from a JSON file (envelope or bare array).
#[derive(Clone, Debug)]
pub struct JsonFileCatalog {
    pub path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DepartmentCatalog for JsonFileCatalog {
    fn load(&self) -> CatalogResult<Vec<Department>> {
        let departments = load_departments_json(&self.path)?;
        info!(path = %self.path.display(), count = departments.len(), "loaded departments");
        Ok(departments)
    }
}

/// Departments read from a CSV file.
#[derive(Clone, Debug)]
pub struct CsvFileCatalog {
    pub path: PathBuf,
}

impl CsvFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DepartmentCatalog for CsvFileCatalog {
    fn load(&self) -> CatalogResult<Vec<Department>> {
        let departments = load_departments_csv(&self.path)?;
        info!(path = %self.path.display(), count = departments.len(), "loaded departments");
        Ok(departments)
    }
}
