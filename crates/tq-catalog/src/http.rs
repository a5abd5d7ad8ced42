//! Blocking HTTP catalog.

use std::time::Duration;

use tracing::{debug, info};

use crate::loader::load_branches_reader;
use crate::{CatalogError, CatalogResult, DepartmentCatalog, Department};

/// Upstream branch directory.
pub const DEFAULT_DEPARTMENTS_URL: &str =
    "https://headless-cms3.vtb.ru/projects/atm/models/default/items/departments";

/// Fetches `{"branches": [...]}` from a URL with a single GET.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    pub url:     String,
    pub timeout: Duration,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), timeout: Duration::from_secs(30) }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn fail(&self, reason: impl ToString) -> CatalogError {
        CatalogError::Http { url: self.url.clone(), reason: reason.to_string() }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_DEPARTMENTS_URL)
    }
}

impl DepartmentCatalog for HttpCatalog {
    fn load(&self) -> CatalogResult<Vec<Department>> {
        info!(url = %self.url, "loading departments");
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let response = agent.get(&self.url).call().map_err(|e| self.fail(e))?;
        debug!(status = response.status(), "department response received");
        let departments = load_branches_reader(response.into_reader())?;
        info!(count = departments.len(), "loaded departments");
        Ok(departments)
    }
}
