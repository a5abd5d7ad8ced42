//! JSON and CSV department loaders.
//!
//! # JSON format
//!
//! Either the upstream envelope or a bare array:
//!
//! ```json
//! {"branches": [{"id": 1, "scheduleFl": "09:00-18:00", "scheduleJurL": "10:00-17:00", "city": "…"}]}
//! [{"id": 1, "scheduleFl": "09:00-18:00", "scheduleJurL": "10:00-17:00"}]
//! ```
//!
//! # CSV format
//!
//! One row per department.  Only `id` is required; the display columns may
//! be omitted entirely.
//!
//! ```csv
//! id,scheduleFl,scheduleJurL,shortName,city,address
//! 1,09:00-18:00,10:00-17:00,Central,Moscow,Tverskaya 1
//! 2,пн-пт 09.30-19.00,,North,,
//! ```
//!
//! Empty cells load as missing fields.  Row order is preserved in both
//! formats.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use tq_core::DepartmentId;

use crate::{CatalogResult, Department};

// ── JSON payload ──────────────────────────────────────────────────────────────

/// Upstream response body: `{"branches": [...]}`.  The field is required;
/// an error body without it must not load as an empty catalog.
#[derive(Deserialize)]
pub(crate) struct BranchesPayload {
    pub(crate) branches: Vec<Department>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Envelope(BranchesPayload),
    List(Vec<Department>),
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DepartmentRecord {
    id: i64,
    #[serde(rename = "scheduleFl", default)]
    schedule_fl: Option<String>,
    #[serde(rename = "scheduleJurL", default)]
    schedule_jur_l: Option<String>,
    #[serde(rename = "shortName", default)]
    short_name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

impl From<DepartmentRecord> for Department {
    fn from(r: DepartmentRecord) -> Self {
        Department {
            id:             DepartmentId(r.id),
            schedule_fl:    r.schedule_fl,
            schedule_jur_l: r.schedule_jur_l,
            biskvit_id:     None,
            address:        r.address,
            city:           r.city,
            short_name:     r.short_name,
            coordinates:    None,
            special:        None,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load departments from a JSON file.
pub fn load_departments_json(path: &Path) -> CatalogResult<Vec<Department>> {
    let file = File::open(path)?;
    load_departments_json_reader(BufReader::new(file))
}

/// Like [`load_departments_json`] but accepts any `Read` source.
pub fn load_departments_json_reader<R: Read>(reader: R) -> CatalogResult<Vec<Department>> {
    let departments = match serde_json::from_reader(reader)? {
        JsonCatalog::Envelope(payload) => payload.branches,
        JsonCatalog::List(list) => list,
    };
    Ok(departments)
}

/// Decode an upstream response body.  Only the envelope form is accepted.
pub(crate) fn load_branches_reader<R: Read>(reader: R) -> CatalogResult<Vec<Department>> {
    let payload: BranchesPayload = serde_json::from_reader(reader)?;
    Ok(payload.branches)
}

/// Load departments from a CSV file.
pub fn load_departments_csv(path: &Path) -> CatalogResult<Vec<Department>> {
    let file = File::open(path)?;
    load_departments_csv_reader(file)
}

/// Like [`load_departments_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_departments_csv_reader<R: Read>(reader: R) -> CatalogResult<Vec<Department>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut departments = Vec::new();
    for result in csv_reader.deserialize::<DepartmentRecord>() {
        departments.push(Department::from(result?));
    }
    Ok(departments)
}
