//! `tq-catalog`: department records and where they come from.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`department`]  | `Department`, `Geo`, `SpecialFeatures`                        |
//! | [`catalog`]     | `DepartmentCatalog` trait, `StaticCatalog`, `JsonFileCatalog`, `CsvFileCatalog` |
//! | [`http`]        | `HttpCatalog`, `DEFAULT_DEPARTMENTS_URL`                      |
//! | [`loader`]      | `load_departments_json[_reader]`, `load_departments_csv[_reader]` |
//! | [`error`]       | `CatalogError`, `CatalogResult<T>`                            |

pub mod catalog;
pub mod department;
pub mod error;
pub mod http;
pub mod loader;

#[cfg(test)]
mod tests;

pub use catalog::{CsvFileCatalog, DepartmentCatalog, JsonFileCatalog, StaticCatalog};
pub use department::{Department, Geo, SpecialFeatures};
pub use error::{CatalogError, CatalogResult};
pub use http::{DEFAULT_DEPARTMENTS_URL, HttpCatalog};
pub use loader::{
    load_departments_csv, load_departments_csv_reader, load_departments_json,
    load_departments_json_reader,
};
