//! Documentation version catalog for the docs version selector.
//!
//! The crate exposes the catalog types (versions, hardware targets), the
//! built-in catalog published with the site, integrity validation, and the
//! renderers the site generator consumes. Public items here form the contract
//! the `doc-versions` binary depends on: catalog source resolution, loading
//! with schema and integrity checks, and JSON / `versions.js` output.

pub mod catalog;
pub mod config;
pub mod render;
pub mod schema_loader;
pub mod validation;

pub use catalog::{
    CatalogDocument, CatalogIndex, CatalogRepository, TargetEntry, TargetId, VersionCatalog,
    VersionDefaults, VersionEntry, VersionName, builtin_catalog, load_catalog_from_path,
    parse_catalog,
};
pub use config::CatalogSource;
pub use render::{render_json, render_versions_js};
pub use schema_loader::validate_catalog_document;
pub use validation::{CatalogViolation, validate_catalog};
