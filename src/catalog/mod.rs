//! Documentation version catalog wiring.
//!
//! `VersionCatalog` holds the ordered version and target lists consumed by the
//! docs version selector. The built-in catalog is available through
//! `builtin_catalog`; catalogs on disk are loaded with `load_catalog_from_path`
//! and validated through `CatalogIndex`. `CatalogRepository` keys several
//! catalogs by documentation project.

pub mod builtin;
pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use builtin::builtin_catalog;
pub use identity::{TargetId, VersionName};
pub use index::CatalogIndex;
pub use model::{
    CatalogDocument, TargetEntry, VersionCatalog, VersionDefaults, VersionEntry, VersionSpec,
};
pub use repository::CatalogRepository;

pub use model::{load_catalog_from_path, parse_catalog};
