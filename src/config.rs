//! Catalog source selection.
//!
//! Precedence: an explicit `--catalog` path, then `DOC_VERSIONS_CATALOG`, then
//! the built-in catalog. Blank (whitespace-only) values count as unset; other
//! values are used verbatim, edge whitespace included.

use crate::catalog::{CatalogIndex, builtin_catalog};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a catalog file to use instead of the built-in one.
pub const ENV_CATALOG_PATH: &str = "DOC_VERSIONS_CATALOG";
/// Environment variable holding the tracing filter for the CLI.
pub const ENV_LOG_FILTER: &str = "DOC_VERSIONS_LOG";
/// Filter used when `DOC_VERSIONS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Eq, PartialEq)]
/// Where the catalog comes from.
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Pick a source from an optional flag and the process environment.
    pub fn resolve(flag: Option<&Path>) -> Self {
        Self::select(flag, env::var(ENV_CATALOG_PATH).ok().as_deref())
    }

    /// Pick a source from an optional flag and an explicit environment value.
    pub fn select(flag: Option<&Path>, env_value: Option<&str>) -> Self {
        if let Some(path) = flag.filter(|p| !is_blank(&p.to_string_lossy())) {
            return CatalogSource::File(path.to_path_buf());
        }
        match env_value.filter(|v| !is_blank(v)) {
            Some(raw) => CatalogSource::File(PathBuf::from(raw)),
            None => CatalogSource::Builtin,
        }
    }

    /// Load and validate the catalog this source points at.
    pub fn load(&self) -> Result<CatalogIndex> {
        match self {
            CatalogSource::Builtin => {
                debug!("using built-in catalog");
                CatalogIndex::new(builtin_catalog().clone())
                    .context("validating built-in catalog")
            }
            CatalogSource::File(path) => {
                debug!(path = %path.display(), "using catalog file");
                CatalogIndex::load(path)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin => "built-in catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let source = CatalogSource::select(Some(Path::new("a.json")), Some("b.json"));
        assert_eq!(source, CatalogSource::File(PathBuf::from("a.json")));
    }

    #[test]
    fn environment_beats_builtin() {
        let source = CatalogSource::select(None, Some("b.json"));
        assert_eq!(source, CatalogSource::File(PathBuf::from("b.json")));
    }

    #[test]
    fn edge_whitespace_is_kept_in_both_sources() {
        let from_env = CatalogSource::select(None, Some(" b.json "));
        assert_eq!(from_env, CatalogSource::File(PathBuf::from(" b.json ")));
        let from_flag = CatalogSource::select(Some(Path::new(" a.json ")), None);
        assert_eq!(from_flag, CatalogSource::File(PathBuf::from(" a.json ")));
    }

    #[test]
    fn blank_values_fall_back_to_builtin() {
        assert_eq!(CatalogSource::select(None, Some("  ")), CatalogSource::Builtin);
        assert_eq!(
            CatalogSource::select(Some(Path::new("")), None),
            CatalogSource::Builtin
        );
        assert_eq!(
            CatalogSource::select(Some(Path::new("  ")), Some("b.json")),
            CatalogSource::File(PathBuf::from("b.json"))
        );
        assert_eq!(CatalogSource::select(None, None), CatalogSource::Builtin);
    }

    #[test]
    fn builtin_source_loads() {
        let index = CatalogSource::Builtin.load().unwrap();
        assert!(index.version("latest").is_some());
        assert_eq!(CatalogSource::Builtin.describe(), "built-in catalog");
    }

    #[test]
    fn missing_file_names_path_in_error() {
        let err = CatalogSource::File(PathBuf::from("/nonexistent/catalog.json"))
            .load()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/catalog.json"));
    }
}
