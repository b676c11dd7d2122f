//! Validated, indexed view of a version catalog.
//!
//! The index refuses catalogs with integrity violations so the selector never
//! offers a target page that does not exist. Lookups go through `BTreeMap`s
//! keyed by version name and target value; list order still comes from the
//! catalog itself.

use crate::catalog::{
    TargetEntry, TargetId, VersionCatalog, VersionEntry, VersionName, load_catalog_from_path,
};
use crate::validation::validate_catalog;
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
/// Catalog plus position maps keyed by version name and target value.
pub struct CatalogIndex {
    catalog: VersionCatalog,
    versions_by_name: BTreeMap<VersionName, usize>,
    targets_by_value: BTreeMap<TargetId, usize>,
}

impl CatalogIndex {
    /// Validate the catalog and build the lookup maps.
    ///
    /// Fails with every violation listed, one per line.
    pub fn new(catalog: VersionCatalog) -> Result<Self> {
        let violations = validate_catalog(&catalog);
        if !violations.is_empty() {
            warn!(count = violations.len(), "catalog failed validation");
            let details = violations
                .iter()
                .map(|violation| format!("  - {violation}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "catalog has {} integrity violation(s):\n{}",
                violations.len(),
                details
            );
        }

        let versions_by_name = catalog
            .versions()
            .iter()
            .enumerate()
            .map(|(pos, version)| (version.name.clone(), pos))
            .collect();
        let targets_by_value = catalog
            .targets()
            .iter()
            .enumerate()
            .map(|(pos, target)| (target.value.clone(), pos))
            .collect();
        debug!(
            versions = catalog.versions().len(),
            targets = catalog.targets().len(),
            "indexed catalog"
        );

        Ok(Self {
            catalog,
            versions_by_name,
            targets_by_value,
        })
    }

    /// Load, schema-check and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = load_catalog_from_path(path)?;
        Self::new(catalog).with_context(|| format!("validating {}", path.display()))
    }

    /// Resolve a version by name.
    pub fn version(&self, name: &str) -> Option<&VersionEntry> {
        let pos = *self.versions_by_name.get(name)?;
        self.catalog.versions().get(pos)
    }

    /// Resolve a target by its value key.
    pub fn target(&self, value: &str) -> Option<&TargetEntry> {
        let pos = *self.targets_by_value.get(value)?;
        self.catalog.targets().get(pos)
    }

    /// Target entries offered by a version, in its `supported_targets` order.
    ///
    /// Returns `None` for an unknown version and an empty list when the
    /// version has no target-specific documentation.
    pub fn targets_for(&self, name: &str) -> Option<Vec<&TargetEntry>> {
        let version = self.version(name)?;
        Some(
            version
                .effective_targets()
                .iter()
                .filter_map(|id| self.target(id.as_str()))
                .collect(),
        )
    }

    /// Names of versions offering the given target, in display order.
    pub fn versions_supporting(&self, value: &str) -> Vec<&VersionName> {
        self.catalog
            .versions()
            .iter()
            .filter(|version| {
                version
                    .effective_targets()
                    .iter()
                    .any(|id| id.as_str() == value)
            })
            .map(|version| &version.name)
            .collect()
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }
}
