//! Holds version catalogs for several documentation projects.
//!
//! A site that publishes more than one documentation project (one per
//! component, say) keeps a catalog per project; the repository resolves a
//! project name to its validated index.

use crate::catalog::index::CatalogIndex;
use crate::catalog::model::TargetEntry;
use std::collections::BTreeMap;

#[derive(Default)]
/// In-memory store of validated catalogs keyed by project name.
pub struct CatalogRepository {
    catalogs: BTreeMap<String, CatalogIndex>,
}

impl CatalogRepository {
    /// Register a catalog for a project, replacing any previous one.
    pub fn register(&mut self, project: impl Into<String>, index: CatalogIndex) {
        self.catalogs.insert(project.into(), index);
    }

    /// Fetch a project's catalog, if present.
    pub fn get(&self, project: &str) -> Option<&CatalogIndex> {
        self.catalogs.get(project)
    }

    /// Registered project names in sorted order.
    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// Resolve a target offered by one version of one project.
    ///
    /// `None` when the project or version is unknown, or when that version
    /// does not offer the target.
    pub fn find_target(&self, project: &str, version: &str, target: &str) -> Option<&TargetEntry> {
        self.get(project)?
            .targets_for(version)?
            .into_iter()
            .find(|entry| entry.value.as_str() == target)
    }
}
