//! Integrity checks for version catalogs.
//!
//! Violations are collected instead of short-circuiting so a broken catalog
//! reports every problem in one pass. `CatalogIndex::new` refuses catalogs with
//! any violation; callers that only want a report use `validate_catalog`.

use crate::catalog::{TargetId, VersionCatalog, VersionName};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Clone, Debug, Eq, PartialEq)]
/// A single data-integrity problem found in a catalog.
pub enum CatalogViolation {
    #[error("version entry #{index} has an empty name")]
    EmptyVersionName { index: usize },

    #[error("duplicate version name '{name}'")]
    DuplicateVersion { name: VersionName },

    #[error("target entry #{index} has an empty value")]
    EmptyTargetValue { index: usize },

    #[error("target '{value}' has an empty display text")]
    EmptyTargetText { value: TargetId },

    #[error("duplicate target value '{value}'")]
    DuplicateTarget { value: TargetId },

    #[error("version '{version}' references unknown target '{target}'")]
    UnknownTarget {
        version: VersionName,
        target: TargetId,
    },
}

impl CatalogViolation {
    /// True for dangling `supported_targets` references.
    pub fn is_referential(&self) -> bool {
        matches!(self, CatalogViolation::UnknownTarget { .. })
    }
}

/// Check name/value uniqueness and supported-target references.
///
/// Versions with `has_targets == false` keep whatever `supported_targets` they
/// carry, but the list is ignored and not checked.
pub fn validate_catalog(catalog: &VersionCatalog) -> Vec<CatalogViolation> {
    let mut violations = Vec::new();

    let mut target_values: BTreeSet<&TargetId> = BTreeSet::new();
    for (index, target) in catalog.targets().iter().enumerate() {
        if target.value.as_str().trim().is_empty() {
            violations.push(CatalogViolation::EmptyTargetValue { index });
            continue;
        }
        if target.text.trim().is_empty() {
            violations.push(CatalogViolation::EmptyTargetText {
                value: target.value.clone(),
            });
        }
        if !target_values.insert(&target.value) {
            violations.push(CatalogViolation::DuplicateTarget {
                value: target.value.clone(),
            });
        }
    }

    let mut names: BTreeSet<&VersionName> = BTreeSet::new();
    for (index, version) in catalog.versions().iter().enumerate() {
        if version.name.as_str().trim().is_empty() {
            violations.push(CatalogViolation::EmptyVersionName { index });
        } else if !names.insert(&version.name) {
            violations.push(CatalogViolation::DuplicateVersion {
                name: version.name.clone(),
            });
        }

        if !version.has_targets {
            if !version.supported_targets.is_empty() {
                debug!(
                    version = %version.name,
                    ignored = version.supported_targets.len(),
                    "version has no targets; ignoring supported_targets"
                );
            }
            continue;
        }

        // Report each dangling reference once per version even if repeated.
        let mut reported = BTreeSet::new();
        for target in &version.supported_targets {
            if !target_values.contains(target) && reported.insert(target) {
                violations.push(CatalogViolation::UnknownTarget {
                    version: version.name.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    violations
}
