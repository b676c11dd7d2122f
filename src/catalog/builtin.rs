//! The catalog published with the documentation site.

use crate::catalog::model::{TargetEntry, VersionCatalog, VersionEntry};
use std::sync::OnceLock;

/// Targets in selector order: (display label, key).
const TARGETS: &[(&str, &str)] = &[
    ("ESP32", "esp32"),
    ("ESP32-S2", "esp32s2"),
    ("ESP32-S3", "esp32s3"),
    ("ESP32-C2", "esp32c2"),
    ("ESP32-C3", "esp32c3"),
];

/// Versions in selector order: (name, has_targets, supported target keys).
const VERSIONS: &[(&str, bool, &[&str])] = &[(
    "latest",
    true,
    &["esp32", "esp32s2", "esp32s3", "esp32c2", "esp32c3"],
)];

/// Shared read-only catalog, built on first access.
pub fn builtin_catalog() -> &'static VersionCatalog {
    static CATALOG: OnceLock<VersionCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let versions = VERSIONS
            .iter()
            .map(|(name, has_targets, supported)| {
                VersionEntry::new(*name, *has_targets, supported.iter().copied())
            })
            .collect();
        let targets = TARGETS
            .iter()
            .map(|(text, value)| TargetEntry::new(*text, *value))
            .collect();
        VersionCatalog::new(versions, targets)
    })
}
