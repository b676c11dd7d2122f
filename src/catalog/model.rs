//! Serde representation of a documentation version catalog.
//!
//! `VersionCatalog` is the resolved, read-only value handed to consumers.
//! Files on disk are parsed as a `CatalogDocument`, whose optional `defaults`
//! block fills in version fields the entries leave out. Use `CatalogIndex` for
//! integrity checks and lookups; use these structs when the raw lists are all
//! that is needed.

use crate::catalog::identity::{TargetId, VersionName};
use crate::schema_loader::validate_catalog_document;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One publishable documentation version.
///
/// Output only; catalog files are read as `VersionSpec` and resolved.
pub struct VersionEntry {
    pub name: VersionName,
    pub has_targets: bool,
    pub supported_targets: Vec<TargetId>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One selectable hardware target: display label plus stable key.
pub struct TargetEntry {
    pub text: String,
    pub value: TargetId,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
/// Ordered versions and targets, in display order.
///
/// There are no mutating methods; build a new catalog instead.
pub struct VersionCatalog {
    versions: Vec<VersionEntry>,
    targets: Vec<TargetEntry>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Values applied to version entries that omit the corresponding field.
pub struct VersionDefaults {
    #[serde(alias = "has_targets", default)]
    pub has_targets: bool,
    #[serde(alias = "supported_targets", default)]
    pub supported_targets: Vec<TargetId>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Version entry as written in a catalog file, before defaults are applied.
pub struct VersionSpec {
    pub name: VersionName,
    #[serde(alias = "has_targets", default)]
    pub has_targets: Option<bool>,
    #[serde(alias = "supported_targets", default)]
    pub supported_targets: Option<Vec<TargetId>>,
}

#[derive(Clone, Debug, Deserialize)]
/// Catalog file layout as stored on disk.
pub struct CatalogDocument {
    #[serde(default)]
    pub defaults: Option<VersionDefaults>,
    pub versions: Vec<VersionSpec>,
    #[serde(default)]
    pub targets: Vec<TargetEntry>,
}

impl VersionEntry {
    pub fn new<I, T>(name: impl Into<String>, has_targets: bool, supported_targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: VersionName::new(name),
            has_targets,
            supported_targets: supported_targets
                .into_iter()
                .map(TargetId::new)
                .collect(),
        }
    }

    /// Supported targets that take effect; empty when the version exposes none.
    pub fn effective_targets(&self) -> &[TargetId] {
        if self.has_targets {
            &self.supported_targets
        } else {
            &[]
        }
    }
}

impl TargetEntry {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: TargetId::new(value),
        }
    }
}

impl VersionCatalog {
    pub fn new(versions: Vec<VersionEntry>, targets: Vec<TargetEntry>) -> Self {
        Self { versions, targets }
    }

    /// All documentation versions in display order.
    pub fn versions(&self) -> &[VersionEntry] {
        &self.versions
    }

    /// All hardware targets in display order.
    pub fn targets(&self) -> &[TargetEntry] {
        &self.targets
    }
}

impl VersionSpec {
    fn resolve(self, defaults: &VersionDefaults) -> VersionEntry {
        VersionEntry {
            name: self.name,
            has_targets: self.has_targets.unwrap_or(defaults.has_targets),
            supported_targets: self
                .supported_targets
                .unwrap_or_else(|| defaults.supported_targets.clone()),
        }
    }
}

impl CatalogDocument {
    /// Apply the defaults block and produce the read-only catalog.
    pub fn resolve(self) -> VersionCatalog {
        let defaults = self.defaults.unwrap_or_default();
        let versions = self
            .versions
            .into_iter()
            .map(|spec| spec.resolve(&defaults))
            .collect();
        VersionCatalog::new(versions, self.targets)
    }
}

/// Parse a catalog document from JSON text: schema check, deserialize, resolve.
///
/// Integrity (duplicates, dangling target references) is not checked here; see
/// `validate_catalog` and `CatalogIndex`.
pub fn parse_catalog(json: &str) -> Result<VersionCatalog> {
    let value: Value = serde_json::from_str(json).context("parsing catalog JSON")?;
    validate_catalog_document(&value)?;
    let document: CatalogDocument =
        serde_json::from_value(value).context("decoding catalog document")?;
    Ok(document.resolve())
}

/// Read and parse a catalog file from disk without integrity validation.
pub fn load_catalog_from_path(path: &Path) -> Result<VersionCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog =
        parse_catalog(&data).with_context(|| format!("loading catalog {}", path.display()))?;
    debug!(
        path = %path.display(),
        versions = catalog.versions().len(),
        targets = catalog.targets().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_omitted_fields() {
        let catalog = parse_catalog(
            r#"{
                "defaults": {"has_targets": true, "supported_targets": ["esp32", "esp32s2"]},
                "versions": [
                    {"name": "latest"},
                    {"name": "v1.0", "hasTargets": false},
                    {"name": "v0.9", "supportedTargets": ["esp32"]}
                ],
                "targets": [
                    {"text": "ESP32", "value": "esp32"},
                    {"text": "ESP32-S2", "value": "esp32s2"}
                ]
            }"#,
        )
        .unwrap();

        let versions = catalog.versions();
        assert_eq!(versions.len(), 3);
        assert!(versions[0].has_targets);
        assert_eq!(
            versions[0].supported_targets,
            vec![TargetId::new("esp32"), TargetId::new("esp32s2")]
        );
        assert!(!versions[1].has_targets);
        assert!(versions[1].effective_targets().is_empty());
        assert!(versions[2].has_targets);
        assert_eq!(versions[2].supported_targets, vec![TargetId::new("esp32")]);
    }

    #[test]
    fn missing_defaults_mean_no_targets() {
        let catalog = parse_catalog(r#"{"versions": [{"name": "latest"}]}"#).unwrap();
        let entry = &catalog.versions()[0];
        assert!(!entry.has_targets);
        assert!(entry.supported_targets.is_empty());
        assert!(catalog.targets().is_empty());
    }

    #[test]
    fn serializes_in_camel_case() {
        let catalog = VersionCatalog::new(
            vec![VersionEntry::new("latest", true, ["esp32"])],
            vec![TargetEntry::new("ESP32", "esp32")],
        );
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["versions"][0]["hasTargets"], Value::Bool(true));
        assert_eq!(value["versions"][0]["supportedTargets"][0], "esp32");
        assert_eq!(value["targets"][0]["text"], "ESP32");
        assert!(value["versions"][0].get("has_targets").is_none());
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"targets": []}"#).is_err());
        assert!(parse_catalog(r#"{"versions": [{"name": 3}]}"#).is_err());
    }

    #[test]
    fn mixed_spellings_fail_at_schema_gate() {
        let err = parse_catalog(
            r#"{"versions": [{"name": "latest", "hasTargets": true, "has_targets": false}]}"#,
        )
        .unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("failed schema validation"), "{rendered}");
        assert!(!rendered.contains("duplicate field"), "{rendered}");
    }

    #[test]
    fn versions_resolve_only_through_document_defaults() {
        // Entries omitting both fields are valid input; resolution supplies them.
        let catalog = parse_catalog(
            r#"{"defaults": {"hasTargets": true}, "versions": [{"name": "latest"}]}"#,
        )
        .unwrap();
        assert_eq!(
            catalog.versions(),
            [VersionEntry::new("latest", true, Vec::<String>::new())]
        );
    }
}
