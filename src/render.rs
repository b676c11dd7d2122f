//! Output formats for the site generator.
//!
//! `render_json` writes the catalog in its own shape. `render_versions_js`
//! writes the script the version selector loads: a `DOCUMENTATION_VERSIONS`
//! global with `DEFAULTS`, `VERSIONS` and `IDF_TARGETS`, where versions that
//! match the defaults carry only their name.

use crate::catalog::{VersionCatalog, VersionDefaults, VersionEntry};
use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

/// Name of the global assigned by the generated script.
pub const VERSIONS_JS_GLOBAL: &str = "DOCUMENTATION_VERSIONS";

/// Pretty-printed JSON in the `{ versions, targets }` shape.
pub fn render_json(catalog: &VersionCatalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("serializing catalog")
}

/// Defaults block for the script: taken from the first version.
pub fn derive_defaults(catalog: &VersionCatalog) -> VersionDefaults {
    catalog
        .versions()
        .first()
        .map(|first| VersionDefaults {
            has_targets: first.has_targets,
            supported_targets: first.supported_targets.clone(),
        })
        .unwrap_or_default()
}

/// JavaScript assigning the catalog to `DOCUMENTATION_VERSIONS`.
pub fn render_versions_js(catalog: &VersionCatalog) -> Result<String> {
    let defaults = derive_defaults(catalog);
    let versions: Vec<Value> = catalog
        .versions()
        .iter()
        .map(|version| version_overrides(version, &defaults))
        .collect();
    let targets: Vec<Value> = catalog
        .targets()
        .iter()
        .map(|target| json!({"text": target.text, "value": target.value}))
        .collect();

    let document = json!({
        "DEFAULTS": {
            "has_targets": defaults.has_targets,
            "supported_targets": defaults.supported_targets,
        },
        "VERSIONS": versions,
        "IDF_TARGETS": targets,
    });
    let body = serde_json::to_string_pretty(&document).context("serializing versions.js")?;
    Ok(format!(
        "var {VERSIONS_JS_GLOBAL} = {};\n",
        escape_js_line_separators(&body)
    ))
}

// JSON allows raw U+2028/U+2029 inside strings; pre-ES2019 JS does not.
// serde_json only emits them inside string literals.
fn escape_js_line_separators(body: &str) -> String {
    body.replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn version_overrides(version: &VersionEntry, defaults: &VersionDefaults) -> Value {
    let mut entry = Map::new();
    entry.insert("name".to_string(), json!(version.name));
    if version.has_targets != defaults.has_targets {
        entry.insert("has_targets".to_string(), json!(version.has_targets));
    }
    if version.supported_targets != defaults.supported_targets {
        entry.insert(
            "supported_targets".to_string(),
            json!(version.supported_targets),
        );
    }
    Value::Object(entry)
}
