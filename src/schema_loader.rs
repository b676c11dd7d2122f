//! JSON Schema gate for catalog documents.
//!
//! The schema ships inside the binary (`schema/versions_catalog.schema.json`)
//! so a catalog file is checked structurally before serde sees it. Schema
//! failures list every offending instance path, which reads better than the
//! first serde error when someone hand-edits a catalog.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

/// Bundled schema for catalog documents.
pub const CATALOG_SCHEMA_SOURCE: &str = include_str!("../schema/versions_catalog.schema.json");

fn catalog_schema_value() -> Result<&'static Value> {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    if let Some(schema) = SCHEMA.get() {
        return Ok(schema);
    }
    let parsed: Value = serde_json::from_str(CATALOG_SCHEMA_SOURCE)
        .map_err(|err| anyhow!("parsing bundled catalog schema: {err}"))?;
    Ok(SCHEMA.get_or_init(|| parsed))
}

/// Compile the bundled catalog schema.
pub(crate) fn compile_catalog_schema() -> Result<JSONSchema> {
    let schema = catalog_schema_value()?;
    JSONSchema::compile(schema).map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))
}

/// Check a parsed catalog document against the bundled schema.
pub fn validate_catalog_document(document: &Value) -> Result<()> {
    let compiled = compile_catalog_schema()?;
    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {}", display_path(&err.instance_path.to_string()), err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog document failed schema validation:\n{details}");
    }
    Ok(())
}

fn display_path(pointer: &str) -> &str {
    if pointer.is_empty() { "/" } else { pointer }
}
