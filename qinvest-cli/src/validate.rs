//! JSON-schema validation of analysis files.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use qinvest_types::schema::QINVEST_ANALYSIS_V1;

/// Schema for `analysis.json`, shipped with the binary.
pub const ANALYSIS_SCHEMA_JSON: &str = include_str!("../schemas/qinvest.analysis.v1.json");

/// Schemas known to this build: (identifier, document).
pub fn known_schemas() -> [(&'static str, &'static str); 1] {
    [(QINVEST_ANALYSIS_V1, ANALYSIS_SCHEMA_JSON)]
}

/// Validate an analysis document, returning one message per violation (empty when valid).
pub fn validate_analysis_value(instance: &serde_json::Value) -> anyhow::Result<Vec<String>> {
    let schema: serde_json::Value =
        serde_json::from_str(ANALYSIS_SCHEMA_JSON).context("parse bundled analysis schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("compile analysis schema: {e}"))?;

    Ok(validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect())
}

/// Read and validate an analysis file.
pub fn validate_analysis_file(path: &Utf8Path) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let instance: serde_json::Value =
        serde_json::from_str(&contents).with_context(|| format!("parse {}", path))?;
    validate_analysis_value(&instance)
}
