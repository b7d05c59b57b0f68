//! Configuration file loading

use std::path::Path;

use jsonc_parser::ParseOptions;
use miette::{IntoDiagnostic, Result};
use tracing::debug;

/// Reads a JSON or JSONC configuration file into a value.
///
/// An empty file yields an empty object.
pub fn load_config(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .map_err(|e| e.wrap_err(format!("Failed to read config {}", path.display())))?;

    let value = parse_config(&content)
        .map_err(|e| e.wrap_err(format!("Invalid config {}", path.display())))?;
    debug!("Loaded config from {}", path.display());
    Ok(value)
}

fn parse_config(content: &str) -> Result<serde_json::Value> {
    let parse_options = ParseOptions::default();
    let value = jsonc_parser::parse_to_serde_value(content, &parse_options)
        .map_err(|e| miette::miette!("Failed to parse config: {}", e))?
        .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

    if !value.is_object() {
        return Err(miette::miette!("Config must be an object"));
    }

    Ok(value)
}
