//! JSON export and import of themes

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::config::ThemeConfig;
use crate::constants::transfer::REQUIRED_FIELD;

/// Why an imported document was refused. The current theme is left as it was.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not JSON at all
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The JSON does not describe a theme
    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Pretty-printed JSON for a theme
pub fn export_json(config: &ThemeConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config)
}

/// Write the theme as a pretty-printed JSON document
pub fn export_config(config: &ThemeConfig, path: &Path) -> Result<()> {
    let contents = export_json(config).context("Failed to serialize theme to JSON")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write theme to {:?}", path))?;
    info!(path = %path.display(), "Exported theme");
    Ok(())
}

/// Parse a candidate theme from JSON text.
///
/// Only the presence of `typography` is required. Missing fields fall back
/// to their defaults and bounded values are brought back into range.
pub fn import_config(raw: &str) -> Result<ThemeConfig, ImportError> {
    let document: Value = serde_json::from_str(raw)?;

    if !document.get(REQUIRED_FIELD).is_some_and(is_truthy) {
        return Err(ImportError::Validation(format!(
            "missing required field `{REQUIRED_FIELD}`"
        )));
    }

    let config: ThemeConfig = serde_json::from_value(document)
        .map_err(|err| ImportError::Validation(err.to_string()))?;
    Ok(config.sanitized())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
