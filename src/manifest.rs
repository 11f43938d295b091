//! Manifest loading: a JSON or YAML document mapping path to item properties.

use crate::error::{AncestryError, Result};
use crate::item::{Files, Item};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Manifest encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    /// Pick the format from a file extension; anything not YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Parse manifest text. The top level must be a mapping; each value must be a
/// property mapping or `null`.
pub fn parse_manifest(text: &str, format: ManifestFormat) -> Result<Files> {
    let document: Value = match format {
        ManifestFormat::Json => serde_json::from_str(text)
            .map_err(|e| AncestryError::Manifest(format!("Invalid JSON manifest: {}", e)))?,
        ManifestFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| AncestryError::Manifest(format!("Invalid YAML manifest: {}", e)))?,
    };

    let Value::Object(entries) = document else {
        return Err(AncestryError::Manifest(
            "Manifest must map paths to property objects".to_string(),
        ));
    };

    entries
        .into_iter()
        .map(|(path, value)| match value {
            Value::Object(_) | Value::Null => Ok((path, Item::from_value(value))),
            other => Err(AncestryError::Manifest(format!(
                "Entry '{}' must be an object, got {}",
                path, other
            ))),
        })
        .collect()
}

/// Load a manifest file, choosing the format by extension.
pub fn load_manifest(path: &Path) -> Result<Files> {
    let text = std::fs::read_to_string(path)?;
    let files = parse_manifest(&text, ManifestFormat::from_path(path))?;
    debug!(manifest = %path.display(), files = files.len(), "Loaded manifest");
    Ok(files)
}
