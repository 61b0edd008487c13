//! Serialization module for converting manifests to JSON or YAML and persisting artifacts.

use crate::cli::OutputFormat;
use crate::manifest::Manifest;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a manifest to JSON with two-space indentation.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn serialize_json(manifest: &Manifest) -> Result<String> {
    debug!("Serializing manifest to JSON");
    serde_json::to_string_pretty(manifest).context("Failed to serialize manifest to JSON")
}

/// Serializes a manifest to YAML, keeping the JSON field order.
pub fn serialize_yaml(manifest: &Manifest) -> Result<String> {
    debug!("Serializing manifest to YAML");
    serde_yaml::to_string(manifest).context("Failed to serialize manifest to YAML")
}

/// Serializes a manifest in the requested format.
pub fn serialize(manifest: &Manifest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serialize_json(manifest),
        OutputFormat::Yaml => serialize_yaml(manifest),
    }
}

/// File name of the manifest for a format.
pub fn manifest_file_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "mcp-manifest.json",
        OutputFormat::Yaml => "mcp-manifest.yaml",
    }
}

/// Writes string content to a file, creating parent directories as needed.
///
/// Overwrites an existing file.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be written.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
