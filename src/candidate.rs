//! Candidate construction: turns route matches into tool candidates and qualifying
//! files into resource candidates.

use crate::extractor::{PatternFamily, RouteMatch};
use crate::scanner::ScanResult;
use log::debug;
use serde_json::{json, Value};
use std::path::Path;

/// Files looked up relative to the project root by [`ResourceStrategy::AllowList`].
pub const RESOURCE_ALLOW_LIST: &[&str] = &[
    "config.json",
    "config.yaml",
    "config/app.config.json",
    "logs/app.log",
    ".env",
];

const RESOURCE_DESCRIPTION: &str = "Detected file";

/// A tool derived from one detected route, before identifier allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCandidate {
    /// Protocol-facing name, `lower(method) + "_" + sanitize_route(path)`
    pub raw_name: String,
    /// Human readable description naming the route and its file
    pub description: String,
    /// JSON schema of the tool input
    pub input_schema: Value,
}

/// A read-only file exposed as a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCandidate {
    /// `file://` URI of the absolute file path
    pub uri: String,
    /// Base name of the file
    pub name: String,
    /// Human readable description
    pub description: String,
}

/// Anything a scan can contribute to the manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    Tool(ToolCandidate),
    Resource(ResourceCandidate),
}

/// Input schema used for every detected route: an object without properties.
pub fn default_input_schema() -> Value {
    json!({ "type": "object", "properties": {} })
}

/// Turns a route path into a name fragment.
///
/// Leading and trailing `/` are stripped, inner `/` become `_`, and an empty result
/// becomes `root`.
///
/// ```
/// use mcp_forge::candidate::sanitize_route;
///
/// assert_eq!(sanitize_route("/users/:id/"), "users_:id");
/// assert_eq!(sanitize_route("/"), "root");
/// ```
pub fn sanitize_route(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "root".to_string()
    } else {
        trimmed.replace('/', "_")
    }
}

impl ToolCandidate {
    /// Builds the tool candidate for a route found by `family`.
    pub fn from_route(route: &RouteMatch, family: PatternFamily) -> Self {
        let raw_name = format!(
            "{}_{}",
            route.method.as_str().to_ascii_lowercase(),
            sanitize_route(&route.path)
        );
        let description = format!(
            "{} route detected: {} {} ({})",
            family.label(),
            route.method.as_str(),
            route.path,
            route.source_label
        );

        Self {
            raw_name,
            description,
            input_schema: default_input_schema(),
        }
    }
}

impl ResourceCandidate {
    /// Builds the resource candidate for an absolute file path.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            uri: format!("file://{}", path.display()),
            name,
            description: RESOURCE_DESCRIPTION.to_string(),
        }
    }
}

/// How resource files are discovered for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStrategy {
    /// Only the conventional files of [`RESOURCE_ALLOW_LIST`], relative to the root
    AllowList,
    /// Every configuration or environment file anywhere in the scanned tree
    ByExtension,
}

impl ResourceStrategy {
    /// The strategy paired with a pattern family.
    pub fn for_family(family: PatternFamily) -> Self {
        match family {
            PatternFamily::CallStyle => ResourceStrategy::AllowList,
            PatternFamily::Decorator => ResourceStrategy::ByExtension,
        }
    }

    /// Discovers resource candidates in a scanned tree, at most one per file path.
    ///
    /// Missing allow-list entries are skipped. No file is opened.
    pub fn discover(&self, scan: &ScanResult) -> Vec<ResourceCandidate> {
        match self {
            ResourceStrategy::AllowList => RESOURCE_ALLOW_LIST
                .iter()
                .map(|candidate| scan.root.join(candidate))
                .filter(|path| {
                    let present = path.is_file();
                    if !present {
                        debug!("Resource not present: {}", path.display());
                    }
                    present
                })
                .map(|path| ResourceCandidate::from_path(&path))
                .collect(),
            ResourceStrategy::ByExtension => scan
                .config_files()
                .map(ResourceCandidate::from_path)
                .collect(),
        }
    }
}
