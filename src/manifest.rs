use crate::candidate::{ResourceCandidate, ToolCandidate};
use crate::naming::IdentifierAllocator;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version written into every manifest and stub.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Server name used when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "auto-mcp";

/// MCP capability manifest.
///
/// Field order is the serialized order: `name`, `version`, `tools`, `resources`, `prompts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
    /// Tools in discovery order
    pub tools: Vec<ToolDescriptor>,
    /// Resources in discovery order
    pub resources: Vec<ResourceDescriptor>,
    /// Always empty
    pub prompts: Vec<Value>,
}

/// A finalized tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Protocol-facing display name; may repeat across tools
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON schema of the tool input
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    /// Collision-free identifier used in generated code; not part of the manifest document
    #[serde(skip)]
    pub identifier: String,
}

/// A finalized resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// `file://` URI
    pub uri: String,
    /// Display name (file base name)
    pub name: String,
    /// Resource description
    pub description: String,
}

/// Folds tool and resource candidates into a [`Manifest`].
///
/// Assembly preserves input order, never filters, and allocates synthesis identifiers with
/// a fresh [`IdentifierAllocator`] each time, so assembling the same input twice gives the
/// same manifest.
pub struct ManifestAssembler {
    name: String,
    version: String,
}

impl ManifestAssembler {
    /// Create an assembler for a server called `name`, at [`DEFAULT_VERSION`]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Override the manifest version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Build the manifest
    pub fn assemble(&self, tools: &[ToolCandidate], resources: &[ResourceCandidate]) -> Manifest {
        debug!(
            "Assembling manifest '{}' with {} tools and {} resources",
            self.name,
            tools.len(),
            resources.len()
        );

        let mut allocator = IdentifierAllocator::new();
        let tools = tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.raw_name.clone(),
                description: tool.description.clone(),
                input_schema: tool.input_schema.clone(),
                identifier: allocator.allocate(&tool.raw_name),
            })
            .collect();

        let resources = resources
            .iter()
            .map(|resource| ResourceDescriptor {
                uri: resource.uri.clone(),
                name: resource.name.clone(),
                description: resource.description.clone(),
            })
            .collect();

        Manifest {
            name: self.name.clone(),
            version: self.version.clone(),
            tools,
            resources,
            prompts: Vec::new(),
        }
    }
}
