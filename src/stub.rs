//! Server stub generation.
//!
//! Renders a [`Manifest`] into a Python program for a FastMCP-style server. Every piece of
//! manifest text placed inside the generated source goes through the `pystr` filter, which
//! emits a complete double-quoted string literal, so quotes, backslashes and newlines in
//! names or descriptions cannot break the program. Tool functions are named after their
//! synthesis identifiers, which are validated before rendering.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::naming::is_valid_identifier;
use log::debug;
use minijinja::{context, Environment, ErrorKind};
use serde::Serialize;

/// File name of the generated stub inside the output directory.
pub const STUB_FILE_NAME: &str = "server_stub_fastmcp.py";

const STUB_TEMPLATE_NAME: &str = "server_stub.py";
const STUB_TEMPLATE: &str = include_str!("../templates/server_stub.py.j2");

/// Tool record handed to the template.
#[derive(Debug, Serialize)]
struct StubTool<'a> {
    identifier: &'a str,
    name: &'a str,
    description: &'a str,
}

/// Renders manifests into server stub source text.
pub struct StubSynthesizer;

impl StubSynthesizer {
    /// Renders the stub program for `manifest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if a tool's synthesis identifier is empty or not
    /// a legal identifier (for example, a manifest loaded from disk, where identifiers are
    /// not stored), and [`Error::TemplateError`] if rendering fails.
    pub fn render(manifest: &Manifest) -> Result<String> {
        debug!("Rendering server stub for {} tools", manifest.tools.len());

        let tools = manifest
            .tools
            .iter()
            .map(|tool| {
                if !is_valid_identifier(&tool.identifier) {
                    return Err(Error::InvalidIdentifier {
                        identifier: tool.identifier.clone(),
                    });
                }
                Ok(StubTool {
                    identifier: &tool.identifier,
                    name: &tool.name,
                    description: &tool.description,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("pystr", python_string_literal);
        env.add_template(STUB_TEMPLATE_NAME, STUB_TEMPLATE)?;

        let template = env.get_template(STUB_TEMPLATE_NAME)?;
        let source = template.render(context! {
            name => &manifest.name,
            version => &manifest.version,
            tools => tools,
            resources => &manifest.resources,
        })?;

        Ok(source)
    }
}

/// Quotes `value` as a double-quoted Python string literal.
///
/// JSON string escaping is a subset of Python's string literal syntax.
fn python_string_literal(value: String) -> std::result::Result<String, minijinja::Error> {
    serde_json::to_string(&value)
        .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
}
