//! MCP Forge - MCP server skeletons from existing web projects.
//!
//! This library scans a project tree for web framework route declarations and turns them
//! into three artifacts: an MCP capability manifest, a runnable server stub exposing each
//! route as a tool, and an HTML report. Detection is textual pattern matching over source
//! files; nothing is parsed or executed.
//!
//! # Supported Route Styles
//!
//! - **Call style** (Express and friends): `app.get('/ping', handler)` in `.js`/`.ts` files
//! - **Decorator style** (FastAPI, Flask): `@app.post('/items')` in `.py` files
//!
//! # Architecture
//!
//! 1. [`scanner`] - Walks the project, pruning dependency, VCS and build directories
//! 2. [`detector`] - Resolves the analysis mode into a pattern family
//! 3. [`extractor`] - Finds route declarations in source text
//! 4. [`candidate`] - Builds tool and resource candidates
//! 5. [`analyzer`] - Runs steps 1-4 over a project
//! 6. [`naming`] - Allocates unique, legal identifiers for generated code
//! 7. [`manifest`] - Assembles the capability manifest
//! 8. [`stub`] / [`report`] - Render the server stub and the HTML report
//! 9. [`serializer`] - Serializes the manifest and writes artifacts
//!
//! # Example Usage
//!
//! ```no_run
//! use mcp_forge::{
//!     analyzer::ProjectAnalyzer,
//!     cli::AnalysisMode,
//!     manifest::ManifestAssembler,
//!     serializer::serialize_json,
//!     stub::StubSynthesizer,
//! };
//! use std::path::PathBuf;
//!
//! let analysis = ProjectAnalyzer::new(PathBuf::from("./my-project"), AnalysisMode::Auto)
//!     .analyze()
//!     .unwrap();
//! let manifest = ManifestAssembler::new("my-project").assemble(&analysis.tools, &analysis.resources);
//!
//! println!("{}", serialize_json(&manifest).unwrap());
//! println!("{}", StubSynthesizer::render(&manifest).unwrap());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod scanner;
pub mod detector;
pub mod extractor;
pub mod candidate;
pub mod analyzer;
pub mod naming;
pub mod manifest;
pub mod stub;
pub mod report;
pub mod serializer;
pub mod selftest;
pub mod error;
