//! Built-in checks run by `mcp-forge --selftest`.

use crate::analyzer::ProjectAnalyzer;
use crate::cli::AnalysisMode;
use crate::manifest::ManifestAssembler;
use crate::stub::StubSynthesizer;
use anyhow::{ensure, Context, Result};
use log::info;
use std::fs;
use tempfile::TempDir;

struct Scenario {
    name: &'static str,
    file_name: &'static str,
    source: &'static str,
    mode: AnalysisMode,
    expected_tool: &'static str,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "call-style route",
        file_name: "app.js",
        source: "app.get('/ping',()=>{});",
        mode: AnalysisMode::Js,
        expected_tool: "get_ping",
    },
    Scenario {
        name: "decorator route",
        file_name: "demo.py",
        source: "@app.post('/foo')\ndef foo():\n return 'ok'",
        mode: AnalysisMode::Python,
        expected_tool: "post_foo",
    },
];

/// Runs every scenario in its own temporary project.
///
/// Returns the number of passing scenarios, or an error naming the first failing one.
pub fn run_selftests() -> Result<usize> {
    let mut passed = 0;

    for scenario in SCENARIOS {
        run_scenario(scenario).with_context(|| format!("Selftest '{}' failed", scenario.name))?;
        info!("Selftest '{}' passed", scenario.name);
        passed += 1;
    }

    Ok(passed)
}

fn run_scenario(scenario: &Scenario) -> Result<()> {
    let project = TempDir::new().context("Failed to create temporary project")?;
    fs::write(project.path().join(scenario.file_name), scenario.source)?;

    let analysis = ProjectAnalyzer::new(project.path().to_path_buf(), scenario.mode).analyze()?;
    let manifest =
        ManifestAssembler::new("selftest").assemble(&analysis.tools, &analysis.resources);

    ensure!(
        manifest.tools.iter().any(|t| t.name == scenario.expected_tool),
        "expected tool '{}' in manifest",
        scenario.expected_tool
    );

    let stub = StubSynthesizer::render(&manifest)?;
    ensure!(
        stub.contains(&format!("def {}():", scenario.expected_tool)),
        "expected function '{}' in server stub",
        scenario.expected_tool
    );

    Ok(())
}
