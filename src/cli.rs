use crate::manifest::{DEFAULT_SERVER_NAME, DEFAULT_VERSION};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// MCP Forge - Generate an MCP server skeleton from an existing web project
#[derive(Parser, Debug)]
#[command(name = "mcp-forge")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the project directory to scan
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: Option<PathBuf>,

    /// Output directory for the manifest, server stub and report
    #[arg(short = 'o', long = "out", value_name = "DIR", default_value = "./mcp-out")]
    pub out_dir: PathBuf,

    /// Route pattern family to use (if auto, chosen from the files found)
    #[arg(short = 'p', long = "prefer", value_enum, default_value = "auto")]
    pub prefer: AnalysisMode,

    /// Server name written into the manifest and the stub
    #[arg(short = 'n', long = "name", default_value = DEFAULT_SERVER_NAME)]
    pub name: String,

    /// Manifest format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Run the built-in self-test and exit
    #[arg(long = "selftest")]
    pub selftest: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Analysis mode requested on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Decorator style if the project only has Python files, call style otherwise
    Auto,
    /// Call style: `app.get('/path', ...)` in JavaScript / TypeScript
    #[value(alias = "call")]
    Js,
    /// Decorator style: `@app.get('/path')` in Python
    #[value(alias = "decorator")]
    Python,
}

/// Manifest format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
    /// Requested analysis mode
    pub mode: AnalysisMode,
    /// Manifest format
    pub format: OutputFormat,
    /// Output directory, left out of the scan when it sits inside the project
    pub out_dir: Option<PathBuf>,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            mode: AnalysisMode::Auto,
            format: OutputFormat::Json,
            out_dir: None,
        }
    }
}

impl From<&CliArgs> for ForgeConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            name: args.name.clone(),
            mode: args.prefer,
            format: args.output_format,
            out_dir: Some(args.out_dir.clone()),
            ..Self::default()
        }
    }
}

/// Text of the three generated artifacts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Serialized manifest
    pub manifest: String,
    /// Server stub source
    pub stub: String,
    /// HTML report
    pub report: String,
    /// Number of tools in the manifest
    pub tool_count: usize,
    /// Number of resources in the manifest
    pub resource_count: usize,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if let Some(ref project_path) = args.project_path {
        if !project_path.exists() {
            anyhow::bail!("Project path does not exist: {}", project_path.display());
        }
        if !project_path.is_dir() {
            anyhow::bail!("Project path is not a directory: {}", project_path.display());
        }
        info!("Project path: {}", project_path.display());
    }

    info!("Output directory: {}", args.out_dir.display());
    info!("Analysis mode: {:?}", args.prefer);
    info!("Manifest format: {:?}", args.output_format);

    Ok(args)
}

/// Scan `project` and render all artifacts in memory.
pub fn generate(project: &Path, config: &ForgeConfig) -> Result<Artifacts> {
    use crate::analyzer::ProjectAnalyzer;
    use crate::manifest::ManifestAssembler;
    use crate::report::ReportRenderer;
    use crate::serializer::serialize;
    use crate::stub::StubSynthesizer;

    // Step 1: Scan and collect candidates
    info!("Scanning project directory...");
    let mut analyzer = ProjectAnalyzer::new(project.to_path_buf(), config.mode);
    if let Some(out_dir) = &config.out_dir {
        analyzer = analyzer.skip_dir(out_dir);
    }
    let analysis = analyzer.analyze()?;
    if analysis.tools.is_empty() {
        log::warn!("No routes found in the project");
    }

    // Step 2: Assemble the manifest
    let manifest = ManifestAssembler::new(config.name.clone())
        .with_version(config.version.clone())
        .assemble(&analysis.tools, &analysis.resources);

    // Step 3: Render the artifacts
    info!("Rendering manifest, server stub and report...");
    let manifest_text = serialize(&manifest, config.format)?;
    let stub = StubSynthesizer::render(&manifest)?;
    let report = ReportRenderer::render(&manifest, project)?;

    Ok(Artifacts {
        manifest: manifest_text,
        stub,
        report,
        tool_count: manifest.tools.len(),
        resource_count: manifest.resources.len(),
    })
}

/// Persist the artifacts under `out_dir`.
pub fn write_artifacts(out_dir: &Path, format: OutputFormat, artifacts: &Artifacts) -> Result<()> {
    use crate::report::REPORT_FILE_NAME;
    use crate::serializer::{manifest_file_name, write_to_file};
    use crate::stub::STUB_FILE_NAME;

    write_to_file(&artifacts.manifest, &out_dir.join(manifest_file_name(format)))?;
    write_to_file(&artifacts.stub, &out_dir.join(STUB_FILE_NAME))?;
    write_to_file(&artifacts.report, &out_dir.join(REPORT_FILE_NAME))?;
    Ok(())
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    if args.selftest {
        let passed = crate::selftest::run_selftests()?;
        println!("Selftests OK ({} suites)", passed);
        return Ok(());
    }

    let Some(project_path) = args.project_path.as_ref() else {
        println!("{}", crate::error::Error::MissingProjectPath);
        return Ok(());
    };

    let project = std::fs::canonicalize(project_path)?;
    let config = ForgeConfig::from(&args);
    info!("Starting generation for {}", project.display());

    let artifacts = generate(&project, &config)?;
    write_artifacts(&args.out_dir, config.format, &artifacts)?;

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Tools: {}", artifacts.tool_count);
    info!("  - Resources: {}", artifacts.resource_count);
    info!("  - Output: {}", args.out_dir.display());

    Ok(())
}
