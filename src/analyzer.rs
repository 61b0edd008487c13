use crate::candidate::{Candidate, ResourceCandidate, ResourceStrategy, ToolCandidate};
use crate::cli::AnalysisMode;
use crate::detector::ModeDetector;
use crate::extractor::PatternFamily;
use crate::scanner::{FileScanner, ScanResult};
use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Drives one analysis run over a project tree.
///
/// A run scans the tree once, resolves the analysis mode, reads every source file of the
/// selected language exactly once and collects tool and resource candidates in walk order.
/// Files that cannot be read or look binary are skipped; they never abort the run.
///
/// # Example
///
/// ```no_run
/// use mcp_forge::analyzer::ProjectAnalyzer;
/// use mcp_forge::cli::AnalysisMode;
/// use std::path::{Path, PathBuf};
///
/// let analysis = ProjectAnalyzer::new(PathBuf::from("./my-project"), AnalysisMode::Auto)
///     .analyze()
///     .unwrap();
/// println!("{} tools, {} resources", analysis.tools.len(), analysis.resources.len());
/// ```
pub struct ProjectAnalyzer {
    root_path: PathBuf,
    mode: AnalysisMode,
    skip_dirs: Vec<PathBuf>,
}

/// Candidates collected by one run.
#[derive(Debug)]
pub struct Analysis {
    /// Pattern family the run used
    pub family: PatternFamily,
    /// Tool candidates in discovery order
    pub tools: Vec<ToolCandidate>,
    /// Resource candidates in discovery order
    pub resources: Vec<ResourceCandidate>,
    /// Number of source files read
    pub files_scanned: usize,
    /// Number of source files skipped because they could not be read or are binary
    pub files_skipped: usize,
    /// Walk warnings (inaccessible directories and such)
    pub warnings: Vec<String>,
}

impl Analysis {
    fn new(family: PatternFamily) -> Self {
        Self {
            family,
            tools: Vec::new(),
            resources: Vec::new(),
            files_scanned: 0,
            files_skipped: 0,
            warnings: Vec::new(),
        }
    }

    fn push(&mut self, candidate: Candidate) {
        match candidate {
            Candidate::Tool(tool) => self.tools.push(tool),
            Candidate::Resource(resource) => self.resources.push(resource),
        }
    }
}

impl ProjectAnalyzer {
    pub fn new(root_path: PathBuf, mode: AnalysisMode) -> Self {
        Self {
            root_path,
            mode,
            skip_dirs: Vec::new(),
        }
    }

    /// Leaves `dir` out of the scan (see [`FileScanner::skip_dir`]).
    pub fn skip_dir(mut self, dir: &Path) -> Self {
        self.skip_dirs.push(dir.to_path_buf());
        self
    }

    /// Scans the project and collects candidates.
    ///
    /// # Errors
    ///
    /// Returns an error only if the project root itself cannot be accessed.
    pub fn analyze(&self) -> Result<Analysis> {
        let mut scanner = FileScanner::new(self.root_path.clone());
        for dir in &self.skip_dirs {
            scanner = scanner.skip_dir(dir);
        }
        let scan = scanner.scan()?;
        let family = ModeDetector::resolve(self.mode, &scan);
        info!("Analysis mode: {:?} -> {:?}", self.mode, family);

        Ok(Self::analyze_scan(&scan, family))
    }

    /// Collects candidates from an existing scan using `family`.
    pub fn analyze_scan(scan: &ScanResult, family: PatternFamily) -> Analysis {
        let extractor = family.extractor();
        let mut analysis = Analysis::new(family);
        analysis.warnings = scan.warnings.clone();

        for path in scan.sources(extractor.language()) {
            let source = match read_source(path) {
                Ok(Some(source)) => source,
                Ok(None) => {
                    debug!("Skipping binary file {}", path.display());
                    analysis.files_skipped += 1;
                    continue;
                }
                Err(e) => {
                    debug!("Skipping unreadable file {}: {}", path.display(), e);
                    analysis.files_skipped += 1;
                    continue;
                }
            };
            analysis.files_scanned += 1;

            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            let routes = extractor.extract_routes(&source, &label);
            debug!("Found {} routes in {}", routes.len(), path.display());

            for route in &routes {
                analysis.push(Candidate::Tool(ToolCandidate::from_route(route, family)));
            }
        }

        for resource in ResourceStrategy::for_family(family).discover(scan) {
            analysis.push(Candidate::Resource(resource));
        }

        info!(
            "Collected {} tools and {} resources ({} files read, {} skipped)",
            analysis.tools.len(),
            analysis.resources.len(),
            analysis.files_scanned,
            analysis.files_skipped
        );

        analysis
    }
}

/// Reads a source file as text, or `None` when it looks binary (contains a NUL byte).
///
/// Invalid UTF-8 sequences in a text file are replaced rather than discarding the file.
fn read_source(path: &Path) -> std::io::Result<Option<String>> {
    let bytes = fs::read(path)?;
    if bytes.contains(&0) {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
