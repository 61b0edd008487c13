use crate::cli::AnalysisMode;
use crate::extractor::PatternFamily;
use crate::scanner::{Language, ScanResult};
use log::{debug, warn};

/// Resolves the requested analysis mode into the pattern family used for a run.
///
/// The decision looks only at which kinds of source files the scan found, never at
/// file contents.
pub struct ModeDetector;

impl ModeDetector {
    /// Picks the pattern family for `requested` given what the scan found.
    ///
    /// - `Auto` selects the decorator family only when decorator-style files exist and
    ///   call-style files do not; otherwise the call family.
    /// - `Python` falls back to the call family when the tree holds no Python files.
    /// - `Js` always selects the call family.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mcp_forge::cli::AnalysisMode;
    /// use mcp_forge::detector::ModeDetector;
    /// use mcp_forge::scanner::FileScanner;
    /// use std::path::PathBuf;
    ///
    /// let scan = FileScanner::new(PathBuf::from("./my-project")).scan().unwrap();
    /// let family = ModeDetector::resolve(AnalysisMode::Auto, &scan);
    /// println!("Using {:?}", family);
    /// ```
    pub fn resolve(requested: AnalysisMode, scan: &ScanResult) -> PatternFamily {
        let has_call_style = scan.has_sources(Language::JavaScript);
        let has_decorator = scan.has_sources(Language::Python);
        debug!(
            "Resolving mode {:?} (call-style files: {}, decorator files: {})",
            requested, has_call_style, has_decorator
        );

        match requested {
            AnalysisMode::Auto => {
                if has_decorator && !has_call_style {
                    PatternFamily::Decorator
                } else {
                    PatternFamily::CallStyle
                }
            }
            AnalysisMode::Python => {
                if has_decorator {
                    PatternFamily::Decorator
                } else {
                    warn!("No Python files found, falling back to call-style analysis");
                    PatternFamily::CallStyle
                }
            }
            AnalysisMode::Js => PatternFamily::CallStyle,
        }
    }
}
