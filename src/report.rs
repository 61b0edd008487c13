use crate::error::Result;
use crate::manifest::Manifest;
use log::debug;
use minijinja::{context, Environment};
use std::path::Path;

/// Path of the report inside the output directory.
pub const REPORT_FILE_NAME: &str = "report/index.html";

// The `.html` name turns on HTML auto-escaping for every interpolated value.
const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.j2");

/// Renders the human readable HTML report for a manifest.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Renders the report for `manifest`, produced by scanning `project`.
    pub fn render(manifest: &Manifest, project: &Path) -> Result<String> {
        debug!("Rendering report for {}", project.display());

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;

        let template = env.get_template(REPORT_TEMPLATE_NAME)?;
        let html = template.render(context! {
            project => project.display().to_string(),
            manifest => manifest,
        })?;

        Ok(html)
    }
}
