use crate::extractor::{collect_matches, RouteExtractor, RouteMatch};
use crate::scanner::Language;
use regex::Regex;
use std::sync::LazyLock;

/// `@<handle>.<verb>(<quote><path><quote>`; the handle may be dotted (`@api.v1.get`).
static DECORATOR_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"@(?:[A-Za-z_]\w*\.)+(?P<method>(?i:get|post|put|delete))\s*\(\s*["'](?P<path>[^"']*)["']"#,
    )
    .expect("decorator route pattern is valid")
});

/// Extractor for FastAPI / Flask-like `@app.get('/path')` route decorators
pub struct DecoratorExtractor;

impl RouteExtractor for DecoratorExtractor {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extract_routes(&self, source: &str, source_label: &str) -> Vec<RouteMatch> {
        collect_matches(&DECORATOR_ROUTE, source, source_label)
    }
}
