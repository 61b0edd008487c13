use crate::extractor::{collect_matches, RouteExtractor, RouteMatch};
use crate::scanner::Language;
use regex::Regex;
use std::sync::LazyLock;

/// `<handle>.<verb>(<quote><path><quote>`; only the verb is case-insensitive.
static CALL_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b[A-Za-z_][\w$]*\.(?P<method>(?i:get|post|put|delete))\s*\(\s*["'`](?P<path>[^"'`]*)["'`]"#,
    )
    .expect("call-style route pattern is valid")
});

/// Extractor for Express-like `app.get('/path', handler)` route calls
pub struct CallStyleExtractor;

impl RouteExtractor for CallStyleExtractor {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn extract_routes(&self, source: &str, source_label: &str) -> Vec<RouteMatch> {
        collect_matches(&CALL_ROUTE, source, source_label)
    }
}
