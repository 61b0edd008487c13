//! Route extraction module for finding web framework route declarations.
//!
//! Extraction is textual pattern matching, not parsing. It misses routes that are built
//! dynamically or split across unusual line breaks, and it reports declarations that
//! appear inside comments or string literals. Both are accepted trade-offs.
//!
//! # Pattern families
//!
//! - **Call style**: `app.get('/path', handler)`, see [`call_style::CallStyleExtractor`]
//! - **Decorator style**: `@app.get('/path')`, see [`decorator::DecoratorExtractor`]
//!
//! # Example
//!
//! ```
//! use mcp_forge::extractor::{RouteExtractor, call_style::CallStyleExtractor};
//!
//! let routes = CallStyleExtractor.extract_routes("app.get('/ping', h);", "app.js");
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].path, "/ping");
//! ```

pub mod call_style;
pub mod decorator;

use crate::scanner::Language;
use regex::Regex;

/// Trait for extracting route declarations from source text.
///
/// Implementations match one pattern family against the contents of a single file.
pub trait RouteExtractor {
    /// The language family whose files this extractor understands.
    fn language(&self) -> Language;

    /// Extracts every route declaration found in `source`, in textual order.
    ///
    /// `source_label` identifies the file in the produced matches (usually its base name).
    fn extract_routes(&self, source: &str, source_label: &str) -> Vec<RouteMatch>;
}

/// A route declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The HTTP method of the route
    pub method: HttpMethod,
    /// The route path exactly as written in the first string literal
    pub path: String,
    /// Label of the file the route was found in
    pub source_label: String,
}

/// HTTP methods recognised by the route patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
}

impl HttpMethod {
    /// Parses a method name case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// Upper-case method name, e.g. `GET`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Pattern family selected for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    /// `<handle>.get('/path', ...)` calls in JavaScript / TypeScript files
    CallStyle,
    /// `@<handle>.get('/path')` decorators in Python files
    Decorator,
}

impl PatternFamily {
    /// The extractor implementing this family.
    pub fn extractor(&self) -> Box<dyn RouteExtractor> {
        match self {
            PatternFamily::CallStyle => Box::new(call_style::CallStyleExtractor),
            PatternFamily::Decorator => Box::new(decorator::DecoratorExtractor),
        }
    }

    /// Framework label used in tool descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            PatternFamily::CallStyle => "Express",
            PatternFamily::Decorator => "Python",
        }
    }
}

/// Runs `pattern` over `source`, turning each `method`/`path` capture into a [`RouteMatch`].
///
/// Only the first string literal after the verb is captured, so extra arguments are ignored.
fn collect_matches(pattern: &Regex, source: &str, source_label: &str) -> Vec<RouteMatch> {
    pattern
        .captures_iter(source)
        .filter_map(|caps| {
            let method = HttpMethod::parse(caps.name("method")?.as_str())?;
            let path = caps.name("path")?.as_str().to_string();
            Some(RouteMatch {
                method,
                path,
                source_label: source_label.to_string(),
            })
        })
        .collect()
}
