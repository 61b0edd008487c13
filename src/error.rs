/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Debug)]
pub enum Error {
    TemplateError(String),
    InvalidIdentifier { identifier: String },
    MissingProjectPath,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::TemplateError(msg) => write!(f, "Template error: {}", msg),
            Error::InvalidIdentifier { identifier } => {
                write!(f, "Invalid tool identifier in generated code: {:?}", identifier)
            }
            Error::MissingProjectPath => write!(
                f,
                "No project path given. Usage: mcp-forge <PROJECT_PATH>, \
                 or --selftest to run the built-in checks."
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::TemplateError(err.to_string())
    }
}
