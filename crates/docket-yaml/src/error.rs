//! Error types for YAML parsing and emission.

use thiserror::Error;

/// Result type alias for docket-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or emitting YAML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// YAML syntax error from the scanner.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document parsed, but its root is not usable where a mapping is
    /// required.
    #[error("invalid YAML structure: {0}")]
    InvalidStructure(String),

    /// The emitter failed to serialize a value.
    #[error("emit error: {0}")]
    Emit(String),
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<yaml_rust2::EmitError> for Error {
    fn from(err: yaml_rust2::EmitError) -> Self {
        Error::Emit(err.to_string())
    }
}
