//! Error types for loading and saving configuration documents.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for docket-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or saving documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing, unreadable, or not a valid YAML mapping.
    ///
    /// All failure modes of reading a file from disk normalize to this
    /// variant; the underlying cause is logged at debug level.
    #[error("config file '{}' not found or invalid", .0.display())]
    NotFound(PathBuf),

    /// Inline YAML text failed to parse as a mapping.
    ///
    /// Carries the offending text so callers can show it in diagnostics.
    #[error("invalid YAML ({reason}):\n{text}")]
    InvalidFormat {
        /// What the parser objected to.
        reason: String,
        /// The original input text.
        text: String,
    },

    /// Writing to the filesystem failed.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        /// The target path of the write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed before anything was written.
    #[error(transparent)]
    Yaml(#[from] docket_yaml::Error),
}
