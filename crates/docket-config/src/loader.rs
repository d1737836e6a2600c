//! Reading and writing configuration documents.

use std::fs;
use std::path::Path;

use tracing::debug;
use yaml_rust2::yaml::Hash;

use crate::error::{ConfigError, Result};
use crate::Document;

/// Load a document from a YAML file.
///
/// The returned document carries the source path as its origin, so a later
/// `save` writes back to the same file. An empty or null file loads as an
/// empty document.
///
/// # Errors
///
/// Every failure mode — missing file, unreadable file, YAML syntax error,
/// non-mapping root — normalizes to [`ConfigError::NotFound`]. The
/// underlying cause is logged at debug level.
pub fn read_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading YAML document");

    let content = fs::read_to_string(path).map_err(|error| {
        debug!(path = %path.display(), %error, "read failed");
        ConfigError::NotFound(path.to_path_buf())
    })?;
    let data = docket_yaml::parse_mapping(&content).map_err(|error| {
        debug!(path = %path.display(), %error, "parse failed");
        ConfigError::NotFound(path.to_path_buf())
    })?;
    Ok(Document::with_origin(data, path))
}

/// Parse inline YAML text into a document with no origin.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidFormat`] carrying the original text when
/// it fails to parse or its root is not a mapping.
pub fn read_str(text: &str) -> Result<Document> {
    let data = docket_yaml::parse_mapping(text).map_err(|error| ConfigError::InvalidFormat {
        reason: error.to_string(),
        text: text.to_string(),
    })?;
    Ok(Document::new(data))
}

/// Serialize a raw mapping directly to a file.
///
/// Unlike `Document::save`, this does not create parent directories; the
/// target directory must already exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the write fails, or the serialization
/// error when the mapping cannot be emitted.
pub fn write_raw(path: impl AsRef<Path>, data: &Hash) -> Result<()> {
    let path = path.as_ref();
    let text = docket_yaml::emit_mapping(data)?;
    fs::write(path, text).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_str_simple() {
        let doc = read_str("a: 1\n").unwrap();
        assert_eq!(doc.get_i64("a"), Some(1));
        assert!(doc.origin().is_none());
    }

    #[test]
    fn test_read_str_empty_is_empty_document() {
        let doc = read_str("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_read_str_invalid_yaml() {
        let err = read_str("key: [unclosed").unwrap_err();
        match err {
            ConfigError::InvalidFormat { text, .. } => {
                assert_eq!(text, "key: [unclosed");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_read_str_non_mapping_root() {
        let err = read_str("- a\n- b\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat { .. }));
    }
}
