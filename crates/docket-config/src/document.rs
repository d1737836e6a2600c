//! The in-memory configuration document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

use crate::error::{ConfigError, Result};
use crate::merge::merge_hashes;

/// An in-memory mapping loaded from or destined for a YAML file.
///
/// The root is always a mapping: loaders substitute an empty mapping for a
/// null or empty parse result and reject any other root. Values are
/// addressed with dot-delimited key paths (`"server.port"`), where each
/// segment is a literal string key into a nested mapping.
///
/// Navigation and mutation never fail. A path that does not resolve —
/// missing key, empty segment, or a non-mapping value in the middle of the
/// walk — yields `None`, `false`, or a silent no-op depending on the
/// operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Root mapping of the document.
    data: Hash,

    /// Where the document was loaded from, and the default save target.
    origin: Option<PathBuf>,
}

impl Document {
    /// Create a document from a mapping, with no origin path.
    pub fn new(data: Hash) -> Self {
        Self { data, origin: None }
    }

    /// Create a document from a mapping with an origin path attached.
    pub fn with_origin(data: Hash, origin: impl Into<PathBuf>) -> Self {
        Self {
            data,
            origin: Some(origin.into()),
        }
    }

    /// Borrow the root mapping.
    pub fn data(&self) -> &Hash {
        &self.data
    }

    /// The path this document was loaded from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the document has no top-level entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the top-level string keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().filter_map(|k| k.as_str())
    }

    /// Get the value at a dot-delimited key path.
    ///
    /// Returns `None` if any segment is missing or an intermediate value
    /// is not a mapping. Use `get(path).unwrap_or(default)` for lookups
    /// with a fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// let doc = docket_config::read_str("a:\n  b: 1\n").unwrap();
    /// assert!(doc.get("a.b").is_some());
    /// assert!(doc.get("a.missing").is_none());
    /// ```
    pub fn get(&self, path: &str) -> Option<&Yaml> {
        let segments = segments(path)?;
        let (first, rest) = segments.split_first()?;
        let mut node = self.data.get(&key(first))?;
        for segment in rest {
            node = node.as_hash()?.get(&key(segment))?;
        }
        Some(node)
    }

    /// Get a string value at a key path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|v| v.as_str())
    }

    /// Get an integer value at a key path.
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Yaml::as_i64)
    }

    /// Get a boolean value at a key path.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Yaml::as_bool)
    }

    /// Get a floating-point value at a key path.
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Yaml::as_f64)
    }

    /// Get a nested mapping at a key path.
    pub fn get_mapping(&self, path: &str) -> Option<&Hash> {
        self.get(path).and_then(Yaml::as_hash)
    }

    /// Get a sequence at a key path.
    pub fn get_sequence(&self, path: &str) -> Option<&[Yaml]> {
        self.get(path).and_then(Yaml::as_vec).map(Vec::as_slice)
    }

    /// Check if a key path resolves, regardless of the value (which may be
    /// null).
    pub fn exists_key(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Check if a key path resolves to a non-null value.
    pub fn has_value(&self, path: &str) -> bool {
        self.get(path).is_some_and(|v| !v.is_null())
    }

    /// Check that every key path in `paths` resolves.
    ///
    /// Existence only: a path whose value is null still counts.
    pub fn has_required_keys(&self, paths: &[&str]) -> bool {
        paths.iter().all(|path| self.exists_key(path))
    }

    /// Check that every key path in `paths` resolves to a non-null value.
    ///
    /// Stricter than [`has_required_keys`](Self::has_required_keys): a key
    /// that is present but null fails validation.
    pub fn validate_structure(&self, paths: &[&str]) -> bool {
        paths.iter().all(|path| self.has_value(path))
    }

    /// Set the value at a dot-delimited key path, creating intermediate
    /// mappings as needed.
    ///
    /// An intermediate segment holding a non-mapping value is overwritten
    /// with a fresh mapping, silently discarding whatever was there. An
    /// unresolvable path (empty, or containing an empty segment) is a
    /// no-op. Re-setting an existing key keeps its position in the mapping
    /// order.
    pub fn set(&mut self, path: &str, value: Yaml) {
        let Some(segments) = segments(path) else {
            return;
        };
        let Some((last, intermediate)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.data;
        for segment in intermediate {
            let k = key(segment);
            // replace, not insert: hashlink's insert moves an existing key
            // to the back, and re-set keys must keep their position.
            if !matches!(current.get(&k), Some(Yaml::Hash(_))) {
                current.replace(k.clone(), Yaml::Hash(Hash::new()));
            }
            current = match current.get_mut(&k) {
                Some(Yaml::Hash(hash)) => hash,
                _ => return,
            };
        }
        current.replace(key(last), value);
    }

    /// Merge override data into this document, producing a new document.
    ///
    /// Where both sides hold a mapping under the same key the two are
    /// merged recursively, with the override winning on conflicting
    /// leaves; any other pairing is replaced wholesale by the override
    /// value. The base document is never mutated, and the new document
    /// keeps this one's origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// let base = docket_config::read_str("a:\n  x: 1\n  y: 2\n").unwrap();
    /// let overrides = docket_config::read_str("a:\n  y: 3\n  z: 4\n").unwrap();
    ///
    /// let merged = base.merge(overrides.data());
    /// assert_eq!(merged.get_i64("a.x"), Some(1));
    /// assert_eq!(merged.get_i64("a.y"), Some(3));
    /// assert_eq!(merged.get_i64("a.z"), Some(4));
    /// ```
    pub fn merge(&self, overrides: &Hash) -> Document {
        Document {
            data: merge_hashes(&self.data, overrides),
            origin: self.origin.clone(),
        }
    }

    /// Save the document to its origin path.
    ///
    /// Returns false without touching the filesystem when the document has
    /// no origin. Every other failure mode (serialization, directory
    /// creation, write) also collapses to false; the cause is logged at
    /// warn level. This boolean is the sole failure signal, so callers
    /// must check it.
    pub fn save(&self) -> bool {
        match self.origin.as_deref() {
            Some(path) => self.save_to(path),
            None => false,
        }
    }

    /// Save the document to an explicit path, creating missing parent
    /// directories.
    ///
    /// Same failure contract as [`save`](Self::save).
    pub fn save_as(&self, path: impl AsRef<Path>) -> bool {
        self.save_to(path.as_ref())
    }

    fn save_to(&self, path: &Path) -> bool {
        match self.write(path) {
            Ok(()) => true,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to save document");
                false
            }
        }
    }

    fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        let text = docket_yaml::emit_mapping(&self.data)?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// An owned copy of the root mapping.
    pub fn to_hash(&self) -> Hash {
        self.data.clone()
    }
}

/// Split a dot-delimited key path into segments.
///
/// Empty paths and paths containing an empty segment (`"a..b"`, `".a"`)
/// are unresolvable and yield `None`.
fn segments(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

fn key(segment: &str) -> Yaml {
    Yaml::String(segment.to_string())
}
