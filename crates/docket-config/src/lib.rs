//! YAML-backed configuration documents.
//!
//! This crate provides [`Document`], an in-memory mapping loaded from or
//! destined for a YAML file, with dot-path access into nested values,
//! structural validation against required-key lists, recursive merging of
//! override data, and persistence back to disk.
//!
//! # Error policy
//!
//! The API is two-tiered. Navigation and mutation (`get`, `set`,
//! `exists_key`, `merge`, ...) never fail: a missing key, an empty path, or
//! a structural mismatch degrades to `None`, `false`, or a no-op, so a
//! configuration lookup can never crash calling code. Loading and saving
//! surface failures explicitly through [`ConfigError`], except `save`,
//! which by design collapses every failure mode into a boolean return.
//!
//! # Example
//!
//! ```rust
//! use docket_config::read_str;
//!
//! let doc = read_str("server:\n  host: localhost\n  port: 8080\n").unwrap();
//!
//! assert_eq!(doc.get_str("server.host"), Some("localhost"));
//! assert_eq!(doc.get_i64("server.port"), Some(8080));
//! assert!(doc.has_required_keys(&["server.host", "server.port"]));
//! assert!(!doc.exists_key("server.tls"));
//! ```

mod document;
mod error;
mod loader;
mod merge;

pub use document::Document;
pub use error::{ConfigError, Result};
pub use loader::{read_file, read_str, write_raw};
pub use merge::merge_hashes;

// Re-export the value types used throughout the public API.
pub use yaml_rust2::yaml::Hash;
pub use yaml_rust2::Yaml;
