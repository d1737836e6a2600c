//! # docket-yaml
//!
//! Thin typed wrapper around the `yaml-rust2` parser and emitter.
//!
//! This crate is the serialization layer for docket configuration
//! documents. It parses YAML text into `yaml_rust2::Yaml` values, applies
//! the root normalization rules documents rely on (an empty or null
//! document is an empty mapping, any other non-mapping root is rejected),
//! and emits values back to block-style text with mapping keys in
//! insertion order.
//!
//! ## Example
//!
//! ```rust
//! let value = docket_yaml::parse("title: My Document").unwrap();
//! assert!(value.as_hash().is_some());
//!
//! let text = docket_yaml::emit(&value).unwrap();
//! assert_eq!(text, "title: My Document\n");
//! ```

mod emitter;
mod error;
mod parser;

pub use emitter::{emit, emit_mapping};
pub use error::{Error, Result};
pub use parser::{parse, parse_mapping};

// Re-export the value types so downstream crates don't need a direct
// yaml-rust2 dependency for the common cases.
pub use yaml_rust2::yaml::Hash;
pub use yaml_rust2::Yaml;
