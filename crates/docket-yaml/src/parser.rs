//! YAML parsing with root normalization for configuration use.

use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlLoader};

use crate::{Error, Result};

/// Parse YAML from a string.
///
/// This parses a single YAML document. If the input contains multiple
/// documents, only the first one is kept. An empty input parses to
/// `Yaml::Null`.
///
/// # Example
///
/// ```rust
/// let value = docket_yaml::parse("title: My Document").unwrap();
/// assert!(value.as_hash().is_some());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid.
pub fn parse(content: &str) -> Result<Yaml> {
    let mut docs = YamlLoader::load_from_str(content).map_err(Error::from)?;
    if docs.is_empty() {
        return Ok(Yaml::Null);
    }
    Ok(docs.swap_remove(0))
}

/// Parse YAML from a string, requiring a mapping at the document root.
///
/// An empty or null document is normalized to an empty mapping. Any other
/// root (scalar, sequence) is rejected, since configuration documents are
/// mappings by contract.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or the root is not a mapping.
pub fn parse_mapping(content: &str) -> Result<Hash> {
    match parse(content)? {
        Yaml::Hash(hash) => Ok(hash),
        Yaml::Null => Ok(Hash::new()),
        other => Err(Error::InvalidStructure(format!(
            "expected a mapping at the document root, found {}",
            kind_name(&other)
        ))),
    }
}

fn kind_name(value: &Yaml) -> &'static str {
    match value {
        Yaml::Real(_) | Yaml::Integer(_) => "a number",
        Yaml::String(_) => "a string",
        Yaml::Boolean(_) => "a boolean",
        Yaml::Array(_) => "a sequence",
        Yaml::Hash(_) => "a mapping",
        Yaml::Null => "null",
        Yaml::Alias(_) | Yaml::BadValue => "an unresolvable value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar() {
        let value = parse("hello").unwrap();
        assert_eq!(value.as_str(), Some("hello"));
    }

    #[test]
    fn test_parse_integer() {
        let value = parse("42").unwrap();
        assert_eq!(value.as_i64(), Some(42));
    }

    #[test]
    fn test_parse_boolean() {
        let value = parse("true").unwrap();
        assert_eq!(value.as_bool(), Some(true));
    }

    #[test]
    fn test_parse_array() {
        let value = parse("[1, 2, 3]").unwrap();
        let items = value.as_vec().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_i64(), Some(1));
        assert_eq!(items[2].as_i64(), Some(3));
    }

    #[test]
    fn test_parse_hash() {
        let value = parse("title: My Document\nauthor: John Doe").unwrap();
        let hash = value.as_hash().unwrap();
        assert_eq!(hash.len(), 2);
        assert_eq!(
            hash.get(&Yaml::String("title".into())).and_then(Yaml::as_str),
            Some("My Document")
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("").unwrap(), Yaml::Null);
        assert!(parse_mapping("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_first_document_wins() {
        let value = parse("a: 1\n---\na: 2\n").unwrap();
        let hash = value.as_hash().unwrap();
        assert_eq!(
            hash.get(&Yaml::String("a".into())).and_then(Yaml::as_i64),
            Some(1)
        );
    }

    #[test]
    fn test_parse_mapping_rejects_scalar_root() {
        let err = parse_mapping("just a string").unwrap_err();
        assert!(matches!(err, Error::InvalidStructure(_)));
    }

    #[test]
    fn test_parse_mapping_rejects_sequence_root() {
        let err = parse_mapping("- a\n- b\n").unwrap_err();
        assert!(matches!(err, Error::InvalidStructure(_)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("key: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_nested_structure() {
        let value = parse(
            r#"
project:
  title: My Project
  authors:
    - Alice
    - Bob
"#,
        )
        .unwrap();

        let project = value
            .as_hash()
            .unwrap()
            .get(&Yaml::String("project".into()))
            .unwrap();
        let authors = project
            .as_hash()
            .unwrap()
            .get(&Yaml::String("authors".into()))
            .unwrap();
        assert_eq!(authors.as_vec().unwrap().len(), 2);
    }
}
