//! YAML emission in block style with stable key order.

use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

use crate::{Error, Result};

/// Serialize a YAML value to text.
///
/// Output is block style with mapping keys in insertion order (never
/// sorted) and unicode emitted literally. The leading `---` document
/// marker the emitter produces is stripped, and the text always ends with
/// a newline, so the result is ready to write to a configuration file.
///
/// # Errors
///
/// Returns an error if the emitter fails to serialize the value.
pub fn emit(value: &Yaml) -> Result<String> {
    let mut out = String::new();
    let mut emitter = YamlEmitter::new(&mut out);
    emitter.multiline_strings(true);
    emitter.dump(value).map_err(Error::from)?;

    let body = out.strip_prefix("---\n").unwrap_or(&out);
    let mut text = body.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Serialize a mapping to text.
///
/// Convenience over [`emit`] for the common case of writing a whole
/// configuration mapping.
///
/// # Errors
///
/// Returns an error if the emitter fails to serialize the mapping.
pub fn emit_mapping(data: &Hash) -> Result<String> {
    emit(&Yaml::Hash(data.clone()))
}
