//! Recursive mapping merge.

use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

/// Merge `overrides` into `base`, producing a new mapping.
///
/// Keys from both sides are preserved. Where both sides hold a mapping
/// under the same key, the two are merged key-wise with the override
/// winning on conflicting leaves. Any other pairing — scalar over mapping,
/// mapping over scalar, sequence over sequence — is replaced wholesale by
/// the override value. Neither input is mutated.
pub fn merge_hashes(base: &Hash, overrides: &Hash) -> Hash {
    let mut merged = base.clone();
    for (key, value) in overrides.iter() {
        let resolved = match (merged.get(key), value) {
            (Some(Yaml::Hash(existing)), Yaml::Hash(incoming)) => {
                Yaml::Hash(merge_hashes(existing, incoming))
            }
            _ => value.clone(),
        };
        // replace, not insert: an overridden key keeps its position in the
        // mapping order, new keys append at the back.
        merged.replace(key.clone(), resolved);
    }
    merged
}
