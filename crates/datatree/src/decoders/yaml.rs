//! YAML decoder backed by `serde_yaml`
//!
//! YAML mappings may be keyed by any value; the normalizer rejects keys
//! that are not strings. `<<` merge keys are resolved before that, so
//! anchored base sections flow into the tree as ordinary entries.

use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::normalize::Canonicalize;

/// YAML documents (single document per text).
#[derive(Debug, Clone, Default)]
pub struct YamlDecoder;

impl YamlDecoder {
    /// Create a new YAML decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for YamlDecoder {
    fn decode(&self, source: &str) -> Result<Option<Node>> {
        if source.trim().is_empty() {
            return Ok(None);
        }
        let decode_error = |e: serde_yaml::Error| Error::Decode {
            format: self.name().to_string(),
            message: e.to_string(),
        };
        let mut raw: serde_yaml::Value = serde_yaml::from_str(source).map_err(decode_error)?;
        raw.apply_merge().map_err(decode_error)?;
        raw.canonicalize()
    }

    fn name(&self) -> &str {
        "YAML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_mapping() {
        let tree = YamlDecoder::new()
            .decode("server:\n  port: 8080\n  hosts: [a, b]\n")
            .unwrap()
            .unwrap();
        assert_eq!(
            tree,
            mapping!("server", mapping!("port", 8080, "hosts", vec!["a", "b"]))
        );
    }

    #[test]
    fn test_decode_empty_document() {
        assert!(YamlDecoder::new().decode("").unwrap().is_none());
    }

    #[test]
    fn test_decode_integer_key_fails() {
        let err = YamlDecoder::new().decode("1: one\n").unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_decode_resolves_merge_keys() {
        let source = "\
base: &base
  host: localhost
  port: 5432
prod:
  <<: *base
  host: db.internal
";
        let tree = YamlDecoder::new().decode(source).unwrap().unwrap();
        assert_eq!(
            tree,
            mapping!(
                "base",
                mapping!("host", "localhost", "port", 5432),
                "prod",
                mapping!("host", "db.internal", "port", 5432)
            )
        );
    }

    #[test]
    fn test_decode_nan_compares_equal_to_itself() {
        let tree = YamlDecoder::new().decode("x: .nan\n").unwrap().unwrap();
        assert_eq!(tree, tree.deep_copy());
    }

    #[test]
    fn test_decode_malformed() {
        let err = YamlDecoder::new().decode("a: [1, 2\n").unwrap_err();
        assert!(matches!(err, Error::Decode { ref format, .. } if format == "YAML"));
    }
}
