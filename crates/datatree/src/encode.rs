//! JSON encoding of data trees
//!
//! Key order in the output follows the mapping's insertion order, but no
//! operation guarantees that order, so consumers must not rely on it.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;
use crate::node::{Node, Scalar};

/// Largest magnitude below which every whole f64 is an exact integer (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            // Whole numbers go out as integers, as the decoders read them.
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Scalar::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Scalar::Number(n) => Err(S::Error::custom(format!(
                "cannot encode non-finite number {}",
                n
            ))),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(s) => s.serialize(serializer),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// Compact JSON bytes.
///
/// # Errors
///
/// Returns `Encoding` if the tree holds a non-finite number.
pub fn to_json(node: &Node) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(node)?)
}

/// Pretty-printed JSON bytes, indented by four spaces.
///
/// # Errors
///
/// Returns `Encoding` if the tree holds a non-finite number.
pub fn to_json_pretty(node: &Node) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    node.serialize(&mut serializer)?;
    Ok(out)
}

/// Human readable form: the compact JSON text.
///
/// # Errors
///
/// Returns `Encoding` if the tree holds a non-finite number.
pub fn to_json_string(node: &Node) -> Result<String> {
    Ok(serde_json::to_string(node)?)
}

impl Node {
    /// Compact JSON bytes. See [`to_json`].
    pub fn to_json(&self) -> Result<Vec<u8>> {
        to_json(self)
    }

    /// Pretty-printed JSON bytes. See [`to_json_pretty`].
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        to_json_pretty(self)
    }

    /// Compact JSON text. See [`to_json_string`].
    pub fn to_json_string(&self) -> Result<String> {
        to_json_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use crate::mapping;

    #[test]
    fn test_compact() {
        let tree = mapping!("one", mapping!("hi", "bye"), "two", vec![Node::from(1.5), Node::null()]);
        assert_eq!(
            tree.to_json_string().unwrap(),
            r#"{"one":{"hi":"bye"},"two":[1.5,null]}"#
        );
        assert_eq!(tree.to_json().unwrap(), tree.to_json_string().unwrap().into_bytes());
    }

    #[test]
    fn test_whole_numbers_encode_as_integers() {
        assert_eq!(Node::from(1).to_json_string().unwrap(), "1");
        assert_eq!(Node::from(-40).to_json_string().unwrap(), "-40");
        assert_eq!(Node::from(2.0).to_json_string().unwrap(), "2");
        assert_eq!(Node::from(0.5).to_json_string().unwrap(), "0.5");
    }

    #[test]
    fn test_large_whole_numbers_stay_floats() {
        assert_eq!(Node::from(1e20).to_json_string().unwrap(), "1e20");
    }

    #[test]
    fn test_pretty_four_space_indent() {
        let tree = mapping!("a", vec![true]);
        let pretty = String::from_utf8(tree.to_json_pretty().unwrap()).unwrap();
        assert_eq!(pretty, "{\n    \"a\": [\n        true\n    ]\n}");
    }

    #[test]
    fn test_non_finite_number_is_an_error() {
        let tree = mapping!("bad", f64::INFINITY);
        assert!(matches!(tree.to_json_string(), Err(Error::Encoding(_))));
        assert!(matches!(tree.to_json_pretty(), Err(Error::Encoding(_))));
    }
}
