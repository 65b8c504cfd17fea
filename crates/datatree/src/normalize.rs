//! Canonicalization of decoder output into [`Node`] trees
//!
//! JSON decoders produce string-keyed objects; YAML decoders produce
//! mappings keyed by arbitrary values. Both are folded into the one
//! canonical form here, and nothing downstream ever looks at raw decoder
//! values again.
//!
//! A root-level null (or an absent input) canonicalizes to `None`, the
//! "no tree" result. An empty object canonicalizes to an empty mapping.

use crate::error::{Error, Result};
use crate::node::{Mapping, Node};

/// Conversion of raw decoder output into a canonical tree.
pub trait Canonicalize {
    /// Consume the raw value and produce its canonical tree.
    ///
    /// Returns `Ok(None)` when there is no data at all.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if a mapping key is not natively a string and
    /// `InvalidNumber` if a number has no `f64` representation.
    fn canonicalize(self) -> Result<Option<Node>>;
}

/// Canonicalize any supported decoder output.
pub fn normalize<T: Canonicalize>(raw: T) -> Result<Option<Node>> {
    raw.canonicalize()
}

impl Canonicalize for Node {
    fn canonicalize(self) -> Result<Option<Node>> {
        Ok(Some(self))
    }
}

impl<T: Canonicalize> Canonicalize for Option<T> {
    fn canonicalize(self) -> Result<Option<Node>> {
        match self {
            Some(raw) => raw.canonicalize(),
            None => Ok(None),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// JSON
// ═══════════════════════════════════════════════════════════════════

impl Canonicalize for serde_json::Value {
    fn canonicalize(self) -> Result<Option<Node>> {
        match self {
            serde_json::Value::Null => Ok(None),
            other => json_node(other).map(Some),
        }
    }
}

impl Canonicalize for serde_json::Map<String, serde_json::Value> {
    fn canonicalize(self) -> Result<Option<Node>> {
        json_mapping(self).map(|m| Some(Node::Mapping(m)))
    }
}

fn json_node(value: serde_json::Value) -> Result<Node> {
    use serde_json::Value;

    Ok(match value {
        Value::Null => Node::null(),
        Value::Bool(b) => Node::from(b),
        Value::Number(n) => {
            let f = n.as_f64().ok_or_else(|| Error::InvalidNumber(n.to_string()))?;
            Node::number(f)
        }
        Value::String(s) => Node::from(s),
        Value::Array(items) => Node::Sequence(
            items
                .into_iter()
                .map(json_node)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(map) => Node::Mapping(json_mapping(map)?),
    })
}

fn json_mapping(map: serde_json::Map<String, serde_json::Value>) -> Result<Mapping> {
    let mut entries = Mapping::with_capacity(map.len());
    for (key, value) in map {
        entries.insert(key, json_node(value)?);
    }
    Ok(entries)
}

// ═══════════════════════════════════════════════════════════════════
// YAML
// ═══════════════════════════════════════════════════════════════════

#[cfg(feature = "yaml")]
impl Canonicalize for serde_yaml::Value {
    fn canonicalize(self) -> Result<Option<Node>> {
        match self {
            serde_yaml::Value::Null => Ok(None),
            other => yaml_node(other).map(Some),
        }
    }
}

#[cfg(feature = "yaml")]
impl Canonicalize for serde_yaml::Mapping {
    fn canonicalize(self) -> Result<Option<Node>> {
        yaml_mapping(self).map(|m| Some(Node::Mapping(m)))
    }
}

#[cfg(feature = "yaml")]
fn yaml_node(value: serde_yaml::Value) -> Result<Node> {
    use serde_yaml::Value;

    Ok(match value {
        Value::Null => Node::null(),
        Value::Bool(b) => Node::from(b),
        Value::Number(n) => {
            let f = n.as_f64().ok_or_else(|| Error::InvalidNumber(n.to_string()))?;
            Node::number(f)
        }
        Value::String(s) => Node::from(s),
        Value::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(yaml_node)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(map) => Node::Mapping(yaml_mapping(map)?),
        Value::Tagged(tagged) => yaml_node(tagged.value)?,
    })
}

#[cfg(feature = "yaml")]
fn yaml_mapping(map: serde_yaml::Mapping) -> Result<Mapping> {
    let mut entries = Mapping::with_capacity(map.len());
    for (key, value) in map {
        let key = yaml_key(key)?;
        entries.insert(key, yaml_node(value)?);
    }
    Ok(entries)
}

/// Only keys that are natively strings are accepted; nothing is stringified.
#[cfg(feature = "yaml")]
fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value;

    let (got, shown) = match key {
        Value::String(s) => return Ok(s),
        Value::Null => ("null", "~".to_string()),
        Value::Bool(b) => ("bool", b.to_string()),
        Value::Number(n) => ("number", n.to_string()),
        Value::Sequence(_) => ("sequence", "[..]".to_string()),
        Value::Mapping(_) => ("mapping", "{..}".to_string()),
        Value::Tagged(tagged) => ("tagged value", tagged.tag.to_string()),
    };
    Err(Error::type_mismatch(
        "string",
        got,
        format!("mapping key {}", shown),
    ))
}
