//! Node trait implementations: constructors, predicates, extractors, From traits

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Scalar {
    /// Create a string scalar
    pub fn string(s: impl AsRef<str>) -> Self {
        Scalar::String(Arc::from(s.as_ref()))
    }

    /// Check if scalar is null
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract numeric value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(&**s),
            _ => None,
        }
    }
}

impl Node {
    /// Create a null scalar
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Create a string scalar
    pub fn string(s: impl AsRef<str>) -> Self {
        Node::Scalar(Scalar::string(s))
    }

    /// Create a numeric scalar
    pub fn number(n: f64) -> Self {
        Node::Scalar(Scalar::Number(n))
    }

    /// Create a sequence
    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }

    /// Create a mapping from key/value pairs
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an empty mapping
    pub fn empty_mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if node is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Check if node is a null scalar
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    /// Check if node is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// Check if node is a mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract the scalar payload
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    /// Extract numeric value
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Extract sequence items
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Extract sequence items for mutation
    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Extract mapping entries
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Extract mapping entries for mutation
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::null()
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::number(n)
    }
}

impl From<f32> for Node {
    fn from(n: f32) -> Self {
        Node::number(n as f64)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::number(n as f64)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::number(n as f64)
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Node::number(n as f64)
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::number(n as f64)
    }
}

impl From<usize> for Node {
    fn from(n: usize) -> Self {
        Node::number(n as f64)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::String(Arc::from(s)))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::string(s)
    }
}

impl From<Mapping> for Node {
    fn from(m: Mapping) -> Self {
        Node::Mapping(m)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(opt: Option<T>) -> Self {
        opt.map_or_else(Node::null, Into::into)
    }
}
