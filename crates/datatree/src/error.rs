//! Error types for datatree operations

use thiserror::Error;

use crate::node::{Node, Scalar};

/// Main error type for datatree operations
#[derive(Error, Debug)]
pub enum Error {
    /// A value had the wrong kind for its position (e.g. a non-string mapping key)
    #[error("Type mismatch: expected {expected}, got {got} ({context})")]
    TypeMismatch {
        /// Expected kind
        expected: String,
        /// Actual kind received
        got: String,
        /// Where the mismatch occurred
        context: String,
    },

    /// An alternating key/value list ended on a key
    #[error("Dangling key {0:?}: entry list ends without a value")]
    DanglingKey(String),

    /// A decoded number has no f64 representation
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The tree holds a value the JSON encoder cannot represent
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Document text could not be decoded
    #[error("Decode error ({format}): {message}")]
    Decode {
        /// Decoder name, e.g. "JSON"
        format: String,
        /// Underlying decoder message
        message: String,
    },
}

impl Error {
    /// Build a `TypeMismatch` from string-like parts.
    pub fn type_mismatch(
        expected: impl Into<String>,
        got: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for datatree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Short human readable name for the kind of a node.
pub fn kind_name(node: &Node) -> &'static str {
    match node {
        Node::Scalar(s) => scalar_name(s),
        Node::Sequence(_) => "sequence",
        Node::Mapping(_) => "mapping",
    }
}

/// Short human readable name for the kind of a scalar.
pub fn scalar_name(scalar: &Scalar) -> &'static str {
    match scalar {
        Scalar::Null => "null",
        Scalar::Bool(_) => "bool",
        Scalar::Number(_) => "number",
        Scalar::String(_) => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::type_mismatch("string", "number", "mapping key 1");
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected string, got number (mapping key 1)"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&Node::null()), "null");
        assert_eq!(kind_name(&Node::from(true)), "bool");
        assert_eq!(kind_name(&Node::from(1.5)), "number");
        assert_eq!(kind_name(&Node::from("x")), "string");
        assert_eq!(kind_name(&Node::sequence(vec![])), "sequence");
        assert_eq!(kind_name(&Node::empty_mapping()), "mapping");
    }
}
