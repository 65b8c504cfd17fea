//! Structural, type-exact equality of data trees

use crate::node::{Mapping, Node, Scalar};

/// True iff `a` and `b` have identical structure and equal scalars.
///
/// Scalars compare by kind and value, so `1` never equals `"1"`. NaN
/// equals NaN, which keeps every tree equal to itself. Mappings compare as
/// key sets regardless of key order; sequences compare element-wise.
pub fn compare(a: &Node, b: &Node) -> bool {
    match (a, b) {
        (Node::Scalar(x), Node::Scalar(y)) => scalars_equal(x, y),
        (Node::Sequence(x), Node::Sequence(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| compare(l, r))
        }
        (Node::Mapping(x), Node::Mapping(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, l)| y.get(k).is_some_and(|r| compare(l, r)))
        }
        // Different kinds are never equal
        _ => false,
    }
}

fn scalars_equal(a: &Scalar, b: &Scalar) -> bool {
    match (a, b) {
        (Scalar::Null, Scalar::Null) => true,
        (Scalar::Bool(x), Scalar::Bool(y)) => x == y,
        (Scalar::Number(x), Scalar::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Scalar::String(x), Scalar::String(y)) => x == y,
        _ => false,
    }
}

/// True iff both mappings have the same top-level key set; values are ignored.
pub fn keys_equal(a: &Mapping, b: &Mapping) -> bool {
    a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        scalars_equal(self, other)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other)
    }
}
