//! Path-based lookup of leaf values
//!
//! A path is a list of keys: strings address mapping entries, integers
//! address sequence elements. Lookup only ever yields scalars. A path that
//! ends on a container, runs into a scalar early, uses the wrong key kind
//! for a node or indexes out of range resolves to `None`.

use std::fmt;

use crate::node::{Node, Scalar};

/// One step of a lookup path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    /// Mapping key
    Key(String),

    /// Sequence index; negative indices never resolve
    Index(i64),
}

/// Build a lookup path from mixed string and integer keys.
///
/// ```
/// use datatree::{mapping, path, Node};
///
/// let tree = mapping!("two", vec![Node::from("zoo"), Node::from(vec![true])]);
/// assert_eq!(tree.lookup(&path!["two", 1, 0]).and_then(|s| s.as_bool()), Some(true));
/// ```
#[macro_export]
macro_rules! path {
    ($($key:expr),* $(,)?) => {
        [$($crate::PathKey::from($key)),*]
    };
}

/// Resolve `path` against `tree`.
///
/// Returns the scalar at the end of the path, or `None` if the path does
/// not name a leaf. A null leaf is returned as `Some(&Scalar::Null)`.
pub fn lookup<'a>(tree: &'a Node, path: &[PathKey]) -> Option<&'a Scalar> {
    let mut current = tree;
    for key in path {
        // A scalar cannot be descended into, so `child` fails on it.
        current = current.child(key)?;
    }
    if path.is_empty() {
        return None;
    }
    current.as_scalar()
}

impl Node {
    /// Follow a single key into this node.
    ///
    /// Unlike [`lookup`] this may return a container. Returns `None` when the
    /// key kind does not match this node or names nothing.
    pub fn child(&self, key: &PathKey) -> Option<&Node> {
        match (self, key) {
            (Node::Mapping(entries), PathKey::Key(k)) => entries.get(k.as_str()),
            (Node::Sequence(items), PathKey::Index(i)) => {
                usize::try_from(*i).ok().and_then(|i| items.get(i))
            }
            _ => None,
        }
    }

    /// Resolve `path` against this tree. See [`lookup`].
    pub fn lookup(&self, path: &[PathKey]) -> Option<&Scalar> {
        lookup(self, path)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Key(k) => write!(f, "{:?}", k),
            PathKey::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for PathKey {
    fn from(k: &str) -> Self {
        PathKey::Key(k.to_string())
    }
}

impl From<String> for PathKey {
    fn from(k: String) -> Self {
        PathKey::Key(k)
    }
}

impl From<i32> for PathKey {
    fn from(i: i32) -> Self {
        PathKey::Index(i as i64)
    }
}

impl From<i64> for PathKey {
    fn from(i: i64) -> Self {
        PathKey::Index(i)
    }
}

impl From<u32> for PathKey {
    fn from(i: u32) -> Self {
        PathKey::Index(i as i64)
    }
}

impl From<usize> for PathKey {
    fn from(i: usize) -> Self {
        PathKey::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}
