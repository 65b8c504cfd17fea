//! Mapping builders for fixtures and literal trees

use super::{Mapping, Node, Scalar};
use crate::error::{kind_name, Error, Result};

/// Build a [`Node::Mapping`] from literal `key, value` pairs.
///
/// Keys must be string-like; values are anything with `Into<Node>`.
///
/// ```
/// use datatree::mapping;
///
/// let tree = mapping!("one", mapping!("hi", "bye"), "two", vec!["foo"]);
/// assert!(tree.is_mapping());
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Node::empty_mapping()
    };
    ($($key:expr, $value:expr),+ $(,)?) => {{
        let mut entries = $crate::Mapping::new();
        $(
            entries.insert(::std::string::String::from($key), $crate::Node::from($value));
        )+
        $crate::Node::Mapping(entries)
    }};
}

impl Node {
    /// Build a mapping from an alternating key/value list.
    ///
    /// Even positions must hold string scalars. A later duplicate key
    /// replaces the earlier value.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if a key position holds anything but a string
    /// and `DanglingKey` if the list ends on a key.
    pub fn from_entries(entries: impl IntoIterator<Item = Node>) -> Result<Node> {
        let mut mapping = Mapping::new();
        let mut iter = entries.into_iter().enumerate();

        while let Some((position, key)) = iter.next() {
            let key = match key {
                Node::Scalar(Scalar::String(s)) => s.to_string(),
                other => {
                    return Err(Error::type_mismatch(
                        "string",
                        kind_name(&other),
                        format!("entry {} in key position", position),
                    ))
                }
            };
            let Some((_, value)) = iter.next() else {
                return Err(Error::DanglingKey(key));
            };
            mapping.insert(key, value);
        }

        Ok(Node::Mapping(mapping))
    }
}
