//! Deep copy of data trees
//!
//! Every sequence and mapping is rebuilt from scratch, so the copy shares no
//! container with its source. Scalars are cloned; their string payloads are
//! reference counted and immutable, which makes sharing them harmless.

use crate::node::{Mapping, Node, Sequence};

/// Produce an independent copy of `source`.
pub fn deep_copy(source: &Node) -> Node {
    match source {
        Node::Scalar(s) => Node::Scalar(s.clone()),
        Node::Sequence(items) => {
            let mut target = Sequence::with_capacity(items.len());
            copy_sequence_into(items, &mut target);
            Node::Sequence(target)
        }
        Node::Mapping(entries) => {
            let mut target = Mapping::with_capacity(entries.len());
            copy_mapping_into(entries, &mut target);
            Node::Mapping(target)
        }
    }
}

/// Copy every entry of `source` into the existing `target` mapping.
///
/// Keys of `source` overwrite the same keys of `target`; keys only present
/// in `target` are kept.
pub fn copy_mapping_into(source: &Mapping, target: &mut Mapping) {
    for (key, value) in source {
        target.insert(key.clone(), deep_copy(value));
    }
}

/// Replace the contents of the existing `target` sequence with a copy of
/// `source`, reusing its allocation.
///
/// Afterwards `target` has exactly the length and elements of `source`.
pub fn copy_sequence_into(source: &[Node], target: &mut Sequence) {
    target.clear();
    target.extend(source.iter().map(deep_copy));
}

impl Node {
    /// Produce an independent copy of this tree.
    pub fn deep_copy(&self) -> Node {
        deep_copy(self)
    }
}
