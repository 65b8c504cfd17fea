//! Layered merge of data trees
//!
//! Merging mutates the base in place and never keeps a reference into the
//! overlay: anything grafted from the overlay is deep-copied first.
//!
//! Per overlay entry:
//!
//! | overlay   | base             | result                              |
//! |-----------|------------------|-------------------------------------|
//! | scalar    | anything/absent  | overlay scalar                      |
//! | mapping   | mapping          | merged key by key (recursive)       |
//! | sequence  | sequence         | base contents replaced by overlay's |
//! | container | absent/other kind| deep copy of overlay                |
//!
//! Keys present only in the base are left alone.

use crate::copy::{copy_sequence_into, deep_copy};
use crate::node::{Mapping, Node};

/// Merge `overlay` into `base`, returning `base` for chaining.
pub fn merge_mapping<'a>(base: &'a mut Mapping, overlay: &Mapping) -> &'a mut Mapping {
    for (key, incoming) in overlay {
        match base.get_mut(key) {
            Some(existing) => merge_node(existing, incoming),
            None => {
                base.insert(key.clone(), deep_copy(incoming));
            }
        }
    }
    base
}

/// Merge one overlay value onto the base value occupying the same slot.
fn merge_node(base: &mut Node, overlay: &Node) {
    match (base, overlay) {
        (Node::Mapping(existing), Node::Mapping(incoming)) => {
            merge_mapping(existing, incoming);
        }
        (Node::Sequence(existing), Node::Sequence(incoming)) => {
            copy_sequence_into(incoming, existing);
        }
        // Scalars always overwrite; containers win over a different kind.
        (slot, incoming) => *slot = deep_copy(incoming),
    }
}

/// Fold `layers` left to right into a fresh tree.
///
/// The first layer is the base, the last has the highest precedence. The
/// inputs are not modified. Returns `None` when there are no layers.
pub fn merge_all<'a>(layers: impl IntoIterator<Item = &'a Node>) -> Option<Node> {
    let mut layers = layers.into_iter();
    let mut merged = layers.next()?.deep_copy();
    for layer in layers {
        merged.merge(layer);
    }
    Some(merged)
}

impl Node {
    /// Merge `overlay` into this tree in place, returning `self` for chaining.
    ///
    /// A root-level kind conflict follows the same policy as a nested one:
    /// the overlay replaces this tree wholesale.
    pub fn merge(&mut self, overlay: &Node) -> &mut Node {
        merge_node(self, overlay);
        self
    }
}
