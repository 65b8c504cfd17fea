//! Canonical node representation for decoded data trees

mod builder;
mod display;
mod impls;

use std::sync::Arc;

use indexmap::IndexMap;

/// Ordered list of nodes; order is meaningful and preserved by every operation.
pub type Sequence = Vec<Node>;

/// String-keyed association of nodes.
///
/// Insertion order is kept for encoding, but no operation defines it and
/// equality ignores it.
pub type Mapping = IndexMap<String, Node>;

/// A leaf value.
///
/// Decoders hand every numeric literal over as floating point, so there is
/// a single number kind.
#[derive(Clone)]
pub enum Scalar {
    /// `null` / `~`
    Null,

    /// `true` or `false`
    Bool(bool),

    /// Any numeric literal
    Number(f64),

    /// Shared immutable text
    String(Arc<str>),
}

/// A node of a canonical data tree.
///
/// Exactly one variant is active. Mutation replaces the value bound to a
/// mapping key or sequence index; it never retags a node in place.
#[derive(Clone)]
pub enum Node {
    /// Leaf value
    Scalar(Scalar),

    /// Index-addressable list
    Sequence(Sequence),

    /// String-keyed object
    Mapping(Mapping),
}

/// The variant tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Node::Scalar`]
    Scalar,
    /// [`Node::Sequence`]
    Sequence,
    /// [`Node::Mapping`]
    Mapping,
}

impl Node {
    /// The variant tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Remove every entry of a container, keeping the container itself.
    ///
    /// Scalars are left as they are.
    pub fn clear(&mut self) {
        match self {
            Node::Scalar(_) => {}
            Node::Sequence(items) => items.clear(),
            Node::Mapping(entries) => entries.clear(),
        }
    }
}
