//! # Datatree
//!
//! Operations over schema-less data trees decoded from JSON or YAML.
//!
//! Datatree folds heterogeneous decoder output into one canonical tree and
//! provides the operations needed to layer configuration documents: a base
//! config overlaid by environment-specific config, resolved into a single
//! consistent tree.
//!
//! ## Architecture
//!
//! - **Node Model**: `Scalar` / `Sequence` / `Mapping` tagged union
//! - **Normalizer**: raw decoder values → canonical `Node`
//! - **Deep Copy**: independent trees with no shared containers
//! - **Merge**: right-biased, in-place overlay of one tree onto another
//! - **Lookup**: leaf resolution by a path of string/integer keys
//! - **Compare**: structural, type-exact equality
//!
//! ## Example
//!
//! ```
//! use datatree::{mapping, path, Node};
//!
//! let mut base = mapping!("db", mapping!("host", "localhost", "port", 5432));
//! let prod = mapping!("db", mapping!("host", "db.internal"));
//!
//! base.merge(&prod);
//! assert_eq!(base.lookup(&path!["db", "host"]).and_then(|s| s.as_str()), Some("db.internal"));
//! assert_eq!(base.lookup(&path!["db", "port"]).and_then(|s| s.as_f64()), Some(5432.0));
//! ```
//!
//! All operations are synchronous and in-memory. A tree under mutation
//! (merge, clear) must have a single owner; `&mut` enforces that.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod copy;
pub mod decoder;
pub mod decoders;
pub mod encode;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod node;
pub mod normalize;

// Re-export main types
pub use compare::{compare, keys_equal};
pub use copy::{copy_mapping_into, copy_sequence_into, deep_copy};
pub use decoder::{decoder_for_path, Decoder};
pub use encode::{to_json, to_json_pretty, to_json_string};
pub use error::{kind_name, Error, Result};
pub use lookup::{lookup, PathKey};
pub use merge::{merge_all, merge_mapping};
pub use node::{Mapping, Node, NodeKind, Scalar, Sequence};
pub use normalize::{normalize, Canonicalize};

/// Datatree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
