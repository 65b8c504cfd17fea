//! Document decoder trait
//!
//! Decoders sit at the boundary between document text and the canonical
//! tree:
//!
//! ```text
//! JSON / YAML text → [Decoder] → raw decoder value → [Canonicalize] → Node
//! ```
//!
//! Decoders are responsible for:
//! - Turning text into their codec's generic value
//! - Handing that value to the normalizer
//!
//! Everything after that (copy, merge, lookup, compare, encode) only sees
//! canonical nodes.

use std::path::Path;

use crate::error::Result;
use crate::node::Node;

/// A text format that can be decoded into a canonical tree.
///
/// # Example
///
/// ```
/// use datatree::decoders::JsonDecoder;
/// use datatree::Decoder;
///
/// let decoder = JsonDecoder::new();
/// let tree = decoder.decode(r#"{"a": 1}"#).unwrap().unwrap();
/// assert!(tree.is_mapping());
/// assert_eq!(decoder.name(), "JSON");
/// ```
pub trait Decoder: Send + Sync {
    /// Decode `source` into a canonical tree.
    ///
    /// Returns `Ok(None)` for a document that holds no data (blank text or a
    /// root-level null).
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the text is malformed, or any normalization error.
    fn decode(&self, source: &str) -> Result<Option<Node>>;

    /// Format name, e.g. "JSON".
    fn name(&self) -> &str;

    /// File extensions handled by this decoder, without the dot.
    fn file_extensions(&self) -> &[&str];
}

/// Pick a decoder from the extension of `path`.
///
/// Returns `None` for unknown or missing extensions.
pub fn decoder_for_path(path: &Path) -> Option<Box<dyn Decoder>> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    available_decoders()
        .into_iter()
        .find(|d| d.file_extensions().contains(&ext.as_str()))
}

fn available_decoders() -> Vec<Box<dyn Decoder>> {
    let mut decoders: Vec<Box<dyn Decoder>> = vec![Box::new(crate::decoders::JsonDecoder::new())];
    #[cfg(feature = "yaml")]
    decoders.push(Box::new(crate::decoders::YamlDecoder::new()));
    decoders
}
