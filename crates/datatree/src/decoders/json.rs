//! JSON decoder backed by `serde_json`

use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::normalize::Canonicalize;

/// JSON documents.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn decode(&self, source: &str) -> Result<Option<Node>> {
        if source.trim().is_empty() {
            return Ok(None);
        }
        let raw: serde_json::Value = serde_json::from_str(source).map_err(|e| Error::Decode {
            format: self.name().to_string(),
            message: e.to_string(),
        })?;
        raw.canonicalize()
    }

    fn name(&self) -> &str {
        "JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }
}
