//! Document decoders
//!
//! Implementations of the `Decoder` trait for the supported text formats.

pub mod json;

#[cfg(feature = "yaml")]
pub mod yaml;

pub use json::JsonDecoder;

#[cfg(feature = "yaml")]
pub use yaml::YamlDecoder;
