pub mod defaults;
pub mod document;
pub mod resolve;
pub mod schema;

pub use document::{RawDocument, Section};
pub use resolve::{refresh_interval, resolve};
pub use schema::{StyleConfig, DEFAULT_STYLE, LIQUID_GLASS_STYLE};

use hw_core::{Result, WidgetError};

/// Decode a config document from its stored JSON bytes.
///
/// Fails when the bytes are not JSON or the top level is not an object; the
/// caller decides whether that means "use defaults".
pub fn parse(bytes: &[u8]) -> Result<RawDocument> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    RawDocument::from_value(value)
        .ok_or_else(|| WidgetError::Config("top-level value is not an object".to_string()))
}
