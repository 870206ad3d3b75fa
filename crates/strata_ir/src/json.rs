//! JSON adapter
//!
//! The lenient entry points never fail: a malformed document is logged and
//! reads as `none`, a tree that cannot be written yields an empty string.
//! JSON keeps no numeric subkind, so every number comes back as a double.

use std::io::Read;

use strata_core::Property;

use crate::error::Result;

/// Parse `document`, failing on malformed input
pub fn try_parse_json(document: &str) -> Result<Property> {
    Ok(serde_json::from_str(document)?)
}

/// Parse a document from `reader`, failing on malformed input or I/O errors
pub fn try_parse_json_reader<R: Read>(mut reader: R) -> Result<Property> {
    let mut document = String::new();
    reader.read_to_string(&mut document)?;
    try_parse_json(&document)
}

/// Parse `document`; malformed input reads as `none`
pub fn parse_json_to_property(document: &str) -> Property {
    try_parse_json(document).unwrap_or_else(|e| {
        log::error!("Failed to parse json: {}", e);
        Property::None
    })
}

/// Parse a document from `reader`; failures read as `none`
pub fn parse_json_reader<R: Read>(reader: R) -> Property {
    try_parse_json_reader(reader).unwrap_or_else(|e| {
        log::error!("Failed to parse json: {}", e);
        Property::None
    })
}

/// Compact JSON text of `tree`
pub fn to_string(tree: &Property) -> String {
    serde_json::to_string(tree).unwrap_or_else(|e| {
        log::error!("Failed to save json to string: {}", e);
        String::new()
    })
}
