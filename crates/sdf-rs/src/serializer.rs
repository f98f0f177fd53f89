// crates/sdf-rs/src/serializer.rs

//! Renders SDF documents as JSON strings.

use crate::error::SdfError;
use crate::types::{SdfMapping, SdfModel};
use alloc::string::String;
use log::debug;

/// Serializes an `SdfModel` into a pretty-printed JSON string.
///
/// # Errors
/// Returns `SdfError::JsonSerializing` if `serde_json` rejects the document.
pub fn save_model_to_string(model: &SdfModel) -> Result<String, SdfError> {
    let json = serde_json::to_string_pretty(model)?;
    debug!(
        "Serialized SDF model ({} sdfObject, {} sdfThing entries, {} bytes)",
        model.sdf_object.len(),
        model.sdf_thing.len(),
        json.len()
    );
    Ok(json)
}

/// Serializes an `SdfMapping` into a pretty-printed JSON string.
pub fn save_mapping_to_string(mapping: &SdfMapping) -> Result<String, SdfError> {
    let json = serde_json::to_string_pretty(mapping)?;
    debug!(
        "Serialized SDF mapping ({} map entries, {} bytes)",
        mapping.map.len(),
        json.len()
    );
    Ok(json)
}
