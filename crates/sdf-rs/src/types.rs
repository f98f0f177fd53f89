// crates/sdf-rs/src/types.rs

//! Public data structures for SDF models and SDF mappings.
//!
//! The structs are annotated with `serde` attributes so that the serialized
//! form uses the SDF quality names (`sdfObject`, `sdfProperty`, `maxItems`, ...).

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

// --- Document Blocks ---

/// The `info` block of an SDF document.
///
/// All entries are optional; an empty block serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InformationBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// The `namespace` and `defaultNamespace` entries of an SDF document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceBlock {
    /// Prefix -> namespace URI.
    #[serde(rename = "namespace", skip_serializing_if = "BTreeMap::is_empty")]
    pub namespaces: BTreeMap<String, String>,

    /// Prefix of the namespace that definitions in this document belong to.
    #[serde(rename = "defaultNamespace", skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
}

// --- Affordances ---

/// The `type` quality of an `sdfProperty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SdfType {
    String,
    Integer,
    Number,
    Boolean,
}

impl SdfType {
    /// The JSON keyword used for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SdfType::String => "string",
            SdfType::Integer => "integer",
            SdfType::Number => "number",
            SdfType::Boolean => "boolean",
        }
    }
}

/// An `sdfProperty`: a readable and/or writable data element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SdfProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
    pub readable: bool,
    pub writable: bool,
    /// `None` when the source data type has no SDF counterpart.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<SdfType>,
}

/// An `sdfAction`: an invokable operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SdfAction {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

// --- Groupings ---

/// An `sdfObject`: one component with its properties and actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SdfObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// `Some(1)` for components that only exist once.
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,

    #[serde(rename = "sdfProperty", skip_serializing_if = "BTreeMap::is_empty")]
    pub sdf_property: BTreeMap<String, SdfProperty>,

    #[serde(rename = "sdfAction", skip_serializing_if = "BTreeMap::is_empty")]
    pub sdf_action: BTreeMap<String, SdfAction>,

    /// JSON pointers to the mandatory elements of this object.
    #[serde(rename = "sdfRequired", skip_serializing_if = "Vec::is_empty")]
    pub sdf_required: Vec<String>,
}

/// An `sdfThing`: a composite of several `sdfObject`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SdfThing {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "sdfObject", skip_serializing_if = "BTreeMap::is_empty")]
    pub sdf_object: BTreeMap<String, SdfObject>,

    /// JSON pointers to every mandatory element found in the wrapped objects.
    #[serde(rename = "sdfRequired", skip_serializing_if = "Vec::is_empty")]
    pub sdf_required: Vec<String>,
}

// --- Documents ---

/// A complete SDF model document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SdfModel {
    #[serde(rename = "info")]
    pub information_block: InformationBlock,

    #[serde(flatten)]
    pub namespace_block: NamespaceBlock,

    #[serde(rename = "sdfObject", skip_serializing_if = "BTreeMap::is_empty")]
    pub sdf_object: BTreeMap<String, SdfObject>,

    #[serde(rename = "sdfThing", skip_serializing_if = "BTreeMap::is_empty")]
    pub sdf_thing: BTreeMap<String, SdfThing>,
}

/// A scalar value carried by the mapping document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Boolean(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Integer(v)
    }
}

impl From<u16> for AttributeValue {
    fn from(v: u16) -> Self {
        AttributeValue::Integer(i64::from(v))
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Number(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(String::from(v))
    }
}

/// A complete SDF mapping document.
///
/// `map` associates a JSON pointer into the model with the ecosystem
/// specific attributes that have no place in the model itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SdfMapping {
    #[serde(rename = "info")]
    pub information_block: InformationBlock,

    #[serde(flatten)]
    pub namespace_block: NamespaceBlock,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub map: BTreeMap<String, BTreeMap<String, AttributeValue>>,
}

impl SdfModel {
    /// Returns `true` if the model wraps its objects in an `sdfThing`.
    pub fn is_thing(&self) -> bool {
        !self.sdf_thing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_sdf_type_keywords() {
        assert_eq!(SdfType::String.as_str(), "string");
        assert_eq!(SdfType::Integer.as_str(), "integer");
        assert_eq!(SdfType::Number.as_str(), "number");
        assert_eq!(SdfType::Boolean.as_str(), "boolean");
    }

    #[test]
    fn test_attribute_value_conversions() {
        assert_eq!(AttributeValue::from(3u16), AttributeValue::Integer(3));
        assert_eq!(AttributeValue::from(1.1f64), AttributeValue::Number(1.1));
        assert_eq!(
            AttributeValue::from("urn:oma:lwm2m:oma:3"),
            AttributeValue::Text("urn:oma:lwm2m:oma:3".to_string())
        );
        assert_eq!(AttributeValue::from(true), AttributeValue::Boolean(true));
    }

    #[test]
    fn test_empty_model_is_not_a_thing() {
        assert!(!SdfModel::default().is_thing());
    }
}
