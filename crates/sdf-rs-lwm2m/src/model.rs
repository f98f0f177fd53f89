//! Internal `serde` data structures that map directly to the LwM2M object XML schema.
//!
//! This module defines the raw structure of an OMA LwM2M object definition file
//! (`LWM2M.xsd`). Every leaf is kept as a `String`; coercion into typed values
//! happens in the parser. These structs are not intended for direct public use.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// The root `<LWM2M>` element.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "LWM2M")]
pub struct Lwm2mContainer {
    /// A file usually holds exactly one object, but the schema allows several.
    #[serde(rename = "Object", default)]
    pub object: Vec<Object>,
}

/// Represents an `<Object>` element.
#[derive(Debug, Deserialize, Default)]
pub struct Object {
    #[serde(rename = "@ObjectType", default)]
    pub object_type: Option<String>,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description1", default)]
    pub description_1: String,

    #[serde(rename = "Description2", default)]
    pub description_2: String,

    #[serde(rename = "ObjectID")]
    pub object_id: String,

    #[serde(rename = "ObjectURN", default)]
    pub object_urn: String,

    /// Absent in files written against LwM2M 1.0.
    #[serde(rename = "LWM2MVersion", default)]
    pub lwm2m_version: Option<String>,

    /// Absent in files written against LwM2M 1.0.
    #[serde(rename = "ObjectVersion", default)]
    pub object_version: Option<String>,

    /// `Single` or `Multiple`.
    #[serde(rename = "MultipleInstances")]
    pub multiple_instances: String,

    /// `Mandatory` or `Optional`.
    #[serde(rename = "Mandatory")]
    pub mandatory: String,

    #[serde(rename = "Resources", default)]
    pub resources: Resources,
}

/// Represents the `<Resources>` list.
#[derive(Debug, Deserialize, Default)]
pub struct Resources {
    #[serde(rename = "Item", default)]
    pub item: Vec<Item>,
}

/// Represents one resource `<Item ID="...">`.
#[derive(Debug, Deserialize, Default)]
pub struct Item {
    #[serde(rename = "@ID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    /// `R`, `W`, `RW`, `E` or empty.
    #[serde(rename = "Operations", default)]
    pub operations: String,

    #[serde(rename = "MultipleInstances")]
    pub multiple_instances: String,

    #[serde(rename = "Mandatory")]
    pub mandatory: String,

    #[serde(rename = "Type", default)]
    pub resource_type: String,

    #[serde(rename = "RangeEnumeration", default)]
    pub range_enumeration: String,

    #[serde(rename = "Units", default)]
    pub units: String,

    #[serde(rename = "Description", default)]
    pub description: String,
}
