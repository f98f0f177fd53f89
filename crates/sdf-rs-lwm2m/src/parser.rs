// src/parser.rs

use crate::error::Lwm2mError;
use crate::model;
use crate::types::{Lwm2mDefinition, Object, Operations, Resource, ResourceType};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use log::{debug, warn};

/// LwM2M version assumed when an object omits `<LWM2MVersion>` or `<ObjectVersion>`.
const DEFAULT_VERSION: f64 = 1.0;

/// Parses an LwM2M object definition XML string into an `Lwm2mDefinition`.
///
/// All `<Object>` elements of the document are returned in document order.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full `<LWM2M>` document.
///
/// # Errors
/// Returns an `Lwm2mError` if the XML cannot be deserialized, no object is
/// present, a typed element holds an invalid value, or a resource ID is
/// declared twice within one object.
pub fn load_lwm2m_from_str(xml_content: &str) -> Result<Lwm2mDefinition, Lwm2mError> {
    // 1. Deserialize the raw XML string into our internal model.
    let container: model::Lwm2mContainer = quick_xml::de::from_str(xml_content)?;

    if container.object.is_empty() {
        return Err(Lwm2mError::MissingElement { element: "Object" });
    }

    // 2. Resolve every raw object into the public types.
    let definition = container
        .object
        .iter()
        .map(resolve_object)
        .collect::<Result<Lwm2mDefinition, Lwm2mError>>()?;

    debug!("Loaded LwM2M definition with {} object(s)", definition.len());
    Ok(definition)
}

/// Converts a `model::Object` into a clean `types::Object`.
fn resolve_object(model: &model::Object) -> Result<Object, Lwm2mError> {
    let object_id = parse_u16("ObjectID", &model.object_id)?;

    let mut resources = BTreeMap::new();
    for item in &model.resources.item {
        let resource_id = parse_u16("Item@ID", &item.id)?;
        let resource = resolve_resource(item)?;
        if resources.insert(resource_id, resource).is_some() {
            return Err(Lwm2mError::DuplicateResourceId {
                object_id,
                resource_id,
            });
        }
    }

    Ok(Object {
        name: model.name.trim().to_string(),
        object_type: model.object_type.clone().unwrap_or_default(),
        description_1: model.description_1.trim().to_string(),
        description_2: model.description_2.trim().to_string(),
        object_id,
        object_urn: model.object_urn.trim().to_string(),
        lwm2m_version: parse_version("LWM2MVersion", model.lwm2m_version.as_deref())?,
        object_version: parse_version("ObjectVersion", model.object_version.as_deref())?,
        multiple_instances: parse_multiple_instances(&model.multiple_instances)?,
        mandatory: parse_mandatory(&model.mandatory)?,
        resources,
    })
}

/// Converts a `model::Item` into a clean `types::Resource`.
fn resolve_resource(item: &model::Item) -> Result<Resource, Lwm2mError> {
    Ok(Resource {
        name: item.name.trim().to_string(),
        operations: parse_operations(&item.operations),
        multiple_instances: parse_multiple_instances(&item.multiple_instances)?,
        mandatory: parse_mandatory(&item.mandatory)?,
        resource_type: parse_resource_type(&item.resource_type),
        range_enumeration: item.range_enumeration.trim().to_string(),
        units: item.units.trim().to_string(),
        description: item.description.trim().to_string(),
    })
}

// --- Coercion Helpers ---

/// Parses the `<Operations>` text. Unknown values become `Undefined`.
pub(crate) fn parse_operations(s: &str) -> Operations {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("R") {
        Operations::Read
    } else if trimmed.eq_ignore_ascii_case("W") {
        Operations::Write
    } else if trimmed.eq_ignore_ascii_case("RW") {
        Operations::ReadWrite
    } else if trimmed.eq_ignore_ascii_case("E") {
        Operations::Execute
    } else {
        if !trimmed.is_empty() {
            warn!("Unknown LwM2M operations '{}', treating as undefined", trimmed);
        }
        Operations::Undefined
    }
}

/// Parses the `<Type>` text. Unknown values become `Undefined`.
pub(crate) fn parse_resource_type(s: &str) -> ResourceType {
    let trimmed = s.trim();
    let lower = trimmed.to_ascii_lowercase();
    match lower.as_str() {
        "string" => ResourceType::String,
        "integer" => ResourceType::Integer,
        "unsigned integer" => ResourceType::UnsignedInteger,
        "float" => ResourceType::Float,
        "boolean" => ResourceType::Boolean,
        "opaque" => ResourceType::Opaque,
        "time" => ResourceType::Time,
        "objlnk" => ResourceType::ObjectLink,
        "corelnk" => ResourceType::CoreLink,
        "" => ResourceType::Undefined,
        _ => {
            warn!("Unknown LwM2M resource type '{}', treating as undefined", trimmed);
            ResourceType::Undefined
        }
    }
}

/// Parses `Single` / `Multiple` into the `multiple_instances` flag.
fn parse_multiple_instances(s: &str) -> Result<bool, Lwm2mError> {
    match s.trim() {
        "Multiple" => Ok(true),
        "Single" => Ok(false),
        other => Err(Lwm2mError::InvalidElementFormat {
            element: "MultipleInstances",
            value: String::from(other),
        }),
    }
}

/// Parses `Mandatory` / `Optional` into the `mandatory` flag.
fn parse_mandatory(s: &str) -> Result<bool, Lwm2mError> {
    match s.trim() {
        "Mandatory" => Ok(true),
        "Optional" => Ok(false),
        other => Err(Lwm2mError::InvalidElementFormat {
            element: "Mandatory",
            value: String::from(other),
        }),
    }
}

fn parse_u16(element: &'static str, s: &str) -> Result<u16, Lwm2mError> {
    s.trim()
        .parse::<u16>()
        .map_err(|_| Lwm2mError::InvalidElementFormat {
            element,
            value: String::from(s),
        })
}

/// Parses a version such as `1.1`. A missing or empty element yields `1.0`.
fn parse_version(element: &'static str, s: Option<&str>) -> Result<f64, Lwm2mError> {
    match s.map(str::trim) {
        None | Some("") => Ok(DEFAULT_VERSION),
        Some(text) => text
            .parse::<f64>()
            .map_err(|_| Lwm2mError::InvalidElementFormat {
                element,
                value: String::from(text),
            }),
    }
}
