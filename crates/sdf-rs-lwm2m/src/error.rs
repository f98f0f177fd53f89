// crates/sdf-rs-lwm2m/src/error.rs

use alloc::string::String;
use core::fmt;
use quick_xml::errors::serialize::DeError;
use sdf_rs::SdfError;

/// Input that violates the preconditions of the mapping engine.
///
/// These are reported before any SDF output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The definition contains no objects at all.
    EmptyDefinition,

    /// The object at `position` (0-based, input order) has an empty name.
    MissingObjectName { position: usize },

    /// A resource has an empty name.
    MissingResourceName { object: String, resource_id: u16 },

    /// Two objects share a name and would overwrite each other in the `sdfThing`.
    DuplicateObjectName { name: String },

    /// Two resources of one object share a name.
    DuplicateResourceName { object: String, name: String },
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::EmptyDefinition => {
                write!(f, "LwM2M definition does not contain any object")
            }
            InvalidInputError::MissingObjectName { position } => {
                write!(f, "Object at position {} has no name", position)
            }
            InvalidInputError::MissingResourceName {
                object,
                resource_id,
            } => write!(f, "Resource {} of object '{}' has no name", resource_id, object),
            InvalidInputError::DuplicateObjectName { name } => {
                write!(f, "Object name '{}' is used more than once", name)
            }
            InvalidInputError::DuplicateResourceName { object, name } => write!(
                f,
                "Resource name '{}' is used more than once in object '{}'",
                name, object
            ),
        }
    }
}

impl core::error::Error for InvalidInputError {}

/// Errors that can occur while loading LwM2M definitions or mapping them to SDF.
#[derive(Debug)]
pub enum Lwm2mError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// A required XML element was missing (e.g., `Object`).
    MissingElement { element: &'static str },

    /// An element's text could not be coerced into its typed value.
    InvalidElementFormat { element: &'static str, value: String },

    /// An object declares two resources with the same `ID`.
    DuplicateResourceId { object_id: u16, resource_id: u16 },

    /// The in-memory definition violates a precondition of the mapping engine.
    InvalidInput(InvalidInputError),

    /// An error from the SDF reference tree or serializer.
    Sdf(SdfError),
}

impl From<DeError> for Lwm2mError {
    fn from(e: DeError) -> Self {
        Lwm2mError::XmlParsing(e)
    }
}

impl From<SdfError> for Lwm2mError {
    fn from(e: SdfError) -> Self {
        Lwm2mError::Sdf(e)
    }
}

impl From<InvalidInputError> for Lwm2mError {
    fn from(e: InvalidInputError) -> Self {
        Lwm2mError::InvalidInput(e)
    }
}

impl fmt::Display for Lwm2mError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lwm2mError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            Lwm2mError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            Lwm2mError::InvalidElementFormat { element, value } => {
                write!(f, "Invalid value '{}' for element: {}", value, element)
            }
            Lwm2mError::DuplicateResourceId {
                object_id,
                resource_id,
            } => write!(
                f,
                "Object {} declares resource ID {} more than once",
                object_id, resource_id
            ),
            Lwm2mError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            Lwm2mError::Sdf(e) => write!(f, "SDF error: {}", e),
        }
    }
}

impl core::error::Error for Lwm2mError {}
