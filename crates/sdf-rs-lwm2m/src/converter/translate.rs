// crates/sdf-rs-lwm2m/src/converter/translate.rs

//! Lookup tables from LwM2M resource attributes to SDF qualities.

use crate::types::{Operations, ResourceType};
use sdf_rs::SdfType;

/// The SDF affordance a resource turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceShape {
    /// An `sdfProperty` with the given access flags.
    Property { readable: bool, writable: bool },
    /// An `sdfAction`.
    Action,
    /// No SDF element at all.
    Skipped,
}

/// Maps the `<Operations>` of a resource to its SDF shape.
pub fn map_operations(operations: Operations) -> ResourceShape {
    match operations {
        Operations::Read => ResourceShape::Property {
            readable: true,
            writable: false,
        },
        Operations::Write => ResourceShape::Property {
            readable: false,
            writable: true,
        },
        Operations::ReadWrite => ResourceShape::Property {
            readable: true,
            writable: true,
        },
        Operations::Execute => ResourceShape::Action,
        Operations::Undefined => ResourceShape::Skipped,
    }
}

/// Maps an LwM2M resource type to the SDF `type` quality, if one exists.
pub fn map_type(resource_type: ResourceType) -> Option<SdfType> {
    match resource_type {
        ResourceType::String => Some(SdfType::String),
        ResourceType::Integer | ResourceType::UnsignedInteger => Some(SdfType::Integer),
        ResourceType::Float => Some(SdfType::Number),
        ResourceType::Boolean => Some(SdfType::Boolean),
        ResourceType::Opaque
        | ResourceType::Time
        | ResourceType::ObjectLink
        | ResourceType::CoreLink
        | ResourceType::Undefined => None,
    }
}
