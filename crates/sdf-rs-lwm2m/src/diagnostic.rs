// crates/sdf-rs-lwm2m/src/diagnostic.rs

//! Non-fatal findings collected while mapping a definition.

use crate::types::ResourceType;
use alloc::string::String;
use core::fmt;

/// Something the converter dropped or could only partially express in SDF.
///
/// Diagnostics never abort a conversion; they are returned next to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The resource has no recognized `<Operations>` and was left out.
    UndefinedOperation {
        object: String,
        resource: String,
        resource_id: u16,
    },

    /// The resource became an `sdfProperty` without a `type` quality.
    UntypedProperty {
        object: String,
        resource: String,
        resource_type: ResourceType,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UndefinedOperation { resource, .. } => write!(
                f,
                "resource '{}' has no recognized operation; skipped",
                resource
            ),
            Diagnostic::UntypedProperty {
                resource,
                resource_type,
                ..
            } => match resource_type {
                ResourceType::Undefined => write!(
                    f,
                    "resource '{}' has no type; sdfProperty emitted without type",
                    resource
                ),
                other => write!(
                    f,
                    "resource '{}' has type '{}' without SDF equivalent; emitted without type",
                    resource, other
                ),
            },
        }
    }
}
