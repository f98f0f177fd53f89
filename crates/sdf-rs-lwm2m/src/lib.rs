// src/lib.rs

#![no_std]
#![doc = "Converts OMA LwM2M object definitions to the Semantic Definition Format (SDF)."]
#![doc = ""]
#![doc = "This `no_std + alloc` library loads LwM2M object XML and maps it to an"]
#![doc = "SDF model plus an SDF mapping that keeps the LwM2M-specific metadata."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_lwm2m_from_str`: Parsing `<LWM2M>` object definition XML."]
#![doc = "- `map_lwm2m_to_sdf`: Mapping a loaded definition to SDF."]
#![doc = "- `convert_lwm2m_str_to_sdf`: Both steps at once."]

extern crate alloc;

// --- Crate Modules ---

mod converter;
mod diagnostic;
mod error;
mod model;
mod parser;
mod types;

// --- Public API Re-exports ---

pub use converter::translate::{ResourceShape, map_operations, map_type};
pub use converter::{
    LWM2M_NS_PREFIX, LWM2M_SDF_NS, LWM2M_THING_NAME, SdfTranslation, convert_lwm2m_str_to_sdf,
    map_lwm2m_to_sdf,
};
pub use diagnostic::Diagnostic;
pub use error::{InvalidInputError, Lwm2mError};
pub use parser::load_lwm2m_from_str;
pub use types::{Lwm2mDefinition, Object, Operations, Resource, ResourceType};
