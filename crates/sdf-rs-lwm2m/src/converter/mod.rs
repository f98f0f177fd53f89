// crates/sdf-rs-lwm2m/src/converter/mod.rs

//! Maps an in-memory LwM2M definition to an SDF model and an SDF mapping.
//!
//! A definition with one object becomes a top-level `sdfObject`; several
//! objects are wrapped into the `sdfThing` named [`LWM2M_THING_NAME`].
//! All mapping state lives in a [`MappingContext`] owned by a single call of
//! [`map_lwm2m_to_sdf`].

use crate::diagnostic::Diagnostic;
use crate::error::{InvalidInputError, Lwm2mError};
use crate::parser::load_lwm2m_from_str;
use crate::types::{Lwm2mDefinition, Object};
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use log::info;
use sdf_rs::{InformationBlock, NamespaceBlock, ReferenceTree, SdfMapping, SdfModel, SdfThing};

// --- Sub-modules ---

mod object;
mod resource;
pub mod translate;

/// Namespace URI of the OMA ecosystem in SDF.
pub const LWM2M_SDF_NS: &str = "https://onedm.org/ecosystem/oma";
/// Prefix used for [`LWM2M_SDF_NS`]; also the default namespace.
pub const LWM2M_NS_PREFIX: &str = "oma";
/// Key of the `sdfThing` wrapping multi-object definitions.
pub const LWM2M_THING_NAME: &str = "LWM2M";

const SDF_OBJECT_QUALITY: &str = "sdfObject";
const SDF_THING_QUALITY: &str = "sdfThing";

/// The result of one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct SdfTranslation {
    pub model: SdfModel,
    pub mapping: SdfMapping,
    /// Non-fatal findings, in the order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-run state shared by the object and resource mappers.
pub(crate) struct MappingContext {
    pub(crate) tree: ReferenceTree,
    /// Escaped `#/` pointers of mandatory elements in the current top-level scope.
    pub(crate) required: Vec<String>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl MappingContext {
    pub(crate) fn new() -> Self {
        Self {
            tree: ReferenceTree::new(),
            required: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Hands over the required list of the finished scope.
    fn take_required(&mut self) -> Vec<String> {
        core::mem::take(&mut self.required)
    }
}

/// Maps an LwM2M definition to an SDF model and an SDF mapping.
///
/// Object IDs, URNs, versions and resource IDs are written to the mapping's
/// `map`, keyed by the pointer of the element they describe. Mandatory
/// objects and resources are listed in `sdfRequired`: on the `sdfObject` for
/// a single object, or on the `sdfThing` for several.
///
/// Pointers are built from the reference tree, not from the JSON layout: a
/// quality name followed by the object name and, for resources, the resource
/// name, each escaped per RFC 6901. They identify elements but do not
/// resolve inside the serialized model. `#/sdfThing/Device/Reboot` names
/// the `Reboot` action, whose document path is
/// `/sdfThing/LWM2M/sdfObject/Device/sdfAction/Reboot`.
///
/// # Errors
/// Returns `Lwm2mError::InvalidInput` if the definition is empty or contains
/// missing or colliding names. No partial output is produced in that case.
pub fn map_lwm2m_to_sdf(lwm2m: &Lwm2mDefinition) -> Result<SdfTranslation, Lwm2mError> {
    validate_definition(lwm2m)?;

    // Both documents share the same header blocks.
    let mut model = SdfModel {
        information_block: generate_information_block(),
        namespace_block: generate_namespace_block(),
        ..Default::default()
    };
    let mut mapping = SdfMapping {
        information_block: generate_information_block(),
        namespace_block: generate_namespace_block(),
        ..Default::default()
    };

    let mut ctx = MappingContext::new();
    let root = ctx.tree.root();

    match lwm2m.objects.as_slice() {
        [] => return Err(InvalidInputError::EmptyDefinition.into()),
        [lwm2m_object] => {
            info!("Mapping LwM2M object '{}' to a single sdfObject", lwm2m_object.name);
            let top_node = ctx.tree.insert_child(root, SDF_OBJECT_QUALITY)?;

            let mut sdf_object = object::map_object(lwm2m_object, top_node, &mut ctx)?;
            sdf_object.sdf_required = ctx.take_required();
            model.sdf_object.insert(lwm2m_object.name.clone(), sdf_object);
        }
        lwm2m_objects => {
            info!(
                "Mapping {} LwM2M objects to sdfThing '{}'",
                lwm2m_objects.len(),
                LWM2M_THING_NAME
            );
            let top_node = ctx.tree.insert_child(root, SDF_THING_QUALITY)?;

            // The required list spans the whole thing, so it is drained only
            // once all wrapped objects are mapped.
            let mut sdf_thing = SdfThing::default();
            for lwm2m_object in lwm2m_objects {
                let sdf_object = object::map_object(lwm2m_object, top_node, &mut ctx)?;
                sdf_thing
                    .sdf_object
                    .insert(lwm2m_object.name.clone(), sdf_object);
            }
            sdf_thing.sdf_required = ctx.take_required();
            model
                .sdf_thing
                .insert(String::from(LWM2M_THING_NAME), sdf_thing);
        }
    }

    mapping.map = ctx.tree.attribute_map()?;

    Ok(SdfTranslation {
        model,
        mapping,
        diagnostics: ctx.diagnostics,
    })
}

/// Parses an LwM2M XML document and maps it to SDF in one step.
pub fn convert_lwm2m_str_to_sdf(xml_content: &str) -> Result<SdfTranslation, Lwm2mError> {
    let lwm2m = load_lwm2m_from_str(xml_content)?;
    map_lwm2m_to_sdf(&lwm2m)
}

fn generate_namespace_block() -> NamespaceBlock {
    let mut namespace_block = NamespaceBlock::default();
    namespace_block
        .namespaces
        .insert(String::from(LWM2M_NS_PREFIX), String::from(LWM2M_SDF_NS));
    namespace_block.default_namespace = Some(String::from(LWM2M_NS_PREFIX));
    namespace_block
}

fn generate_information_block() -> InformationBlock {
    InformationBlock::default()
}

/// Rejects definitions that would produce incomplete or ambiguous output.
fn validate_definition(lwm2m: &Lwm2mDefinition) -> Result<(), InvalidInputError> {
    if lwm2m.is_empty() {
        return Err(InvalidInputError::EmptyDefinition);
    }

    let mut object_names = BTreeSet::new();
    for (position, lwm2m_object) in lwm2m.iter().enumerate() {
        if lwm2m_object.name.is_empty() {
            return Err(InvalidInputError::MissingObjectName { position });
        }
        if !object_names.insert(lwm2m_object.name.as_str()) {
            return Err(InvalidInputError::DuplicateObjectName {
                name: lwm2m_object.name.clone(),
            });
        }
        validate_resources(lwm2m_object)?;
    }
    Ok(())
}

fn validate_resources(lwm2m_object: &Object) -> Result<(), InvalidInputError> {
    let mut resource_names = BTreeSet::new();
    for (resource_id, resource) in &lwm2m_object.resources {
        if resource.name.is_empty() {
            return Err(InvalidInputError::MissingResourceName {
                object: lwm2m_object.name.clone(),
                resource_id: *resource_id,
            });
        }
        if !resource_names.insert(resource.name.as_str()) {
            return Err(InvalidInputError::DuplicateResourceName {
                object: lwm2m_object.name.clone(),
                name: resource.name.clone(),
            });
        }
    }
    Ok(())
}
