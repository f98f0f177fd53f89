// crates/sdf-rs-lwm2m/src/converter/object.rs

use super::MappingContext;
use super::resource::map_resource;
use crate::error::Lwm2mError;
use crate::types::Object;
use log::debug;
use sdf_rs::{NodeId, SdfObject};

/// Maps one LwM2M object into an `sdfObject` attached below `top_node`.
///
/// LwM2M metadata without a slot in the SDF model (second description,
/// object ID, URN, versions) is stored on the object's tree node and ends
/// up in the mapping document.
pub(super) fn map_object(
    object: &Object,
    top_node: NodeId,
    ctx: &mut MappingContext,
) -> Result<SdfObject, Lwm2mError> {
    let object_node = ctx.tree.insert_child(top_node, object.name.as_str())?;

    ctx.tree
        .add_attribute(object_node, "Description2", object.description_2.as_str())?;
    ctx.tree
        .add_attribute(object_node, "ObjectID", object.object_id)?;
    ctx.tree
        .add_attribute(object_node, "ObjectURN", object.object_urn.as_str())?;
    ctx.tree
        .add_attribute(object_node, "LWM2MVersion", object.lwm2m_version)?;
    ctx.tree
        .add_attribute(object_node, "ObjectVersion", object.object_version)?;

    let mut sdf_object = SdfObject {
        label: object.name.clone(),
        description: object.description_1.clone(),
        max_items: (!object.multiple_instances).then_some(1),
        ..Default::default()
    };

    if object.mandatory {
        ctx.required
            .push(ctx.tree.generate_json_pointer(object_node)?);
    }

    // BTreeMap iteration yields ascending resource IDs.
    for (resource_id, resource) in &object.resources {
        map_resource(
            &object.name,
            *resource_id,
            resource,
            object_node,
            &mut sdf_object,
            ctx,
        )?;
    }

    debug!(
        "Mapped object {} '{}': {} sdfProperty, {} sdfAction",
        object.object_id,
        object.name,
        sdf_object.sdf_property.len(),
        sdf_object.sdf_action.len()
    );
    Ok(sdf_object)
}
