// crates/sdf-rs-lwm2m/src/converter/resource.rs

use super::MappingContext;
use super::translate::{ResourceShape, map_operations, map_type};
use crate::diagnostic::Diagnostic;
use crate::error::Lwm2mError;
use crate::types::Resource;
use log::{debug, warn};
use sdf_rs::{NodeId, SdfAction, SdfObject, SdfProperty};

/// Maps one resource into an `sdfProperty` or `sdfAction` of `sdf_object`.
///
/// Resources without a recognized operation produce neither, and leave no
/// node in the reference tree.
pub(super) fn map_resource(
    object_name: &str,
    resource_id: u16,
    resource: &Resource,
    object_node: NodeId,
    sdf_object: &mut SdfObject,
    ctx: &mut MappingContext,
) -> Result<(), Lwm2mError> {
    match map_operations(resource.operations) {
        ResourceShape::Skipped => {
            let diagnostic = Diagnostic::UndefinedOperation {
                object: object_name.into(),
                resource: resource.name.clone(),
                resource_id,
            };
            warn!("Object '{}': {}", object_name, diagnostic);
            ctx.diagnostics.push(diagnostic);
            return Ok(());
        }
        ResourceShape::Action => {
            let sdf_action = SdfAction {
                label: resource.name.clone(),
                description: resource.description.clone(),
            };
            sdf_object.sdf_action.insert(resource.name.clone(), sdf_action);
            debug!("Mapped resource {} '{}' to sdfAction", resource_id, resource.name);
        }
        ResourceShape::Property { readable, writable } => {
            let data_type = map_type(resource.resource_type);
            if data_type.is_none() {
                let diagnostic = Diagnostic::UntypedProperty {
                    object: object_name.into(),
                    resource: resource.name.clone(),
                    resource_type: resource.resource_type,
                };
                debug!("Object '{}': {}", object_name, diagnostic);
                ctx.diagnostics.push(diagnostic);
            }
            let sdf_property = SdfProperty {
                label: resource.name.clone(),
                description: resource.description.clone(),
                unit: resource.units.clone(),
                readable,
                writable,
                data_type,
            };
            sdf_object
                .sdf_property
                .insert(resource.name.clone(), sdf_property);
            debug!("Mapped resource {} '{}' to sdfProperty", resource_id, resource.name);
        }
    }

    let resource_node = ctx.tree.insert_child(object_node, resource.name.as_str())?;
    ctx.tree.add_attribute(resource_node, "ID", resource_id)?;
    ctx.tree
        .add_attribute(resource_node, "MultipleInstances", resource.multiple_instances)?;
    if !resource.range_enumeration.is_empty() {
        ctx.tree.add_attribute(
            resource_node,
            "RangeEnumeration",
            resource.range_enumeration.as_str(),
        )?;
    }

    if resource.mandatory {
        ctx.required
            .push(ctx.tree.generate_json_pointer(resource_node)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Operations, ResourceType};
    use alloc::string::ToString;
    use sdf_rs::SdfType;

    fn setup() -> (MappingContext, NodeId) {
        let mut ctx = MappingContext::new();
        let root = ctx.tree.root();
        let top = ctx.tree.insert_child(root, "sdfObject").unwrap();
        let object_node = ctx.tree.insert_child(top, "Device").unwrap();
        (ctx, object_node)
    }

    fn resource(name: &str, operations: Operations, resource_type: ResourceType) -> Resource {
        Resource {
            name: name.to_string(),
            operations,
            resource_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_read_string_becomes_property() {
        let (mut ctx, node) = setup();
        let mut object = SdfObject::default();
        let mut res = resource("Manufacturer", Operations::Read, ResourceType::String);
        res.description = "Human readable manufacturer name".to_string();

        map_resource("Device", 0, &res, node, &mut object, &mut ctx).unwrap();

        let property = &object.sdf_property["Manufacturer"];
        assert_eq!(property.label, "Manufacturer");
        assert!(property.readable);
        assert!(!property.writable);
        assert_eq!(property.data_type, Some(SdfType::String));
        assert_eq!(property.description, "Human readable manufacturer name");
        assert!(object.sdf_action.is_empty());
        assert!(ctx.required.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_execute_becomes_action_and_is_required() {
        let (mut ctx, node) = setup();
        let mut object = SdfObject::default();
        let mut res = resource("Reboot", Operations::Execute, ResourceType::Undefined);
        res.mandatory = true;
        res.description = "Reboot the LwM2M Device".to_string();

        map_resource("Device", 4, &res, node, &mut object, &mut ctx).unwrap();

        assert_eq!(
            object.sdf_action["Reboot"],
            SdfAction {
                label: "Reboot".to_string(),
                description: "Reboot the LwM2M Device".to_string(),
            }
        );
        assert!(object.sdf_property.is_empty());
        assert_eq!(ctx.required, ["#/sdfObject/Device/Reboot"]);
        // Actions carry no type, so no diagnostic is expected.
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_undefined_operation_is_skipped_with_diagnostic() {
        let (mut ctx, node) = setup();
        let nodes_before = ctx.tree.len();
        let mut object = SdfObject::default();
        let mut res = resource("Reserved", Operations::Undefined, ResourceType::Integer);
        res.mandatory = true;

        map_resource("Device", 9, &res, node, &mut object, &mut ctx).unwrap();

        assert!(object.sdf_property.is_empty());
        assert!(object.sdf_action.is_empty());
        assert!(ctx.required.is_empty());
        assert_eq!(ctx.tree.len(), nodes_before);
        assert_eq!(
            ctx.diagnostics,
            [Diagnostic::UndefinedOperation {
                object: "Device".to_string(),
                resource: "Reserved".to_string(),
                resource_id: 9,
            }]
        );
    }

    #[test]
    fn test_untyped_property_is_kept() {
        let (mut ctx, node) = setup();
        let mut object = SdfObject::default();
        let mut res = resource("Current Time", Operations::ReadWrite, ResourceType::Time);
        res.units = "s".to_string();

        map_resource("Device", 13, &res, node, &mut object, &mut ctx).unwrap();

        let property = &object.sdf_property["Current Time"];
        assert_eq!(property.data_type, None);
        assert!(property.readable && property.writable);
        assert_eq!(property.unit, "s");
        assert!(matches!(
            ctx.diagnostics.as_slice(),
            [Diagnostic::UntypedProperty {
                resource_type: ResourceType::Time,
                ..
            }]
        ));
    }

    #[test]
    fn test_resource_node_carries_mapping_attributes() {
        let (mut ctx, node) = setup();
        let mut object = SdfObject::default();
        let mut res = resource("Battery Level", Operations::Read, ResourceType::Integer);
        res.range_enumeration = "0..100".to_string();

        map_resource("Device", 9, &res, node, &mut object, &mut ctx).unwrap();

        let map = ctx.tree.attribute_map().unwrap();
        let attributes = &map["#/sdfObject/Device/Battery Level"];
        assert_eq!(attributes["ID"], sdf_rs::AttributeValue::Integer(9));
        assert_eq!(
            attributes["RangeEnumeration"],
            sdf_rs::AttributeValue::Text("0..100".to_string())
        );
        assert_eq!(
            attributes["MultipleInstances"],
            sdf_rs::AttributeValue::Boolean(false)
        );
    }
}
