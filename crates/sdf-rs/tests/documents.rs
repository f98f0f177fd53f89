// crates/sdf-rs/tests/documents.rs

//! Builds SDF documents through the public API and checks their JSON form.

use sdf_rs::{
    AttributeValue, InformationBlock, NamespaceBlock, ReferenceTree, SdfAction, SdfError,
    SdfMapping, SdfModel, SdfObject, SdfProperty, SdfThing, SdfType, save_mapping_to_string,
    save_model_to_string,
};
use serde_json::{Value, json};

fn namespace_block() -> NamespaceBlock {
    let mut block = NamespaceBlock::default();
    block
        .namespaces
        .insert("ex".to_string(), "https://example.com/sdf".to_string());
    block.default_namespace = Some("ex".to_string());
    block
}

/// Builds the tree and model for a small switch object, the way a converter would.
fn switch_documents() -> (SdfModel, SdfMapping) {
    let mut tree = ReferenceTree::new();
    let top = tree.insert_child(tree.root(), "sdfObject").unwrap();
    let switch = tree.insert_child(top, "Switch").unwrap();
    tree.add_attribute(switch, "Id", 42u16).unwrap();
    let state = tree.insert_child(switch, "State").unwrap();
    tree.add_attribute(state, "Persistent", true).unwrap();
    let toggle = tree.insert_child(switch, "Toggle").unwrap();

    let mut object = SdfObject {
        label: "Switch".to_string(),
        max_items: Some(1),
        ..Default::default()
    };
    object.sdf_property.insert(
        "State".to_string(),
        SdfProperty {
            label: "State".to_string(),
            readable: true,
            writable: true,
            data_type: Some(SdfType::Boolean),
            ..Default::default()
        },
    );
    object.sdf_action.insert(
        "Toggle".to_string(),
        SdfAction {
            label: "Toggle".to_string(),
            description: String::new(),
        },
    );
    for node in [state, toggle] {
        object
            .sdf_required
            .push(tree.generate_json_pointer(node).unwrap());
    }

    let mut model = SdfModel {
        information_block: InformationBlock {
            title: Some("Switch".to_string()),
            ..Default::default()
        },
        namespace_block: namespace_block(),
        ..Default::default()
    };
    model.sdf_object.insert("Switch".to_string(), object);

    let mapping = SdfMapping {
        information_block: InformationBlock::default(),
        namespace_block: namespace_block(),
        map: tree.attribute_map().unwrap(),
    };
    (model, mapping)
}

#[test]
fn test_model_document() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (model, _) = switch_documents();
    let json = save_model_to_string(&model).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        json!({
            "info": { "title": "Switch" },
            "namespace": { "ex": "https://example.com/sdf" },
            "defaultNamespace": "ex",
            "sdfObject": {
                "Switch": {
                    "label": "Switch",
                    "maxItems": 1,
                    "sdfProperty": {
                        "State": {
                            "label": "State",
                            "readable": true,
                            "writable": true,
                            "type": "boolean"
                        }
                    },
                    "sdfAction": { "Toggle": { "label": "Toggle" } },
                    "sdfRequired": [
                        "#/sdfObject/Switch/State",
                        "#/sdfObject/Switch/Toggle"
                    ]
                }
            }
        })
    );
}

#[test]
fn test_mapping_document() {
    let (_, mapping) = switch_documents();
    let json = save_mapping_to_string(&mapping).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        json!({
            "info": {},
            "namespace": { "ex": "https://example.com/sdf" },
            "defaultNamespace": "ex",
            "map": {
                "#/sdfObject/Switch": { "Id": 42 },
                "#/sdfObject/Switch/State": { "Persistent": true }
            }
        })
    );
    assert_eq!(
        mapping.map["#/sdfObject/Switch"]["Id"],
        AttributeValue::Integer(42)
    );
}

#[test]
fn test_thing_document() {
    let (model, _) = switch_documents();
    let mut thing = SdfThing {
        label: "Panel".to_string(),
        ..Default::default()
    };
    thing.sdf_object = model.sdf_object.clone();
    let mut wrapped = SdfModel {
        namespace_block: namespace_block(),
        ..Default::default()
    };
    wrapped.sdf_thing.insert("Panel".to_string(), thing);

    assert!(wrapped.is_thing());
    let value: Value = serde_json::from_str(&save_model_to_string(&wrapped).unwrap()).unwrap();
    assert!(value.get("sdfObject").is_none());
    assert_eq!(
        value["sdfThing"]["Panel"]["sdfObject"]["Switch"]["maxItems"],
        1
    );
}

#[test]
fn test_tree_rejects_second_parent() {
    let mut tree = ReferenceTree::new();
    let a = tree.insert_child(tree.root(), "a").unwrap();
    let b = tree.insert_child(tree.root(), "b").unwrap();
    let leaf = tree.insert_child(a, "leaf").unwrap();

    let result = tree.add_child(b, leaf);
    assert!(
        matches!(result, Err(SdfError::AlreadyParented { node }) if node == leaf),
        "Expected AlreadyParented error, got {:?}",
        result
    );
    assert_eq!(tree.generate_pointer(leaf).unwrap(), "a/leaf");
}
