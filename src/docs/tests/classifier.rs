use serde_json::json;

use super::{app_config, types_from};
use crate::docs::{Classified, Classifier, SchemaTypeSystem, TypeInfo, TypeSystem};

fn classify(types: &SchemaTypeSystem, owner: &str, field: &str) -> Classified {
    let owner = types.resolve(owner).unwrap();
    let (_, node) = types
        .members(owner)
        .into_iter()
        .find(|(name, _)| *name == field)
        .unwrap();
    Classifier::new(types, "Config").classify(node).unwrap()
}

fn literal(value: &str) -> TypeInfo {
    TypeInfo::Literal(format!("\"{value}\""))
}

#[test]
fn primitives_use_canonical_names() {
    let types = types_from(app_config());

    assert_eq!(
        classify(&types, "ServerConfig", "port").info,
        TypeInfo::primitive("number")
    );
    assert_eq!(
        classify(&types, "ServerConfig", "host").info,
        TypeInfo::primitive("string")
    );
}

#[test]
fn named_object_reports_reference() {
    let types = types_from(app_config());

    let classified = classify(&types, "AppConfig", "server");
    assert_eq!(classified.info, TypeInfo::Object("Server".to_string()));
    assert_eq!(classified.referenced, vec!["ServerConfig".to_string()]);
}

#[test]
fn literal_union_keeps_declared_order() {
    let types = types_from(app_config());

    let classified = classify(&types, "AppConfig", "log_level");
    assert_eq!(
        classified.info,
        TypeInfo::Union(vec![literal("debug"), literal("info")])
    );
    assert!(classified.referenced.is_empty());
}

#[test]
fn array_of_objects_reports_element_reference() {
    let types = types_from(app_config());

    let classified = classify(&types, "AppConfig", "plugins");
    assert_eq!(
        classified.info,
        TypeInfo::Array(Box::new(TypeInfo::Object("Plugin".to_string())))
    );
    assert_eq!(classified.referenced, vec!["PluginSchema".to_string()]);
}

#[test]
fn anonymous_object_is_opaque() {
    let types = types_from(app_config());

    let classified = classify(&types, "AppConfig", "labels");
    assert_eq!(classified.info, TypeInfo::primitive("object"));
    assert!(classified.referenced.is_empty());
}

#[test]
fn nested_unions_are_flattened_without_deduplication() {
    let types = types_from(json!({
        "title": "Root",
        "type": "object",
        "properties": {
            "mode": {
                "anyOf": [
                    { "$ref": "#/$defs/Level" },
                    { "enum": ["info", "trace"] },
                    { "type": "boolean" },
                    { "$ref": "#/$defs/Target" }
                ]
            }
        },
        "$defs": {
            "Level": { "type": "string", "enum": ["debug", "info"] },
            "Target": { "type": "object", "properties": {} }
        }
    }));

    let classified = classify(&types, "Root", "mode");
    assert_eq!(
        classified.info,
        TypeInfo::Union(vec![
            literal("debug"),
            literal("info"),
            literal("info"),
            literal("trace"),
            TypeInfo::primitive("boolean"),
            TypeInfo::Object("Target".to_string()),
        ])
    );
    assert_eq!(classified.referenced, vec!["Target".to_string()]);
}

#[test]
fn generic_composite_falls_back_to_fixed_reference() {
    let types = types_from(json!({
        "title": "Root",
        "type": "object",
        "properties": {
            "overrides": { "$ref": "#/$defs/Partial_for_Root" }
        }
    }));

    let classified = classify(&types, "Root", "overrides");
    assert_eq!(classified.info, TypeInfo::Object("Config".to_string()));
    assert!(classified.referenced.is_empty());
}

#[test]
fn unclassifiable_type_degrades_to_unknown() {
    let types = types_from(json!({
        "title": "Root",
        "type": "object",
        "properties": { "anything": true }
    }));

    assert_eq!(classify(&types, "Root", "anything").info, TypeInfo::Unknown);
}

#[test]
fn repeated_alias_outside_recursion_is_expanded_each_time() {
    let types = types_from(json!({
        "title": "Root",
        "type": "object",
        "properties": {
            "pair": {
                "anyOf": [
                    { "$ref": "#/$defs/Mode" },
                    { "type": "array", "items": { "$ref": "#/$defs/Mode" } }
                ]
            }
        },
        "$defs": {
            "Mode": { "type": "string", "enum": ["on", "off"] }
        }
    }));

    let classified = classify(&types, "Root", "pair");

    let modes = TypeInfo::Union(vec![literal("on"), literal("off")]);
    assert_eq!(
        classified.info,
        TypeInfo::Union(vec![
            literal("on"),
            literal("off"),
            TypeInfo::Array(Box::new(modes)),
        ])
    );
    assert!(classified.referenced.is_empty());
}
