//! Unit tests for config module
//!
//! Tests configuration defaults, TOML parsing, and validation.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::PathBuf};

use schemars::schema_for;
use tempfile::TempDir;

use crate::{
    DocgenError,
    config::{DocgenConfig, LogLevel},
    docs::{SchemaTypeSystem, TypeGraphWalker, TypeInfo},
};

#[test]
fn config_default() {
    let config = DocgenConfig::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.source.root, PathBuf::from("schemas"));
    assert_eq!(config.source.root_type, "Config");
    assert_eq!(config.document.reference_anchor, "REFERENCE");
    assert_eq!(config.document.example_anchor, "EXAMPLE");
    assert_eq!(config.document.example_language, "toml");
    assert!(config.formatter.is_enabled());
}

#[test]
fn config_empty_toml() {
    let config = DocgenConfig::from_toml("", None).unwrap();

    assert_eq!(config, DocgenConfig::default());
}

#[test]
fn config_partial_toml_keeps_other_defaults() {
    let config = DocgenConfig::from_toml(
        r#"
        [general]
        log_level = "debug"

        [source]
        root_type = "AppConfig"

        [formatter]
        command = []
    "#,
        None,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.source.root_type, "AppConfig");
    assert_eq!(config.source.root, PathBuf::from("schemas"));
    assert_eq!(config.document.path, PathBuf::from("README.md"));
    assert!(!config.formatter.is_enabled());
}

#[test]
fn config_serialize_roundtrip() {
    let original = DocgenConfig::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = DocgenConfig::from_toml(&toml_str, None).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_invalid_toml() {
    let err = DocgenConfig::from_toml("[source\nroot = 1", None).unwrap_err();

    assert!(matches!(err, DocgenError::TomlParseError { ref location, .. } if location == "string"));
}

#[test]
fn config_invalid_log_level() {
    let err = DocgenConfig::from_toml("[general]\nlog_level = \"loud\"", None).unwrap_err();

    assert!(matches!(err, DocgenError::TomlParseError { .. }));
}

#[test]
fn config_rejects_empty_root_type() {
    let err = DocgenConfig::from_toml("[source]\nroot_type = \"\"", None).unwrap_err();

    assert!(matches!(err, DocgenError::ConfigValidation { ref component, .. } if component == "source"));
}

#[test]
fn config_rejects_identical_anchors() {
    let err = DocgenConfig::from_toml(
        "[document]\nreference_anchor = \"DOCS\"\nexample_anchor = \"DOCS\"",
        None,
    )
    .unwrap_err();

    assert!(matches!(err, DocgenError::ConfigValidation { ref component, .. } if component == "document"));
}

#[test]
fn config_load_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let config = DocgenConfig::load(&temp.path().join("confdoc.toml")).unwrap();

    assert_eq!(config, DocgenConfig::default());
}

#[test]
fn config_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("confdoc.toml");
    fs::write(&path, "[document]\npath = \"docs/config.md\"\n").unwrap();

    let config = DocgenConfig::load(&path).unwrap();

    assert_eq!(config.document.path, PathBuf::from("docs/config.md"));
}

#[test]
fn log_level_display_matches_serde_names() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let serialized = serde_json::to_value(&level).unwrap();
        assert_eq!(serialized.as_str().unwrap(), level.to_string());
    }
}

#[test]
fn own_schema_documents_every_table() {
    let types = SchemaTypeSystem::from_schema(&schema_for!(DocgenConfig)).unwrap();

    let sections = TypeGraphWalker::new(&types, "Config")
        .extract("DocgenConfig")
        .unwrap();

    let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Docgen", "General", "Source", "Document", "Formatter"]);

    let log_level = sections[1].field("log_level").unwrap();
    let TypeInfo::Union(levels) = &log_level.type_info else {
        panic!("log level should be a union, got {:?}", log_level.type_info);
    };
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0], TypeInfo::Literal("\"error\"".to_string()));

    let command = sections[4].field("command").unwrap();
    assert_eq!(
        command.type_info,
        TypeInfo::Array(Box::new(TypeInfo::primitive("string")))
    );
    assert_eq!(command.example.as_deref(), Some("[\"prettier\", \"--write\"]"));
}
