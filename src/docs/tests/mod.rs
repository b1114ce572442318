//! Unit tests for the docs module
//!
//! Schemas are written inline in the shape `schemars` emits.
//! Only the generator tests touch the filesystem.

#![allow(clippy::panic, clippy::unwrap_used)]

mod classifier;
mod type_info;

use serde_json::{Value, json};

use crate::docs::SchemaTypeSystem;

fn types_from(document: Value) -> SchemaTypeSystem {
    let mut types = SchemaTypeSystem::new();
    types.add_document("test".to_string(), document);
    types
}

fn app_config() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "AppConfig",
        "description": "Root configuration.\n\nLoaded from `app.toml`.",
        "type": "object",
        "properties": {
            "log_level": {
                "description": "Verbosity of logs.",
                "$ref": "#/$defs/LogLevel",
                "default": "info"
            },
            "server": {
                "description": "HTTP server settings.",
                "$ref": "#/$defs/ServerConfig"
            },
            "plugins": {
                "type": "array",
                "items": { "$ref": "#/$defs/PluginSchema" }
            },
            "theme": {
                "anyOf": [{ "$ref": "#/$defs/ThemeConfig" }, { "type": "null" }]
            },
            "labels": {
                "type": "object",
                "additionalProperties": { "type": "string" }
            }
        },
        "$defs": {
            "LogLevel": { "type": "string", "enum": ["debug", "info"] },
            "ServerConfig": {
                "description": "Server.",
                "type": "object",
                "properties": {
                    "port": {
                        "description": "Port to bind.\n@example 8080",
                        "type": "integer",
                        "format": "uint16",
                        "minimum": 0,
                        "default": 0
                    },
                    "host": { "type": "string" },
                    "tls": { "$ref": "#/$defs/TlsConfig" }
                }
            },
            "TlsConfig": {
                "type": "object",
                "properties": {
                    "cert": { "type": ["string", "null"] }
                }
            },
            "PluginSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "server": { "$ref": "#/$defs/ServerConfig" }
                }
            },
            "ThemeConfig": {
                "type": "object",
                "properties": {
                    "mode": {
                        "oneOf": [
                            { "type": "string", "const": "light" },
                            { "type": "string", "const": "dark" }
                        ]
                    }
                }
            }
        }
    })
}

fn mutual_references() -> Value {
    json!({
        "title": "A",
        "type": "object",
        "properties": {
            "b": { "$ref": "#/$defs/B" }
        },
        "$defs": {
            "B": {
                "type": "object",
                "properties": {
                    "a": { "$ref": "#/$defs/A" }
                }
            }
        }
    })
}
