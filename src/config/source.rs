use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Location of the type declarations and the type to document.
///
/// Declarations are JSON Schema files, as produced by `schemars::schema_for!`,
/// found anywhere below `root`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory scanned recursively for `*.json` declaration files.
    pub root: PathBuf,

    /// Exact name of the type whose reference is generated.
    ///
    /// @example "Config"
    pub root_type: String,

    /// Section that generic wrapper types (such as `Partial<T>`) link to,
    /// since their parameters are not resolved.
    pub generic_fallback: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("schemas"),
            root_type: "Config".to_string(),
            generic_fallback: "Config".to_string(),
        }
    }
}
