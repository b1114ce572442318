use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The document rewritten in place by `generate`.
///
/// The document must contain both marker pairs, e.g.
/// `<!-- REFERENCE -->` and `<!-- REFERENCE-END -->`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    /// Markdown file containing the anchor markers.
    pub path: PathBuf,

    /// Example configuration file embedded verbatim in a code block.
    pub example: PathBuf,

    /// Language tag of the fenced code block around the example.
    pub example_language: String,

    /// Anchor name of the region that receives the schema reference.
    pub reference_anchor: String,

    /// Anchor name of the region that receives the example file.
    pub example_anchor: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
            example: PathBuf::from("config.example.toml"),
            example_language: "toml".to_string(),
            reference_anchor: "REFERENCE".to_string(),
            example_anchor: "EXAMPLE".to_string(),
        }
    }
}
