use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// External formatter invoked on the rewritten document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct FormatterConfig {
    /// Program and arguments; the document path is appended as the last
    /// argument. An empty list skips formatting.
    ///
    /// @example ["prettier", "--write"]
    pub command: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: vec!["prettier".to_string(), "--write".to_string()],
        }
    }
}

impl FormatterConfig {
    /// Whether a formatter command is configured.
    pub fn is_enabled(&self) -> bool {
        !self.command.is_empty()
    }
}
