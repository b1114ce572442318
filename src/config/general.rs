use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::LogLevel;

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct GeneralConfig {
    /// Logging level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}
