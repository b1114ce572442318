//! Configuration for the documentation generator.
//!
//! Settings are read from `confdoc.toml`; every field has a default so a
//! missing or partial file is valid. The configuration types derive
//! `JsonSchema`, which lets confdoc generate its own reference.

mod document;
mod formatter;
mod general;
mod loading;
mod log_level;
mod source;

#[cfg(test)]
mod tests;

pub use document::DocumentConfig;
pub use formatter::FormatterConfig;
pub use general::GeneralConfig;
pub use log_level::LogLevel;
pub use source::SourceConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "confdoc.toml";

/// Top-level confdoc configuration.
///
/// Controls where type declarations are discovered, which document receives
/// the generated reference, and how that document is formatted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct DocgenConfig {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Where to find the schema declarations and which type to document.
    #[serde(default)]
    pub source: SourceConfig,

    /// The markdown document that receives the generated reference.
    #[serde(default)]
    pub document: DocumentConfig,

    /// External formatter run over the document after it is written.
    #[serde(default)]
    pub formatter: FormatterConfig,
}
