use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::DocgenConfig;
use crate::{DocgenError, Result};

impl DocgenConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults are returned so the
    /// generator can run in a project that relies entirely on CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The TOML content is invalid
    /// - The loaded configuration fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<DocgenConfig> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(DocgenConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DocgenError::io(e, path))?;
        let config = Self::from_toml(&content, Some(path))?;
        debug!(?config, "Loaded configuration");

        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `TomlParseError` for malformed TOML or unknown value types and
    /// `ConfigValidation` when required settings are empty.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<DocgenConfig> {
        let config: DocgenConfig =
            toml::from_str(content).map_err(|e| DocgenError::toml_parse(e, path))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that have no usable empty value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidation` naming the offending table.
    pub fn validate(&self) -> Result<()> {
        if self.source.root_type.trim().is_empty() {
            return Err(DocgenError::ConfigValidation {
                component: "source".to_string(),
                details: "root_type must not be empty".to_string(),
            });
        }

        let document = &self.document;
        if document.reference_anchor.is_empty() || document.example_anchor.is_empty() {
            return Err(DocgenError::ConfigValidation {
                component: "document".to_string(),
                details: "anchor names must not be empty".to_string(),
            });
        }

        if document.reference_anchor == document.example_anchor {
            return Err(DocgenError::ConfigValidation {
                component: "document".to_string(),
                details: format!(
                    "reference and example anchors are both '{}'",
                    document.reference_anchor
                ),
            });
        }

        Ok(())
    }
}
