use std::{
    fmt,
    path::{Path, PathBuf},
    process::ExitStatus,
    result,
};

use thiserror::Error;

/// Error types for documentation generation.
///
/// Every variant aborts the whole generation run. Unclassifiable field
/// types are deliberately absent: they degrade to a `???` placeholder.
#[derive(Error, Debug)]
pub enum DocgenError {
    /// No declaration with the requested display name exists under the source root
    #[error("type '{name}' not found in any declaration under the source root")]
    TypeNotFound {
        /// Exact display name that was looked up
        name: String,
    },

    /// A required marker comment is missing from the target document
    #[error("anchor '{anchor}' not found: missing marker `{marker}`")]
    AnchorNotFound {
        /// Anchor name, e.g. `REFERENCE`
        anchor: String,
        /// The marker text that could not be located
        marker: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The external document formatter exited unsuccessfully
    #[error("formatter `{command}` failed with {status}: {stderr}")]
    FormatterFailure {
        /// The command line that was run
        command: String,
        /// Exit status reported by the process
        status: String,
        /// Captured standard error output
        stderr: String,
    },

    /// The document on disk differs from what generation would write
    #[error("document '{path}' is out of date, run `confdoc generate`")]
    OutOfDate {
        /// Path of the stale document
        path: PathBuf,
    },

    /// A declaration file is not valid JSON
    #[error("failed to parse schema at '{location}': {details}")]
    SchemaParse {
        /// Path of the declaration file
        location: String,
        /// Parse error details
        details: String,
    },

    /// A value could not be serialized for output
    #[error("failed to serialize {context}: {details}")]
    Serialization {
        /// What was being serialized
        context: String,
        /// Serializer error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },
}

/// A specialized `Result` type for confdoc operations.
pub type Result<T> = result::Result<T, DocgenError>;

impl DocgenError {
    /// Creates an I/O error carrying the path that was being accessed.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        DocgenError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DocgenError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a schema parsing error for a declaration file.
    pub fn schema_parse(error: impl fmt::Display, path: &Path) -> Self {
        DocgenError::SchemaParse {
            location: path.to_string_lossy().to_string(),
            details: error.to_string(),
        }
    }

    /// Creates a serialization error for the named output.
    pub fn serialization(error: impl fmt::Display, context: &str) -> Self {
        DocgenError::Serialization {
            context: context.to_string(),
            details: error.to_string(),
        }
    }

    /// Creates a formatter failure from the command line and its exit status.
    pub fn formatter(command: &[String], status: ExitStatus, stderr: &[u8]) -> Self {
        DocgenError::FormatterFailure {
            command: command.join(" "),
            status: status.to_string(),
            stderr: String::from_utf8_lossy(stderr).trim().to_string(),
        }
    }
}
