//! Command-line interface for the documentation generator.
//!
//! Flags given on the command line override the matching settings from
//! `confdoc.toml`.

mod commands;
pub mod formatting;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use commands::execute;

use crate::config::{DEFAULT_CONFIG_FILE, DocgenConfig};

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "confdoc")]
#[command(about = "Generate configuration reference documentation from JSON Schema")]
pub struct Cli {
    /// Path to the confdoc configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Settings overriding the configuration file.
    #[command(flatten)]
    pub overrides: Overrides,

    /// The action to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Command-line overrides for configuration settings.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Directory scanned for JSON Schema declaration files.
    #[arg(long, global = true)]
    pub source_root: Option<PathBuf>,

    /// Name of the type to document.
    #[arg(long, global = true)]
    pub root_type: Option<String>,

    /// Markdown document containing the anchor markers.
    #[arg(long, global = true)]
    pub document: Option<PathBuf>,

    /// Example configuration file embedded in the document.
    #[arg(long, global = true)]
    pub example: Option<PathBuf>,

    /// Skip the external formatter.
    #[arg(long, global = true)]
    pub no_format: bool,
}

impl Overrides {
    /// Applies every override that was given to `config`.
    pub fn apply(&self, config: &mut DocgenConfig) {
        if let Some(root) = &self.source_root {
            config.source.root = root.clone();
        }
        if let Some(root_type) = &self.root_type {
            config.source.root_type = root_type.clone();
        }
        if let Some(document) = &self.document {
            config.document.path = document.clone();
        }
        if let Some(example) = &self.example {
            config.document.example = example.clone();
        }
        if self.no_format {
            config.formatter.command.clear();
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate the reference and example regions of the document.
    Generate,
    /// Fail if the document differs from what `generate` would write.
    Check,
    /// Print the rendered reference to stdout.
    Print {
        /// Emit the extracted sections as JSON instead of markdown.
        #[arg(long)]
        json: bool,
    },
    /// List the declarations found under the source root.
    List,
    /// Write the JSON Schema of confdoc's own configuration.
    Schema {
        /// Output file; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
