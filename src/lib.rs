//! confdoc - configuration reference generator.
//!
//! Reads the JSON Schema declarations of a configuration type, walks every
//! named object type reachable from it, and renders one markdown table per
//! type. The tables and an example configuration file are spliced into an
//! existing document between anchor comments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use confdoc::{config::DocgenConfig, docs::DocsGenerator};
//!
//! let generator = DocsGenerator::new(DocgenConfig::default());
//! let types = generator.load_types()?;
//! println!("{}", generator.render_reference(&types)?);
//! # Ok::<(), confdoc::DocgenError>(())
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Type graph extraction, markdown rendering, and document splicing.
pub mod docs;

/// Command-line interface.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DocgenError, Result};
