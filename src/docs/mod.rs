//! Documentation generation for configuration schemas.
//!
//! Walks the type graph of a root configuration type, turns every reachable
//! named object type into a [`Section`], renders the sections as markdown
//! tables, and splices the result into an existing document between anchor
//! comments.

mod anchor;
mod classifier;
mod formatter;
mod generator;
mod markdown;
mod reflect;
mod schema;
mod section;
mod type_info;
mod walker;

#[cfg(test)]
mod tests;

pub use anchor::{end_marker, fenced_block, splice, start_marker};
pub use classifier::{Classified, Classifier};
pub use formatter::run_formatter;
pub use generator::{DocsGenerator, RenderedDocument};
pub use markdown::{PARAGRAPH_BREAK, normalize_text, render_section, render_sections, render_type};
pub use reflect::{DEFAULT_TAG, DocComment, EXAMPLE_TAG, TypeKind, TypeSystem};
pub use schema::{SchemaNode, SchemaTypeSystem, parse_doc_text};
pub use section::{Field, Section};
pub use type_info::{TypeInfo, canonical_name};
pub use walker::{TraversalContext, TypeGraphWalker};
