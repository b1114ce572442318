use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::{
    SchemaTypeSystem, Section, TypeGraphWalker, TypeSystem,
    anchor::{fenced_block, splice},
    formatter::run_formatter,
    markdown::render_sections,
};
use crate::{DocgenError, Result, config::DocgenConfig};

/// Generates the configuration reference and embeds it in a document.
///
/// Runs the full pipeline: extract sections from the declarations, render
/// them to markdown, splice the reference and the example file into the
/// document, write it back, and run the formatter.
#[derive(Debug, Clone)]
pub struct DocsGenerator {
    config: DocgenConfig,
}

/// A document before and after splicing in freshly generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Document text as currently stored on disk.
    pub current: String,
    /// Document text with both anchor regions regenerated.
    pub updated: String,
}

impl RenderedDocument {
    /// Whether the stored document already matches the generated one.
    pub fn is_up_to_date(&self) -> bool {
        self.current == self.updated
    }
}

impl DocsGenerator {
    /// Creates a generator for the given configuration.
    pub fn new(config: DocgenConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &DocgenConfig {
        &self.config
    }

    /// Loads the declarations under the configured source root.
    ///
    /// # Errors
    ///
    /// Returns `IoError` or `SchemaParse` if a declaration file cannot be loaded.
    pub fn load_types(&self) -> Result<SchemaTypeSystem> {
        SchemaTypeSystem::load(&self.config.source.root)
    }

    /// Extracts the sections reachable from the configured root type.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if the root or a referenced type is missing.
    pub fn extract<T: TypeSystem>(&self, types: &T) -> Result<Vec<Section>> {
        TypeGraphWalker::new(types, &self.config.source.generic_fallback)
            .extract(&self.config.source.root_type)
    }

    /// Renders the markdown reference for the configured root type.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if the root or a referenced type is missing.
    pub fn render_reference<T: TypeSystem>(&self, types: &T) -> Result<String> {
        let sections = self.extract(types)?;
        info!("Rendering {} sections", sections.len());
        Ok(render_sections(&sections))
    }

    /// Splices a rendered reference and example file contents into a document.
    ///
    /// # Errors
    ///
    /// Returns `AnchorNotFound` if either marker pair is missing.
    pub fn update_document(&self, document: &str, reference: &str, example: &str) -> Result<String> {
        let settings = &self.config.document;
        let document = splice(document, &settings.reference_anchor, reference)?;
        splice(
            &document,
            &settings.example_anchor,
            &fenced_block(&settings.example_language, example),
        )
    }

    /// Computes the regenerated document without touching the disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the document or example cannot be read, a type is
    /// missing, or an anchor is missing.
    pub fn render_document<T: TypeSystem>(&self, types: &T) -> Result<RenderedDocument> {
        let settings = &self.config.document;
        let reference = self.render_reference(types)?;
        let current = read(&settings.path)?;
        let example = read(&settings.example)?;
        let updated = self.update_document(&current, &reference, &example)?;

        Ok(RenderedDocument { current, updated })
    }

    /// Regenerates the document in place and runs the formatter over it.
    ///
    /// Nothing is written unless both anchors were found.
    ///
    /// # Errors
    ///
    /// Returns any extraction, anchor, I/O, or formatter error; the run stops
    /// at the first one.
    #[instrument(skip_all)]
    pub fn generate<T: TypeSystem>(&self, types: &T) -> Result<()> {
        let path = &self.config.document.path;
        let rendered = self.render_document(types)?;

        fs::write(path, &rendered.updated).map_err(|e| DocgenError::io(e, path))?;
        info!("Updated {}", path.display());

        run_formatter(&self.config.formatter.command, path)
    }

    /// Reports whether the document on disk is up to date.
    ///
    /// The regenerated text goes through the formatter in a scratch file
    /// beside the document, so the comparison matches what `generate`
    /// would leave on disk. The document itself is not touched.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`DocsGenerator::render_document`], plus
    /// any formatter error.
    #[instrument(skip_all)]
    pub fn check<T: TypeSystem>(&self, types: &T) -> Result<bool> {
        let RenderedDocument { current, updated } = self.render_document(types)?;
        let updated = self.format_preview(&updated)?;

        Ok(RenderedDocument { current, updated }.is_up_to_date())
    }

    fn format_preview(&self, text: &str) -> Result<String> {
        let command = &self.config.formatter.command;
        if command.is_empty() {
            return Ok(text.to_string());
        }

        let path = &self.config.document.path;
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let scratch = tempfile::Builder::new()
            .prefix(".confdoc-")
            .suffix(&suffix)
            .tempfile_in(dir)
            .map_err(|e| DocgenError::io(e, dir))?;
        fs::write(scratch.path(), text).map_err(|e| DocgenError::io(e, scratch.path()))?;
        debug!("Formatting preview in {}", scratch.path().display());

        run_formatter(command, scratch.path())?;
        read(scratch.path())
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| DocgenError::io(e, path))
}
