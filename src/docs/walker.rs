use std::collections::HashSet;

use tracing::{debug, instrument};

use super::{
    classifier::{Classified, Classifier},
    reflect::TypeSystem,
    section::{Field, Section},
};
use crate::Result;

/// State of one extraction run.
///
/// Tracks raw names already visited and reserves each section's position at
/// first encounter, so the final order is a depth-first pre-order even
/// though a section is only complete once its nested types are done.
#[derive(Debug, Default)]
pub struct TraversalContext {
    visited: HashSet<String>,
    slots: Vec<Option<Section>>,
}

impl TraversalContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a raw name visited, returning `false` if it already was.
    pub fn visit(&mut self, raw_name: &str) -> bool {
        self.visited.insert(raw_name.to_string())
    }

    /// Whether a raw name has been visited in this run.
    pub fn is_visited(&self, raw_name: &str) -> bool {
        self.visited.contains(raw_name)
    }

    fn reserve(&mut self) -> usize {
        self.slots.push(None);
        self.slots.len() - 1
    }

    fn fill(&mut self, slot: usize, section: Section) {
        self.slots[slot] = Some(section);
    }

    /// Consumes the context, yielding sections in first-visited order.
    pub fn into_sections(self) -> Vec<Section> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Extracts the sections reachable from a root type.
pub struct TypeGraphWalker<'s, T: TypeSystem> {
    types: &'s T,
    classifier: Classifier<'s, T>,
}

impl<'s, T: TypeSystem + 's> TypeGraphWalker<'s, T> {
    /// Creates a walker over `types`; generic composites link to `generic_fallback`.
    pub fn new(types: &'s T, generic_fallback: &'s str) -> Self {
        Self {
            types,
            classifier: Classifier::new(types, generic_fallback),
        }
    }

    /// Extracts every object type reachable from `root`, root first.
    ///
    /// Each named object type yields exactly one section, even when types
    /// reference themselves or each other.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if `root` or any referenced type has no
    /// declaration.
    #[instrument(skip(self))]
    pub fn extract(&self, root: &str) -> Result<Vec<Section>> {
        let mut context = TraversalContext::new();
        self.visit(root, &mut context)?;

        let sections = context.into_sections();
        debug!("Extracted {} sections from '{root}'", sections.len());
        Ok(sections)
    }

    /// Visits one named type and, depth-first, every type its fields reference.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if `raw_name` or a referenced type is missing.
    pub fn visit(&self, raw_name: &str, context: &mut TraversalContext) -> Result<()> {
        if context.is_visited(raw_name) {
            return Ok(());
        }

        let node = self.types.resolve(raw_name)?;
        context.visit(raw_name);
        let slot = context.reserve();
        debug!("Visiting '{raw_name}'");

        let members = self.types.members(node);
        let mut fields = Vec::with_capacity(members.len());

        for (name, member) in members {
            let Classified { info, referenced } = self.classifier.classify(member)?;
            fields.push(Field::new(name, info, &self.types.documentation(member)));

            for reference in referenced {
                self.visit(&reference, context)?;
            }
        }

        context.fill(
            slot,
            Section::new(raw_name, self.types.documentation(node), fields),
        );
        Ok(())
    }
}
