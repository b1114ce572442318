use tracing::warn;

use super::{
    reflect::{TypeKind, TypeSystem},
    type_info::{TypeInfo, canonical_name},
};
use crate::Result;

/// Result of classifying one declared type.
///
/// `referenced` lists the raw names of named object declarations the type
/// mentions, in encounter order. Deciding whether to visit them is left to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// The documentable shape.
    pub info: TypeInfo,
    /// Raw declared names of referenced object types.
    pub referenced: Vec<String>,
}

impl Classified {
    fn leaf(info: TypeInfo) -> Self {
        Self {
            info,
            referenced: Vec::new(),
        }
    }
}

/// Maps resolved types onto [`TypeInfo`].
pub struct Classifier<'s, T: TypeSystem> {
    types: &'s T,
    generic_fallback: &'s str,
}

impl<'s, T: TypeSystem + 's> Classifier<'s, T> {
    /// Creates a classifier; generic composites link to `generic_fallback`.
    pub fn new(types: &'s T, generic_fallback: &'s str) -> Self {
        Self {
            types,
            generic_fallback,
        }
    }

    /// Classifies one resolved type.
    ///
    /// Unions are flattened so their members are never unions. Types the
    /// reflection cannot categorize become [`TypeInfo::Unknown`], and so does
    /// an alias met again while it is still being expanded.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if the type references a missing declaration.
    pub fn classify(&self, node: T::Node<'s>) -> Result<Classified> {
        self.classify_within(node, &mut Vec::new())
    }

    fn classify_within(
        &self,
        node: T::Node<'s>,
        expanding: &mut Vec<String>,
    ) -> Result<Classified> {
        let classified = match self.types.kind(node)? {
            TypeKind::Literal(text) => Classified::leaf(TypeInfo::Literal(text)),
            TypeKind::String => Classified::leaf(TypeInfo::primitive("string")),
            TypeKind::Number => Classified::leaf(TypeInfo::primitive("number")),
            TypeKind::Boolean => Classified::leaf(TypeInfo::primitive("boolean")),
            TypeKind::Union(members) => self.classify_union(members, expanding)?,
            TypeKind::Named(raw) => Classified {
                info: TypeInfo::Object(canonical_name(&raw)),
                referenced: vec![raw],
            },
            TypeKind::Alias { name, target } => self.classify_alias(name, target, expanding)?,
            TypeKind::Generic(raw) => {
                warn!(
                    "Generic type '{raw}' is not expanded, linking to '{}'",
                    self.generic_fallback
                );
                Classified::leaf(TypeInfo::Object(canonical_name(self.generic_fallback)))
            }
            TypeKind::Anonymous => Classified::leaf(TypeInfo::primitive("object")),
            TypeKind::Array(items) => {
                let Classified { info, referenced } = self.classify_within(items, expanding)?;
                Classified {
                    info: TypeInfo::Array(Box::new(info)),
                    referenced,
                }
            }
            TypeKind::Other => {
                warn!("Unclassifiable type, documenting as unknown");
                Classified::leaf(TypeInfo::Unknown)
            }
        };

        Ok(classified)
    }

    fn classify_alias(
        &self,
        name: String,
        target: T::Node<'s>,
        expanding: &mut Vec<String>,
    ) -> Result<Classified> {
        if expanding.contains(&name) {
            warn!("Recursive type '{name}' is not expanded again, documenting as unknown");
            return Ok(Classified::leaf(TypeInfo::Unknown));
        }

        expanding.push(name);
        let classified = self.classify_within(target, expanding);
        expanding.pop();
        classified
    }

    fn classify_union(
        &self,
        members: Vec<T::Node<'s>>,
        expanding: &mut Vec<String>,
    ) -> Result<Classified> {
        let mut alternatives = Vec::with_capacity(members.len());
        let mut referenced = Vec::new();

        for member in members {
            let classified = self.classify_within(member, expanding)?;
            referenced.extend(classified.referenced);

            match classified.info {
                TypeInfo::Union(nested) => alternatives.extend(nested),
                other => alternatives.push(other),
            }
        }

        Ok(Classified {
            info: TypeInfo::Union(alternatives),
            referenced,
        })
    }
}
