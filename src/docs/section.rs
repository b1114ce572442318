use serde::Serialize;

use super::{
    reflect::{DEFAULT_TAG, DocComment, EXAMPLE_TAG},
    type_info::{TypeInfo, canonical_name},
};

/// One documented member of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Member name as declared.
    pub name: String,
    /// Classified shape of the member's type.
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    /// Documentation text, if any.
    pub description: Option<String>,
    /// Text of the `example` tag.
    pub example: Option<String>,
    /// Text of the `default` tag.
    pub default: Option<String>,
}

impl Field {
    /// Builds a field from its classified type and attached documentation.
    pub fn new(name: &str, type_info: TypeInfo, doc: &DocComment) -> Self {
        Self {
            name: name.to_string(),
            type_info,
            description: doc.text.clone(),
            example: doc.tag(EXAMPLE_TAG).map(str::to_string),
            default: doc.tag(DEFAULT_TAG).map(str::to_string),
        }
    }

    /// Whether the field contributes to a Description column.
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|text| !text.trim().is_empty())
            || self.example.is_some()
    }
}

/// One named object type, rendered as a heading and a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Canonical name, also the link anchor.
    pub name: String,
    /// The type's own documentation text.
    pub description: Option<String>,
    /// Members in enumeration order.
    pub fields: Vec<Field>,
}

impl Section {
    /// Builds the section for a visited declaration.
    pub fn new(raw_name: &str, doc: DocComment, fields: Vec<Field>) -> Self {
        Self {
            name: canonical_name(raw_name),
            description: doc.text,
            fields,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
