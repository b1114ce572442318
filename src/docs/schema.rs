//! JSON Schema backed type reflection.
//!
//! Rust configuration types describe themselves through `schemars`: every
//! `#[derive(JsonSchema)]` type becomes a JSON Schema document whose `$defs`
//! hold the named types it references. This module treats those documents as
//! declaration files and answers [`TypeSystem`] queries from them.

use std::{collections::HashMap, fs, path::Path};

use schemars::Schema;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use super::reflect::{DEFAULT_TAG, DocComment, EXAMPLE_TAG, TypeKind, TypeSystem};
use crate::{DocgenError, Result};

const DEFINITION_KEYS: [&str; 2] = ["$defs", "definitions"];
const MAX_NESTING_DEPTH: usize = 32;

/// Handle to one node of a loaded schema document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaNode<'a> {
    /// A schema object (or boolean schema).
    Schema(&'a Value),
    /// One value of an `enum` list.
    Value(&'a Value),
    /// One entry of a `type` array.
    TypeName(&'a str),
}

#[derive(Debug)]
struct Declaration {
    name: String,
    origin: String,
    schema: Value,
}

/// A [`TypeSystem`] over JSON Schema documents.
///
/// Each document contributes its root (named by `title`) and every entry of
/// its `$defs` as declarations. The first declaration of a name wins.
#[derive(Debug, Default)]
pub struct SchemaTypeSystem {
    declarations: Vec<Declaration>,
    index: HashMap<String, usize>,
}

impl SchemaTypeSystem {
    /// Creates an empty type system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a type system from a single in-memory schema.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the schema cannot be converted to JSON.
    pub fn from_schema(schema: &Schema) -> Result<Self> {
        let mut system = Self::new();
        system.add_schema(schema)?;
        Ok(system)
    }

    /// Loads every `*.json` declaration file below `root`.
    ///
    /// Files are visited in file-name order so lookups are deterministic.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the directory cannot be walked or a file cannot be
    /// read, and `SchemaParse` if a file is not valid JSON.
    #[instrument]
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(DocgenError::io("source root is not a directory", root));
        }

        let mut system = Self::new();
        let mut files = 0;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| DocgenError::io(e, root))?;
            let path = entry.path();

            if !entry.file_type().is_file()
                || !path.starts_with(root)
                || path.extension().is_none_or(|ext| ext != "json")
            {
                continue;
            }

            let content = fs::read_to_string(path).map_err(|e| DocgenError::io(e, path))?;
            let document: Value =
                serde_json::from_str(&content).map_err(|e| DocgenError::schema_parse(e, path))?;

            debug!("Loaded declaration file {}", path.display());
            system.add_document(path.display().to_string(), document);
            files += 1;
        }

        info!(
            "Found {} declarations in {files} files under {}",
            system.declarations.len(),
            root.display()
        );

        Ok(system)
    }

    /// Registers a schema produced by `schemars`.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the schema cannot be converted to JSON.
    pub fn add_schema(&mut self, schema: &Schema) -> Result<()> {
        let document = serde_json::to_value(schema)
            .map_err(|e| DocgenError::serialization(e, "in-memory schema"))?;

        self.add_document("in-memory schema".to_string(), document);
        Ok(())
    }

    /// Registers the declarations of one schema document.
    pub fn add_document(&mut self, origin: String, mut document: Value) {
        let title = document
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(title) = &title {
            rewrite_root_refs(&mut document, title);
            self.insert(title, &origin, document.clone());
        }

        for key in DEFINITION_KEYS {
            if let Some(definitions) = document.get(key).and_then(Value::as_object) {
                for (name, schema) in definitions {
                    self.insert(name, &origin, schema.clone());
                }
            }
        }
    }

    fn insert(&mut self, name: &str, origin: &str, schema: Value) {
        if let Some(&existing) = self.index.get(name) {
            debug!(
                "Declaration '{name}' in {origin} shadowed by {}",
                self.declarations[existing].origin
            );
            return;
        }

        self.index.insert(name.to_string(), self.declarations.len());
        self.declarations.push(Declaration {
            name: name.to_string(),
            origin: origin.to_string(),
            schema,
        });
    }

    fn schema_kind<'a>(
        &'a self,
        schema: &'a Value,
        depth: usize,
    ) -> Result<TypeKind<SchemaNode<'a>>> {
        let Some(object) = schema.as_object() else {
            return Ok(TypeKind::Other);
        };

        if depth > MAX_NESTING_DEPTH {
            warn!("Giving up on a schema nested deeper than {MAX_NESTING_DEPTH}");
            return Ok(TypeKind::Other);
        }

        if let Some([inner]) = object.get("allOf").and_then(Value::as_array).map(Vec::as_slice) {
            return self.kind_at(SchemaNode::Schema(inner), depth + 1);
        }

        let enum_values = object.get("enum").and_then(Value::as_array);

        if let Some(value) = object.get("const") {
            return Ok(TypeKind::Literal(value.to_string()));
        }
        if let Some([value]) = enum_values.map(Vec::as_slice) {
            return Ok(TypeKind::Literal(value.to_string()));
        }

        let alternatives = object
            .get("anyOf")
            .or_else(|| object.get("oneOf"))
            .and_then(Value::as_array);
        let types = declared_types(object);

        if enum_values.is_none() && alternatives.is_none() {
            if let [single] = types.as_slice() {
                if let Some(kind) = primitive_kind(single) {
                    return Ok(kind);
                }
            }
        }

        let members: Option<Vec<SchemaNode<'a>>> = if let Some(values) = enum_values {
            Some(values.iter().map(SchemaNode::Value).collect())
        } else if let Some(alternatives) = alternatives {
            Some(alternatives.iter().map(SchemaNode::Schema).collect())
        } else if types.len() > 1 {
            Some(types.iter().copied().map(SchemaNode::TypeName).collect())
        } else {
            None
        };

        if let Some(members) = members {
            let mut members: Vec<_> = members.into_iter().filter(|m| !is_null(m)).collect();
            return match members.len() {
                0 => Ok(TypeKind::Other),
                1 => self.kind_at(members.remove(0), depth + 1),
                _ => Ok(TypeKind::Union(members)),
            };
        }

        if let Some(reference) = object.get("$ref").and_then(Value::as_str) {
            let name = reference_name(reference);
            if is_generic(&name) {
                return Ok(TypeKind::Generic(name));
            }

            let target = self.resolve(&name)?;
            return match target {
                SchemaNode::Schema(shape) if is_object_shape(shape) => Ok(TypeKind::Named(name)),
                _ => Ok(TypeKind::Alias { name, target }),
            };
        }

        match types.first().copied() {
            Some("array") => Ok(object
                .get("items")
                .filter(|items| items.is_object())
                .map_or(TypeKind::Other, |items| {
                    TypeKind::Array(SchemaNode::Schema(items))
                })),
            Some("object") => Ok(TypeKind::Anonymous),
            Some(_) => Ok(TypeKind::Other),
            None if is_object_shape(schema) || object.contains_key("additionalProperties") => {
                Ok(TypeKind::Anonymous)
            }
            None => Ok(TypeKind::Other),
        }
    }

    fn kind_at<'a>(
        &'a self,
        node: SchemaNode<'a>,
        depth: usize,
    ) -> Result<TypeKind<SchemaNode<'a>>> {
        match node {
            SchemaNode::Value(value) => Ok(TypeKind::Literal(value.to_string())),
            SchemaNode::TypeName("object") => Ok(TypeKind::Anonymous),
            SchemaNode::TypeName(name) => Ok(primitive_kind(name).unwrap_or(TypeKind::Other)),
            SchemaNode::Schema(schema) => self.schema_kind(schema, depth),
        }
    }

    fn description_of(&self, object: &Map<String, Value>) -> Option<String> {
        let title = object
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !self.index.contains_key(*title));
        let description = object.get("description").and_then(Value::as_str);

        match (title, description) {
            (Some(title), Some(description)) => Some(format!("{title}\n\n{description}")),
            (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
            (None, None) => None,
        }
    }
}

impl TypeSystem for SchemaTypeSystem {
    type Node<'a> = SchemaNode<'a>;

    fn declaration_names(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .map(|declaration| declaration.name.as_str())
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<SchemaNode<'_>> {
        self.index
            .get(name)
            .map(|&i| SchemaNode::Schema(&self.declarations[i].schema))
            .ok_or_else(|| DocgenError::TypeNotFound {
                name: name.to_string(),
            })
    }

    fn members<'a>(&'a self, node: SchemaNode<'a>) -> Vec<(&'a str, SchemaNode<'a>)> {
        let SchemaNode::Schema(schema) = node else {
            return Vec::new();
        };

        schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| {
                properties
                    .iter()
                    .map(|(name, property)| (name.as_str(), SchemaNode::Schema(property)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn documentation<'a>(&'a self, node: SchemaNode<'a>) -> DocComment {
        let Some(object) = (match node {
            SchemaNode::Schema(schema) => schema.as_object(),
            _ => None,
        }) else {
            return DocComment::default();
        };

        let mut doc = self
            .description_of(object)
            .map(|description| parse_doc_text(&description))
            .unwrap_or_default();

        let keyword_example = object
            .get("examples")
            .and_then(Value::as_array)
            .and_then(|examples| examples.first())
            .or_else(|| object.get("example"));

        for (tag, keyword) in [
            (EXAMPLE_TAG, keyword_example),
            (DEFAULT_TAG, object.get("default")),
        ] {
            if let Some(value) = keyword {
                if doc.tag(tag).is_none() {
                    doc.tags.push((tag.to_string(), value.to_string()));
                }
            }
        }

        doc
    }

    fn kind<'a>(&'a self, node: SchemaNode<'a>) -> Result<TypeKind<SchemaNode<'a>>> {
        self.kind_at(node, 0)
    }
}

/// Splits a description into text parts and `@example`/`@default` tags.
///
/// A line starting with `@` opens a tag whose text runs until the next tag
/// line, so a value may sit on the lines below its tag. Tags other than the
/// two known ones are dropped, as are tags without text. Lines before the
/// first tag form the text.
pub fn parse_doc_text(description: &str) -> DocComment {
    let mut text = Vec::new();
    let mut tags: Vec<(&str, Vec<&str>)> = Vec::new();

    for line in description.lines() {
        if let Some(tag_line) = line.trim_start().strip_prefix('@') {
            let (name, value) = tag_line
                .split_once(char::is_whitespace)
                .unwrap_or((tag_line, ""));
            tags.push((name, vec![value]));
        } else if let Some((_, value)) = tags.last_mut() {
            value.push(line);
        } else {
            text.push(line);
        }
    }

    let text = text.join("\n").trim().to_string();
    let tags = tags
        .into_iter()
        .filter(|(name, _)| *name == EXAMPLE_TAG || *name == DEFAULT_TAG)
        .map(|(name, value)| (name.to_string(), value.join("\n").trim().to_string()))
        .filter(|(_, value)| !value.is_empty())
        .collect();

    DocComment {
        text: (!text.is_empty()).then_some(text),
        tags,
    }
}

fn declared_types(object: &Map<String, Value>) -> Vec<&str> {
    match object.get("type") {
        Some(Value::String(single)) if single != "null" => vec![single.as_str()],
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .filter(|name| *name != "null")
            .collect(),
        _ => Vec::new(),
    }
}

fn primitive_kind<N>(name: &str) -> Option<TypeKind<N>> {
    match name {
        "string" => Some(TypeKind::String),
        "number" | "integer" => Some(TypeKind::Number),
        "boolean" => Some(TypeKind::Boolean),
        _ => None,
    }
}

fn is_null(node: &SchemaNode<'_>) -> bool {
    match node {
        SchemaNode::Value(value) => value.is_null(),
        SchemaNode::TypeName(name) => *name == "null",
        SchemaNode::Schema(schema) => {
            schema.get("type").and_then(Value::as_str) == Some("null")
                || schema.get("const").is_some_and(Value::is_null)
        }
    }
}

fn is_object_shape(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("object")
        || schema.get("properties").is_some_and(Value::is_object)
}

fn is_generic(name: &str) -> bool {
    name.contains('<') || name.contains("%3C") || name.contains("_for_")
}

fn reference_name(reference: &str) -> String {
    reference
        .rsplit('/')
        .next()
        .unwrap_or(reference)
        .replace("~1", "/")
        .replace("~0", "~")
}

/// Points `"$ref": "#"` self-references at the document's own title.
fn rewrite_root_refs(value: &mut Value, title: &str) {
    match value {
        Value::Object(object) => {
            if object.get("$ref").and_then(Value::as_str) == Some("#") {
                object.insert("$ref".to_string(), Value::String(format!("#/$defs/{title}")));
            }
            object
                .values_mut()
                .for_each(|child| rewrite_root_refs(child, title));
        }
        Value::Array(items) => items
            .iter_mut()
            .for_each(|child| rewrite_root_refs(child, title)),
        _ => {}
    }
}
