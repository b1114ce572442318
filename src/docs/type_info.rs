use serde::Serialize;

const STRIPPED_SUFFIXES: [&str; 2] = ["Schema", "Config"];

/// The documentable shape of a field's declared type.
///
/// `Object` is a reference by canonical name; the referenced shape lives in
/// its own [`Section`](super::Section). `Union` members are never unions
/// themselves, nested alternatives are flattened during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TypeInfo {
    /// A type that could not be classified; rendered as `???`.
    Unknown,
    /// A literal value, quoted exactly as declared (e.g. `"debug"`).
    Literal(String),
    /// One of `string`, `number`, `boolean`, or `object` for anonymous shapes.
    Primitive(String),
    /// A link to another named section.
    Object(String),
    /// Alternatives in declaration order, not deduplicated.
    Union(Vec<TypeInfo>),
    /// A homogeneous list of the element shape.
    Array(Box<TypeInfo>),
}

impl TypeInfo {
    /// Shorthand for a primitive with the given canonical name.
    pub fn primitive(name: &str) -> Self {
        TypeInfo::Primitive(name.to_string())
    }
}

/// Derives the user-facing section name from a raw declared type name.
///
/// Strips one trailing `Schema`, then one trailing `Config`. A name that
/// consists only of a suffix is kept as is.
///
/// # Example
///
/// ```
/// use confdoc::docs::canonical_name;
///
/// assert_eq!(canonical_name("LoggingConfig"), "Logging");
/// assert_eq!(canonical_name("ThemeSchema"), "Theme");
/// assert_eq!(canonical_name("Config"), "Config");
/// ```
pub fn canonical_name(raw: &str) -> String {
    STRIPPED_SUFFIXES
        .iter()
        .fold(raw, |name, suffix| match name.strip_suffix(suffix) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => name,
        })
        .to_string()
}
