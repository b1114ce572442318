//! The reflection interface the extractor walks.
//!
//! A [`TypeSystem`] answers the handful of questions the walker needs about
//! declared types: lookup by name, member enumeration, attached docs, and a
//! coarse category per type. [`SchemaTypeSystem`](super::SchemaTypeSystem)
//! answers them from JSON Schema emitted by `schemars`.

use crate::Result;

/// Documentation tag carrying an example value.
pub const EXAMPLE_TAG: &str = "example";

/// Documentation tag carrying a default value.
pub const DEFAULT_TAG: &str = "default";

/// Coarse category of a resolved type.
///
/// Implementations decide the category with literal checks first, then
/// primitive, union, named object, and finally the fallbacks, so a string
/// literal is never reported as a plain string.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind<N> {
    /// A literal; the text is the value as written in source.
    Literal(String),
    /// A plain string.
    String,
    /// Any numeric type.
    Number,
    /// A boolean.
    Boolean,
    /// Alternatives in declared order.
    Union(Vec<N>),
    /// A reference to a named object declaration, by raw declared name.
    Named(String),
    /// A reference to a named declaration that is not an object, such as an
    /// enum or an untagged union. Its shape is the shape of `target`.
    Alias {
        /// Raw declared name.
        name: String,
        /// The referenced declaration.
        target: N,
    },
    /// A named composite with generic parameters that cannot be destructured.
    Generic(String),
    /// An object shape without a stable declared name.
    Anonymous,
    /// A list of the element type.
    Array(N),
    /// Anything the reflection cannot categorize.
    Other,
}

/// Documentation attached to a type or member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Text parts joined in order; `None` when there are none.
    pub text: Option<String>,
    /// Named tags in the order they were found.
    pub tags: Vec<(String, String)>,
}

impl DocComment {
    /// Returns the text of the first tag with the given name.
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Read-only access to a host type system.
///
/// `Node` is a cheap handle to one resolved type, valid for as long as the
/// type system is borrowed.
pub trait TypeSystem {
    /// Handle to a resolved type.
    type Node<'a>: Copy
    where
        Self: 'a;

    /// Display names of every declaration in scope, in discovery order.
    fn declaration_names(&self) -> Vec<&str>;

    /// Resolves a declaration by exact display name.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` when no declaration has that name.
    fn resolve(&self, name: &str) -> Result<Self::Node<'_>>;

    /// Members of an object type in the type system's own order.
    fn members<'a>(&'a self, node: Self::Node<'a>) -> Vec<(&'a str, Self::Node<'a>)>;

    /// Documentation comment and tags attached to a type or member.
    fn documentation<'a>(&'a self, node: Self::Node<'a>) -> DocComment;

    /// Categorizes a resolved type.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` when the type refers to a missing declaration.
    fn kind<'a>(&'a self, node: Self::Node<'a>) -> Result<TypeKind<Self::Node<'a>>>;
}
