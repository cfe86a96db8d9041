//! Target-language-agnostic type intermediate representation.
//!
//! Every schema is first translated into [`TypeIr`]; the TypeScript and
//! Python renderers consume the same IR so both emitters make identical
//! structural decisions and differ only in syntax.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::ir::TypeIr;
//!
//! // Unions collapse: zero branches is `unknown`, one branch is itself.
//! assert_eq!(TypeIr::union(vec![]), TypeIr::Unknown);
//! assert_eq!(TypeIr::union(vec![TypeIr::String]), TypeIr::String);
//! assert_eq!(
//!     TypeIr::union(vec![TypeIr::String, TypeIr::Number]),
//!     TypeIr::Union(vec![TypeIr::String, TypeIr::Number]),
//! );
//! ```

use serde_json::Number;

/// A type expression, independent of any target language.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeIr {
    /// Text primitive (`string` / `str`)
    String,
    /// Numeric primitive; JSON Schema `number` and `integer` both collapse
    /// here, since the target languages do not distinguish integer subtypes
    /// at the type level
    Number,
    /// Boolean primitive
    Boolean,
    /// The null type
    Null,
    /// Anything; the graceful-degradation fallback (`unknown` / `Any`)
    Unknown,
    /// Nothing; produced by the `false` boolean schema (`never` / `Never`)
    Never,
    /// Homogeneous array of the inner type
    Array(Box<TypeIr>),
    /// Record type with named fields
    Object(ObjectIr),
    /// Union of two or more branches; construct via [`TypeIr::union`] so
    /// the collapse invariant holds
    Union(Vec<TypeIr>),
    /// A literal value type, e.g. `"high"` or `42`
    Literal(LiteralIr),
    /// Reference to a named helper declaration
    Reference(String),
}

impl TypeIr {
    /// Builds a union from branches, applying the collapse invariant:
    /// zero branches collapse to [`TypeIr::Unknown`], a single branch
    /// collapses to that branch, and only two or more branches produce a
    /// [`TypeIr::Union`].
    #[must_use]
    pub fn union(mut branches: Vec<Self>) -> Self {
        match branches.len() {
            0 => Self::Unknown,
            1 => branches.remove(0),
            _ => Self::Union(branches),
        }
    }

    /// Returns `true` if this is a reference to the given declaration name.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_codegen::ir::TypeIr;
    ///
    /// let ty = TypeIr::Reference("Node".to_string());
    /// assert!(ty.is_reference_to("Node"));
    /// assert!(!ty.is_reference_to("Other"));
    /// ```
    #[must_use]
    pub fn is_reference_to(&self, name: &str) -> bool {
        matches!(self, Self::Reference(n) if n == name)
    }
}

/// An object (record) type with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectIr {
    /// Declared fields in deterministic order
    pub fields: Vec<FieldIr>,
    /// Whether the object accepts extra untyped keys. Set unless the schema
    /// carries `additionalProperties: false`; most real-world API payloads
    /// are not closed records.
    pub open: bool,
}

impl ObjectIr {
    /// An open object with no declared fields; renders as an arbitrary
    /// string-keyed map.
    #[must_use]
    pub const fn open_map() -> Self {
        Self {
            fields: Vec::new(),
            open: true,
        }
    }
}

/// One field of an [`ObjectIr`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIr {
    /// Property name as declared by the schema
    pub name: String,
    /// Field type
    pub ty: TypeIr,
    /// Whether the property appears in the schema's `required` list
    pub required: bool,
    /// Documentation from the property's `description`, if any
    pub doc: Option<String>,
}

/// A literal value usable as a type.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralIr {
    /// String literal
    Str(String),
    /// Numeric literal
    Num(Number),
    /// Boolean literal
    Bool(bool),
    /// The null literal
    Null,
}

/// A named, reusable type extracted during parsing.
///
/// Helper declarations exist for schema nodes that are revisited during
/// traversal (self-reference) and for any type a renderer cannot inline.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    /// Declaration name, stable across runs (derived from the traversal
    /// path of the node it was extracted from)
    pub name: String,
    /// The declared type
    pub ty: TypeIr,
    /// Documentation attached to the declaration, if any
    pub doc: Option<String>,
}
