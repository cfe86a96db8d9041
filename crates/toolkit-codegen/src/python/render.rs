//! Stringifier from the type IR to Python syntax.
//!
//! Python has no anonymous object types, so any object shape with declared
//! fields is hoisted into a named `TypedDict` block. Blocks accumulate in
//! the renderer in dependency order (children before the shapes that use
//! them) and references are emitted quoted, which also covers
//! self-referential schemas.
//!
//! Classes use `total=False` with `Required[...]` markers so optional and
//! required fields survive the translation. `TypedDict` cannot declare
//! extra keys, so the open-object index signature is dropped here.

use crate::common::naming::to_pascal_case;
use crate::ir::{LiteralIr, ObjectIr, TypeDeclaration, TypeIr};

/// Python keywords that disqualify a field name from class syntax.
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Renderer that turns IR into Python type blocks.
///
/// Each emitted declaration becomes one or more blocks: nested object
/// shapes hoist into their own `TypedDict` definitions ahead of the
/// declaration that uses them.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::ir::{TypeDeclaration, TypeIr};
/// use toolkit_codegen::python::render::PythonTypeRenderer;
///
/// let mut renderer = PythonTypeRenderer::new();
/// renderer.emit_declaration(&TypeDeclaration {
///     name: "UserId".to_string(),
///     ty: TypeIr::String,
///     doc: None,
/// });
/// assert_eq!(renderer.into_blocks(), vec!["UserId = str".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct PythonTypeRenderer {
    blocks: Vec<String>,
}

impl PythonTypeRenderer {
    /// Creates an empty renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Consumes the renderer and returns the accumulated blocks in
    /// emission order.
    #[must_use]
    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }

    /// Emits a named declaration.
    ///
    /// Object shapes with fields become `TypedDict` definitions; every
    /// other shape becomes a type alias assignment.
    pub fn emit_declaration(&mut self, declaration: &TypeDeclaration) {
        match &declaration.ty {
            TypeIr::Object(obj) if !obj.fields.is_empty() => {
                self.emit_typed_dict(&declaration.name, obj, declaration.doc.as_deref());
            }
            other => {
                let expr = self.render_type(other, &declaration.name);
                let mut block = String::new();
                if let Some(doc) = &declaration.doc {
                    block.push_str(&format!("# {}\n", comment_line(doc)));
                }
                block.push_str(&format!("{} = {expr}", declaration.name));
                self.blocks.push(block);
            }
        }
    }

    /// Renders a type expression, hoisting nested object shapes into named
    /// blocks. `hint` seeds the names of hoisted helpers.
    pub fn render_type(&mut self, ty: &TypeIr, hint: &str) -> String {
        match ty {
            TypeIr::String => "str".to_string(),
            TypeIr::Number => "float".to_string(),
            TypeIr::Boolean => "bool".to_string(),
            TypeIr::Null => "None".to_string(),
            TypeIr::Unknown => "Any".to_string(),
            TypeIr::Never => "Never".to_string(),
            TypeIr::Array(inner) => {
                format!("List[{}]", self.render_type(inner, &format!("{hint}Item")))
            }
            TypeIr::Object(obj) => {
                if obj.fields.is_empty() {
                    if obj.open {
                        "Dict[str, Any]".to_string()
                    } else {
                        "Dict[str, Never]".to_string()
                    }
                } else {
                    self.emit_typed_dict(hint, obj, None);
                    format!("\"{hint}\"")
                }
            }
            TypeIr::Union(branches) => self.render_union(branches, hint),
            TypeIr::Literal(literal) => {
                literal_value(literal).map_or_else(|| fallback_type(literal), |v| {
                    format!("Literal[{v}]")
                })
            }
            TypeIr::Reference(name) => format!("\"{name}\""),
        }
    }

    fn render_union(&mut self, branches: &[TypeIr], hint: &str) -> String {
        // A union made entirely of representable literals collapses into a
        // single Literal[...] the way Python spells enums.
        let values: Option<Vec<String>> = branches
            .iter()
            .map(|branch| match branch {
                TypeIr::Literal(literal) => literal_value(literal),
                _ => None,
            })
            .collect();
        if let Some(values) = values {
            return format!("Literal[{}]", values.join(", "));
        }

        let rendered: Vec<String> = branches
            .iter()
            .enumerate()
            .map(|(index, branch)| self.render_type(branch, &format!("{hint}{index}")))
            .collect();
        format!("Union[{}]", rendered.join(", "))
    }

    fn emit_typed_dict(&mut self, name: &str, obj: &ObjectIr, doc: Option<&str>) {
        // Field types render first so hoisted children land before this
        // block in the output.
        let fields: Vec<(String, String, Option<String>)> = obj
            .fields
            .iter()
            .map(|field| {
                let field_hint = format!("{name}{}", to_pascal_case(&field.name));
                let mut ty = self.render_type(&field.ty, &field_hint);
                if field.required {
                    ty = format!("Required[{ty}]");
                }
                (field.name.clone(), ty, field.doc.clone())
            })
            .collect();

        let mut block = String::new();
        if obj.fields.iter().all(|f| is_identifier(&f.name)) {
            block.push_str(&format!("class {name}(TypedDict, total=False):\n"));
            if let Some(doc) = doc {
                block.push_str(&format!("    \"\"\"{}\"\"\"\n\n", docstring(doc)));
            }
            for (field_name, ty, field_doc) in &fields {
                if let Some(field_doc) = field_doc {
                    block.push_str(&format!("    # {}\n", comment_line(field_doc)));
                }
                block.push_str(&format!("    {field_name}: {ty}\n"));
            }
            self.blocks.push(block.trim_end().to_string());
        } else {
            // Keys that are not valid identifiers force the functional form.
            if let Some(doc) = doc {
                block.push_str(&format!("# {}\n", comment_line(doc)));
            }
            block.push_str(&format!("{name} = TypedDict(\"{name}\", {{\n"));
            for (field_name, ty, _) in &fields {
                block.push_str(&format!("    {}: {ty},\n", quote_str(field_name)));
            }
            block.push_str("}, total=False)");
            self.blocks.push(block);
        }
    }
}

/// Collapses a doc comment onto one `#`-comment line.
#[must_use]
pub fn comment_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapses a doc comment into docstring-safe text.
#[must_use]
pub fn docstring(text: &str) -> String {
    comment_line(text).replace('"', "\\\"")
}

/// Renders a literal as a `Literal[...]` member, or `None` when Python
/// cannot represent it (non-integer numbers).
fn literal_value(literal: &LiteralIr) -> Option<String> {
    match literal {
        LiteralIr::Str(s) => Some(quote_str(s)),
        LiteralIr::Num(n) => {
            if n.is_i64() || n.is_u64() {
                Some(n.to_string())
            } else {
                None
            }
        }
        LiteralIr::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        LiteralIr::Null => Some("None".to_string()),
    }
}

/// Widened type for literals `Literal[...]` cannot hold.
fn fallback_type(literal: &LiteralIr) -> String {
    match literal {
        LiteralIr::Num(_) => "float".to_string(),
        LiteralIr::Str(_) => "str".to_string(),
        LiteralIr::Bool(_) => "bool".to_string(),
        LiteralIr::Null => "None".to_string(),
    }
}

/// Quotes a string with escapes valid in both JSON and Python.
fn quote_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name)
}
