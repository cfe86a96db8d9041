//! Stringifier from the type IR to TypeScript syntax.
//!
//! TypeScript can inline every IR shape, so this renderer is a direct
//! recursive pretty-printer; helper declarations only come from the parser
//! (self-referential schemas).
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::ir::TypeIr;
//! use toolkit_codegen::typescript::render::render_type;
//!
//! let ty = TypeIr::Array(Box::new(TypeIr::String));
//! assert_eq!(render_type(&ty, 0), "Array<string>");
//! ```

use crate::common::naming::doc_line;
use crate::ir::{LiteralIr, ObjectIr, TypeDeclaration, TypeIr};

/// Renders a type expression at the given indentation depth (spaces).
#[must_use]
pub fn render_type(ty: &TypeIr, indent: usize) -> String {
    match ty {
        TypeIr::String => "string".to_string(),
        TypeIr::Number => "number".to_string(),
        TypeIr::Boolean => "boolean".to_string(),
        TypeIr::Null => "null".to_string(),
        TypeIr::Unknown => "unknown".to_string(),
        TypeIr::Never => "never".to_string(),
        TypeIr::Array(inner) => format!("Array<{}>", render_type(inner, indent)),
        TypeIr::Object(obj) => render_object(obj, indent),
        TypeIr::Union(branches) => branches
            .iter()
            .map(|branch| {
                let rendered = render_type(branch, indent);
                // Nested unions need grouping to keep precedence readable.
                if matches!(branch, TypeIr::Union(_)) {
                    format!("({rendered})")
                } else {
                    rendered
                }
            })
            .collect::<Vec<_>>()
            .join(" | "),
        TypeIr::Literal(literal) => render_literal(literal),
        TypeIr::Reference(name) => name.clone(),
    }
}

/// Renders a named declaration as an exported `type` alias.
#[must_use]
pub fn render_declaration(declaration: &TypeDeclaration) -> String {
    let body = render_type(&declaration.ty, 0);
    declaration.doc.as_ref().map_or_else(
        || format!("export type {} = {body};", declaration.name),
        |doc| {
            format!(
                "/**\n * {}\n */\nexport type {} = {body};",
                doc_line(doc),
                declaration.name
            )
        },
    )
}

fn render_object(obj: &ObjectIr, indent: usize) -> String {
    if obj.fields.is_empty() {
        // An object with no declared properties is an arbitrary bag when
        // open, an empty record when explicitly closed.
        return if obj.open {
            "Record<string, unknown>".to_string()
        } else {
            "Record<string, never>".to_string()
        };
    }

    let outer = " ".repeat(indent);
    let inner = " ".repeat(indent + 2);
    let mut out = String::from("{\n");
    for field in &obj.fields {
        if let Some(doc) = &field.doc {
            out.push_str(&format!("{inner}/** {} */\n", doc_line(doc)));
        }
        let marker = if field.required { "" } else { "?" };
        out.push_str(&format!(
            "{inner}{}{marker}: {};\n",
            quote_key(&field.name),
            render_type(&field.ty, indent + 2)
        ));
    }
    if obj.open {
        out.push_str(&format!("{inner}[key: string]: unknown;\n"));
    }
    out.push_str(&format!("{outer}}}"));
    out
}

fn render_literal(literal: &LiteralIr) -> String {
    match literal {
        LiteralIr::Str(s) => {
            serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
        }
        LiteralIr::Num(n) => n.to_string(),
        LiteralIr::Bool(b) => b.to_string(),
        LiteralIr::Null => "null".to_string(),
    }
}

/// Quotes an object key unless it is a valid bare identifier.
///
/// Applies to schema property names and to catalogue-derived map keys
/// alike; a short name like `2FA_ENABLE` must not be emitted bare.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::typescript::render::quote_key;
///
/// assert_eq!(quote_key("SEND_MESSAGE"), "SEND_MESSAGE");
/// assert_eq!(quote_key("2FA_ENABLE"), "\"2FA_ENABLE\"");
/// ```
#[must_use]
pub fn quote_key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name.to_string()
    } else {
        serde_json::to_string(name).unwrap_or_else(|_| String::from("\"\""))
    }
}
