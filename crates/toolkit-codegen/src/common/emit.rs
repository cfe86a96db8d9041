//! Emission helpers shared by the TypeScript and Python generators.
//!
//! Both generators walk the index the same way and differ only in syntax;
//! the schema-to-declaration step, the name-map assembly, and the banner
//! comment block live here so the per-language generators stay thin.

use crate::common::types::NameMapEntry;
use crate::ir::TypeDeclaration;
use crate::options::EmitOptions;
use crate::schema::SchemaParser;
use serde_json::Value;

/// Parses one schema root into its full declaration list: the parser's
/// helper declarations followed by the root declaration (unless the root
/// itself became a helper because the schema is self-referential).
#[must_use]
pub fn schema_declarations(
    root_name: &str,
    schema: &Value,
    doc: Option<&str>,
    options: &EmitOptions,
) -> Vec<TypeDeclaration> {
    let parsed = SchemaParser::new(root_name)
        .without_descriptions(options.without_descriptions)
        .parse(schema);

    let mut declarations = parsed.declarations;
    if !parsed.ty.is_reference_to(root_name) {
        declarations.push(TypeDeclaration {
            name: root_name.to_string(),
            ty: parsed.ty,
            doc: doc
                .filter(|_| !options.without_descriptions)
                .map(ToString::to_string),
        });
    }
    declarations
}

/// Builds name-map template entries from `(short, qualified)` pairs.
///
/// `format_key` is the target-language key treatment (quoting for
/// TypeScript object keys; identity for Python, whose template quotes
/// dict keys itself).
#[must_use]
pub fn name_map<'a>(
    pairs: impl Iterator<Item = (&'a String, &'a str)>,
    format_key: impl Fn(&str) -> String,
) -> Vec<NameMapEntry> {
    pairs
        .map(|(short, qualified)| NameMapEntry {
            short_name: format_key(short),
            qualified_name: qualified.to_string(),
        })
        .collect()
}

/// Renders multi-line text as a line-comment block with the given prefix.
#[must_use]
pub fn comment_block(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix} {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
