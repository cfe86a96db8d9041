//! Python source generator.
//!
//! Walks the toolkit index and produces either one module per toolkit plus
//! a package `__init__.py` (multi-file mode) or a single concatenated
//! `toolkits.py` (single-file mode). Both modes render per-toolkit bodies
//! through the same template, so their content is identical up to imports
//! and file boundaries.
//!
//! Every toolkit module carries a fixed typing prologue; importing the
//! full set up front keeps the header independent of body contents.
//! Catalogue identifiers go through `declaration_ident` before they become
//! class names; dict keys keep the catalogue spelling (the templates quote
//! them).
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::{EmitOptions, PythonGenerator, ToolkitIndex};
//! use toolkit_core::Catalog;
//!
//! let index = ToolkitIndex::build(&Catalog::default()).unwrap();
//! let generator = PythonGenerator::new().unwrap();
//! let code = generator.generate(&index, &EmitOptions::new()).unwrap();
//!
//! // An empty catalogue still yields a valid package index.
//! assert_eq!(code.file_count(), 1);
//! ```

use crate::common::emit::{comment_block, name_map, schema_declarations};
use crate::common::naming::{declaration_ident, module_name, to_pascal_case};
use crate::common::{GeneratedCode, SourceFile};
use crate::index::{ToolkitEntry, ToolkitIndex};
use crate::options::EmitOptions;
use crate::python::render::{PythonTypeRenderer, docstring};
use crate::python::types::{IndexContext, IndexEntry, ToolkitContext};
use crate::template_engine::TemplateEngine;
use toolkit_core::Result;

const TYPING_HEADER: &str = "from typing import Any, Dict, List, Literal, Union\n\n\
    from typing_extensions import Never, Required, TypedDict\n";

/// Generator for Python toolkit modules.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct PythonGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl PythonGenerator<'_> {
    /// Creates a new Python generator.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Generates Python sources for the given index.
    ///
    /// # Errors
    ///
    /// Returns an error if the toolkit filter names an unknown slug or if
    /// template rendering fails. Schema-level problems never fail the run;
    /// they degrade to `Any` types.
    pub fn generate(&self, index: &ToolkitIndex, options: &EmitOptions) -> Result<GeneratedCode> {
        let filtered;
        let index = match &options.toolkit_filter {
            Some(slugs) => {
                filtered = index.filtered(slugs)?;
                &filtered
            }
            None => index,
        };

        tracing::info!(
            toolkits = index.entries.len(),
            single_file = options.single_file,
            "generating Python sources"
        );

        let bodies: Vec<(String, String)> = index
            .entries
            .iter()
            .map(|entry| {
                let body = self.render_toolkit(entry, options)?;
                tracing::debug!(toolkit = entry.identifier.as_str(), "rendered toolkit body");
                Ok((module_name(entry.slug.as_str()), body))
            })
            .collect::<Result<_>>()?;

        let banner = options.banner.as_deref().map(|b| comment_block(b, "#"));
        let mut code = GeneratedCode::new();

        if options.single_file {
            let mut content = String::new();
            if let Some(banner) = &banner {
                content.push_str(banner);
                content.push_str("\n\n");
            }
            content.push_str(TYPING_HEADER);
            for (_, body) in &bodies {
                content.push_str("\n\n");
                content.push_str(body);
                content.push('\n');
            }
            content.push_str("\n\n");
            content.push_str(&self.render_index(index, None, true)?);
            content.push('\n');
            code.add_file(SourceFile::new("toolkits.py", content));
        } else {
            for (module, body) in &bodies {
                code.add_file(SourceFile::new(
                    format!("{module}.py"),
                    format!("{TYPING_HEADER}\n\n{body}\n"),
                ));
            }
            let index_body = self.render_index(index, banner.as_deref(), false)?;
            code.add_file(SourceFile::new("__init__.py", format!("{index_body}\n")));
        }

        tracing::info!(files = code.file_count(), "Python generation complete");
        Ok(code)
    }

    /// Renders one toolkit body (class plus schema-backed types), trimmed
    /// of trailing whitespace.
    fn render_toolkit(&self, entry: &ToolkitEntry, options: &EmitOptions) -> Result<String> {
        let identifier = entry.identifier.as_str();
        let pascal = declaration_ident(&to_pascal_case(identifier));

        let mut type_sections = Vec::new();
        for tool in &entry.tools {
            let base = format!("{pascal}{}", to_pascal_case(&tool.short_name));
            if let Some(schema) = &tool.input_parameters {
                type_sections.push(type_section(
                    &format!("{base}Input"),
                    schema,
                    tool.description.as_deref(),
                    options,
                ));
            }
            if let Some(schema) = &tool.output_parameters {
                type_sections.push(type_section(&format!("{base}Output"), schema, None, options));
            }
        }
        for trigger in &entry.trigger_types {
            let base = format!("{pascal}{}", to_pascal_case(&trigger.short_name));
            if let Some(schema) = &trigger.payload {
                type_sections.push(type_section(
                    &format!("{base}Payload"),
                    schema,
                    trigger.description.as_deref(),
                    options,
                ));
            }
            if let Some(schema) = &trigger.config {
                type_sections.push(type_section(&format!("{base}Config"), schema, None, options));
            }
        }

        let context = ToolkitContext {
            identifier: declaration_ident(identifier),
            slug: entry.slug.as_str().to_string(),
            doc: entry
                .description
                .as_deref()
                .filter(|_| !options.without_descriptions)
                .map(docstring),
            tools: name_map(
                entry.tools.iter().map(|t| (&t.short_name, t.qualified_name.as_str())),
                |s: &str| String::from(s),
            ),
            trigger_types: name_map(
                entry
                    .trigger_types
                    .iter()
                    .map(|t| (&t.short_name, t.qualified_name.as_str())),
                |s: &str| String::from(s),
            ),
            type_sections,
        };

        let rendered = self.engine.render("python/toolkit", &context)?;
        Ok(rendered.trim_end().to_string())
    }

    fn render_index(
        &self,
        index: &ToolkitIndex,
        banner: Option<&str>,
        single_file: bool,
    ) -> Result<String> {
        let typing_imports = if single_file {
            // The module header already imported everything.
            String::new()
        } else if index.entries.is_empty() {
            "from typing import Dict\n\nfrom typing_extensions import Never".to_string()
        } else {
            "from typing import Dict, Literal".to_string()
        };

        let imports = if single_file {
            Vec::new()
        } else {
            index
                .entries
                .iter()
                .map(|entry| {
                    format!(
                        "from .{} import {}",
                        module_name(entry.slug.as_str()),
                        declaration_ident(entry.identifier.as_str())
                    )
                })
                .collect()
        };

        let entries = index
            .entries
            .iter()
            .map(|entry| IndexEntry {
                identifier: entry.identifier.as_str().to_string(),
                value: declaration_ident(entry.identifier.as_str()),
            })
            .collect();

        let toolkit_union = if index.entries.is_empty() {
            "Never".to_string()
        } else {
            let names = index
                .entries
                .iter()
                .map(|e| format!("\"{}\"", e.identifier.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Literal[{names}]")
        };

        let context = IndexContext {
            banner: banner.map(String::from),
            typing_imports,
            imports,
            entries,
            toolkit_union,
        };

        let rendered = self.engine.render("python/index", &context)?;
        Ok(rendered.trim().to_string())
    }
}

/// Builds the blocks for one schema root, two-blank-line separated.
fn type_section(
    root_name: &str,
    schema: &serde_json::Value,
    doc: Option<&str>,
    options: &EmitOptions,
) -> String {
    let mut renderer = PythonTypeRenderer::new();
    for declaration in &schema_declarations(root_name, schema, doc, options) {
        renderer.emit_declaration(declaration);
    }
    renderer.into_blocks().join("\n\n\n")
}
