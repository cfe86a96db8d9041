//! TypeScript source generator.
//!
//! Walks the toolkit index and produces either one module per toolkit plus
//! an `index.ts` (multi-file mode) or a single concatenated `toolkits.ts`
//! (single-file mode). Both modes render per-toolkit bodies through the
//! same template, so their content is identical up to imports and file
//! boundaries.
//!
//! Catalogue names are not guaranteed to be TypeScript identifiers: map
//! keys go through [`quote_key`] and declaration names through
//! `declaration_ident` before they reach a template.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::{EmitOptions, ToolkitIndex, TypeScriptGenerator};
//! use toolkit_core::Catalog;
//!
//! let index = ToolkitIndex::build(&Catalog::default()).unwrap();
//! let generator = TypeScriptGenerator::new().unwrap();
//! let code = generator.generate(&index, &EmitOptions::new()).unwrap();
//!
//! // An empty catalogue still yields a valid index module.
//! assert_eq!(code.file_count(), 1);
//! ```

use crate::common::emit::{comment_block, name_map, schema_declarations};
use crate::common::naming::{declaration_ident, doc_line, module_name, to_pascal_case};
use crate::common::{GeneratedCode, SourceFile};
use crate::index::{ToolkitEntry, ToolkitIndex};
use crate::options::EmitOptions;
use crate::template_engine::TemplateEngine;
use crate::typescript::render::{quote_key, render_declaration};
use crate::typescript::types::{IndexContext, IndexEntry, ToolkitContext};
use toolkit_core::Result;

/// Generator for TypeScript toolkit modules.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct TypeScriptGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl TypeScriptGenerator<'_> {
    /// Creates a new TypeScript generator.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Generates TypeScript sources for the given index.
    ///
    /// # Errors
    ///
    /// Returns an error if the toolkit filter names an unknown slug or if
    /// template rendering fails. Schema-level problems never fail the run;
    /// they degrade to `unknown` types.
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
            "generating TypeScript sources"
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

        let banner = options.banner.as_deref().map(|b| comment_block(b, "//"));
        let mut code = GeneratedCode::new();

        if options.single_file {
            let mut content = String::new();
            if let Some(banner) = &banner {
                content.push_str(banner);
                content.push_str("\n\n");
            }
            for (_, body) in &bodies {
                content.push_str(body);
                content.push_str("\n\n");
            }
            content.push_str(&self.render_index(index, &bodies, None, true, options)?);
            content.push('\n');
            code.add_file(SourceFile::new("toolkits.ts", content));
        } else {
            for (module, body) in &bodies {
                code.add_file(SourceFile::new(format!("{module}.ts"), format!("{body}\n")));
            }
            let index_body =
                self.render_index(index, &bodies, banner.as_deref(), false, options)?;
            code.add_file(SourceFile::new("index.ts", format!("{index_body}\n")));
        }

        tracing::info!(files = code.file_count(), "TypeScript generation complete");
        Ok(code)
    }

    /// Renders one toolkit body (constant plus schema-backed types),
    /// trimmed of trailing whitespace.
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
                .map(doc_line),
            tools: name_map(
                entry.tools.iter().map(|t| (&t.short_name, t.qualified_name.as_str())),
                quote_key,
            ),
            trigger_types: name_map(
                entry
                    .trigger_types
                    .iter()
                    .map(|t| (&t.short_name, t.qualified_name.as_str())),
                quote_key,
            ),
            type_sections,
        };

        let rendered = self.engine.render("typescript/toolkit", &context)?;
        Ok(rendered.trim_end().to_string())
    }

    fn render_index(
        &self,
        index: &ToolkitIndex,
        bodies: &[(String, String)],
        banner: Option<&str>,
        single_file: bool,
        options: &EmitOptions,
    ) -> Result<String> {
        let extension = options.import_extension.as_deref().unwrap_or("");

        let imports = if single_file {
            Vec::new()
        } else {
            bodies
                .iter()
                .map(|(module, _)| format!("import * as {module} from \"./{module}{extension}\";"))
                .collect()
        };

        let entries = index
            .entries
            .iter()
            .zip(bodies)
            .map(|(entry, (module, _))| {
                let declared = declaration_ident(entry.identifier.as_str());
                let value = if single_file {
                    declared
                } else {
                    format!("{module}.{declared}")
                };
                IndexEntry {
                    identifier: quote_key(entry.identifier.as_str()),
                    value,
                }
            })
            .collect();

        let toolkit_union = if index.entries.is_empty() {
            "never".to_string()
        } else {
            index
                .entries
                .iter()
                .map(|e| format!("\"{}\"", e.identifier.as_str()))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let context = IndexContext {
            banner: banner.map(String::from),
            imports,
            entries,
            toolkit_union,
        };

        let rendered = self.engine.render("typescript/index", &context)?;
        Ok(rendered.trim_end().to_string())
    }
}

/// Builds the rendered declarations for one schema root, blank-line
/// separated.
fn type_section(
    root_name: &str,
    schema: &serde_json::Value,
    doc: Option<&str>,
    options: &EmitOptions,
) -> String {
    schema_declarations(root_name, schema, doc, options)
        .iter()
        .map(render_declaration)
        .collect::<Vec<_>>()
        .join("\n\n")
}
