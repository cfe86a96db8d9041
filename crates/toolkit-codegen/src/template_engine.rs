//! Template engine for module scaffolding using Handlebars.
//!
//! The emitters pre-render all type expressions in Rust and hand the
//! template only flat strings and lists, so templates stay declarative.
//! All substitutions use triple-stache: the output is source code, not
//! HTML, and must never be entity-escaped.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::template_engine::TemplateEngine;
//!
//! let engine = TemplateEngine::new().unwrap();
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use toolkit_core::{Error, Result};

/// Template engine with the module templates pre-registered.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new engine with all built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        register(
            &mut handlebars,
            "typescript/toolkit",
            include_str!("../templates/typescript/toolkit.ts.hbs"),
        )?;
        register(
            &mut handlebars,
            "typescript/index",
            include_str!("../templates/typescript/index.ts.hbs"),
        )?;
        register(
            &mut handlebars,
            "python/toolkit",
            include_str!("../templates/python/toolkit.py.hbs"),
        )?;
        register(
            &mut handlebars,
            "python/index",
            include_str!("../templates/python/index.py.hbs"),
        )?;

        Ok(Self { handlebars })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template is not registered, the
    /// context is missing a variable, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("rendering '{template_name}' failed: {e}"),
            })
    }

    /// Registers a custom template, overriding any existing registration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        register(&mut self.handlebars, name, template)
    }
}

fn register(handlebars: &mut Handlebars<'_>, name: &str, template: &str) -> Result<()> {
    handlebars
        .register_template_string(name, template)
        .map_err(|e| Error::Template {
            message: format!("failed to register template '{name}': {e}"),
        })
}
