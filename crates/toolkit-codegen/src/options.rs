//! Generation options shared by both emitters.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::EmitOptions;
//!
//! let options = EmitOptions::new()
//!     .single_file(true)
//!     .banner("Generated file, do not edit.");
//!
//! assert!(options.single_file);
//! ```

/// Options for one emitter invocation.
///
/// Defaults: multi-file mode, no import extension, no toolkit filter, no
/// banner, descriptions included.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Emit one concatenated file instead of one file per toolkit
    pub single_file: bool,
    /// Extension appended to relative import paths (e.g. `.js` for ESM
    /// TypeScript output); ignored in single-file mode
    pub import_extension: Option<String>,
    /// Restrict generation to toolkits with these slugs
    pub toolkit_filter: Option<Vec<String>>,
    /// Banner text embedded as a header comment
    pub banner: Option<String>,
    /// Suppress documentation derived from schema descriptions
    pub without_descriptions: bool,
}

impl EmitOptions {
    /// Creates the default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects single-file emission mode.
    #[must_use]
    pub const fn single_file(mut self, single_file: bool) -> Self {
        self.single_file = single_file;
        self
    }

    /// Sets the extension appended to relative import paths.
    #[must_use]
    pub fn import_extension(mut self, extension: impl Into<String>) -> Self {
        self.import_extension = Some(extension.into());
        self
    }

    /// Restricts generation to the toolkits with the given slugs.
    #[must_use]
    pub fn toolkit_filter(mut self, slugs: Vec<String>) -> Self {
        self.toolkit_filter = Some(slugs);
        self
    }

    /// Sets the banner text embedded as a header comment.
    #[must_use]
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Suppresses documentation derived from schema descriptions.
    #[must_use]
    pub const fn without_descriptions(mut self, suppress: bool) -> Self {
        self.without_descriptions = suppress;
        self
    }
}
