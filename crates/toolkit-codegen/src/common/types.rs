//! Output types for code generation.
//!
//! The generators produce an ordered list of `(path, content)` pairs;
//! writing them to disk is delegated to the caller.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::{GeneratedCode, SourceFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(SourceFile {
//!     path: "slack.ts".to_string(),
//!     content: "export const SLACK = {} as const;".to_string(),
//! });
//!
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Result of one generation run: every file that should be written.
///
/// File order is deterministic and follows catalogue input order, so
/// repeated runs over identical input produce byte-identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Generated files with relative paths and contents
    pub files: Vec<SourceFile>,
}

impl GeneratedCode {
    /// Creates a new empty container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file to the collection.
    pub fn add_file(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Finds a generated file by its relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_codegen::{GeneratedCode, SourceFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(SourceFile {
    ///     path: "index.ts".to_string(),
    ///     content: String::new(),
    /// });
    ///
    /// assert!(code.find("index.ts").is_some());
    /// assert!(code.find("missing.ts").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

impl Default for GeneratedCode {
    fn default() -> Self {
        Self::new()
    }
}

/// One short-name to qualified-name pair in a generated name map.
///
/// `short_name` is pre-formatted for the target language (quoted where the
/// template emits bare object keys); `qualified_name` is always emitted
/// inside a string literal.
#[derive(Debug, Clone, Serialize)]
pub struct NameMapEntry {
    /// Key inside the generated map
    pub short_name: String,
    /// Fully-qualified name the key maps to
    pub qualified_name: String,
}

/// A single generated file: an immutable relative path plus rendered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Relative path where the file should be written
    pub path: String,
    /// UTF-8 file content
    pub content: String,
}

impl SourceFile {
    /// Creates a source file from a path and content.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
