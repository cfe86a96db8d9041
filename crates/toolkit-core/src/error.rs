//! Error types for the toolkit SDK code generator.
//!
//! Only run-fatal conditions are represented here. Malformed schema
//! fragments are never an error: the parser degrades them to `unknown` or
//! `never` locally so one bad upstream schema cannot block generation for
//! every other toolkit.
//!
//! # Examples
//!
//! ```
//! use toolkit_core::{Error, Result};
//!
//! fn check_filter(slug: &str, available: &[String]) -> Result<()> {
//!     if !available.iter().any(|s| s == slug) {
//!         return Err(Error::UnknownToolkitFilter {
//!             slug: slug.to_string(),
//!             available: available.to_vec(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_filter("slak", &["slack".to_string()]).unwrap_err();
//! assert!(err.is_unknown_filter());
//! ```

use thiserror::Error;

/// Main error type for the toolkit SDK code generator.
///
/// All run-fatal errors in the workspace use this type. Schema-level
/// degradation deliberately does not appear here: an unrecognized schema
/// construct produces an `unknown` type, not an `Err`.
#[derive(Error, Debug)]
pub enum Error {
    /// A toolkit filter referenced a slug that is not in the catalogue.
    ///
    /// Surfaced before any generation work begins, with the list of valid
    /// slugs, so the caller can report a useful message. Partial output for
    /// a mistyped filter would silently mislead downstream consumers.
    #[error("unknown toolkit slug '{slug}' in filter (available: {})", available.join(", "))]
    UnknownToolkitFilter {
        /// The slug that was requested but not found
        slug: String,
        /// All slugs present in the catalogue
        available: Vec<String>,
    },

    /// Two toolkits in one generation run share an identifier.
    ///
    /// Toolkit identifiers name generated declarations, so a duplicate
    /// would collide inside one emitted file. Detected at index build time,
    /// before any emission.
    #[error("duplicate toolkit identifier '{identifier}'")]
    DuplicateToolkit {
        /// The identifier that appeared more than once
        identifier: String,
    },

    /// Template registration or rendering failed.
    ///
    /// Raised when a Handlebars template cannot be registered or rendered.
    #[error("template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is an unknown-toolkit-filter error.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::Error;
    ///
    /// let err = Error::UnknownToolkitFilter {
    ///     slug: "slak".to_string(),
    ///     available: vec!["slack".to_string()],
    /// };
    /// assert!(err.is_unknown_filter());
    /// ```
    #[must_use]
    pub const fn is_unknown_filter(&self) -> bool {
        matches!(self, Self::UnknownToolkitFilter { .. })
    }

    /// Returns `true` if this is a duplicate-toolkit error.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::Error;
    ///
    /// let err = Error::DuplicateToolkit {
    ///     identifier: "SLACK".to_string(),
    /// };
    /// assert!(err.is_duplicate_toolkit());
    /// ```
    #[must_use]
    pub const fn is_duplicate_toolkit(&self) -> bool {
        matches!(self, Self::DuplicateToolkit { .. })
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::Error;
    ///
    /// let err = Error::Template {
    ///     message: "missing variable".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::Template { .. })
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use toolkit_core::{Error, Result};
///
/// fn require_unique(ids: &[&str]) -> Result<()> {
///     for (i, id) in ids.iter().enumerate() {
///         if ids[..i].contains(id) {
///             return Err(Error::DuplicateToolkit {
///                 identifier: (*id).to_string(),
///             });
///         }
///     }
///     Ok(())
/// }
///
/// assert!(require_unique(&["SLACK", "GMAIL"]).is_ok());
/// assert!(require_unique(&["SLACK", "SLACK"]).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_filter_detection() {
        let err = Error::UnknownToolkitFilter {
            slug: "slak".to_string(),
            available: vec!["slack".to_string(), "gmail".to_string()],
        };
        assert!(err.is_unknown_filter());
        assert!(!err.is_duplicate_toolkit());
    }

    #[test]
    fn test_unknown_filter_lists_available_slugs() {
        let err = Error::UnknownToolkitFilter {
            slug: "slak".to_string(),
            available: vec!["slack".to_string(), "gmail".to_string()],
        };
        let display = format!("{err}");
        assert!(display.contains("slak"));
        assert!(display.contains("slack, gmail"));
    }

    #[test]
    fn test_duplicate_toolkit_detection() {
        let err = Error::DuplicateToolkit {
            identifier: "SLACK".to_string(),
        };
        assert!(err.is_duplicate_toolkit());
        assert!(!err.is_template_error());
    }

    #[test]
    fn test_template_error_detection() {
        let err = Error::Template {
            message: "render failed".to_string(),
        };
        assert!(err.is_template_error());
        assert!(!err.is_unknown_filter());
    }

    #[test]
    fn test_error_display() {
        let err = Error::DuplicateToolkit {
            identifier: "SLACK".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("duplicate toolkit identifier"));
        assert!(display.contains("SLACK"));
    }

    #[test]
    fn test_result_alias() {
        fn returns_err() -> Result<i32> {
            Err(Error::Template {
                message: "test".to_string(),
            })
        }

        assert!(returns_err().is_err());
    }
}
