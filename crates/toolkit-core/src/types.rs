//! Strong domain types for the toolkit SDK code generator.
//!
//! This module implements the newtype pattern to provide type safety for
//! the naming primitives that flow through the generation pipeline.
//!
//! # Type Safety Benefits
//!
//! Toolkit identifiers, slugs, and fully-qualified tool names are all plain
//! strings on the wire. Strong types keep them from being mixed up between
//! the index builder and the emitters.
//!
//! # Examples
//!
//! ```
//! use toolkit_core::{ToolkitId, ToolkitSlug, ToolName};
//!
//! let id = ToolkitId::new("SLACK");
//! let slug = ToolkitSlug::new("slack");
//! let tool = ToolName::new("SLACK_SEND_MESSAGE");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new value from anything convertible to a `String`.
            #[inline]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the value as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the value and returns the inner `String`.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_newtype! {
    /// Canonical toolkit identifier (newtype over `String`).
    ///
    /// The uppercase identifier that prefixes every fully-qualified tool
    /// and trigger-type name belonging to the toolkit, e.g. `SLACK`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::ToolkitId;
    ///
    /// let id = ToolkitId::new("SLACK");
    /// assert_eq!(id.as_str(), "SLACK");
    /// ```
    ToolkitId
}

string_newtype! {
    /// Toolkit slug (newtype over `String`).
    ///
    /// The lowercase, URL-safe name a toolkit is addressed by, e.g.
    /// `slack`. Used for module file names and for filter options.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::ToolkitSlug;
    ///
    /// let slug = ToolkitSlug::new("slack");
    /// assert_eq!(slug.as_str(), "slack");
    /// ```
    ToolkitSlug
}

string_newtype! {
    /// Fully-qualified tool name (newtype over `String`).
    ///
    /// Begins with the owning toolkit's identifier followed by an
    /// underscore, e.g. `SLACK_SEND_MESSAGE`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::ToolName;
    ///
    /// let name = ToolName::new("SLACK_SEND_MESSAGE");
    /// assert_eq!(name.as_str(), "SLACK_SEND_MESSAGE");
    /// ```
    ToolName
}

string_newtype! {
    /// Fully-qualified trigger-type name (newtype over `String`).
    ///
    /// Same prefix convention as [`ToolName`], e.g. `SLACK_NEW_MESSAGE`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::TriggerTypeName;
    ///
    /// let name = TriggerTypeName::new("SLACK_NEW_MESSAGE");
    /// assert_eq!(name.as_str(), "SLACK_NEW_MESSAGE");
    /// ```
    TriggerTypeName
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolkit_id_creation() {
        let id = ToolkitId::new("SLACK");
        assert_eq!(id.as_str(), "SLACK");
    }

    #[test]
    fn test_toolkit_id_from_string() {
        let id = ToolkitId::from("GMAIL".to_string());
        assert_eq!(id.as_str(), "GMAIL");
    }

    #[test]
    fn test_toolkit_id_into_inner() {
        let id = ToolkitId::new("SLACK");
        assert_eq!(id.into_inner(), "SLACK");
    }

    #[test]
    fn test_toolkit_id_display() {
        let id = ToolkitId::new("SLACK");
        assert_eq!(format!("{id}"), "SLACK");
    }

    #[test]
    fn test_toolkit_slug_display() {
        let slug = ToolkitSlug::new("slack");
        assert_eq!(format!("{slug}"), "slack");
    }

    #[test]
    fn test_tool_name_clone_eq() {
        let name1 = ToolName::new("SLACK_SEND_MESSAGE");
        let name2 = name1.clone();
        assert_eq!(name1, name2);
    }

    #[test]
    fn test_trigger_type_name_creation() {
        let name = TriggerTypeName::new("SLACK_NEW_MESSAGE");
        assert_eq!(name.as_str(), "SLACK_NEW_MESSAGE");
    }

    #[test]
    fn test_newtypes_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ToolkitId>();
        assert_send_sync::<ToolkitSlug>();
        assert_send_sync::<ToolName>();
        assert_send_sync::<TriggerTypeName>();
    }

    #[test]
    fn test_serde_round_trip() {
        let id = ToolkitId::new("SLACK");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"SLACK\"");
        let back: ToolkitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
