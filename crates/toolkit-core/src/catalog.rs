//! Catalogue input models.
//!
//! These are the shapes the fetch layer hands to the generator: the flat
//! lists of toolkits, tools, and trigger types retrieved from the remote
//! catalogue. Parameter schemas are carried as raw `serde_json::Value`
//! nodes; the schema parser interprets them lazily during emission.
//!
//! # Examples
//!
//! ```
//! use toolkit_core::{Catalog, Tool, ToolName, Toolkit, ToolkitId, ToolkitSlug};
//!
//! let catalog = Catalog {
//!     toolkits: vec![Toolkit {
//!         identifier: ToolkitId::new("SLACK"),
//!         slug: ToolkitSlug::new("slack"),
//!         description: Some("Slack messaging".to_string()),
//!     }],
//!     tools: vec![Tool::named("SLACK_SEND_MESSAGE")],
//!     trigger_types: vec![],
//! };
//!
//! assert_eq!(catalog.toolkits.len(), 1);
//! ```

use crate::types::{ToolName, ToolkitId, ToolkitSlug, TriggerTypeName};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One toolkit as described by the remote catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolkit {
    /// Canonical uppercase identifier, e.g. `SLACK`
    pub identifier: ToolkitId,
    /// Lowercase slug, e.g. `slack`
    pub slug: ToolkitSlug,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One tool descriptor from the flat catalogue list.
///
/// The catalogue may return bare names or full descriptors with schemas;
/// both deserialize into this shape (schemas default to `None`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Fully-qualified tool name, e.g. `SLACK_SEND_MESSAGE`
    pub name: ToolName,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_parameters: Option<Value>,
    /// JSON Schema for the tool's output parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_parameters: Option<Value>,
}

impl Tool {
    /// Creates a schema-less tool descriptor from a bare name.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::Tool;
    ///
    /// let tool = Tool::named("SLACK_SEND_MESSAGE");
    /// assert_eq!(tool.name.as_str(), "SLACK_SEND_MESSAGE");
    /// assert!(tool.input_parameters.is_none());
    /// ```
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: ToolName::new(name),
            description: None,
            input_parameters: None,
            output_parameters: None,
        }
    }
}

/// One trigger-type descriptor from the flat catalogue list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerType {
    /// Fully-qualified trigger-type name, e.g. `SLACK_NEW_MESSAGE`
    pub name: TriggerTypeName,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the trigger's event payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// JSON Schema for the trigger's subscription config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl TriggerType {
    /// Creates a schema-less trigger-type descriptor from a bare name.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_core::TriggerType;
    ///
    /// let trigger = TriggerType::named("SLACK_NEW_MESSAGE");
    /// assert_eq!(trigger.name.as_str(), "SLACK_NEW_MESSAGE");
    /// assert!(trigger.payload.is_none());
    /// ```
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: TriggerTypeName::new(name),
            description: None,
            payload: None,
            config: None,
        }
    }
}

/// The full catalogue snapshot for one generation run.
///
/// Built by the fetch layer and consumed read-only by the index builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All known toolkits
    #[serde(default)]
    pub toolkits: Vec<Toolkit>,
    /// Flat list of tool descriptors across all toolkits
    #[serde(default)]
    pub tools: Vec<Tool>,
    /// Flat list of trigger-type descriptors across all toolkits
    #[serde(default)]
    pub trigger_types: Vec<TriggerType>,
}
