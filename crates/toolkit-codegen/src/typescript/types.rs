//! Template contexts for TypeScript emission.

use crate::common::NameMapEntry;
use serde::Serialize;

/// Context for the `typescript/toolkit` template.
#[derive(Debug, Serialize)]
pub struct ToolkitContext {
    /// Declaration identifier for the exported constant
    pub identifier: String,
    /// Toolkit slug embedded in the constant
    pub slug: String,
    /// Single-line doc comment text, if any
    pub doc: Option<String>,
    /// Tool name map entries (keys pre-quoted where needed)
    pub tools: Vec<NameMapEntry>,
    /// Trigger-type name map entries (keys pre-quoted where needed)
    pub trigger_types: Vec<NameMapEntry>,
    /// Pre-rendered type declaration sections
    pub type_sections: Vec<String>,
}

/// One entry of the aggregate `Toolkits` mapping.
#[derive(Debug, Serialize)]
pub struct IndexEntry {
    /// Mapping key: the catalogue identifier, quoted where needed
    pub identifier: String,
    /// Expression the key maps to (`slack.SLACK` in multi-file mode,
    /// `SLACK` in single-file mode)
    pub value: String,
}

/// Context for the `typescript/index` template.
#[derive(Debug, Serialize)]
pub struct IndexContext {
    /// Pre-rendered banner comment, if any
    pub banner: Option<String>,
    /// Pre-rendered import statements (empty in single-file mode)
    pub imports: Vec<String>,
    /// Aggregate mapping entries
    pub entries: Vec<IndexEntry>,
    /// Pre-rendered union of toolkit identifier literals, or `never`
    pub toolkit_union: String,
}
