//! Template contexts for Python emission.

use crate::common::NameMapEntry;
use serde::Serialize;

/// Context for the `python/toolkit` template.
#[derive(Debug, Serialize)]
pub struct ToolkitContext {
    /// Declaration identifier for the class
    pub identifier: String,
    /// Toolkit slug embedded in the class
    pub slug: String,
    /// Single-line docstring text, if any
    pub doc: Option<String>,
    /// Tool dict entries
    pub tools: Vec<NameMapEntry>,
    /// Trigger-type dict entries
    pub trigger_types: Vec<NameMapEntry>,
    /// Pre-rendered type declaration sections
    pub type_sections: Vec<String>,
}

/// One entry of the aggregate `TOOLKITS` mapping.
#[derive(Debug, Serialize)]
pub struct IndexEntry {
    /// Mapping key: the catalogue identifier (the template quotes it)
    pub identifier: String,
    /// Class name the key maps to (sanitized declaration identifier)
    pub value: String,
}

/// Context for the `python/index` template.
#[derive(Debug, Serialize)]
pub struct IndexContext {
    /// Pre-rendered banner comment, if any
    pub banner: Option<String>,
    /// Pre-rendered `typing` import lines (empty in single-file mode,
    /// where the module header already imports them)
    pub typing_imports: String,
    /// Pre-rendered per-toolkit import statements
    pub imports: Vec<String>,
    /// Aggregate mapping entries
    pub entries: Vec<IndexEntry>,
    /// Pre-rendered `Literal[...]` union of identifiers, or `Never`
    pub toolkit_union: String,
}
