//! Toolkit index: the normalized, toolkit-grouped view of the catalogue.
//!
//! The builder associates every fully-qualified tool and trigger-type name
//! with its owning toolkit by prefix match (`SLACK_SEND_MESSAGE` belongs to
//! `SLACK`), producing one entry per toolkit. The index is created fresh
//! per generation run, never mutated after construction, and consumed
//! read-only by both emitters.
//!
//! Iteration order is a pure function of catalogue input order: entries and
//! their tools/triggers are plain `Vec`s, so repeated runs over identical
//! input produce byte-identical output.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::ToolkitIndex;
//! use toolkit_core::{Catalog, Tool, Toolkit, ToolkitId, ToolkitSlug};
//!
//! let catalog = Catalog {
//!     toolkits: vec![Toolkit {
//!         identifier: ToolkitId::new("SLACK"),
//!         slug: ToolkitSlug::new("slack"),
//!         description: None,
//!     }],
//!     tools: vec![Tool::named("SLACK_SEND_MESSAGE")],
//!     trigger_types: vec![],
//! };
//!
//! let index = ToolkitIndex::build(&catalog).unwrap();
//! assert_eq!(index.entries[0].tools[0].short_name, "SEND_MESSAGE");
//! ```

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use toolkit_core::{Catalog, Error, Result, ToolName, ToolkitId, ToolkitSlug, TriggerTypeName};

/// One tool grouped under its toolkit.
#[derive(Debug, Clone, Serialize)]
pub struct ToolEntry {
    /// Name with the toolkit prefix stripped, e.g. `SEND_MESSAGE`
    pub short_name: String,
    /// The original fully-qualified name, e.g. `SLACK_SEND_MESSAGE`
    pub qualified_name: ToolName,
    /// Tool description, if the catalogue provided one
    pub description: Option<String>,
    /// JSON Schema for input parameters
    pub input_parameters: Option<Value>,
    /// JSON Schema for output parameters
    pub output_parameters: Option<Value>,
}

/// One trigger type grouped under its toolkit.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerEntry {
    /// Name with the toolkit prefix stripped, e.g. `NEW_MESSAGE`
    pub short_name: String,
    /// The original fully-qualified name, e.g. `SLACK_NEW_MESSAGE`
    pub qualified_name: TriggerTypeName,
    /// Trigger description, if the catalogue provided one
    pub description: Option<String>,
    /// JSON Schema for the event payload
    pub payload: Option<Value>,
    /// JSON Schema for the subscription config
    pub config: Option<Value>,
}

/// One toolkit with its associated tools and trigger types.
///
/// Toolkits with zero tools and triggers still get an entry so every known
/// toolkit has a corresponding generated module.
#[derive(Debug, Clone, Serialize)]
pub struct ToolkitEntry {
    /// Canonical identifier, e.g. `SLACK`
    pub identifier: ToolkitId,
    /// Slug, e.g. `slack`
    pub slug: ToolkitSlug,
    /// Toolkit description, if the catalogue provided one
    pub description: Option<String>,
    /// Tools in catalogue input order
    pub tools: Vec<ToolEntry>,
    /// Trigger types in catalogue input order
    pub trigger_types: Vec<TriggerEntry>,
}

/// The toolkit-grouped view of one catalogue snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ToolkitIndex {
    /// Entries in catalogue input order
    pub entries: Vec<ToolkitEntry>,
}

impl ToolkitIndex {
    /// Builds the index from a catalogue snapshot.
    ///
    /// Tools and trigger types are associated to the toolkit whose
    /// identifier is the longest `IDENT_` prefix of their name; names that
    /// match no toolkit are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateToolkit`] if two toolkits share an
    /// identifier. Identifiers name generated declarations, so a duplicate
    /// would collide inside one emitted file.
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let mut ids = HashSet::new();
        for toolkit in &catalog.toolkits {
            if !ids.insert(toolkit.identifier.as_str()) {
                return Err(Error::DuplicateToolkit {
                    identifier: toolkit.identifier.as_str().to_string(),
                });
            }
        }

        let mut entries: Vec<ToolkitEntry> = catalog
            .toolkits
            .iter()
            .map(|toolkit| ToolkitEntry {
                identifier: toolkit.identifier.clone(),
                slug: toolkit.slug.clone(),
                description: toolkit.description.clone(),
                tools: Vec::new(),
                trigger_types: Vec::new(),
            })
            .collect();

        for tool in &catalog.tools {
            match find_owner(&entries, tool.name.as_str()) {
                Some((owner, short_name)) => {
                    entries[owner].tools.push(ToolEntry {
                        short_name,
                        qualified_name: tool.name.clone(),
                        description: tool.description.clone(),
                        input_parameters: tool.input_parameters.clone(),
                        output_parameters: tool.output_parameters.clone(),
                    });
                }
                None => {
                    tracing::warn!(tool = tool.name.as_str(), "tool matches no toolkit, skipping");
                }
            }
        }

        for trigger in &catalog.trigger_types {
            match find_owner(&entries, trigger.name.as_str()) {
                Some((owner, short_name)) => {
                    entries[owner].trigger_types.push(TriggerEntry {
                        short_name,
                        qualified_name: trigger.name.clone(),
                        description: trigger.description.clone(),
                        payload: trigger.payload.clone(),
                        config: trigger.config.clone(),
                    });
                }
                None => {
                    tracing::warn!(
                        trigger = trigger.name.as_str(),
                        "trigger type matches no toolkit, skipping"
                    );
                }
            }
        }

        tracing::debug!(
            toolkits = entries.len(),
            tools = catalog.tools.len(),
            trigger_types = catalog.trigger_types.len(),
            "built toolkit index"
        );

        Ok(Self { entries })
    }

    /// Returns a copy of the index restricted to the given slugs, in index
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownToolkitFilter`] (listing the valid slugs) if
    /// any requested slug is not in the index. Surfaced before any
    /// generation work so a mistyped filter cannot produce partial output.
    pub fn filtered(&self, slugs: &[String]) -> Result<Self> {
        for slug in slugs {
            if !self.entries.iter().any(|e| e.slug.as_str() == slug) {
                return Err(Error::UnknownToolkitFilter {
                    slug: slug.clone(),
                    available: self
                        .entries
                        .iter()
                        .map(|e| e.slug.as_str().to_string())
                        .collect(),
                });
            }
        }

        Ok(Self {
            entries: self
                .entries
                .iter()
                .filter(|e| slugs.iter().any(|s| s == e.slug.as_str()))
                .cloned()
                .collect(),
        })
    }

    /// Returns `true` if the index contains no toolkits.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds the toolkit owning a fully-qualified name by longest `IDENT_`
/// prefix; returns the entry position and the remaining short name.
fn find_owner(entries: &[ToolkitEntry], qualified: &str) -> Option<(usize, String)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            qualified.len() > entry.identifier.as_str().len() + 1
                && qualified.starts_with(entry.identifier.as_str())
                && qualified.as_bytes()[entry.identifier.as_str().len()] == b'_'
        })
        .max_by_key(|(_, entry)| entry.identifier.as_str().len())
        .map(|(position, entry)| {
            let short = qualified[entry.identifier.as_str().len() + 1..].to_string();
            (position, short)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolkit_core::{Tool, Toolkit, TriggerType};

    fn toolkit(identifier: &str, slug: &str) -> Toolkit {
        Toolkit {
            identifier: ToolkitId::new(identifier),
            slug: ToolkitSlug::new(slug),
            description: None,
        }
    }

    #[test]
    fn test_groups_tools_by_prefix() {
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack"), toolkit("GMAIL", "gmail")],
            tools: vec![
                Tool::named("SLACK_SEND_MESSAGE"),
                Tool::named("GMAIL_SEND_EMAIL"),
                Tool::named("SLACK_LIST_CHANNELS"),
            ],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        assert_eq!(index.entries.len(), 2);

        let slack = &index.entries[0];
        assert_eq!(slack.tools.len(), 2);
        assert_eq!(slack.tools[0].short_name, "SEND_MESSAGE");
        assert_eq!(slack.tools[1].short_name, "LIST_CHANNELS");

        let gmail = &index.entries[1];
        assert_eq!(gmail.tools.len(), 1);
        assert_eq!(gmail.tools[0].short_name, "SEND_EMAIL");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack"), toolkit("SLACK_ADMIN", "slack-admin")],
            tools: vec![Tool::named("SLACK_ADMIN_REVOKE_SESSION")],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        assert!(index.entries[0].tools.is_empty());
        assert_eq!(index.entries[1].tools[0].short_name, "REVOKE_SESSION");
    }

    #[test]
    fn test_groups_trigger_types() {
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack")],
            tools: vec![],
            trigger_types: vec![TriggerType::named("SLACK_NEW_MESSAGE")],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        assert_eq!(index.entries[0].trigger_types.len(), 1);
        assert_eq!(index.entries[0].trigger_types[0].short_name, "NEW_MESSAGE");
    }

    #[test]
    fn test_toolkit_without_tools_still_emitted() {
        let catalog = Catalog {
            toolkits: vec![toolkit("NOTION", "notion")],
            tools: vec![],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        assert_eq!(index.entries.len(), 1);
        assert!(index.entries[0].tools.is_empty());
        assert!(index.entries[0].trigger_types.is_empty());
    }

    #[test]
    fn test_unmatched_tool_is_skipped() {
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack")],
            tools: vec![Tool::named("GMAIL_SEND_EMAIL")],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        assert!(index.entries[0].tools.is_empty());
    }

    #[test]
    fn test_bare_identifier_does_not_match() {
        // "SLACK" and "SLACK_" carry no short name to key the tool map by.
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack")],
            tools: vec![Tool::named("SLACK"), Tool::named("SLACK_")],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        assert!(index.entries[0].tools.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_fails() {
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack"), toolkit("SLACK", "slack-two")],
            tools: vec![],
            trigger_types: vec![],
        };

        let err = ToolkitIndex::build(&catalog).unwrap_err();
        assert!(err.is_duplicate_toolkit());
    }

    #[test]
    fn test_filtered_keeps_index_order() {
        let catalog = Catalog {
            toolkits: vec![
                toolkit("SLACK", "slack"),
                toolkit("GMAIL", "gmail"),
                toolkit("NOTION", "notion"),
            ],
            tools: vec![],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        let filtered = index
            .filtered(&["notion".to_string(), "slack".to_string()])
            .unwrap();

        let slugs: Vec<&str> = filtered.entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["slack", "notion"]);
    }

    #[test]
    fn test_filter_unknown_slug_lists_available() {
        let catalog = Catalog {
            toolkits: vec![toolkit("SLACK", "slack")],
            tools: vec![],
            trigger_types: vec![],
        };

        let index = ToolkitIndex::build(&catalog).unwrap();
        let err = index.filtered(&["slak".to_string()]).unwrap_err();
        assert!(err.is_unknown_filter());
        assert!(format!("{err}").contains("slack"));
    }

    #[test]
    fn test_empty_catalog_builds_empty_index() {
        let index = ToolkitIndex::build(&Catalog::default()).unwrap();
        assert!(index.is_empty());
    }
}
