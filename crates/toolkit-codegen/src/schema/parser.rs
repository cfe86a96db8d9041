//! Recursive-descent translator from JSON-Schema nodes to the type IR.
//!
//! The catalogue's schemas are open-ended and partially untrusted: nodes
//! may nest arbitrarily, reference ancestors (`$ref` within the document),
//! carry unions and enums, or use constructs this generator has never seen.
//! The contract is graceful degradation: the parser never fails, it maps
//! anything unrecognized to `unknown` so one bad upstream schema cannot
//! block generation for the other toolkits.
//!
//! # Cycle handling
//!
//! Node identity (the address of the borrowed `Value`, stable for the
//! lifetime of one traversal) keys the `seen` map. A node is inserted
//! before its children are visited, so a child referencing an ancestor
//! observes the ancestor's entry instead of recursing forever. Any node
//! that is revisited is promoted to a first-class named helper declaration;
//! both the cycle path and the node's own position resolve to a
//! [`TypeIr::Reference`] to that name, never to an in-progress type slot.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::schema::SchemaParser;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "channel": {"type": "string"},
//!         "limit": {"type": "integer"}
//!     },
//!     "required": ["channel"]
//! });
//!
//! let parsed = SchemaParser::new("SendMessageInput").parse(&schema);
//! assert!(parsed.declarations.is_empty());
//! ```

use crate::common::naming::{doc_line, to_pascal_case};
use crate::ir::{FieldIr, LiteralIr, ObjectIr, TypeDeclaration, TypeIr};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Recursion ceiling; schemas nested deeper than this degrade to `unknown`.
const MAX_DEPTH: usize = 64;

/// Caller-supplied escape hatch that may short-circuit any schema node.
///
/// Receives the node and the traversal path; returning `None` declines and
/// lets the normal dispatch rules run.
pub type OverrideHook = dyn Fn(&Value, &[String]) -> Option<TypeIr> + Send + Sync;

/// Result of parsing one schema: the type itself plus any named helper
/// declarations that must be emitted alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedType {
    /// The parsed type expression
    pub ty: TypeIr,
    /// Helper declarations in dependency order (helpers precede the types
    /// that reference them)
    pub declarations: Vec<TypeDeclaration>,
}

/// Translator from a JSON-Schema document into [`TypeIr`].
///
/// One parser instance is configured per schema root; each [`parse`] call
/// owns its own traversal state, so independent schemas may be parsed in
/// any order.
///
/// [`parse`]: SchemaParser::parse
pub struct SchemaParser<'a> {
    root_name: String,
    without_descriptions: bool,
    override_hook: Option<&'a OverrideHook>,
}

impl fmt::Debug for SchemaParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaParser")
            .field("root_name", &self.root_name)
            .field("without_descriptions", &self.without_descriptions)
            .field("has_override", &self.override_hook.is_some())
            .finish()
    }
}

/// Per-node record in the `seen` identity map.
struct SeenEntry {
    /// Forward-declarable helper name, derived from the traversal path
    name: String,
    /// Insertion order, used to emit late declarations deterministically
    ordinal: usize,
    /// Whether any later visit observed this node
    revisited: bool,
    /// Whether a declaration for this node was already pushed
    declared: bool,
    /// The node's finished type, available once its own parse completed
    resolved: Option<TypeIr>,
}

/// Traversal state for one `parse` call (the "refs" context).
struct ParseContext<'v> {
    root: &'v Value,
    path: Vec<String>,
    seen: HashMap<usize, SeenEntry>,
    declarations: Vec<TypeDeclaration>,
    depth: usize,
}

impl<'a> SchemaParser<'a> {
    /// Creates a parser for one schema root.
    ///
    /// `root_name` seeds the stable names given to helper declarations
    /// extracted from this schema (e.g. `SlackSendMessageInput`).
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            without_descriptions: false,
            override_hook: None,
        }
    }

    /// Suppresses `description` documentation on parsed fields.
    #[must_use]
    pub const fn without_descriptions(mut self, suppress: bool) -> Self {
        self.without_descriptions = suppress;
        self
    }

    /// Installs an override hook that may short-circuit any node.
    #[must_use]
    pub fn with_override(mut self, hook: &'a OverrideHook) -> Self {
        self.override_hook = Some(hook);
        self
    }

    /// Parses a schema document into a type plus helper declarations.
    ///
    /// This never fails: malformed or unrecognized fragments degrade to
    /// `unknown` (or `never` for the `false` schema) with a logged warning.
    #[must_use]
    pub fn parse(&self, schema: &Value) -> ParsedType {
        let mut ctx = ParseContext {
            root: schema,
            path: Vec::new(),
            seen: HashMap::new(),
            declarations: Vec::new(),
            depth: 0,
        };

        let ty = self.parse_node(schema, &mut ctx);

        // Nodes revisited only after their own parse completed (a $ref to
        // an earlier sibling) still need their declarations emitted.
        let mut late: Vec<(usize, TypeDeclaration)> = ctx
            .seen
            .into_values()
            .filter(|entry| entry.revisited && !entry.declared)
            .filter_map(|entry| {
                entry.resolved.map(|resolved| {
                    (
                        entry.ordinal,
                        TypeDeclaration {
                            name: entry.name,
                            ty: resolved,
                            doc: None,
                        },
                    )
                })
            })
            .collect();
        late.sort_by_key(|(ordinal, _)| *ordinal);
        ctx.declarations
            .extend(late.into_iter().map(|(_, decl)| decl));

        ParsedType {
            ty,
            declarations: ctx.declarations,
        }
    }

    fn parse_node(&self, node: &Value, ctx: &mut ParseContext<'_>) -> TypeIr {
        if ctx.depth > MAX_DEPTH {
            tracing::warn!(
                path = ctx.path.join("."),
                "schema nesting exceeds depth limit, degrading to unknown"
            );
            return TypeIr::Unknown;
        }

        // Rule 1: a bare boolean is a valid schema ("anything" / "nothing").
        if let Value::Bool(accepts) = node {
            return if *accepts { TypeIr::Unknown } else { TypeIr::Never };
        }

        // Rule 2: caller override may short-circuit; declining falls through.
        if let Some(hook) = self.override_hook
            && let Some(ty) = hook(node, &ctx.path)
        {
            return ty;
        }

        // Within-document $ref resolves against the schema root. The target
        // is an existing node of the same tree, so the cycle guard below
        // catches references back to an ancestor.
        if let Some(target) = node.get("$ref").and_then(Value::as_str) {
            return self.parse_ref(node, target, ctx);
        }

        // Rule 3: identity-keyed cycle guard. Insert before recursing so a
        // descendant referencing this node resolves to its helper name.
        let key = std::ptr::from_ref(node) as usize;
        if let Some(entry) = ctx.seen.get_mut(&key) {
            entry.revisited = true;
            return TypeIr::Reference(entry.name.clone());
        }
        let name = self.helper_name(&ctx.path);
        let ordinal = ctx.seen.len();
        ctx.seen.insert(
            key,
            SeenEntry {
                name,
                ordinal,
                revisited: false,
                declared: false,
                resolved: None,
            },
        );

        let ty = self.dispatch(node, ctx);

        // If a descendant looped back to this node, promote it to a named
        // declaration; the inline position becomes a reference as well.
        let entry = ctx
            .seen
            .get_mut(&key)
            .unwrap_or_else(|| unreachable!("seen entry inserted above"));
        entry.resolved = Some(ty.clone());
        if entry.revisited && !entry.declared {
            entry.declared = true;
            let name = entry.name.clone();
            ctx.declarations.push(TypeDeclaration {
                name: name.clone(),
                ty,
                doc: None,
            });
            return TypeIr::Reference(name);
        }
        ty
    }

    /// Type-shape dispatch, first match wins.
    fn dispatch(&self, node: &Value, ctx: &mut ParseContext<'_>) -> TypeIr {
        // Rule 4: a union wins over a `type` hint carried on the same node.
        if let Some(branches) = node
            .get("anyOf")
            .or_else(|| node.get("oneOf"))
            .and_then(Value::as_array)
        {
            return self.parse_union(branches, ctx);
        }

        match node.get("type").and_then(Value::as_str) {
            Some("string") => TypeIr::String,
            // `number` and `integer` collapse; the targets do not
            // distinguish integer subtypes at the type level.
            Some("number" | "integer") => TypeIr::Number,
            Some("boolean") => TypeIr::Boolean,
            Some("array") => self.parse_array(node, ctx),
            Some("object") => self.parse_object(node, ctx),
            Some("null") => TypeIr::Null,
            _ => {
                if let Some(values) = node.get("enum").and_then(Value::as_array) {
                    return Self::parse_enum(values, ctx);
                }
                // Rule 12: graceful degradation. The catalogue is live and
                // may introduce shapes newer than this generator.
                tracing::debug!(
                    path = ctx.path.join("."),
                    "no dispatch rule matched schema node, degrading to unknown"
                );
                TypeIr::Unknown
            }
        }
    }

    fn parse_ref(&self, node: &Value, target: &str, ctx: &mut ParseContext<'_>) -> TypeIr {
        let Some(pointer) = target.strip_prefix('#') else {
            // Cross-document references are out of scope by design.
            tracing::warn!(reference = target, "external $ref is unsupported, degrading to unknown");
            return TypeIr::Unknown;
        };
        match ctx.root.pointer(pointer) {
            Some(resolved) if std::ptr::eq(resolved, node) => {
                // A node whose pointer resolves to itself carries no shape.
                tracing::warn!(reference = target, "self-resolving $ref, degrading to unknown");
                TypeIr::Unknown
            }
            Some(resolved) => {
                ctx.depth += 1;
                let ty = self.parse_node(resolved, ctx);
                ctx.depth -= 1;
                ty
            }
            None => {
                tracing::warn!(reference = target, "unresolvable $ref, degrading to unknown");
                TypeIr::Unknown
            }
        }
    }

    fn parse_union(&self, branches: &[Value], ctx: &mut ParseContext<'_>) -> TypeIr {
        let parsed = branches
            .iter()
            .enumerate()
            .map(|(i, branch)| {
                ctx.path.push(i.to_string());
                ctx.depth += 1;
                let ty = self.parse_node(branch, ctx);
                ctx.depth -= 1;
                ctx.path.pop();
                ty
            })
            .collect();
        TypeIr::union(parsed)
    }

    fn parse_array(&self, node: &Value, ctx: &mut ParseContext<'_>) -> TypeIr {
        let inner = match node.get("items") {
            Some(items) => {
                ctx.path.push("item".to_string());
                ctx.depth += 1;
                let ty = self.parse_node(items, ctx);
                ctx.depth -= 1;
                ctx.path.pop();
                ty
            }
            None => TypeIr::Unknown,
        };
        TypeIr::Array(Box::new(inner))
    }

    fn parse_object(&self, node: &Value, ctx: &mut ParseContext<'_>) -> TypeIr {
        let Some(properties) = node.get("properties").and_then(Value::as_object) else {
            // No declared properties means an arbitrary bag, not an empty
            // record.
            return TypeIr::Object(ObjectIr::open_map());
        };

        let required: Vec<&str> = node
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let fields = properties
            .iter()
            .map(|(name, prop)| {
                ctx.path.push(name.clone());
                ctx.depth += 1;
                let ty = self.parse_node(prop, ctx);
                ctx.depth -= 1;
                ctx.path.pop();

                let doc = if self.without_descriptions {
                    None
                } else {
                    prop.get("description")
                        .and_then(Value::as_str)
                        .map(doc_line)
                };

                FieldIr {
                    name: name.clone(),
                    ty,
                    required: required.contains(&name.as_str()),
                    doc,
                }
            })
            .collect();

        // Only a literal `additionalProperties: false` closes the record.
        let open = node.get("additionalProperties") != Some(&Value::Bool(false));

        TypeIr::Object(ObjectIr { fields, open })
    }

    fn parse_enum(values: &[Value], ctx: &ParseContext<'_>) -> TypeIr {
        let literals = values
            .iter()
            .map(|value| match value {
                Value::String(s) => TypeIr::Literal(LiteralIr::Str(s.clone())),
                Value::Number(n) => TypeIr::Literal(LiteralIr::Num(n.clone())),
                Value::Bool(b) => TypeIr::Literal(LiteralIr::Bool(*b)),
                Value::Null => TypeIr::Literal(LiteralIr::Null),
                Value::Array(_) | Value::Object(_) => {
                    tracing::warn!(
                        path = ctx.path.join("."),
                        "unsupported enum literal kind, degrading to unknown"
                    );
                    TypeIr::Unknown
                }
            })
            .collect();
        TypeIr::union(literals)
    }

    /// Stable helper name for the node at the given traversal path.
    fn helper_name(&self, path: &[String]) -> String {
        let mut name = self.root_name.clone();
        for segment in path {
            name.push_str(&to_pascal_case(segment));
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(schema: &Value) -> ParsedType {
        SchemaParser::new("Root").parse(schema)
    }

    #[test]
    fn test_boolean_schema_true_is_unknown() {
        assert_eq!(parse(&json!(true)).ty, TypeIr::Unknown);
    }

    #[test]
    fn test_boolean_schema_false_is_never() {
        assert_eq!(parse(&json!(false)).ty, TypeIr::Never);
    }

    #[test]
    fn test_string_type() {
        assert_eq!(parse(&json!({"type": "string"})).ty, TypeIr::String);
    }

    #[test]
    fn test_number_and_integer_collapse() {
        assert_eq!(parse(&json!({"type": "number"})).ty, TypeIr::Number);
        assert_eq!(parse(&json!({"type": "integer"})).ty, TypeIr::Number);
    }

    #[test]
    fn test_boolean_type() {
        assert_eq!(parse(&json!({"type": "boolean"})).ty, TypeIr::Boolean);
    }

    #[test]
    fn test_null_type() {
        assert_eq!(parse(&json!({"type": "null"})).ty, TypeIr::Null);
    }

    #[test]
    fn test_array_with_items() {
        let parsed = parse(&json!({"type": "array", "items": {"type": "string"}}));
        assert_eq!(parsed.ty, TypeIr::Array(Box::new(TypeIr::String)));
    }

    #[test]
    fn test_array_without_items() {
        let parsed = parse(&json!({"type": "array"}));
        assert_eq!(parsed.ty, TypeIr::Array(Box::new(TypeIr::Unknown)));
    }

    #[test]
    fn test_object_without_properties_is_open_map() {
        let parsed = parse(&json!({"type": "object"}));
        assert_eq!(parsed.ty, TypeIr::Object(ObjectIr::open_map()));
    }

    #[test]
    fn test_object_required_and_optional_fields() {
        let parsed = parse(&json!({
            "type": "object",
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "number"}
            },
            "required": ["a"]
        }));

        let TypeIr::Object(obj) = parsed.ty else {
            panic!("expected object");
        };
        let a = obj.fields.iter().find(|f| f.name == "a").unwrap();
        let b = obj.fields.iter().find(|f| f.name == "b").unwrap();
        assert!(a.required);
        assert!(!b.required);
    }

    #[test]
    fn test_object_open_unless_additional_properties_false() {
        let open = parse(&json!({
            "type": "object",
            "properties": {"a": {"type": "string"}}
        }));
        let closed = parse(&json!({
            "type": "object",
            "properties": {"a": {"type": "string"}},
            "additionalProperties": false
        }));

        let TypeIr::Object(open) = open.ty else {
            panic!("expected object");
        };
        let TypeIr::Object(closed) = closed.ty else {
            panic!("expected object");
        };
        assert!(open.open);
        assert!(!closed.open);
    }

    #[test]
    fn test_field_description_becomes_doc() {
        let parsed = parse(&json!({
            "type": "object",
            "properties": {
                "channel": {"type": "string", "description": "Channel ID"}
            }
        }));

        let TypeIr::Object(obj) = parsed.ty else {
            panic!("expected object");
        };
        assert_eq!(obj.fields[0].doc.as_deref(), Some("Channel ID"));
    }

    #[test]
    fn test_descriptions_suppressed() {
        let parsed = SchemaParser::new("Root")
            .without_descriptions(true)
            .parse(&json!({
                "type": "object",
                "properties": {
                    "channel": {"type": "string", "description": "Channel ID"}
                }
            }));

        let TypeIr::Object(obj) = parsed.ty else {
            panic!("expected object");
        };
        assert!(obj.fields[0].doc.is_none());
    }

    #[test]
    fn test_union_takes_precedence_over_type_hint() {
        let parsed = parse(&json!({
            "type": "string",
            "anyOf": [{"type": "string"}, {"type": "number"}]
        }));
        assert_eq!(
            parsed.ty,
            TypeIr::Union(vec![TypeIr::String, TypeIr::Number])
        );
    }

    #[test]
    fn test_one_of_builds_union() {
        let parsed = parse(&json!({
            "oneOf": [{"type": "boolean"}, {"type": "null"}]
        }));
        assert_eq!(parsed.ty, TypeIr::Union(vec![TypeIr::Boolean, TypeIr::Null]));
    }

    #[test]
    fn test_single_branch_union_collapses() {
        let parsed = parse(&json!({"anyOf": [{"type": "string"}]}));
        assert_eq!(parsed.ty, TypeIr::String);
    }

    #[test]
    fn test_enum_of_mixed_literals() {
        let parsed = parse(&json!({"enum": ["high", 3, true, null]}));
        assert_eq!(
            parsed.ty,
            TypeIr::Union(vec![
                TypeIr::Literal(LiteralIr::Str("high".to_string())),
                TypeIr::Literal(LiteralIr::Num(3.into())),
                TypeIr::Literal(LiteralIr::Bool(true)),
                TypeIr::Literal(LiteralIr::Null),
            ])
        );
    }

    #[test]
    fn test_single_element_enum_collapses_to_literal() {
        let parsed = parse(&json!({"enum": ["only"]}));
        assert_eq!(
            parsed.ty,
            TypeIr::Literal(LiteralIr::Str("only".to_string()))
        );
    }

    #[test]
    fn test_empty_enum_is_unknown() {
        assert_eq!(parse(&json!({"enum": []})).ty, TypeIr::Unknown);
    }

    #[test]
    fn test_type_hint_wins_over_enum() {
        // Dispatch order: primitive type rules run before the enum rule.
        let parsed = parse(&json!({"type": "string", "enum": ["a", "b"]}));
        assert_eq!(parsed.ty, TypeIr::String);
    }

    #[test]
    fn test_unrecognized_schema_degrades_to_unknown() {
        assert_eq!(parse(&json!({})).ty, TypeIr::Unknown);
        assert_eq!(parse(&json!({"type": "wormhole"})).ty, TypeIr::Unknown);
        assert_eq!(parse(&json!("not a schema")).ty, TypeIr::Unknown);
    }

    #[test]
    fn test_self_referential_schema_terminates() {
        // A node whose property refers back to the schema root.
        let schema = json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "parent": {"$ref": "#"}
            }
        });

        let parsed = SchemaParser::new("Node").parse(&schema);

        // The revisited root becomes a named forward declaration and the
        // top-level type is a reference to it.
        assert!(parsed.ty.is_reference_to("Node"));
        assert_eq!(parsed.declarations.len(), 1);
        assert_eq!(parsed.declarations[0].name, "Node");

        let TypeIr::Object(obj) = &parsed.declarations[0].ty else {
            panic!("expected object declaration");
        };
        let parent = obj.fields.iter().find(|f| f.name == "parent").unwrap();
        assert!(parent.ty.is_reference_to("Node"));
    }

    #[test]
    fn test_transitive_cycle_terminates() {
        let schema = json!({
            "type": "object",
            "properties": {
                "child": {
                    "type": "object",
                    "properties": {
                        "grandchild": {"$ref": "#/properties/child"}
                    }
                }
            }
        });

        let parsed = SchemaParser::new("Tree").parse(&schema);
        assert_eq!(parsed.declarations.len(), 1);
        assert_eq!(parsed.declarations[0].name, "TreeChild");

        let TypeIr::Object(root) = &parsed.ty else {
            panic!("expected object");
        };
        assert!(root.fields[0].ty.is_reference_to("TreeChild"));
    }

    #[test]
    fn test_ref_to_completed_sibling_emits_declaration() {
        // The second property references the first, which finished parsing
        // before the reference is reached.
        let schema = json!({
            "type": "object",
            "properties": {
                "first": {"type": "object", "properties": {"x": {"type": "number"}}},
                "second": {"$ref": "#/properties/first"}
            }
        });

        let parsed = SchemaParser::new("Pair").parse(&schema);
        assert_eq!(parsed.declarations.len(), 1);
        assert_eq!(parsed.declarations[0].name, "PairFirst");

        let TypeIr::Object(obj) = &parsed.ty else {
            panic!("expected object");
        };
        let second = obj.fields.iter().find(|f| f.name == "second").unwrap();
        assert!(second.ty.is_reference_to("PairFirst"));
    }

    #[test]
    fn test_unresolvable_ref_degrades_to_unknown() {
        let parsed = parse(&json!({"$ref": "#/definitions/missing"}));
        assert_eq!(parsed.ty, TypeIr::Unknown);
        assert!(parsed.declarations.is_empty());
    }

    #[test]
    fn test_external_ref_degrades_to_unknown() {
        let parsed = parse(&json!({"$ref": "https://example.com/schema.json"}));
        assert_eq!(parsed.ty, TypeIr::Unknown);
    }

    #[test]
    fn test_depth_limit_degrades_instead_of_overflowing() {
        // Build nesting deeper than MAX_DEPTH.
        let mut schema = json!({"type": "string"});
        for _ in 0..(MAX_DEPTH * 2) {
            schema = json!({
                "type": "object",
                "properties": {"inner": schema}
            });
        }

        let parsed = parse(&schema);
        // Must terminate; the innermost layers degrade to unknown.
        assert!(matches!(parsed.ty, TypeIr::Object(_)));
    }

    #[test]
    fn test_override_hook_short_circuits() {
        let hook = |node: &Value, _path: &[String]| {
            node.get("x-opaque")
                .is_some()
                .then_some(TypeIr::Reference("Opaque".to_string()))
        };
        let parser = SchemaParser::new("Root").with_override(&hook);

        let parsed = parser.parse(&json!({"type": "string", "x-opaque": true}));
        assert!(parsed.ty.is_reference_to("Opaque"));

        // Declining falls through to the normal rules.
        let parsed = parser.parse(&json!({"type": "string"}));
        assert_eq!(parsed.ty, TypeIr::String);
    }

    #[test]
    fn test_helper_names_follow_traversal_path() {
        let parser = SchemaParser::new("SlackSendMessageInput");
        assert_eq!(
            parser.helper_name(&["blocks".to_string(), "item".to_string()]),
            "SlackSendMessageInputBlocksItem"
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let schema = json!({
            "type": "object",
            "properties": {
                "b": {"type": "string"},
                "a": {"$ref": "#/properties/b"},
                "c": {"$ref": "#/properties/b"}
            }
        });

        let first = SchemaParser::new("Root").parse(&schema);
        let second = SchemaParser::new("Root").parse(&schema);
        assert_eq!(first, second);
    }
}
