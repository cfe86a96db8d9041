//! Source-code generation for toolkit SDKs.
//!
//! Transforms a toolkit/tool/trigger catalogue with JSON-Schema-shaped
//! parameter descriptions into statically-typed TypeScript and Python
//! source files, generated from one shared type IR.
//!
//! # Pipeline
//!
//! 1. [`ToolkitIndex`] groups the flat tool and trigger-type lists under
//!    their owning toolkits (prefix-based association).
//! 2. [`SchemaParser`] lazily translates each JSON-Schema node into the
//!    language-agnostic [`TypeIr`], collecting helper declarations and
//!    guarding against self-referential schemas.
//! 3. [`TypeScriptGenerator`] and [`PythonGenerator`] walk the index and
//!    render per-toolkit modules plus an aggregate index module, in either
//!    multi-file or single-file mode.
//!
//! The output is a list of `(path, content)` pairs; writing files to disk
//! and fetching the catalogue are the caller's responsibility.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod common;
pub mod index;
pub mod ir;
pub mod options;
pub mod python;
pub mod schema;
pub mod template_engine;
pub mod typescript;

pub use common::{GeneratedCode, SourceFile};
pub use index::{ToolEntry, ToolkitEntry, ToolkitIndex, TriggerEntry};
pub use ir::{FieldIr, LiteralIr, ObjectIr, TypeDeclaration, TypeIr};
pub use options::EmitOptions;
pub use python::PythonGenerator;
pub use schema::{ParsedType, SchemaParser};
pub use typescript::TypeScriptGenerator;
