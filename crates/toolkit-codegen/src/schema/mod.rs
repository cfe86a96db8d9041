//! JSON-Schema interpretation.
//!
//! The parser is the only place that reads raw schema nodes; everything
//! downstream works with the type IR it produces.

mod parser;

pub use parser::{OverrideHook, ParsedType, SchemaParser};
