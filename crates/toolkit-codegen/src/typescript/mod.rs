//! TypeScript source emission.
//!
//! Renders the toolkit index and type IR into TypeScript modules:
//! per-toolkit constants with tool/trigger name maps, schema-backed `type`
//! declarations, and an aggregate index module with a closed identifier
//! union and a generic tool-map lookup type.

mod generator;
pub mod render;
mod types;

pub use generator::TypeScriptGenerator;
