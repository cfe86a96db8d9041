//! Python source emission.
//!
//! Renders the toolkit index and type IR into Python modules: per-toolkit
//! classes with tool/trigger name maps and schema-backed `TypedDict`
//! declarations, plus an aggregate package index. The TypeScript generic
//! lookup type has no Python equivalent; the plain `TOOLKITS` mapping
//! substitutes for it.

mod generator;
pub mod render;
mod types;

pub use generator::PythonGenerator;
