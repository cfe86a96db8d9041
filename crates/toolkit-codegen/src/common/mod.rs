//! Code shared between the TypeScript and Python emitters.
//!
//! This module contains the output types and naming utilities used by both
//! target languages. Nothing here is language-specific.

pub mod emit;
pub mod naming;
pub mod types;

pub use types::{GeneratedCode, NameMapEntry, SourceFile};
