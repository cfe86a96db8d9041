//! Core types and errors for the toolkit SDK code generator.
//!
//! This crate provides the foundational types shared by the generation
//! pipeline: strong domain newtypes for toolkit and tool identifiers, the
//! catalogue input models handed over by the fetch layer, and the error
//! hierarchy used across the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - Strong domain types (`ToolkitId`, `ToolkitSlug`, `ToolName`,
//!   `TriggerTypeName`)
//! - Catalogue input models (`Toolkit`, `Tool`, `TriggerType`, `Catalog`)
//! - Error hierarchy with contextual information

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;
mod error;
mod types;

pub use catalog::{Catalog, Tool, Toolkit, TriggerType};
pub use error::{Error, Result};
pub use types::{ToolName, ToolkitId, ToolkitSlug, TriggerTypeName};
