//! Infrastructure adapters for blueprint.
//!
//! This crate implements the ports defined in `blueprint-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod planner;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use planner::TypeScriptPlanner;
pub use templates::{BuiltinTemplates, ProjectTemplates};
