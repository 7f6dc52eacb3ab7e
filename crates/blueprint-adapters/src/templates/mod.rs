//! Template sources.
//!
//! [`BuiltinTemplates`] ships the default blueprint files compiled into the
//! binary. [`ProjectTemplates`] lets a project override them by placing
//! files under `blueprints/<name>/files/` at its root.

mod builtin;
mod project;

pub use builtin::BuiltinTemplates;
pub use project::ProjectTemplates;
