//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `blueprint-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ImportDescriptor, ModuleEdit, TemplateFile};
use crate::error::BlueprintResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `blueprint_adapters::filesystem::LocalFilesystem` (production)
/// - `blueprint_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BlueprintResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> BlueprintResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> BlueprintResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> BlueprintResult<()>;

    /// Remove a directory. Fails unless it is empty.
    fn remove_dir(&self, path: &Path) -> BlueprintResult<()>;
}

/// Port for the template files a blueprint ships with.
///
/// Implemented by:
/// - `blueprint_adapters::templates::BuiltinTemplates` (compiled in)
/// - `blueprint_adapters::templates::ProjectTemplates` (project overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// All template files for `blueprint`, paths still tokenised.
    fn files(&self, blueprint: &str) -> BlueprintResult<Vec<TemplateFile>>;
}

/// Port for planning a provider registration inside a host module.
///
/// Implementations parse `source` and return the described edit without
/// touching disk.
///
/// Implemented by:
/// - `blueprint_adapters::planner::TypeScriptPlanner` (tree-sitter)
#[cfg_attr(test, mockall::automock)]
pub trait ProviderPlanner: Send + Sync {
    fn plan(
        &self,
        host: &Path,
        source: &str,
        descriptor: &ImportDescriptor,
    ) -> BlueprintResult<ModuleEdit>;
}
