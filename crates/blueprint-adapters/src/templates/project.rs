//! Project-local template overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use blueprint_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateFile,
    error::BlueprintResult,
};

use super::BuiltinTemplates;

/// Directory under the project root holding overrides.
pub const OVERRIDES_DIR: &str = "blueprints";

/// Reads `<root>/blueprints/<name>/files/**` when that directory exists and
/// falls back to [`BuiltinTemplates`] otherwise.
#[derive(Debug, Clone)]
pub struct ProjectTemplates {
    project_root: PathBuf,
    fallback: BuiltinTemplates,
}

impl ProjectTemplates {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            fallback: BuiltinTemplates,
        }
    }

    /// Override directory for one blueprint.
    pub fn files_dir(&self, blueprint: &str) -> PathBuf {
        self.project_root
            .join(OVERRIDES_DIR)
            .join(blueprint)
            .join("files")
    }

    fn load_dir(&self, dir: &Path) -> BlueprintResult<Vec<TemplateFile>> {
        let io_error = |path: &Path, e: &dyn std::fmt::Display| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| io_error(dir, &e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let abs = entry.path();
            let rel = abs.strip_prefix(dir).map_err(|e| io_error(abs, &e))?;
            let content = fs::read_to_string(abs).map_err(|e| io_error(abs, &e))?;
            files.push(TemplateFile::new(
                rel.to_string_lossy().replace('\\', "/"),
                content,
            ));
        }
        Ok(files)
    }
}

impl TemplateSource for ProjectTemplates {
    #[instrument(skip(self), fields(root = %self.project_root.display()))]
    fn files(&self, blueprint: &str) -> BlueprintResult<Vec<TemplateFile>> {
        let dir = self.files_dir(blueprint);
        if !dir.is_dir() {
            return self.fallback.files(blueprint);
        }

        let files = self.load_dir(&dir)?;
        debug!(dir = %dir.display(), count = files.len(), "Loaded project templates");
        Ok(files)
    }
}
