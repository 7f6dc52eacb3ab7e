use std::path::{Path, PathBuf};

use crate::domain::{DomainError, RelativePath, ResolvedPath};

/// Where the generated artifact's files are written, relative to project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlacement {
    dir: RelativePath,
}

impl ArtifactPlacement {
    /// Compute the output directory for a resolved name.
    ///
    /// Flat layouts use the resolved directory as-is; nested layouts append
    /// the dasherized name as one more segment.
    pub fn locate(
        resolved: &ResolvedPath,
        flat: bool,
        dasherized_name: &str,
    ) -> Result<Self, DomainError> {
        let dir = if flat {
            resolved.dir.clone()
        } else {
            resolved.dir.join(dasherized_name)?
        };
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &RelativePath {
        &self.dir
    }

    pub fn absolute(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.dir.as_path())
    }
}
