use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Rendered files ready for materialization under the project root.
///
/// This is the output of template rendering. It contains no business
/// logic, only data.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ArtifactSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.files.push(FileToWrite { path, content });
    }

    pub fn with_file(mut self, path: RelativePath, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            let path = file.path.to_slash_string();
            if path.is_empty() {
                return Err(DomainError::InvalidEntityName {
                    name: path,
                    reason: "generated file path is empty".into(),
                });
            }
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Absolute location of a file in this set.
    pub fn absolute(&self, file: &FileToWrite) -> PathBuf {
        self.root.join(file.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(p: &str) -> RelativePath {
        RelativePath::try_new(p).unwrap()
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let set = ArtifactSet::new("/p")
            .with_file(rel("src/app/a.ts"), String::new())
            .with_file(rel("src/app/a.ts"), String::new());
        assert!(matches!(
            set.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn absolute_is_rooted_at_project() {
        let set = ArtifactSet::new("/p").with_file(rel("src/app/a.ts"), "x".into());
        let file = set.files().next().unwrap();
        assert_eq!(set.absolute(file), PathBuf::from("/p/src/app/a.ts"));
    }
}
