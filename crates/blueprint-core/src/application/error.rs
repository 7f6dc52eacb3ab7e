//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! path rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running a blueprint.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The `--module` reference does not point to an existing file.
    #[error("Module specified does not exist: '{module}' (looked for {path})")]
    HostModuleNotFound { module: String, path: PathBuf },

    /// The host module could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ModuleParse { path: PathBuf, reason: String },

    /// The host module parsed, but the registration list was not found.
    #[error("Cannot register provider in {path}: expected {expected}")]
    StructuralMismatch { path: PathBuf, expected: String },

    /// A generated file would overwrite an existing one.
    #[error("File already exists: {path}")]
    ArtifactExists { path: PathBuf },

    /// No template files are available for the blueprint.
    #[error("No template files found for blueprint '{blueprint}'")]
    TemplatesNotFound { blueprint: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory state lock was poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::HostModuleNotFound { module, path } => vec![
                format!("No module file at {}", path.display()),
                format!(
                    "'{}' is resolved relative to the app root; '.ts' is appended when missing",
                    module
                ),
                "Nothing was generated".into(),
            ],
            Self::ModuleParse { path, .. } => vec![
                format!("Fix the syntax error in {}", path.display()),
                "Generated files were rolled back".into(),
            ],
            Self::StructuralMismatch { path, .. } => vec![
                format!(
                    "{} must contain an @NgModule({{ ... }}) decorator with an object literal",
                    path.display()
                ),
                "A `providers` property, when present, must be an array literal".into(),
                "Or omit --module and register the service manually".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or choose a different name".into(),
            ],
            Self::TemplatesNotFound { blueprint } => vec![
                format!("Check blueprints/{}/files in your project", blueprint),
                "Remove the directory to fall back to the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HostModuleNotFound { .. } | Self::TemplatesNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ModuleParse { .. }
            | Self::StructuralMismatch { .. }
            | Self::ArtifactExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
