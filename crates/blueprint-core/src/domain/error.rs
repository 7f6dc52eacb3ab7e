// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Invalid path: \"{name}\" cannot be above the \"{app_root}\" directory")]
    PathOutsideAppRoot { name: String, app_root: String },

    #[error("Duplicate path in generated files: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Edit for {path} is invalid: {reason}")]
    InvalidEdit { path: String, reason: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("App config not found: no app with name or index '{identifier}'")]
    AppNotFound { identifier: String },

    #[error("Unable to find any apps in the project configuration")]
    NoAppsConfigured,

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Workflow step '{step}' ran before its inputs were resolved")]
    StepOutOfOrder { step: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { name, reason } => vec![
                format!("'{}' cannot be used as a name: {}", name, reason),
                "Names start with a letter and use letters, digits, '-' or '_'".into(),
                "Examples: user-profile, auth/session, dataStore".into(),
            ],
            Self::PathOutsideAppRoot { app_root, .. } => vec![
                format!("Generated files must live under '{}'", app_root),
                "Remove leading '..' segments from the name".into(),
            ],
            Self::AppNotFound { identifier } => vec![
                format!("No app named or indexed '{}' in blueprint.toml", identifier),
                "Pass --app with a configured app name, or an index such as 0".into(),
                "Try: blueprint config get apps".into(),
            ],
            Self::NoAppsConfigured => vec![
                "Add an [[apps]] table to blueprint.toml".into(),
                "Or run: blueprint init".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. } | Self::PathOutsideAppRoot { .. } => {
                ErrorCategory::Validation
            }
            Self::AppNotFound { .. } | Self::NoAppsConfigured => ErrorCategory::Configuration,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
