use std::path::{Path, PathBuf};

use crate::domain::{DomainError, ServiceDefaults};

/// Typed option record for one generator invocation.
///
/// `flat` and `spec` stay `None` when the user did not pass them, so the
/// configured defaults can fill them in later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub flat: Option<bool>,
    pub spec: Option<bool>,
    /// Host module reference, e.g. `app.module` or `core/core.module.ts`.
    pub module: Option<String>,
    /// App name or numeric index.
    pub app: Option<String>,
    pub dry_run: bool,
    pub force: bool,
}

impl GenerateOptions {
    /// Fill unset flags from configuration.
    pub fn resolve(&self, defaults: &ServiceDefaults) -> ResolvedOptions {
        ResolvedOptions {
            flat: self.flat.unwrap_or(defaults.flat),
            spec: self.spec.unwrap_or(defaults.spec),
        }
    }
}

/// Flags after configuration defaults were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub flat: bool,
    pub spec: bool,
}

/// What the user asked to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    project_root: PathBuf,
    cwd: PathBuf,
    options: GenerateOptions,
}

impl GenerationRequest {
    pub fn new(
        name: impl Into<String>,
        project_root: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            project_root: project_root.into(),
            cwd: cwd.into(),
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Checked once at the entry of the workflow.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidEntityName {
                name: self.name.clone(),
                reason: "name cannot be empty".into(),
            });
        }
        for path in [&self.project_root, &self.cwd] {
            if !path.is_absolute() {
                return Err(DomainError::InvalidEntityName {
                    name: self.name.clone(),
                    reason: format!("'{}' must be an absolute path", path.display()),
                });
            }
        }
        if let Some(module) = &self.options.module {
            if module.trim().is_empty() {
                return Err(DomainError::InvalidEntityName {
                    name: module.clone(),
                    reason: "module reference cannot be empty".into(),
                });
            }
        }
        Ok(())
    }
}
