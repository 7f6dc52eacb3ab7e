//! The blueprint capability set and the state threaded between its hooks.
//!
//! [`GenerateService`](crate::application::GenerateService) drives any
//! [`Blueprint`] through the same ordered steps:
//!
//! ```text
//! normalize_entity_name → before_install → locals → files
//!     → file_map_tokens → (write files) → after_install → (apply edits)
//! ```
//!
//! Each hook reads what earlier hooks recorded in [`WorkflowState`], so the
//! ordering dependency is visible in the types rather than hidden in
//! shared mutable fields.

use std::fmt;
use std::path::PathBuf;

use crate::{
    application::ports::{Filesystem, ProviderPlanner},
    domain::{
        AppDescriptor, ArtifactPlacement, DomainError, FileMapTokens, GenerationRequest,
        ModuleEdit, ProjectConfig, RenderContext, ResolvedOptions, ResolvedPath, TemplateFile,
    },
    error::BlueprintResult,
};

/// Per-invocation state shared by the hooks of one blueprint run.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub request: GenerationRequest,
    pub app: AppDescriptor,
    /// Set by `normalize_entity_name`.
    pub entity: Option<ResolvedPath>,
    /// Set by `before_install` when a host module was requested.
    pub host_module: Option<PathBuf>,
    /// Set by `locals`.
    pub options: Option<ResolvedOptions>,
    /// Set by `file_map_tokens`.
    pub placement: Option<ArtifactPlacement>,
}

impl WorkflowState {
    pub fn new(request: GenerationRequest, app: AppDescriptor) -> Self {
        Self {
            request,
            app,
            entity: None,
            host_module: None,
            options: None,
            placement: None,
        }
    }

    pub fn entity(&self, step: &'static str) -> Result<&ResolvedPath, DomainError> {
        self.entity
            .as_ref()
            .ok_or(DomainError::StepOutOfOrder { step })
    }

    pub fn options(&self, step: &'static str) -> Result<ResolvedOptions, DomainError> {
        self.options.ok_or(DomainError::StepOutOfOrder { step })
    }

    pub fn placement(&self, step: &'static str) -> Result<&ArtifactPlacement, DomainError> {
        self.placement
            .as_ref()
            .ok_or(DomainError::StepOutOfOrder { step })
    }
}

/// Adapters a hook may use for I/O.
pub struct HookContext<'a> {
    pub filesystem: &'a dyn Filesystem,
    pub planner: &'a dyn ProviderPlanner,
}

/// Non-fatal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The artifact was generated but not registered in any module.
    NotProvided { artifact: &'static str },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotProvided { artifact } => write!(
                f,
                "{artifact} is generated but not provided, it must be provided to be used"
            ),
        }
    }
}

/// Outcome of `after_install`: edits still to apply, plus advisories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInstall {
    pub edits: Vec<ModuleEdit>,
    pub advisories: Vec<Advisory>,
}

/// A template-driven generator definition.
pub trait Blueprint: Send + Sync {
    /// Blueprint name, also the template directory name.
    fn name(&self) -> &'static str;

    /// Resolve the raw entity name and record it on the state.
    fn normalize_entity_name(
        &self,
        state: &mut WorkflowState,
        fs: &dyn Filesystem,
    ) -> BlueprintResult<String>;

    /// Checks that must pass before any file is written.
    fn before_install(&self, state: &mut WorkflowState, fs: &dyn Filesystem)
    -> BlueprintResult<()>;

    /// Template variables; also settles flag defaults.
    fn locals(
        &self,
        state: &mut WorkflowState,
        project: &ProjectConfig,
    ) -> BlueprintResult<RenderContext>;

    /// Filter the template file list.
    fn files(&self, state: &WorkflowState, available: Vec<TemplateFile>) -> Vec<TemplateFile>;

    /// Tokens substituted in template paths.
    fn file_map_tokens(&self, state: &mut WorkflowState) -> BlueprintResult<FileMapTokens>;

    /// Work after files are written. Returns pending edits for the engine
    /// to apply.
    fn after_install(
        &self,
        state: &WorkflowState,
        ctx: &HookContext<'_>,
    ) -> BlueprintResult<PostInstall>;
}
