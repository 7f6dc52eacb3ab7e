//! Generate Service - main application orchestrator.
//!
//! This service drives a [`Blueprint`] through one generation run:
//! 1. Resolve the entity and check the host module
//! 2. Render templates into an artifact set
//! 3. Write files, then apply host module edits
//!
//! Any failure after the first write removes the files this run created
//! and restores module sources it changed.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        blueprint::{Advisory, Blueprint, HookContext, WorkflowState},
        ports::{Filesystem, ProviderPlanner, TemplateSource},
    },
    domain::{
        ArtifactSet, DomainValidator as validator, GenerationRequest, ModuleEdit, ProjectConfig,
        RelativePath,
    },
    error::BlueprintResult,
};

/// What a run wrote (or would write, for a dry run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Generated files, relative to the project root.
    pub created: Vec<PathBuf>,
    /// Host modules edited, relative to the project root.
    pub updated: Vec<PathBuf>,
    pub advisories: Vec<Advisory>,
    pub dry_run: bool,
}

/// Main generation service.
pub struct GenerateService {
    templates: Box<dyn TemplateSource>,
    planner: Box<dyn ProviderPlanner>,
    filesystem: Box<dyn Filesystem>,
}

/// Writes performed so far, for rollback.
#[derive(Default)]
struct Journal {
    created: Vec<PathBuf>,
    /// Directories this run created, outermost first.
    created_dirs: Vec<PathBuf>,
    replaced: Vec<(PathBuf, String)>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use blueprint_core::application::{GenerateService, ports::*};
    ///
    /// let service = GenerateService::new(
    ///     templates,  // impl TemplateSource
    ///     planner,    // impl ProviderPlanner
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        templates: Box<dyn TemplateSource>,
        planner: Box<dyn ProviderPlanner>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            planner,
            filesystem,
        }
    }

    /// Run `blueprint` for `request` inside `project`.
    #[instrument(
        skip_all,
        fields(
            blueprint = blueprint.name(),
            name = %request.name(),
            dry_run = request.options().dry_run
        )
    )]
    pub fn generate(
        &self,
        blueprint: &dyn Blueprint,
        request: GenerationRequest,
        project: &ProjectConfig,
    ) -> BlueprintResult<GenerationReport> {
        request.validate()?;

        let app = project.app(request.options().app.as_deref())?.clone();
        let dry_run = request.options().dry_run;
        let force = request.options().force;
        let project_root = request.project_root().to_path_buf();
        let mut state = WorkflowState::new(request, app);

        // 1. Pre-write hooks
        let name = blueprint.normalize_entity_name(&mut state, self.filesystem.as_ref())?;
        info!(entity = %name, "Generating {}", blueprint.name());
        blueprint.before_install(&mut state, self.filesystem.as_ref())?;

        // 2. Render
        let context = blueprint.locals(&mut state, project)?;
        let available = self.templates.files(blueprint.name())?;
        if available.is_empty() {
            return Err(ApplicationError::TemplatesNotFound {
                blueprint: blueprint.name().to_string(),
            }
            .into());
        }
        let selected = blueprint.files(&state, available);
        let tokens = blueprint.file_map_tokens(&mut state)?;

        let mut artifacts = ArtifactSet::new(project_root.clone());
        for template in &selected {
            let path = RelativePath::try_new(tokens.map_path(&template.path))?;
            artifacts.add_file(path, context.render(&template.content));
        }
        validator::validate_artifacts(&artifacts)?;
        debug!(files = artifacts.len(), "Templates rendered");

        // 3. Conflicts
        if !force {
            if let Some(existing) = artifacts
                .files()
                .map(|f| artifacts.absolute(f))
                .find(|p| self.filesystem.exists(p))
            {
                return Err(ApplicationError::ArtifactExists { path: existing }.into());
            }
        }

        let hooks = HookContext {
            filesystem: self.filesystem.as_ref(),
            planner: self.planner.as_ref(),
        };

        if dry_run {
            let post = blueprint.after_install(&state, &hooks)?;
            info!("Dry run, nothing written");
            return Ok(GenerationReport {
                created: artifacts
                    .files()
                    .map(|f| f.path.as_path().to_path_buf())
                    .collect(),
                updated: relative_all(&project_root, post.edits.iter().map(ModuleEdit::path)),
                advisories: post.advisories,
                dry_run: true,
            });
        }

        // 4. Write, then register
        let mut journal = Journal::default();
        let outcome = self
            .write_artifacts(&artifacts, &mut journal)
            .and_then(|()| blueprint.after_install(&state, &hooks))
            .and_then(|post| {
                self.apply_edits(&post.edits, &mut journal)?;
                Ok(post)
            });

        match outcome {
            Ok(post) => {
                info!(
                    created = artifacts.len(),
                    updated = post.edits.len(),
                    "Generation completed successfully"
                );
                Ok(GenerationReport {
                    created: artifacts
                        .files()
                        .map(|f| f.path.as_path().to_path_buf())
                        .collect(),
                    updated: relative_all(
                        &project_root,
                        post.edits.iter().map(ModuleEdit::path),
                    ),
                    advisories: post.advisories,
                    dry_run: false,
                })
            }
            Err(e) => {
                warn!(error = %e, "Generation failed, attempting rollback");
                self.rollback(journal);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_artifacts(&self, artifacts: &ArtifactSet, journal: &mut Journal) -> BlueprintResult<()> {
        for file in artifacts.files() {
            let path = artifacts.absolute(file);
            if let Some(parent) = path.parent() {
                let mut missing: Vec<PathBuf> = parent
                    .ancestors()
                    .take_while(|dir| !dir.as_os_str().is_empty() && !self.filesystem.exists(dir))
                    .map(Path::to_path_buf)
                    .collect();
                self.filesystem.create_dir_all(parent)?;
                missing.reverse();
                journal.created_dirs.extend(missing);
            }

            let existed = self.filesystem.exists(&path);
            self.filesystem.write_file(&path, &file.content)?;
            if !existed {
                journal.created.push(path);
            }
        }
        Ok(())
    }

    /// Apply every edit; the first failure stops the run.
    fn apply_edits(&self, edits: &[ModuleEdit], journal: &mut Journal) -> BlueprintResult<()> {
        for edit in edits.iter().filter(|e| !e.is_empty()) {
            let source = self.filesystem.read_to_string(edit.path())?;
            let updated = edit.apply_to(&source)?;
            self.filesystem.write_file(edit.path(), &updated)?;
            journal.replaced.push((edit.path().to_path_buf(), source));
            debug!(path = %edit.path().display(), changes = edit.changes().len(), "Module updated");
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, journal: Journal) {
        for (path, original) in journal.replaced.into_iter().rev() {
            if let Err(e) = self.filesystem.write_file(&path, &original) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        for path in journal.created.into_iter().rev() {
            if let Err(e) = self.filesystem.remove_file(&path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        // Deepest first; `remove_dir` leaves anything non-empty alone.
        for dir in journal.created_dirs.into_iter().rev() {
            if let Err(e) = self.filesystem.remove_dir(&dir) {
                warn!(error = %e, path = %dir.display(), "Rollback failed");
            }
        }
        info!("Rollback finished");
    }
}

fn relative_all<'a>(root: &Path, paths: impl Iterator<Item = &'a Path>) -> Vec<PathBuf> {
    paths
        .map(|p| p.strip_prefix(root).unwrap_or(p).to_path_buf())
        .collect()
}
