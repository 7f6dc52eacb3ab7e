//! The `service` blueprint: an injectable class plus optional spec file,
//! optionally registered as a provider in a host module.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        blueprint::{Advisory, Blueprint, HookContext, PostInstall, WorkflowState},
        ports::Filesystem,
    },
    domain::{
        ArtifactPlacement, DomainValidator as validator, FileMapTokens, ImportDescriptor,
        PathResolver, ProjectConfig, RenderContext, TemplateFile, naming::dasherize,
    },
    error::BlueprintResult,
};

/// Template path fragment identifying the companion test file.
pub const SPEC_FILE_PATTERN: &str = "__name__.service.spec.ts";

const MODULE_EXTENSION: &str = ".ts";

/// Generates `<name>.service.ts` and registers it when `--module` is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceBlueprint;

impl Blueprint for ServiceBlueprint {
    fn name(&self) -> &'static str {
        "service"
    }

    #[instrument(skip_all, fields(name = %state.request.name()))]
    fn normalize_entity_name(
        &self,
        state: &mut WorkflowState,
        fs: &dyn Filesystem,
    ) -> BlueprintResult<String> {
        let request = &state.request;
        let resolver = PathResolver::new(request.project_root(), &state.app, request.cwd());
        let resolved = resolver.resolve(request.name(), |p| fs.exists(p))?;

        validator::validate_entity_name(&resolved.name)?;
        debug!(dir = %resolved.dir, name = %resolved.name, "Entity resolved");

        let name = resolved.name.clone();
        state.entity = Some(resolved);
        Ok(name)
    }

    #[instrument(skip_all)]
    fn before_install(
        &self,
        state: &mut WorkflowState,
        fs: &dyn Filesystem,
    ) -> BlueprintResult<()> {
        let Some(module) = state.request.options().module.clone() else {
            return Ok(());
        };

        let module_path = if module.ends_with(MODULE_EXTENSION) {
            module.clone()
        } else {
            format!("{module}{MODULE_EXTENSION}")
        };

        let request = &state.request;
        let resolver = PathResolver::new(request.project_root(), &state.app, request.cwd());
        let host = resolver
            .resolve(&module_path, |p| fs.exists(p))?
            .absolute(request.project_root());

        if !fs.exists(&host) {
            return Err(ApplicationError::HostModuleNotFound { module, path: host }.into());
        }

        debug!(host = %host.display(), "Host module found");
        state.host_module = Some(host);
        Ok(())
    }

    fn locals(
        &self,
        state: &mut WorkflowState,
        project: &ProjectConfig,
    ) -> BlueprintResult<RenderContext> {
        let options = state
            .request
            .options()
            .resolve(&project.defaults.service);
        state.options = Some(options);

        let entity = state.entity("locals")?;
        Ok(RenderContext::new(&entity.name)
            .with_variable("DYNAMIC_PATH", entity.dir.to_slash_string())
            .with_variable("FLAT", options.flat.to_string()))
    }

    fn files(&self, state: &WorkflowState, available: Vec<TemplateFile>) -> Vec<TemplateFile> {
        let keep_spec = state.options.is_none_or(|o| o.spec);
        if keep_spec {
            return available;
        }
        available
            .into_iter()
            .filter(|f| !f.path.contains(SPEC_FILE_PATTERN))
            .collect()
    }

    fn file_map_tokens(&self, state: &mut WorkflowState) -> BlueprintResult<FileMapTokens> {
        let options = state.options("file_map_tokens")?;
        let entity = state.entity("file_map_tokens")?;
        let dasherized = dasherize(&entity.name);

        let placement = ArtifactPlacement::locate(entity, options.flat, &dasherized)?;
        let tokens = FileMapTokens::new()
            .with("__path__", placement.dir().to_slash_string())
            .with("__name__", dasherized);

        state.placement = Some(placement);
        Ok(tokens)
    }

    #[instrument(skip_all)]
    fn after_install(
        &self,
        state: &WorkflowState,
        ctx: &HookContext<'_>,
    ) -> BlueprintResult<PostInstall> {
        let Some(host) = &state.host_module else {
            return Ok(PostInstall {
                edits: Vec::new(),
                advisories: vec![Advisory::NotProvided { artifact: "Service" }],
            });
        };

        let entity = state.entity("after_install")?;
        let placement = state.placement("after_install")?;
        let host_dir = host.parent().unwrap_or(state.request.project_root());

        let descriptor = ImportDescriptor::for_service(
            &entity.name,
            host_dir,
            &placement.absolute(state.request.project_root()),
        );
        debug!(
            class = %descriptor.class_name,
            import = %descriptor.import_path,
            "Planning provider registration"
        );

        let source = ctx.filesystem.read_to_string(host)?;
        let edit = ctx.planner.plan(host, &source, &descriptor)?;

        Ok(PostInstall {
            edits: vec![edit],
            advisories: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::ports::{MockFilesystem, MockProviderPlanner},
        domain::{
            AppDescriptor, DomainError, GenerateOptions, GenerationRequest, InsertChange,
            ModuleEdit,
        },
        error::BlueprintError,
    };

    fn state(name: &str, options: GenerateOptions) -> WorkflowState {
        WorkflowState::new(
            GenerationRequest::new(name, "/p", "/p").with_options(options),
            AppDescriptor::default(),
        )
    }

    fn fs_with(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.iter().any(|e| Path::new(e) == p));
        fs
    }

    fn templates() -> Vec<TemplateFile> {
        vec![
            TemplateFile::new("__path__/__name__.service.ts", ""),
            TemplateFile::new("__path__/__name__.service.spec.ts", ""),
        ]
    }

    #[test]
    fn before_install_without_module_is_noop() {
        let mut st = state("foo", GenerateOptions::default());
        let fs = MockFilesystem::new();
        ServiceBlueprint.before_install(&mut st, &fs).unwrap();
        assert!(st.host_module.is_none());
    }

    #[test]
    fn before_install_appends_extension_and_records_host() {
        let mut st = state(
            "foo",
            GenerateOptions {
                module: Some("app.module".into()),
                ..Default::default()
            },
        );
        let fs = fs_with(&["/p/src/app/app.module.ts"]);
        ServiceBlueprint.before_install(&mut st, &fs).unwrap();
        assert_eq!(
            st.host_module,
            Some(PathBuf::from("/p/src/app/app.module.ts"))
        );
    }

    #[test]
    fn before_install_fails_when_host_is_missing() {
        let mut st = state(
            "foo",
            GenerateOptions {
                module: Some("shared/shared.module.ts".into()),
                ..Default::default()
            },
        );
        let fs = fs_with(&[]);
        let err = ServiceBlueprint.before_install(&mut st, &fs).unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Application(ApplicationError::HostModuleNotFound { ref path, .. })
                if path == Path::new("/p/src/app/shared/shared.module.ts")
        ));
    }

    #[test]
    fn files_drops_spec_when_disabled() {
        let mut st = state(
            "foo",
            GenerateOptions {
                spec: Some(false),
                ..Default::default()
            },
        );
        ServiceBlueprint.locals_for_test(&mut st);
        let kept = ServiceBlueprint.files(&st, templates());
        assert_eq!(kept.len(), 1);
        assert!(kept.iter().all(|f| !f.path.contains(SPEC_FILE_PATTERN)));
    }

    #[test]
    fn files_keeps_spec_by_default() {
        let mut st = state("foo", GenerateOptions::default());
        ServiceBlueprint.locals_for_test(&mut st);
        assert_eq!(ServiceBlueprint.files(&st, templates()).len(), 2);
    }

    #[test]
    fn file_map_tokens_nests_unless_flat() {
        let mut nested = state("userProfile", GenerateOptions::default());
        ServiceBlueprint.locals_for_test(&mut nested);
        let tokens = ServiceBlueprint.file_map_tokens(&mut nested).unwrap();
        assert_eq!(tokens.get("__path__"), Some("src/app/user-profile"));
        assert_eq!(tokens.get("__name__"), Some("user-profile"));

        let mut flat = state(
            "userProfile",
            GenerateOptions {
                flat: Some(true),
                ..Default::default()
            },
        );
        ServiceBlueprint.locals_for_test(&mut flat);
        let tokens = ServiceBlueprint.file_map_tokens(&mut flat).unwrap();
        assert_eq!(tokens.get("__path__"), Some("src/app"));
    }

    #[test]
    fn file_map_tokens_before_locals_is_out_of_order() {
        let mut st = state("foo", GenerateOptions::default());
        let err = ServiceBlueprint.file_map_tokens(&mut st).unwrap_err();
        assert!(matches!(
            err,
            BlueprintError::Domain(DomainError::StepOutOfOrder { .. })
        ));
    }

    #[test]
    fn after_install_without_host_emits_one_advisory() {
        let mut st = state("foo", GenerateOptions::default());
        ServiceBlueprint.locals_for_test(&mut st);
        let fs = MockFilesystem::new();
        let planner = MockProviderPlanner::new();
        let ctx = HookContext {
            filesystem: &fs,
            planner: &planner,
        };

        let post = ServiceBlueprint.after_install(&st, &ctx).unwrap();
        assert!(post.edits.is_empty());
        assert_eq!(post.advisories, vec![Advisory::NotProvided { artifact: "Service" }]);
    }

    #[test]
    fn after_install_plans_against_host_source() {
        let mut st = state(
            "foo",
            GenerateOptions {
                module: Some("app.module".into()),
                ..Default::default()
            },
        );
        ServiceBlueprint.locals_for_test(&mut st);
        ServiceBlueprint.file_map_tokens(&mut st).unwrap();
        st.host_module = Some(PathBuf::from("/p/src/app/app.module.ts"));

        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .with(eq(Path::new("/p/src/app/app.module.ts")))
            .returning(|_| Ok("module source".to_string()));

        let mut planner = MockProviderPlanner::new();
        planner
            .expect_plan()
            .withf(|host, source, d| {
                host == Path::new("/p/src/app/app.module.ts")
                    && source == "module source"
                    && d.import_path == "./foo/foo.service"
                    && d.class_name == "FooService"
            })
            .times(1)
            .returning(|host, _, _| {
                Ok(ModuleEdit::new(host).with_change(InsertChange::new(0, "x", "test")))
            });

        let ctx = HookContext {
            filesystem: &fs,
            planner: &planner,
        };
        let post = ServiceBlueprint.after_install(&st, &ctx).unwrap();
        assert_eq!(post.edits.len(), 1);
        assert!(post.advisories.is_empty());
    }

    impl ServiceBlueprint {
        /// Resolve the entity without a filesystem and run `locals`.
        fn locals_for_test(&self, st: &mut WorkflowState) {
            let fs = fs_with(&[]);
            self.normalize_entity_name(st, &fs).unwrap();
            self.locals(st, &ProjectConfig::default()).unwrap();
        }
    }
}
