// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for blueprint.
//!
//! This module contains pure logic with no I/O. Filesystem checks, source
//! parsing and writing are handled via ports defined in the application
//! layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: existence checks are injected as closures
//! - **No external crates**: Only std library, thiserror and serde derives
//! - **Value objects**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod edit;
pub mod entities;
pub mod error;
pub mod naming;
pub mod paths;
pub mod placement;
pub mod registration;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use edit::{InsertChange, ModuleEdit};
pub use entities::{
    AppDescriptor, ArtifactSet, Defaults, FileMapTokens, FileToWrite, GenerateOptions,
    GenerationRequest, ProjectConfig, RelativePath, RenderContext, ResolvedOptions,
    ServiceDefaults, TemplateFile,
};
pub use error::{DomainError, ErrorCategory};
pub use paths::{PathResolver, ResolvedPath};
pub use placement::ArtifactPlacement;
pub use registration::ImportDescriptor;
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Resolve → locate → describe, end to end on pure values
    // ========================================================================

    #[test]
    fn nested_service_next_to_root_module() {
        let app = AppDescriptor::default();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));

        let entity = resolver.resolve("foo", |_| false).unwrap();
        let placement =
            ArtifactPlacement::locate(&entity, false, &naming::dasherize(&entity.name)).unwrap();
        assert_eq!(
            placement.dir().to_slash_string(),
            format!("{}/foo", entity.dir.to_slash_string())
        );

        let host = resolver
            .resolve("app.module.ts", |p| p == Path::new("/p/src/app/app.module.ts"))
            .unwrap()
            .absolute(Path::new("/p"));
        let descriptor = ImportDescriptor::for_service(
            &entity.name,
            host.parent().unwrap(),
            &placement.absolute(Path::new("/p")),
        );
        assert_eq!(descriptor.import_path, "./foo/foo.service");
    }

    #[test]
    fn flat_service_imports_from_same_directory() {
        let app = AppDescriptor::default();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));

        let entity = resolver.resolve("foo", |_| false).unwrap();
        let placement = ArtifactPlacement::locate(&entity, true, "foo").unwrap();
        assert_eq!(placement.dir(), &entity.dir);

        let descriptor = ImportDescriptor::for_service(
            &entity.name,
            Path::new("/p/src/app"),
            &placement.absolute(Path::new("/p")),
        );
        assert_eq!(descriptor.import_path, "./foo.service");
    }

    #[test]
    fn rendered_paths_follow_placement() {
        let tokens = FileMapTokens::new()
            .with("__path__", "src/app/user-profile")
            .with("__name__", naming::dasherize("userProfile"));
        assert_eq!(
            tokens.map_path("__path__/__name__.service.spec.ts"),
            "src/app/user-profile/user-profile.service.spec.ts"
        );
    }
}
