//! Resolution of user-supplied names against an app's source tree.
//!
//! The resolver is pure: filesystem existence checks are injected as a
//! closure so the application layer can route them through its
//! `Filesystem` port.

use std::path::{Path, PathBuf};

use crate::domain::{
    AppDescriptor, DomainError, RelativePath,
    entities::common::normalize_lexically,
    naming::dasherize,
};

/// Directory and base name of a resolved target, relative to project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Containing directory, relative to project root.
    pub dir: RelativePath,
    /// File or entity name with extension, no separators.
    pub base: String,
    /// `base` without its final extension.
    pub name: String,
    /// App root (`<source root>/app`), relative to project root.
    pub app_root: RelativePath,
}

impl ResolvedPath {
    /// Absolute path of `dir/base` under `project_root`.
    pub fn absolute(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.dir.as_path()).join(&self.base)
    }
}

/// Resolves names the way the generator's `<name>` and `--module`
/// arguments are interpreted.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    project_root: &'a Path,
    app: &'a AppDescriptor,
    cwd: &'a Path,
}

impl<'a> PathResolver<'a> {
    pub fn new(project_root: &'a Path, app: &'a AppDescriptor, cwd: &'a Path) -> Self {
        Self {
            project_root,
            app,
            cwd,
        }
    }

    /// Absolute app root: `<project>/<app.root>/app`.
    pub fn app_root(&self) -> PathBuf {
        normalize_lexically(&self.project_root.join(&self.app.root).join("app"))
    }

    /// Resolve `raw_name` into a project-relative directory and base name.
    ///
    /// - a leading `/` anchors the name at the app root
    /// - otherwise a working directory inside the app root is used as base
    /// - otherwise the app root is used as base
    ///
    /// Missing intermediate directories are matched against existing
    /// `+segment` folders, then fall back to the dasherized segment.
    pub fn resolve(
        &self,
        raw_name: &str,
        exists: impl Fn(&Path) -> bool,
    ) -> Result<ResolvedPath, DomainError> {
        let name = raw_name.trim().replace('\\', "/");
        if name.is_empty() {
            return Err(DomainError::InvalidEntityName {
                name: raw_name.to_string(),
                reason: "name cannot be empty".into(),
            });
        }

        let project_root = normalize_lexically(self.project_root);
        let app_root = self.app_root();
        let cwd = normalize_lexically(self.cwd);

        let joined = if let Some(anchored) = name.strip_prefix('/') {
            app_root.join(anchored)
        } else if cwd.starts_with(&app_root) {
            cwd.join(&name)
        } else {
            app_root.join(&name)
        };
        let mut output = normalize_lexically(&joined);

        let app_root_display = relative_display(&app_root, &project_root);
        let outside = || DomainError::PathOutsideAppRoot {
            name: raw_name.to_string(),
            app_root: app_root_display.clone(),
        };

        if !output.starts_with(&app_root) {
            return Err(outside());
        }
        if output == app_root {
            return Err(DomainError::InvalidEntityName {
                name: raw_name.to_string(),
                reason: "name must point below the app root".into(),
            });
        }

        if !exists(&output) {
            output = match_existing_segments(&app_root, &output, &exists);
        }

        let base = output
            .file_name()
            .map(|b| b.to_string_lossy().into_owned())
            .ok_or_else(outside)?;
        let name = Path::new(&base)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| base.clone());

        let dir = output
            .parent()
            .and_then(|p| p.strip_prefix(&project_root).ok())
            .ok_or_else(outside)?;

        Ok(ResolvedPath {
            dir: RelativePath::try_new(dir)?,
            base,
            name,
            app_root: RelativePath::try_new(
                app_root
                    .strip_prefix(&project_root)
                    .map_err(|_| outside())?,
            )?,
        })
    }
}

/// Rebuild the directory part of `output` segment by segment below
/// `app_root`, preferring folders that already exist on disk.
fn match_existing_segments(
    app_root: &Path,
    output: &Path,
    exists: &impl Fn(&Path) -> bool,
) -> PathBuf {
    let Some(parent) = output.parent() else {
        return output.to_path_buf();
    };
    let Ok(below_root) = parent.strip_prefix(app_root) else {
        return output.to_path_buf();
    };

    let mut current = app_root.to_path_buf();
    for segment in below_root.iter() {
        let segment = segment.to_string_lossy();
        let plain = current.join(&*segment);
        let lazy = current.join(format!("+{segment}"));

        current = if exists(&plain) {
            plain
        } else if exists(&lazy) {
            lazy
        } else {
            current.join(dasherize(&segment))
        };
    }

    match output.file_name() {
        Some(base) => current.join(base),
        None => current,
    }
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .and_then(|p| RelativePath::try_new(p).ok())
        .map(|p| p.to_slash_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn app() -> AppDescriptor {
        AppDescriptor::default()
    }

    fn nothing_exists(_: &Path) -> bool {
        false
    }

    #[test]
    fn plain_name_resolves_under_app_root() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        let resolved = resolver.resolve("foo", nothing_exists).unwrap();
        assert_eq!(resolved.dir.to_slash_string(), "src/app");
        assert_eq!(resolved.base, "foo");
        assert_eq!(resolved.name, "foo");
        assert_eq!(resolved.app_root.to_slash_string(), "src/app");
    }

    #[test]
    fn nested_name_keeps_directory_and_dasherizes_missing_segments() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        let resolved = resolver.resolve("coreStuff/userProfile", nothing_exists).unwrap();
        assert_eq!(resolved.dir.to_slash_string(), "src/app/core-stuff");
        assert_eq!(resolved.name, "userProfile");
    }

    #[test]
    fn module_file_keeps_extension_in_base_only() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        let resolved = resolver.resolve("app.module.ts", nothing_exists).unwrap();
        assert_eq!(resolved.base, "app.module.ts");
        assert_eq!(resolved.name, "app.module");
        assert_eq!(resolved.absolute(Path::new("/p")), PathBuf::from("/p/src/app/app.module.ts"));
    }

    #[test]
    fn cwd_inside_app_root_is_the_base() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p/src/app/admin"));
        let resolved = resolver.resolve("foo", nothing_exists).unwrap();
        assert_eq!(resolved.dir.to_slash_string(), "src/app/admin");
    }

    #[test]
    fn leading_slash_anchors_at_app_root_even_from_nested_cwd() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p/src/app/admin"));
        let resolved = resolver.resolve("/foo", nothing_exists).unwrap();
        assert_eq!(resolved.dir.to_slash_string(), "src/app");
    }

    #[test]
    fn lazy_route_folder_is_preferred_when_present() {
        let app = app();
        let existing: HashSet<PathBuf> = [PathBuf::from("/p/src/app/+admin")].into();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        let resolved = resolver
            .resolve("admin/foo", |p| existing.contains(p))
            .unwrap();
        assert_eq!(resolved.dir.to_slash_string(), "src/app/+admin");
    }

    #[test]
    fn escaping_the_app_root_is_rejected() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        let err = resolver.resolve("../../foo", nothing_exists).unwrap_err();
        assert!(matches!(err, DomainError::PathOutsideAppRoot { ref app_root, .. } if app_root == "src/app"));
    }

    #[test]
    fn custom_source_root_is_honoured() {
        let app = AppDescriptor::named("admin", "apps/admin/src");
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        let resolved = resolver.resolve("foo", nothing_exists).unwrap();
        assert_eq!(resolved.dir.to_slash_string(), "apps/admin/src/app");
    }

    #[test]
    fn empty_and_root_names_are_invalid() {
        let app = app();
        let resolver = PathResolver::new(Path::new("/p"), &app, Path::new("/p"));
        assert!(resolver.resolve("", nothing_exists).is_err());
        assert!(resolver.resolve("/", nothing_exists).is_err());
    }
}
