//! Project configuration as seen by the domain.
//!
//! The CLI reads `blueprint.toml` and deserializes it into [`ProjectConfig`];
//! the core never touches the file itself.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Workspace-level configuration: the apps it contains and generator defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_apps")]
    pub apps: Vec<AppDescriptor>,
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            apps: default_apps(),
            defaults: Defaults::default(),
        }
    }
}

impl ProjectConfig {
    /// Look up an app by name or numeric index.
    ///
    /// `None` selects the first configured app.
    pub fn app(&self, identifier: Option<&str>) -> Result<&AppDescriptor, DomainError> {
        if self.apps.is_empty() {
            return Err(DomainError::NoAppsConfigured);
        }

        let Some(identifier) = identifier else {
            return Ok(&self.apps[0]);
        };

        let found = if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            identifier
                .parse::<usize>()
                .ok()
                .and_then(|index| self.apps.get(index))
        } else {
            self.apps
                .iter()
                .find(|app| app.name.as_deref() == Some(identifier))
        };

        found.ok_or_else(|| DomainError::AppNotFound {
            identifier: identifier.to_string(),
        })
    }
}

/// One application inside the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source root relative to the project root, e.g. `src`.
    #[serde(default = "default_source_root")]
    pub root: String,
}

impl Default for AppDescriptor {
    fn default() -> Self {
        Self {
            name: None,
            root: default_source_root(),
        }
    }
}

impl AppDescriptor {
    pub fn named(name: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            root: root.into(),
        }
    }
}

fn default_apps() -> Vec<AppDescriptor> {
    vec![AppDescriptor::default()]
}

fn default_source_root() -> String {
    "src".to_string()
}

/// Defaults consulted when a flag was not given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub service: ServiceDefaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefaults {
    /// Place the service directly in its target directory.
    #[serde(default)]
    pub flat: bool,
    /// Generate the companion `.spec.ts` file.
    #[serde(default = "default_true")]
    pub spec: bool,
}

impl Default for ServiceDefaults {
    fn default() -> Self {
        Self {
            flat: false,
            spec: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_apps() -> ProjectConfig {
        ProjectConfig {
            apps: vec![
                AppDescriptor::named("web", "src"),
                AppDescriptor::named("admin", "apps/admin"),
            ],
            defaults: Defaults::default(),
        }
    }

    #[test]
    fn no_identifier_selects_first_app() {
        assert_eq!(two_apps().app(None).unwrap().name.as_deref(), Some("web"));
    }

    #[test]
    fn lookup_by_name_and_index() {
        let cfg = two_apps();
        assert_eq!(cfg.app(Some("admin")).unwrap().root, "apps/admin");
        assert_eq!(cfg.app(Some("1")).unwrap().root, "apps/admin");
    }

    #[test]
    fn unknown_identifier_is_app_not_found() {
        let cfg = two_apps();
        assert_eq!(
            cfg.app(Some("mobile")),
            Err(DomainError::AppNotFound {
                identifier: "mobile".into()
            })
        );
        assert!(cfg.app(Some("7")).is_err());
    }

    #[test]
    fn empty_app_list_is_configuration_error() {
        let cfg = ProjectConfig {
            apps: vec![],
            defaults: Defaults::default(),
        };
        assert_eq!(cfg.app(None), Err(DomainError::NoAppsConfigured));
    }

    #[test]
    fn service_defaults_nest_and_spec() {
        let d = ServiceDefaults::default();
        assert!(!d.flat);
        assert!(d.spec);
    }
}
