//! Configuration.
//!
//! Two files are involved:
//!
//! - [`AppConfig`]: per-user output preferences, read from the platform
//!   config directory (or `--config`).
//! - [`ProjectContext`]: the workspace's `blueprint.toml`, found by walking
//!   up from the working directory. Its directory is the project root.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, prefix `BLUEPRINT_`, nested keys joined by `__`
//!    (e.g. `BLUEPRINT_DEFAULTS__SERVICE__SPEC=false`)
//! 3. Config file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use blueprint_core::domain::ProjectConfig;

use crate::error::{CliError, CliResult};

/// Name of the project file marking a workspace root.
pub const PROJECT_FILE: &str = "blueprint.toml";

const ENV_PREFIX: &str = "BLUEPRINT";

/// User-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

impl AppConfig {
    /// Load the user configuration.
    ///
    /// `config_file` is the path passed via `--config`; `None` uses
    /// [`Self::config_path`]. A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        debug!(path = %path.display(), "Loading user configuration");

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.blueprint-user.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "blueprint", "blueprint")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".blueprint-user.toml"))
    }
}

/// A discovered workspace: its root, project file, and parsed configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub file: PathBuf,
    pub config: ProjectConfig,
}

impl ProjectContext {
    /// Walk up from `start` to the nearest directory holding `blueprint.toml`.
    pub fn discover(start: &Path) -> CliResult<Self> {
        let file = start
            .ancestors()
            .map(|dir| dir.join(PROJECT_FILE))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| CliError::ProjectNotFound {
                start: start.to_path_buf(),
            })?;

        Self::load(&file)
    }

    /// Load a specific project file.
    pub fn load(file: &Path) -> CliResult<Self> {
        let root = file
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| CliError::ConfigError {
                message: format!("'{}' has no parent directory", file.display()),
                source: None,
            })?;
        debug!(file = %file.display(), "Loading project configuration");

        let config = Config::builder()
            .add_source(File::from(file).format(FileFormat::Toml).required(true))
            .add_source(env_source())
            .build()
            .and_then(|settings| settings.try_deserialize::<ProjectConfig>())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load '{}': {e}", file.display()),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            root,
            file: file.to_path_buf(),
            config,
        })
    }
}

/// Contents written by `blueprint init`.
pub fn default_project_toml() -> CliResult<String> {
    toml::to_string_pretty(&ProjectConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default project file: {e}"),
        source: Some(Box::new(e)),
    })
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
