//! `blueprint config`: inspect the effective project configuration.

use blueprint_core::domain::ProjectConfig;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, ProjectContext},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let project = ProjectContext::discover(&cwd)?;

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&project.config, &config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&project.config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&project.file.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(project: &ProjectConfig, user: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.service.flat" => Ok(project.defaults.service.flat.to_string()),
        "defaults.service.spec" => Ok(project.defaults.service.spec.to_string()),
        "apps" => Ok(project
            .apps
            .iter()
            .enumerate()
            .map(|(i, app)| format!("{i}: {} ({})", app.name.as_deref().unwrap_or("-"), app.root))
            .collect::<Vec<_>>()
            .join("\n")),
        "output.no_color" => Ok(user.output.no_color.to_string()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::domain::AppDescriptor;

    #[test]
    fn get_service_defaults() {
        let project = ProjectConfig::default();
        let user = AppConfig::default();
        assert_eq!(
            get_config_value(&project, &user, "defaults.service.flat").unwrap(),
            "false"
        );
        assert_eq!(
            get_config_value(&project, &user, "defaults.service.spec").unwrap(),
            "true"
        );
    }

    #[test]
    fn get_apps_lists_index_name_and_root() {
        let project = ProjectConfig {
            apps: vec![AppDescriptor::named("admin", "projects/admin")],
            ..Default::default()
        };
        assert_eq!(
            get_config_value(&project, &AppConfig::default(), "apps").unwrap(),
            "0: admin (projects/admin)"
        );
    }

    #[test]
    fn get_unknown_key_is_user_error() {
        let err = get_config_value(&ProjectConfig::default(), &AppConfig::default(), "nope")
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
