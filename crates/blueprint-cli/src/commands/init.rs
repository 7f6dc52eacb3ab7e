//! `blueprint init`: write a default `blueprint.toml`.

use crate::{
    cli::InitArgs,
    config::{PROJECT_FILE, default_project_toml},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create `blueprint.toml` in the current directory.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising project...")?;

    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let project_file = cwd.join(PROJECT_FILE);

    // Bail early if the file already exists and --force was not given.
    if project_file.exists() && !args.force {
        output.warning(&format!(
            "{} already exists  (use --force to overwrite)",
            project_file.display(),
        ))?;
        return Ok(());
    }

    let contents = default_project_toml()?;
    std::fs::write(&project_file, contents)
        .with_cli_context(|| format!("Failed to write '{}'", project_file.display()))?;

    output.success(&format!("Project file created at {}", project_file.display()))?;
    Ok(())
}
