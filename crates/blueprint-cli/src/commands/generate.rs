//! Implementation of `blueprint generate`.
//!
//! Responsibility: locate the workspace, wire the adapters into the core
//! generation service, and display the report. No business logic lives here.

use std::path::Path;

use serde_json::json;
use tracing::{debug, info, instrument};

use blueprint_adapters::{LocalFilesystem, ProjectTemplates, TypeScriptPlanner};
use blueprint_core::{
    application::{GenerateService, GenerationReport, ServiceBlueprint},
    domain::GenerationRequest,
};

use crate::{
    cli::{GenerateCommands, OutputFormat, ServiceArgs},
    config::ProjectContext,
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, Status},
};

/// Dispatch to the requested blueprint.
pub fn execute(cmd: GenerateCommands, output: OutputManager) -> CliResult<()> {
    match cmd {
        GenerateCommands::Service(args) => service(args, output),
    }
}

/// Execute `blueprint generate service`.
///
/// 1. Find `blueprint.toml` upwards from the working directory
/// 2. Run the service blueprint against the local filesystem
/// 3. Print one status line per touched file, then any advisories
#[instrument(skip_all, fields(name = %args.name))]
fn service(args: ServiceArgs, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    let project = ProjectContext::discover(&cwd)?;
    debug!(root = %project.root.display(), "Project located");

    let generator = GenerateService::new(
        Box::new(ProjectTemplates::new(&project.root)),
        Box::new(TypeScriptPlanner::new()),
        Box::new(LocalFilesystem::new()),
    );

    let request =
        GenerationRequest::new(&args.name, &project.root, &cwd).with_options(args.options());
    let report = generator.generate(&ServiceBlueprint, request, &project.config)?;

    info!(
        created = report.created.len(),
        updated = report.updated.len(),
        dry_run = report.dry_run,
        "Generation finished"
    );

    if output.format() == OutputFormat::Json {
        output.print(&report_json(&report)?)?;
        return Ok(());
    }
    print_report(&report, &output)
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for path in &report.created {
        output.status(Status::Create, &display(path))?;
    }
    for path in &report.updated {
        output.status(Status::Update, &display(path))?;
    }
    for advisory in &report.advisories {
        output.status(Status::Warning, &advisory.to_string())?;
    }

    if report.dry_run {
        output.print("")?;
        output.info("NOTE: The \"dry-run\" flag means no changes were made.")?;
    }
    Ok(())
}

fn report_json(report: &GenerationReport) -> CliResult<String> {
    let paths = |list: &[std::path::PathBuf]| list.iter().map(|p| display(p)).collect::<Vec<_>>();
    let value = json!({
        "created": paths(&report.created),
        "updated": paths(&report.updated),
        "warnings": report
            .advisories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "dry_run": report.dry_run,
    });

    serde_json::to_string_pretty(&value).map_err(|e| CliError::from(std::io::Error::other(e)))
}

/// Forward-slash form of a project-relative path.
fn display(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use blueprint_core::application::Advisory;

    use super::*;

    #[test]
    fn report_json_lists_paths_and_warnings() {
        let report = GenerationReport {
            created: vec![PathBuf::from("src/app/foo/foo.service.ts")],
            updated: vec![],
            advisories: vec![Advisory::NotProvided { artifact: "Service" }],
            dry_run: true,
        };

        let value: serde_json::Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
        assert_eq!(value["created"][0], "src/app/foo/foo.service.ts");
        assert_eq!(value["updated"].as_array().map(Vec::len), Some(0));
        assert!(
            value["warnings"][0]
                .as_str()
                .is_some_and(|w| w.starts_with("Service is generated but not provided"))
        );
        assert_eq!(value["dry_run"], true);
    }

    #[test]
    fn display_joins_with_forward_slashes() {
        assert_eq!(
            display(Path::new("src").join("app").join("x.ts").as_path()),
            "src/app/x.ts"
        );
    }
}
