//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use blueprint_core::domain::GenerateOptions;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "blueprint",
    bin_name = "blueprint",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Angular artifacts from blueprints",
    long_about = "blueprint generates services inside an Angular-style workspace \
                  and registers them as providers in a host module.",
    after_help = "EXAMPLES:\n\
        \x20 blueprint generate service user-profile\n\
        \x20 blueprint g s shared/logger --flat --module app.module\n\
        \x20 blueprint init\n\
        \x20 blueprint completions bash > /usr/share/bash-completion/completions/blueprint",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an artifact from a blueprint.
    #[command(
        visible_alias = "g",
        about = "Generate an artifact",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 blueprint generate service foo\n\
            \x20 blueprint g s admin/audit --module admin/admin.module --spec=false"
    )]
    Generate(GenerateCommands),

    /// Initialise a blueprint project file.
    #[command(
        about = "Create blueprint.toml in the current directory",
        after_help = "EXAMPLES:\n\
            \x20 blueprint init\n\
            \x20 blueprint init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 blueprint completions bash > ~/.local/share/bash-completion/completions/blueprint\n\
            \x20 blueprint completions zsh  > ~/.zfunc/_blueprint\n\
            \x20 blueprint completions fish > ~/.config/fish/completions/blueprint.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the project configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 blueprint config get defaults.service.flat\n\
            \x20 blueprint config list\n\
            \x20 blueprint config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Blueprints available to `blueprint generate`.
#[derive(Debug, Subcommand)]
pub enum GenerateCommands {
    /// Generate an injectable service.
    #[command(visible_alias = "s")]
    Service(ServiceArgs),
}

/// Arguments for `blueprint generate service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service name, optionally with a path (`admin/audit`, `/shared/logger`).
    #[arg(value_name = "NAME", help = "Service name or path")]
    pub name: String,

    /// Place the files directly in the target directory.
    #[arg(
        long = "flat",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Do not create a folder for the service"
    )]
    pub flat: Option<bool>,

    /// Generate the companion spec file.
    #[arg(
        long = "spec",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL",
        help = "Generate a .spec.ts file (--spec=false to skip)"
    )]
    pub spec: Option<bool>,

    /// Module that should provide the service.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Host module to register the provider in"
    )]
    pub module: Option<String>,

    /// App to generate into, by name or index.
    #[arg(
        short = 'a',
        long = "app",
        value_name = "APP",
        help = "Target app name or index"
    )]
    pub app: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(
        short = 'd',
        long = "dry-run",
        help = "Show what would be created without creating"
    )]
    pub dry_run: bool,

    /// Overwrite existing files (destructive).
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

impl ServiceArgs {
    /// Translate flags into the core option record.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            flat: self.flat,
            spec: self.spec,
            module: self.module.clone(),
            app: self.app.clone(),
            dry_run: self.dry_run,
            force: self.force,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `blueprint init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing project file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing blueprint.toml")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `blueprint completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `blueprint config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.service.spec`.
        key: String,
    },
    /// Print the effective project configuration.
    List,
    /// Print the path to the active project file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
