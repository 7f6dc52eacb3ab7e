//! Flags accepted before or after any `blueprint` subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what generation is doing; repeat for more detail.
    ///
    /// Logs go to stderr. `-v` reports each resolved path and file written,
    /// `-vv` adds the host module edit plan, `-vvv` traces every hook.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail to stderr (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output; `NO_COLOR` in the environment does the same.
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// User-level settings file, used in place of `<config dir>/blueprint/config.toml`.
    ///
    /// This is not the project's `blueprint.toml`, which is always discovered
    /// from the working directory.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured `create`/`update` lines and advisories.
    Human,
    /// The same lines without colour.
    Plain,
    /// One JSON generate report per run; nothing else on stdout.
    Json,
}
