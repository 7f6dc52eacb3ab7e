//! Diagnostics for `blueprint`, written to stderr.
//!
//! stdout carries the generate report (and nothing else under
//! `--output-format json`), so every tracing event goes to stderr. The core
//! and adapter crates emit events; only this binary installs a subscriber.
//!
//! Without `RUST_LOG`, the level comes from the flags: `--quiet` gives
//! ERROR, no flag WARN, then `-v` INFO, `-vv` DEBUG, `-vvv` TRACE.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(blueprint_directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Crates whose events are shown; dependencies such as `config` stay silent.
const CRATES: [&str; 3] = ["blueprint", "blueprint_core", "blueprint_adapters"];

fn blueprint_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
