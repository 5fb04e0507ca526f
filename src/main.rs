//! Canteen - Campus Restaurant Ordering
//!
//! CLI entry point: terminal UI by default, plus one-shot listing commands.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    let config = cli::config::load_config()?;

    // Held until exit so buffered log lines are flushed.
    let _log_guard = if cli.is_interactive() {
        cli::logging::init_tui(&config.logging)
    } else {
        cli::logging::init_stderr(&config.logging)?;
        None
    };

    debug!("Starting Canteen v{}", env!("CARGO_PKG_VERSION"));

    cli::run(cli, config)
}
