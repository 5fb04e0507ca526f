//! Tracing subscriber setup
//!
//! One-shot commands log to stderr so stdout stays machine readable. The TUI
//! owns the terminal, so it logs to a daily rolling file instead.

use super::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name prefix; the appender adds the date.
pub const LOG_FILE: &str = "canteen.log";

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Log to stderr.
pub fn init_stderr(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Log to `<log_dir>/canteen.log.<date>`.
///
/// The returned guard flushes the writer when dropped; hold it until exit.
pub fn init_file(config: &LoggingConfig) -> Result<WorkerGuard> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// File logging for the TUI, or none when the log file cannot be set up.
///
/// The warning goes to stderr before the TUI takes over the terminal.
pub fn init_tui(config: &LoggingConfig) -> Option<WorkerGuard> {
    match init_file(config) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: file logging disabled: {err:#}");
            None
        }
    }
}
