//! CLI module for Canteen
//!
//! Provides commands:
//! - `tui`: Full-screen ordering interface (default)
//! - `menu`, `orders`, `stats`: Print fixture views
//! - `messages`: Dump the message catalog
//! - `config`: Print the effective configuration

use anyhow::Result;
use canteen_core::{FixtureStore, Locale, OrderStatus, RevenuePeriod};
use clap::{Parser, Subcommand};

pub mod config;
pub mod logging;
pub mod menu;
pub mod messages;
pub mod orders;
pub mod stats;
pub mod tui;

use config::AppConfig;

/// Campus restaurant ordering CLI
#[derive(Parser, Debug)]
#[command(name = "canteen")]
#[command(about = "Campus restaurant ordering mock-up")]
#[command(version)]
pub struct Cli {
    /// Display language (en, fr, ar); defaults to the configured locale
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this run hands the terminal to the TUI.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the terminal UI (default)
    Tui,
    /// List menu products
    Menu {
        /// Only products of this category id (e.g. hot-drinks)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive name search
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List orders as staff sees them
    Orders {
        /// pending, accepted (confirmed), paid, refused or cancelled
        #[arg(long)]
        status: Option<OrderStatus>,
        /// Case-insensitive requester search
        #[arg(long, short)]
        search: Option<String>,
        /// Only orders of the reference day
        #[arg(long)]
        today: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show daily statistics and the revenue history
    Stats {
        /// month or year
        #[arg(long, default_value = "month")]
        period: RevenuePeriod,
        #[arg(long)]
        json: bool,
    },
    /// Dump the message catalog for a locale
    Messages {
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Run the CLI command
pub fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let locale = cli.locale.unwrap_or_else(|| config.ui.locale());
    let store = FixtureStore::load();

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => tui::run(&config, store, locale),
        Commands::Menu {
            category,
            search,
            json,
        } => menu::run(&store, locale, category.as_deref(), search.as_deref(), json),
        Commands::Orders {
            status,
            search,
            today,
            json,
        } => orders::run(
            &store,
            locale,
            orders::OrderQuery {
                status,
                search,
                today,
            },
            json,
        ),
        Commands::Stats { period, json } => stats::run(&store, locale, period, json),
        Commands::Messages { json } => messages::run(locale, json),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
