//! roster - product catalog queries and a musician registry
//!
//! Usage: roster [COMMAND]
//!
//! Commands:
//!   catalog    Query the product catalog
//!   musicians  Manage the musician registry and assemble bands
//!
//! Without a command, an interactive menu opens on a terminal.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use roster::config::{Config, ConfigWarning};
use roster::presentation::cli::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.color, &Config::default());
            ui::error::print_error(&err, &ui);
            std::process::exit(1);
        }
    };

    let ui = UiContext::new(cli.json, cli.color, &config);
    for warning in &warnings {
        eprintln!(
            "{}",
            ui::error::format_config_warning(warning, ui.color, ui.unicode)
        );
    }

    if let Err(err) = dispatch(cli.command, &config, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn dispatch(command: Option<Commands>, config: &Config, ui: &UiContext) -> Result<()> {
    match command {
        Some(Commands::Catalog(cmd)) => commands::catalog::cmd_catalog(cmd, config, ui),
        Some(Commands::Musicians(cmd)) => commands::musicians::cmd_musicians(cmd, config, ui),
        None => commands::interactive::cmd_interactive(config, ui),
    }
}

/// Resolve config file, environment and CLI overrides, in that order.
fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref(), &cwd)?;

    if let Some(path) = &cli.catalog_file {
        config.catalog.path = path.clone();
    }
    if let Some(path) = &cli.registry_file {
        config.registry.path = path.clone();
    }
    Ok((config, warnings))
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Diagnostics go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
