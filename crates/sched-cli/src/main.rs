use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sched_cli::commands::{days, events};
use sched_cli::{Cli, Commands, Config};

/// Resolves the events file path: `--events` wins over configuration.
fn events_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.events {
        return Ok(path.clone());
    }
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config.events_path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Days { json }) => {
            let path = events_path(&cli)?;
            days::run(&mut stdout, &path, *json)?;
        }
        Some(Commands::Events {
            day,
            status,
            at,
            json,
        }) => {
            let path = events_path(&cli)?;
            events::run(&mut stdout, &path, day, status, at.as_deref(), *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
