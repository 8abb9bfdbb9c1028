//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Event schedule viewer.
///
/// Loads a schedule of timed events and shows them grouped by day, with
/// each event classified as upcoming, live, or past.
#[derive(Debug, Parser)]
#[command(name = "sched", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the events JSON file (overrides config).
    #[arg(short, long, global = true)]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the schedule's days.
    Days {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the schedule, optionally filtered by day and status.
    Events {
        /// Day selection: "all" or "day N" (e.g., "day 2").
        #[arg(long, default_value = "all")]
        day: String,

        /// Status selection: all, upcoming, live, or past.
        #[arg(long, default_value = "all")]
        status: String,

        /// Classify against this instant instead of the current local
        /// time (e.g., 2025-06-01T09:30:00).
        #[arg(long)]
        at: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
