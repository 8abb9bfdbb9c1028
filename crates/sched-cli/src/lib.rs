//! Schedule viewer CLI library.
//!
//! Thin presentation shell over `sched-core`: argument parsing,
//! configuration, and rendering. Selector state lives here and is passed
//! into the core on every invocation.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
