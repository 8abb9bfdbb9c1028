//! CLI subcommand implementations.

pub mod days;
pub mod events;
mod util;
