//! Shared helpers for subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

use sched_core::Loaded;

/// Loads the event collection, logging any skipped records.
pub fn load_schedule(path: &Path) -> Result<Loaded> {
    let loaded = sched_core::load_events(path)
        .with_context(|| format!("failed to load events from {}", path.display()))?;

    for diagnostic in &loaded.skipped {
        tracing::warn!(%diagnostic, "skipping unparseable event record");
    }

    Ok(loaded)
}

/// Resolves the classification instant: an explicit `--at` value, or the
/// host's local wall clock sampled once for this invocation.
pub fn resolve_instant(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        None => Ok(Local::now().naive_local()),
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").with_context(|| {
            format!("invalid --at instant {s:?}, expected YYYY-MM-DDTHH:MM:SS")
        }),
    }
}
