//! Days command: the schedule's day buckets.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use sched_core::group_by_day;

use super::util::load_schedule;

/// Runs the days command, listing one line per day bucket.
pub fn run<W: Write>(writer: &mut W, events_path: &Path, json: bool) -> Result<()> {
    let loaded = load_schedule(events_path)?;
    let buckets = group_by_day(&loaded.events);

    if json {
        let out = serde_json::to_string_pretty(&buckets)?;
        writeln!(writer, "{out}")?;
        return Ok(());
    }

    if buckets.is_empty() {
        writeln!(writer, "No events available.")?;
        return Ok(());
    }

    for bucket in &buckets {
        let count = bucket.events.len();
        let plural = if count == 1 { "event" } else { "events" };
        writeln!(
            writer,
            "{}  {}  ({count} {plural})",
            bucket.label, bucket.date
        )?;
    }

    Ok(())
}
