//! Events command: the filtered schedule view.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use sched_core::{DaySelector, Event, Status, StatusSelector, classify, group_by_day, visible_events};

use super::util::{load_schedule, resolve_instant};

/// One rendered schedule entry.
#[derive(Debug, Serialize)]
struct EventView {
    status: Status,
    #[serde(flatten)]
    event: Event,
}

/// Runs the events command: load, group, filter, render.
pub fn run<W: Write>(
    writer: &mut W,
    events_path: &Path,
    day: &str,
    status: &str,
    at: Option<&str>,
    json: bool,
) -> Result<()> {
    let day: DaySelector = day
        .parse()
        .with_context(|| format!("invalid --day value {day:?}"))?;
    let status: StatusSelector = status
        .parse()
        .with_context(|| format!("invalid --status value {status:?}"))?;
    let now = resolve_instant(at)?;

    let loaded = load_schedule(events_path)?;
    let buckets = group_by_day(&loaded.events);
    let visible = visible_events(&loaded.events, &buckets, day, status, now);

    let views: Vec<EventView> = visible
        .into_iter()
        .map(|event| EventView {
            status: classify(&event, now),
            event,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&views)?;
        writeln!(writer, "{out}")?;
        return Ok(());
    }

    if views.is_empty() {
        writeln!(writer, "No events available.")?;
        return Ok(());
    }

    for view in &views {
        let end = view
            .event
            .end_time
            .map_or_else(|| "N/A".to_string(), |t| t.to_string());
        let venue = view
            .event
            .venue
            .as_deref()
            .map_or_else(String::new, |v| format!("  @ {v}"));
        writeln!(
            writer,
            "{}  {} - {:<8}  {:<8}  {}{}",
            view.event.date, view.event.start_time, end, view.status, view.event.name, venue
        )?;
    }

    Ok(())
}
