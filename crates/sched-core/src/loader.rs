//! One-shot loading of the event collection.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::event::{Event, ParseError, RawEvent};

/// Errors that abort a load attempt entirely.
///
/// Per-record problems are not load errors; they surface as `skipped`
/// diagnostics on [`Loaded`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read event source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("event source is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event source must be a JSON array of event objects")]
    NotAnArray,
}

/// A successfully loaded collection.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// Valid events, stably sorted ascending by date. Ties keep input order.
    pub events: Vec<Event>,
    /// Records excluded from the usable set, for the caller to log.
    pub skipped: Vec<ParseError>,
}

/// Reads and parses the event collection from a JSON file.
pub fn load_events(path: &Path) -> Result<Loaded, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_events(&text)
}

/// Parses the event collection from JSON text.
///
/// The top level must be an array; anything else fails the whole load.
/// Individual records that do not decode or validate are skipped and
/// reported, never fatal.
pub fn parse_events(json: &str) -> Result<Loaded, LoadError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = value.as_array().ok_or(LoadError::NotAnArray)?;

    let mut events = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let raw: RawEvent = match serde_json::from_value(item.clone()) {
            Ok(raw) => raw,
            Err(err) => {
                skipped.push(ParseError::Malformed {
                    index,
                    message: err.to_string(),
                });
                continue;
            }
        };

        match Event::try_from(raw) {
            Ok(event) => events.push(event),
            Err(err) => skipped.push(err),
        }
    }

    // Stable, so same-date events keep their input order.
    events.sort_by_key(|event| event.date);

    tracing::debug!(
        loaded = events.len(),
        skipped = skipped.len(),
        "parsed event collection"
    );

    Ok(Loaded { events, skipped })
}
