//! Schedule event records and their validation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating a single event record.
///
/// These are per-record diagnostics: the loader skips the offending record
/// and carries on, so a `ParseError` never aborts a whole collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The record at `index` did not decode as an event object at all,
    /// so its id cannot be trusted.
    #[error("record {index}: not a valid event object: {message}")]
    Malformed { index: usize, message: String },

    /// The `date` field was not a valid `YYYY-MM-DD` calendar date.
    #[error("event {id}: invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { id: i64, value: String },

    /// A time field was not a valid `HH:MM:SS` time of day.
    #[error("event {id}: invalid {field} {value:?}, expected HH:MM:SS")]
    InvalidTime {
        id: i64,
        field: &'static str,
        value: String,
    },
}

/// An event as supplied by the external source, dates and times still
/// as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Unique identifier within one loaded collection.
    pub id: i64,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local time of day, `HH:MM:SS`.
    pub start_time: String,
    /// Optional end time on the same calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// A validated schedule event.
///
/// Immutable once loaded. `name` is expected non-empty but not enforced,
/// and `end_time >= start_time` is the supplier's invariant, not ours:
/// an inverted window simply never produces a Live status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl Event {
    /// The event's start as a local datetime.
    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// The event's end as a local datetime, if an end time is set.
    ///
    /// The end is always placed on the event's own calendar date.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end_time.map(|t| self.date.and_time(t))
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

impl TryFrom<RawEvent> for Event {
    type Error = ParseError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|_| {
            ParseError::InvalidDate {
                id: raw.id,
                value: raw.date.clone(),
            }
        })?;

        let start_time =
            NaiveTime::parse_from_str(&raw.start_time, TIME_FORMAT).map_err(|_| {
                ParseError::InvalidTime {
                    id: raw.id,
                    field: "start_time",
                    value: raw.start_time.clone(),
                }
            })?;

        let end_time = match &raw.end_time {
            None => None,
            Some(value) => Some(NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(
                |_| ParseError::InvalidTime {
                    id: raw.id,
                    field: "end_time",
                    value: value.clone(),
                },
            )?),
        };

        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            date,
            start_time,
            end_time,
            venue: raw.venue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, start: &str, end: Option<&str>) -> RawEvent {
        RawEvent {
            id: 1,
            name: "Opening Keynote".to_string(),
            description: None,
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.map(String::from),
            venue: Some("Main Hall".to_string()),
        }
    }

    #[test]
    fn valid_record_parses() {
        let event = Event::try_from(raw("2025-06-01", "09:00:00", Some("10:00:00"))).unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(
            event.start(),
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
        assert_eq!(
            event.end(),
            Some(
                NaiveDate::from_ymd_opt(2025, 6, 1)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn missing_end_time_is_none() {
        let event = Event::try_from(raw("2025-06-01", "09:00:00", None)).unwrap();
        assert_eq!(event.end_time, None);
        assert_eq!(event.end(), None);
    }

    #[test]
    fn invalid_date_names_the_event() {
        let err = Event::try_from(raw("2025-13-01", "09:00:00", None)).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDate {
                id: 1,
                value: "2025-13-01".to_string()
            }
        );
    }

    #[test]
    fn invalid_start_time_names_the_field() {
        let err = Event::try_from(raw("2025-06-01", "25:00:00", None)).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidTime {
                field: "start_time",
                ..
            }
        ));
    }

    #[test]
    fn invalid_end_time_names_the_field() {
        let err = Event::try_from(raw("2025-06-01", "09:00:00", Some("soon"))).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidTime {
                field: "end_time",
                ..
            }
        ));
    }

    #[test]
    fn raw_event_deserializes_without_optional_fields() {
        let json = r#"{"id":7,"name":"Demo","date":"2025-06-02","start_time":"14:00:00"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, 7);
        assert_eq!(raw.description, None);
        assert_eq!(raw.end_time, None);
        assert_eq!(raw.venue, None);
    }
}
