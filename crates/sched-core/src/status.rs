//! Temporal status classification.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Where an event sits relative to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Upcoming,
    Live,
    Past,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Upcoming => "upcoming",
            Self::Live => "live",
            Self::Past => "past",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "live" => Ok(Self::Live),
            "past" => Ok(Self::Past),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown status strings.
#[derive(Debug, Clone)]
pub struct UnknownStatus(String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

/// Classifies an event relative to `now`.
///
/// Total over any valid event and instant. An event is Live while `now`
/// falls on the start's calendar date, at or after the start, and at or
/// before the end when one is set; an event with no end time stays Live
/// for the rest of its start day. Both boundaries are inclusive.
///
/// The same-day check is part of the observable contract: once the date
/// rolls over, an open-ended event drops to Past even though it has no
/// end boundary.
#[must_use]
pub fn classify(event: &Event, now: NaiveDateTime) -> Status {
    let start = event.start();

    let live = now.date() == start.date()
        && now >= start
        && event.end().is_none_or(|end| now <= end);

    if live {
        Status::Live
    } else if start > now {
        Status::Upcoming
    } else {
        Status::Past
    }
}
