//! Day bucketing and day selection.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Events sharing one calendar date, labeled by chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// "Day 1", "Day 2", ... in ascending date order.
    pub label: String,
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

/// Partitions events into one bucket per distinct date.
///
/// Bucket order is first-seen order, which is chronological because the
/// input is kept sorted ascending by date. Membership is exact date
/// equality; labels are 1-indexed.
#[must_use]
pub fn group_by_day(events: &[Event]) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();

    for event in events {
        match buckets.iter_mut().find(|b| b.date == event.date) {
            Some(bucket) => bucket.events.push(event.clone()),
            None => buckets.push(DayBucket {
                label: format!("Day {}", buckets.len() + 1),
                date: event.date,
                events: vec![event.clone()],
            }),
        }
    }

    buckets
}

/// A user's day selection: everything, or one labeled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    All,
    /// 1-indexed, matching the "Day N" labels.
    Day(usize),
}

impl DaySelector {
    /// Resolves the selection against the full sequence and its buckets.
    ///
    /// A stale out-of-range day (including `Day(0)`, which no label maps
    /// to) resolves to an empty slice rather than an error.
    #[must_use]
    pub fn resolve<'a>(&self, events: &'a [Event], buckets: &'a [DayBucket]) -> &'a [Event] {
        match self {
            Self::All => events,
            Self::Day(n) => n
                .checked_sub(1)
                .and_then(|i| buckets.get(i))
                .map_or(&[], |bucket| bucket.events.as_slice()),
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Day(n) => write!(f, "Day {n}"),
        }
    }
}

impl FromStr for DaySelector {
    type Err = InvalidDaySelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let rest = trimmed
            .strip_prefix("Day")
            .or_else(|| trimmed.strip_prefix("day"))
            .ok_or_else(|| InvalidDaySelector(s.to_string()))?;

        match rest.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Self::Day(n)),
            _ => Err(InvalidDaySelector(s.to_string())),
        }
    }
}

/// Error type for day selector strings.
#[derive(Debug, Clone)]
pub struct InvalidDaySelector(String);

impl fmt::Display for InvalidDaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid day selector {:?}, expected \"all\" or \"day N\"", self.0)
    }
}

impl std::error::Error for InvalidDaySelector {}
