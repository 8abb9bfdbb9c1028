//! The filter pipeline: day scope first, then status.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::day::{DayBucket, DaySelector};
use crate::event::Event;
use crate::status::{Status, UnknownStatus, classify};

/// A user's status selection: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSelector {
    All,
    Only(Status),
}

impl StatusSelector {
    fn matches(self, event: &Event, now: NaiveDateTime) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => classify(event, now) == status,
        }
    }
}

impl fmt::Display for StatusSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusSelector {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.trim().parse().map(Self::Only)
        }
    }
}

/// Computes the visible subset for one render.
///
/// Resolves the day scope, then retains events whose status at `now`
/// matches the selection, preserving the scope's order. No caching:
/// `now` moves between calls, so the result is recomputed each time.
#[must_use]
pub fn visible_events(
    events: &[Event],
    buckets: &[DayBucket],
    day: DaySelector,
    status: StatusSelector,
    now: NaiveDateTime,
) -> Vec<Event> {
    day.resolve(events, buckets)
        .iter()
        .filter(|event| status.matches(event, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::group_by_day;
    use chrono::{NaiveDate, NaiveTime};

    fn event(id: i64, date: &str, start: &str, end: Option<&str>) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            description: None,
            date: date.parse().unwrap(),
            start_time: start.parse().unwrap(),
            end_time: end.map(|t| t.parse().unwrap()),
            venue: None,
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        date.parse::<NaiveDate>()
            .unwrap()
            .and_time(time.parse::<NaiveTime>().unwrap())
    }

    fn fixture() -> Vec<Event> {
        vec![
            event(1, "2025-06-01", "09:00:00", Some("10:00:00")),
            event(2, "2025-06-01", "11:00:00", Some("12:00:00")),
            event(3, "2025-06-02", "09:00:00", Some("10:00:00")),
        ]
    }

    #[test]
    fn all_all_passes_everything_through() {
        let events = fixture();
        let buckets = group_by_day(&events);
        let now = at("2025-06-01", "09:30:00");

        let visible =
            visible_events(&events, &buckets, DaySelector::All, StatusSelector::All, now);
        assert_eq!(visible, events);
    }

    #[test]
    fn status_selection_filters_within_day_scope() {
        let events = fixture();
        let buckets = group_by_day(&events);
        let now = at("2025-06-01", "09:30:00");

        let live = visible_events(
            &events,
            &buckets,
            DaySelector::Day(1),
            StatusSelector::Only(Status::Live),
            now,
        );
        assert_eq!(live.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);

        let upcoming = visible_events(
            &events,
            &buckets,
            DaySelector::All,
            StatusSelector::Only(Status::Upcoming),
            now,
        );
        assert_eq!(
            upcoming.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let events = fixture();
        let buckets = group_by_day(&events);
        // Nothing on day 2 has finished yet at this instant.
        let now = at("2025-06-01", "09:30:00");

        let past = visible_events(
            &events,
            &buckets,
            DaySelector::Day(2),
            StatusSelector::Only(Status::Past),
            now,
        );
        assert!(past.is_empty());
    }

    #[test]
    fn filtering_is_idempotent_for_a_fixed_instant() {
        let events = fixture();
        let buckets = group_by_day(&events);
        let now = at("2025-06-01", "11:30:00");
        let day = DaySelector::All;
        let status = StatusSelector::Only(Status::Past);

        let first = visible_events(&events, &buckets, day, status, now);
        let second = visible_events(&events, &buckets, day, status, now);
        assert_eq!(first, second);
    }

    #[test]
    fn selector_parses_statuses_and_all() {
        assert_eq!(
            "all".parse::<StatusSelector>().unwrap(),
            StatusSelector::All
        );
        assert_eq!(
            "live".parse::<StatusSelector>().unwrap(),
            StatusSelector::Only(Status::Live)
        );
        assert!("finished".parse::<StatusSelector>().is_err());
    }
}
