//! Core domain logic for the schedule viewer.
//!
//! This crate contains the fundamental types and logic for:
//! - Event model: the wire shape of schedule entries and their validation
//! - Status classification: Upcoming / Live / Past relative to an instant
//! - Day grouping: bucketing events by calendar date into labeled days
//! - Filtering: combining a day selection and a status selection
//!
//! All time-dependent operations take the current instant as an explicit
//! parameter; nothing in this crate reads the wall clock.

pub mod day;
pub mod event;
pub mod filter;
pub mod loader;
pub mod status;

pub use day::{DayBucket, DaySelector, InvalidDaySelector, group_by_day};
pub use event::{Event, ParseError, RawEvent};
pub use filter::{StatusSelector, visible_events};
pub use loader::{LoadError, Loaded, load_events, parse_events};
pub use status::{Status, UnknownStatus, classify};
