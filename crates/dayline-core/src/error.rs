//! Core error types for dayline-core.
//!
//! All fallibility lives at configuration time: once a [`Schedule`]
//! exists, layout and rendering are infallible.
//!
//! [`Schedule`]: crate::schedule::Schedule

use thiserror::Error;

use crate::time::TimeOfDay;

/// Schedule construction and document errors.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A schedule needs at least one entry; the trailing end-of-day
    /// row takes its time from the last entry.
    #[error("schedule has no entries")]
    Empty,

    /// An entry whose start is not strictly before its end.
    #[error("invalid time range in entry {index} (\"{label}\"): start {start} is not before end {end}")]
    InvalidRange {
        index: usize,
        label: String,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    /// An entry that starts before the entry preceding it.
    #[error("entries out of order at index {index}: starts at {start}, before the previous start {prev_start}")]
    OutOfOrder {
        index: usize,
        start: TimeOfDay,
        prev_start: TimeOfDay,
    },

    /// An entry that starts before the previous entry has ended.
    #[error("overlapping entries at index {index}: starts at {start}, before the previous entry ends at {prev_end}")]
    Overlap {
        index: usize,
        start: TimeOfDay,
        prev_end: TimeOfDay,
    },

    /// Failed to parse a TOML schedule document.
    #[error("failed to parse schedule document: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize a schedule document.
    #[error("failed to serialize schedule document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for ScheduleError
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
