//! Minute-granularity wall-clock time.
//!
//! The whole widget operates on minutes since midnight; seconds never
//! appear anywhere in the layout math.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Minutes in a full day; `TimeOfDay` values are always below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute granularity, stored as minutes since
/// midnight (`0..1440`).
///
/// Parses from and formats to `"HH:MM"`, which is also its serde
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

/// Error parsing an `"HH:MM"` string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeError {
    /// Not of the form `HH:MM` with numeric components.
    #[error("expected \"HH:MM\", got \"{0}\"")]
    Malformed(String),

    /// Hour component above 23.
    #[error("hour out of range in \"{0}\" (must be 00-23)")]
    HourOutOfRange(String),

    /// Minute component above 59.
    #[error("minute out of range in \"{0}\" (must be 00-59)")]
    MinuteOutOfRange(String),
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from an hour/minute pair.
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`. Use
    /// [`from_hm`](Self::from_hm) for a non-panicking version.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24, "hour must be 00-23");
        assert!(minute < 60, "minute must be 00-59");
        TimeOfDay(hour * 60 + minute)
    }

    /// Build from an hour/minute pair, returning `None` when either
    /// component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Build from minutes since midnight, returning `None` for values
    /// of a day or more.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(TimeOfDay(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Minutes from `self` to `later`, saturating to zero when `later`
    /// is earlier.
    pub fn minutes_until(&self, later: TimeOfDay) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::Malformed(s.to_string()))?;
        let hour: u32 = h
            .parse()
            .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
        if hour > 23 {
            return Err(ParseTimeError::HourOutOfRange(s.to_string()));
        }
        if minute > 59 {
            return Err(ParseTimeError::MinuteOutOfRange(s.to_string()));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
