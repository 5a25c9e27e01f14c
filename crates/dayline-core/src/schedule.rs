//! Day schedule model: an immutable, validated list of time blocks.
//!
//! A [`Schedule`] is created once (from typed entries or a TOML
//! document) and never mutated. Construction enforces the invariants
//! the rest of the widget relies on: at least one entry, every entry's
//! start strictly before its end, entries sorted by start, no overlap.
//! With those held, at most one entry can contain any given time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time::TimeOfDay;

/// Color tokens for schedule authoring, as used by the built-in
/// example day. Eight-digit hex: the last byte is alpha, so blocks
/// stay translucent over the host background.
pub mod palette {
    /// Green -- meals.
    pub const MEALS: &str = "#4ade8033";
    /// Lavender -- routines.
    pub const ROUTINES: &str = "#c4b5fd44";
    /// Blue -- deep work.
    pub const DEEP_WORK: &str = "#60a5fa44";
    /// Purple -- meetings.
    pub const MEETINGS: &str = "#a78bfa44";
    /// Amber -- exercise.
    pub const EXERCISE: &str = "#fbbf2444";
    /// Cyan -- health.
    pub const HEALTH: &str = "#67e8f933";
    /// Pink -- rest blocks.
    pub const REST: &str = "#f9a8d433";
    /// Translucent pink -- short breaks.
    pub const SHORT_BREAK: &str = "#f9a8d422";
}

/// One time block of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Display text; empty for short breaks.
    #[serde(default)]
    pub label: String,
    /// CSS color token for the block background.
    pub color: String,
    #[serde(default)]
    pub short_break: bool,
}

impl ScheduleEntry {
    /// A regular labeled block.
    pub fn new(
        start: TimeOfDay,
        end: TimeOfDay,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            color: color.into(),
            short_break: false,
        }
    }

    /// An unlabeled short break rendered as a thin divider.
    pub fn short_break(start: TimeOfDay, end: TimeOfDay, color: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: String::new(),
            color: color.into(),
            short_break: true,
        }
    }

    /// Block duration in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    /// Whether `now` falls inside this block (`start <= now < end`).
    pub fn contains(&self, now: TimeOfDay) -> bool {
        self.start <= now && now < self.end
    }
}

/// TOML document shape: an `[[entry]]` array of tables.
#[derive(Deserialize)]
struct ScheduleDoc {
    #[serde(default, rename = "entry")]
    entries: Vec<ScheduleEntry>,
}

#[derive(Serialize)]
struct ScheduleDocRef<'a> {
    #[serde(rename = "entry")]
    entries: &'a [ScheduleEntry],
}

/// The day's time blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Build a schedule, validating the invariants the renderer
    /// depends on.
    ///
    /// # Errors
    /// - [`ScheduleError::Empty`] for an empty list
    /// - [`ScheduleError::InvalidRange`] when an entry's start is not
    ///   strictly before its end
    /// - [`ScheduleError::OutOfOrder`] when an entry starts before the
    ///   entry preceding it
    /// - [`ScheduleError::Overlap`] when an entry starts before the
    ///   previous entry has ended
    pub fn new(entries: Vec<ScheduleEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ScheduleError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.start >= entry.end {
                return Err(ScheduleError::InvalidRange {
                    index,
                    label: entry.label.clone(),
                    start: entry.start,
                    end: entry.end,
                });
            }
        }
        for (i, pair) in entries.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.start {
                return Err(ScheduleError::OutOfOrder {
                    index: i + 1,
                    start: next.start,
                    prev_start: prev.start,
                });
            }
            if next.start < prev.end {
                return Err(ScheduleError::Overlap {
                    index: i + 1,
                    start: next.start,
                    prev_end: prev.end,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse and validate a TOML schedule document.
    ///
    /// ```toml
    /// [[entry]]
    /// start = "08:00"
    /// end = "10:00"
    /// label = "Deep work"
    /// color = "#60a5fa44"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let doc: ScheduleDoc = toml::from_str(text)?;
        Self::new(doc.entries)
    }

    /// Serialize to the TOML document form accepted by
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn to_toml_string(&self) -> Result<String> {
        let doc = ScheduleDocRef {
            entries: &self.entries,
        };
        Ok(toml::to_string_pretty(&doc)?)
    }

    /// The built-in example day (the template this widget ships with).
    pub fn example() -> Self {
        use crate::time::TimeOfDay as T;
        Self {
            entries: vec![
                ScheduleEntry::new(T::hm(7, 0), T::hm(7, 30), "🍳 Breakfast", palette::MEALS),
                ScheduleEntry::new(T::hm(7, 30), T::hm(8, 0), "✅ Meditation", palette::ROUTINES),
                ScheduleEntry::new(T::hm(8, 0), T::hm(10, 0), "💻 Deep work block 1", palette::DEEP_WORK),
                ScheduleEntry::short_break(T::hm(10, 0), T::hm(10, 5), palette::SHORT_BREAK),
                ScheduleEntry::new(T::hm(10, 5), T::hm(12, 0), "💻 Deep work block 2", palette::DEEP_WORK),
                ScheduleEntry::new(T::hm(12, 0), T::hm(12, 30), "🍽️ Lunch", palette::MEALS),
                ScheduleEntry::new(T::hm(12, 30), T::hm(13, 0), "☕ Rest", palette::REST),
                ScheduleEntry::new(T::hm(13, 0), T::hm(14, 0), "📅 Meeting", palette::MEETINGS),
                ScheduleEntry::new(T::hm(14, 0), T::hm(16, 0), "💻 Deep work block 3", palette::DEEP_WORK),
                ScheduleEntry::new(T::hm(16, 0), T::hm(17, 0), "🏋️ Workout", palette::EXERCISE),
                ScheduleEntry::new(T::hm(17, 0), T::hm(18, 0), "🌅 Wind down", palette::REST),
            ],
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry containing `now`, if any. First match wins;
    /// under the construction invariants there can be at most one.
    pub fn current_index(&self, now: TimeOfDay) -> Option<usize> {
        self.entries.iter().position(|e| e.contains(now))
    }

    /// The entry containing `now`, if any.
    pub fn current_entry(&self, now: TimeOfDay) -> Option<&ScheduleEntry> {
        self.current_index(now).map(|i| &self.entries[i])
    }

    /// End of the last block; the closing row's time label.
    pub fn end_of_day(&self) -> TimeOfDay {
        self.entries
            .last()
            .map(|e| e.end)
            .unwrap_or(TimeOfDay::MIDNIGHT)
    }

    /// Sum of all block durations in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| u32::from(e.duration_minutes()))
            .sum()
    }
}
