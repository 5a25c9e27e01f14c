//! Proportional layout: schedule entries + current time -> render model.
//!
//! Pure minute arithmetic, no I/O. Heights map one minute to one pixel
//! with a readability floor; the current block gets a marker whose
//! offset is the elapsed fraction of the block.

use serde::Serialize;

use crate::schedule::Schedule;
use crate::time::TimeOfDay;

/// Pixel metrics for the vertical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutMetrics {
    /// Floor for non-break block heights, so short blocks stay readable.
    pub min_block_height: u32,
    /// Fixed height for short-break blocks, regardless of duration.
    pub short_break_height: u32,
    /// Height of the trailing end-of-day row.
    pub closing_row_height: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            min_block_height: 30,
            short_break_height: 8,
            closing_row_height: 20,
        }
    }
}

/// Marker line position inside the current block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NowMarker {
    /// Offset from the top of the block, as a percentage of its height
    /// (`0.0 <= offset_pct < 100.0`).
    pub offset_pct: f64,
    /// Wall-clock label shown on the marker chip.
    pub time: TimeOfDay,
}

/// One timeline row: a schedule entry resolved to pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRow {
    pub start: TimeOfDay,
    pub label: String,
    pub color: String,
    pub short_break: bool,
    pub height_px: u32,
    /// Present only on the row containing the current time.
    pub marker: Option<NowMarker>,
}

/// Fully resolved timeline, ready for markup generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub rows: Vec<BlockRow>,
    /// Time label of the trailing end-of-day row.
    pub closing_time: TimeOfDay,
    pub closing_row_height: u32,
}

impl RenderModel {
    /// The row flagged current, if any.
    pub fn current_row(&self) -> Option<&BlockRow> {
        self.rows.iter().find(|r| r.marker.is_some())
    }
}

/// Maps a schedule and the current time to a [`RenderModel`].
pub struct LayoutEngine {
    metrics: LayoutMetrics,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            metrics: LayoutMetrics::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Resolve every entry to a row and attach the marker to the block
    /// containing `now`.
    ///
    /// `now` is sampled exactly once per call, so the marker offset and
    /// its time label can never disagree within one frame.
    pub fn compute(&self, schedule: &Schedule, now: TimeOfDay) -> RenderModel {
        let current = schedule.current_index(now);
        let rows = schedule
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let duration = entry.duration_minutes();
                let height_px = if entry.short_break {
                    self.metrics.short_break_height
                } else {
                    u32::from(duration).max(self.metrics.min_block_height)
                };
                let marker = (current == Some(index)).then(|| NowMarker {
                    offset_pct: f64::from(entry.start.minutes_until(now))
                        / f64::from(duration)
                        * 100.0,
                    time: now,
                });
                BlockRow {
                    start: entry.start,
                    label: entry.label.clone(),
                    color: entry.color.clone(),
                    short_break: entry.short_break,
                    height_px,
                    marker,
                }
            })
            .collect();

        RenderModel {
            rows,
            closing_time: schedule.end_of_day(),
            closing_row_height: self.metrics.closing_row_height,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function with default metrics.
pub fn compute_layout(schedule: &Schedule, now: TimeOfDay) -> RenderModel {
    LayoutEngine::new().compute(schedule, now)
}
