//! # Dayline Core Library
//!
//! Core logic for the Dayline day-timeline widget: a fixed list of
//! time blocks rendered as a vertical HTML timeline with a live "now"
//! marker, refreshed once a minute while mounted.
//!
//! ## Architecture
//!
//! - **Schedule**: an immutable, validated list of time blocks --
//!   construction rejects empty, unsorted, or overlapping input, so
//!   layout and rendering never fail
//! - **Layout**: pure mapping from entries plus the current time to a
//!   render model (pixel heights, current-block detection, marker
//!   offset)
//! - **Render**: deterministic inline-styled HTML generation
//! - **Host seams**: `Surface` and `Clock` traits supplied by the
//!   embedding host; the core owns no I/O
//! - **Runtime**: tokio-backed refresh loop, one render per minute,
//!   canceled whenever the `Mounted` guard drops
//!
//! ## Key Components
//!
//! - [`Schedule`]: the day's time blocks
//! - [`TimelineWidget`]: schedule + layout engine + renderer
//! - [`mount`]: start the refresh loop, get a cancellation guard
//! - [`Theme`] / [`LayoutMetrics`]: the visual constants

pub mod time;
pub mod schedule;
pub mod layout;
pub mod render;
pub mod widget;
pub mod host;
pub mod runtime;
pub mod error;

pub use time::{ParseTimeError, TimeOfDay, MINUTES_PER_DAY};
pub use schedule::{palette, Schedule, ScheduleEntry};
pub use layout::{compute_layout, BlockRow, LayoutEngine, LayoutMetrics, NowMarker, RenderModel};
pub use render::{render_html, HtmlRenderer, Theme};
pub use widget::TimelineWidget;
pub use host::{Clock, Surface, SystemClock};
pub use runtime::{mount, Mounted, REFRESH_PERIOD};
pub use error::{Result, ScheduleError};
