//! Mounted refresh loop: render immediately, then once a minute,
//! cancel on drop.
//!
//! The timer handle is scoped to the [`Mounted`] guard rather than any
//! shared state, so cancellation runs on every exit path: explicit
//! [`unmount`](Mounted::unmount), scope exit, unwind, and remounting
//! over an old binding (assignment drops, hence cancels, the displaced
//! guard).

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::host::{Clock, Surface};
use crate::widget::TimelineWidget;

/// Refresh period of a mounted widget.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// Handle to a mounted widget; dropping it stops the refresh loop.
#[derive(Debug)]
pub struct Mounted {
    task: JoinHandle<()>,
}

impl Mounted {
    /// Stop the refresh loop. Equivalent to dropping the handle.
    pub fn unmount(self) {}

    /// Whether the refresh loop is still running.
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        tracing::debug!("unmounting timeline widget");
        self.task.abort();
    }
}

/// Mount a widget onto a surface: render once right away, then every
/// [`REFRESH_PERIOD`] until the returned guard is dropped.
///
/// Must be called from within a tokio runtime. A tick that fires late
/// is skipped rather than replayed; each render fully supersedes the
/// previous one, so there is nothing to catch up on.
pub fn mount<S, C>(widget: TimelineWidget, surface: S, clock: C) -> Mounted
where
    S: Surface + 'static,
    C: Clock + 'static,
{
    tracing::debug!(
        "mounting timeline widget, refreshing every {}s",
        REFRESH_PERIOD.as_secs()
    );
    let task = tokio::spawn(refresh_loop(widget, surface, clock));
    Mounted { task }
}

async fn refresh_loop<S: Surface, C: Clock>(widget: TimelineWidget, mut surface: S, clock: C) {
    let mut ticks = tokio::time::interval(REFRESH_PERIOD);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        // first tick completes immediately
        ticks.tick().await;
        widget.render_into(&mut surface, &clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::schedule::Schedule;
    use crate::time::TimeOfDay;

    #[derive(Clone, Default)]
    struct RecordingSurface {
        frames: Arc<Mutex<Vec<String>>>,
    }

    impl Surface for RecordingSurface {
        fn replace_content(&mut self, html: &str) {
            self.frames.lock().unwrap().push(html.to_string());
        }
    }

    #[derive(Clone, Copy)]
    struct FixedClock(TimeOfDay);

    impl Clock for FixedClock {
        fn now(&self) -> TimeOfDay {
            self.0
        }
    }

    fn widget() -> TimelineWidget {
        TimelineWidget::new(Schedule::example())
    }

    fn frame_count(frames: &Arc<Mutex<Vec<String>>>) -> usize {
        frames.lock().unwrap().len()
    }

    #[tokio::test(start_paused = true)]
    async fn renders_immediately_on_mount() {
        let surface = RecordingSurface::default();
        let frames = surface.frames.clone();

        let mounted = mount(widget(), surface, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;

        assert_eq!(frame_count(&frames), 1);
        assert!(frames.lock().unwrap()[0].contains("Deep work block 1"));
        assert!(mounted.is_active());
        drop(mounted);
    }

    #[tokio::test(start_paused = true)]
    async fn rerenders_every_period() {
        let surface = RecordingSurface::default();
        let frames = surface.frames.clone();

        let mounted = mount(widget(), surface, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&frames), 1);

        tokio::time::advance(REFRESH_PERIOD).await;
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&frames), 2);

        tokio::time::advance(REFRESH_PERIOD).await;
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&frames), 3);

        drop(mounted);
    }

    #[tokio::test(start_paused = true)]
    async fn identical_ticks_produce_identical_markup() {
        let surface = RecordingSurface::default();
        let frames = surface.frames.clone();

        let mounted = mount(widget(), surface, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;
        tokio::time::advance(REFRESH_PERIOD).await;
        tokio::task::yield_now().await;

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
        drop(mounted);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_the_loop() {
        let surface = RecordingSurface::default();
        let frames = surface.frames.clone();

        let mounted = mount(widget(), surface, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&frames), 1);

        drop(mounted);
        tokio::task::yield_now().await;

        tokio::time::advance(REFRESH_PERIOD * 3).await;
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&frames), 1, "canceled loop must not render");
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_the_loop() {
        let surface = RecordingSurface::default();
        let frames = surface.frames.clone();

        let mounted = mount(widget(), surface, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;

        mounted.unmount();
        tokio::task::yield_now().await;

        tokio::time::advance(REFRESH_PERIOD * 2).await;
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&frames), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn remount_over_a_binding_cancels_the_old_loop() {
        let first = RecordingSurface::default();
        let first_frames = first.frames.clone();
        let second = RecordingSurface::default();
        let second_frames = second.frames.clone();

        let mut mounted = mount(widget(), first, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;
        assert_eq!(frame_count(&first_frames), 1);

        // reentrant reinitialization: the old guard drops here
        mounted = mount(widget(), second, FixedClock(TimeOfDay::hm(8, 30)));
        tokio::task::yield_now().await;

        tokio::time::advance(REFRESH_PERIOD).await;
        tokio::task::yield_now().await;

        assert_eq!(frame_count(&first_frames), 1, "old loop must stay canceled");
        assert_eq!(frame_count(&second_frames), 2);
        drop(mounted);
    }
}
