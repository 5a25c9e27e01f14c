//! The timeline widget: schedule, layout engine, and renderer behind
//! one type.
//!
//! `TimelineWidget` is synchronous and side-effect free except for
//! [`render_into`](TimelineWidget::render_into), which reads the clock
//! and replaces the surface content. The refresh loop in
//! [`runtime`](crate::runtime) drives it; hosts with their own event
//! loop can call `render_into` directly instead.

use crate::host::{Clock, Surface};
use crate::layout::{LayoutEngine, LayoutMetrics, RenderModel};
use crate::render::{HtmlRenderer, Theme};
use crate::schedule::Schedule;
use crate::time::TimeOfDay;

pub struct TimelineWidget {
    schedule: Schedule,
    engine: LayoutEngine,
    renderer: HtmlRenderer,
}

impl TimelineWidget {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            engine: LayoutEngine::new(),
            renderer: HtmlRenderer::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.engine = LayoutEngine::new().with_metrics(metrics);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.renderer = HtmlRenderer::new().with_theme(theme);
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Resolve the schedule against `now` without rendering.
    pub fn layout_at(&self, now: TimeOfDay) -> RenderModel {
        self.engine.compute(&self.schedule, now)
    }

    /// Build the full markup for `now`.
    pub fn render_at(&self, now: TimeOfDay) -> String {
        self.renderer.render(&self.layout_at(now))
    }

    /// One tick: read the clock, rebuild the markup, replace the
    /// surface content wholesale.
    pub fn render_into(&self, surface: &mut dyn Surface, clock: &dyn Clock) {
        let now = clock.now();
        let html = self.render_at(now);
        tracing::debug!("rendered timeline at {} ({} bytes)", now, html.len());
        surface.replace_content(&html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMetrics;
    use crate::render::Theme;

    struct FakeSurface {
        content: String,
        replacements: usize,
    }

    impl Surface for FakeSurface {
        fn replace_content(&mut self, html: &str) {
            self.content = html.to_string();
            self.replacements += 1;
        }
    }

    struct FixedClock(TimeOfDay);

    impl Clock for FixedClock {
        fn now(&self) -> TimeOfDay {
            self.0
        }
    }

    #[test]
    fn render_into_replaces_wholesale() {
        let widget = TimelineWidget::new(Schedule::example());
        let mut surface = FakeSurface {
            content: "<p>stale</p>".into(),
            replacements: 0,
        };

        widget.render_into(&mut surface, &FixedClock(TimeOfDay::hm(8, 30)));
        assert_eq!(surface.replacements, 1);
        assert!(!surface.content.contains("stale"));
        assert!(surface.content.contains("Deep work block 1"));

        // second tick fully supersedes the first
        widget.render_into(&mut surface, &FixedClock(TimeOfDay::hm(3, 0)));
        assert_eq!(surface.replacements, 2);
        assert!(!surface.content.contains("z-index: 10"));
    }

    #[test]
    fn render_at_matches_render_into() {
        let widget = TimelineWidget::new(Schedule::example());
        let mut surface = FakeSurface {
            content: String::new(),
            replacements: 0,
        };
        widget.render_into(&mut surface, &FixedClock(TimeOfDay::hm(14, 15)));
        assert_eq!(surface.content, widget.render_at(TimeOfDay::hm(14, 15)));
    }

    #[test]
    fn builders_rewire_layout_and_theme() {
        let widget = TimelineWidget::new(Schedule::example())
            .with_metrics(LayoutMetrics {
                min_block_height: 60,
                short_break_height: 8,
                closing_row_height: 20,
            })
            .with_theme(Theme {
                width_px: 500,
                ..Theme::default()
            });

        let html = widget.render_at(TimeOfDay::MIDNIGHT);
        assert!(html.contains("width: 500px"));
        // 07:00-07:30 breakfast is 30 min, now floored to 60
        assert!(html.contains("min-height: 60px"));
    }
}
