//! Markup generation: render model -> inline-styled HTML fragment.
//!
//! The output is a self-contained `<div>` with inline styles only, so
//! it can be injected into any host container without a stylesheet.
//! Rendering is deterministic: the same model produces the same string.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::layout::{NowMarker, RenderModel};

/// Visual constants for the rendered markup.
///
/// Geometry that is part of the markup contract (the 45 px time
/// column, paddings, radii, marker dot size) is fixed in the renderer;
/// the theme carries the colors and overall sizing a host might want
/// to restyle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Overall widget width in pixels.
    pub width_px: u32,
    pub font_family: String,
    pub font_size_px: u32,
    /// Vertical rail along the left edge of every row.
    pub rail_color: String,
    /// Start-time labels in the left column.
    pub time_color: String,
    /// Separator on top of non-break blocks and the closing row.
    pub separator_color: String,
    /// The "now" line, its dot, and its time chip text.
    pub now_color: String,
    /// Background behind the "now" time chip; defaults to the host's
    /// background variable so the chip masks the line underneath.
    pub chip_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            width_px: 300,
            font_family: "sans-serif".into(),
            font_size_px: 13,
            rail_color: "#444".into(),
            time_color: "#888".into(),
            separator_color: "#333".into(),
            now_color: "#ef4444".into(),
            chip_background: "var(--background-primary)".into(),
        }
    }
}

/// Renders a [`RenderModel`] to an HTML string.
pub struct HtmlRenderer {
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Build the full fragment: one row per block, then the closing
    /// end-of-day row.
    pub fn render(&self, model: &RenderModel) -> String {
        let t = &self.theme;
        let mut html = String::with_capacity(512 + model.rows.len() * 512);

        html.push_str(&format!(
            "<div style=\"font-family: {}; font-size: {}px; width: {}px;\">\n",
            t.font_family, t.font_size_px, t.width_px
        ));

        for row in &model.rows {
            let time_label = if row.short_break {
                String::new()
            } else {
                row.start.to_string()
            };
            let border_top = if row.short_break {
                "none".to_string()
            } else {
                format!("1px solid {}", t.separator_color)
            };
            let padding = if row.short_break { "0" } else { "4px" };
            let marker = row
                .marker
                .as_ref()
                .map(|m| self.marker_html(m))
                .unwrap_or_default();

            html.push_str(&format!(
                "  <div style=\"display: flex; border-left: 2px solid {};\">\n",
                t.rail_color
            ));
            html.push_str(&format!(
                "    <div style=\"width: 45px; text-align: right; padding-right: 8px; color: {};\">{}</div>\n",
                t.time_color, time_label
            ));
            html.push_str(&format!(
                "    <div style=\"flex: 1; min-height: {}px; border-top: {}; background: {}; padding: {}; border-radius: 4px; margin: 2px; position: relative;\">{}{}</div>\n",
                row.height_px,
                border_top,
                encode_double_quoted_attribute(&row.color),
                padding,
                encode_text(&row.label),
                marker
            ));
            html.push_str("  </div>\n");
        }

        // End-of-day row: time label and a bare rail, no block.
        html.push_str(&format!(
            "  <div style=\"display: flex; border-left: 2px solid {};\">\n",
            t.rail_color
        ));
        html.push_str(&format!(
            "    <div style=\"width: 45px; text-align: right; padding-right: 8px; color: {};\">{}</div>\n",
            t.time_color, model.closing_time
        ));
        html.push_str(&format!(
            "    <div style=\"flex: 1; min-height: {}px; border-top: 1px solid {};\"></div>\n",
            model.closing_row_height, t.separator_color
        ));
        html.push_str("  </div>\n");

        html.push_str("</div>\n");
        html
    }

    /// The "now" line: a 2 px bar across the block at the progress
    /// offset, a dot sitting on the rail, and an `"HH:MM"` chip.
    ///
    /// `offset_pct` is formatted with plain `Display`, so whole
    /// percentages come out as `top: 25%`, not `top: 25.0%`.
    fn marker_html(&self, marker: &NowMarker) -> String {
        let t = &self.theme;
        format!(
            "<div style=\"position: absolute; top: {top}%; left: 0; right: 0; height: 2px; background: {now}; z-index: 10;\">\
             <div style=\"position: absolute; left: -6px; top: -4px; width: 10px; height: 10px; background: {now}; border-radius: 50%;\"></div>\
             <span style=\"position: absolute; left: 12px; top: -7px; color: {now}; font-size: 10px; background: {chip}; padding: 0 4px; border-radius: 3px;\">{time}</span></div>",
            top = marker.offset_pct,
            now = t.now_color,
            chip = t.chip_background,
            time = marker.time
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function with the default theme.
pub fn render_html(model: &RenderModel) -> String {
    HtmlRenderer::new().render(model)
}
