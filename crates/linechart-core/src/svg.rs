// File: crates/linechart-core/src/svg.rs
// Summary: DrawSink that writes a standalone SVG document.

use std::fmt::Write as _;

use crate::path::LinePath;
use crate::sink::{Circle, DrawSink, LabelBox, LineRole, Segment, TextAnchor, TextLabel, TextRole};
use crate::types::CanvasSize;
use crate::viewport::ViewTransform;

/// Colors and sizes used in the SVG output.
#[derive(Clone, Debug, PartialEq)]
struct SvgStyle {
    axis: &'static str,
    tick: &'static str,
    tick_label: &'static str,
    tick_font_size: f64,
    point: &'static str,
    line: &'static str,
    line_width: f64,
    tooltip_fill: &'static str,
    tooltip_text: &'static str,
    tooltip_font_size: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            axis: "#ccc",
            tick: "#ccc",
            tick_label: "#666",
            tick_font_size: 12.0,
            point: "#3498db",
            line: "#3498db",
            line_width: 2.0,
            tooltip_fill: "rgb(173, 255, 47)",
            tooltip_text: "#333",
            tooltip_font_size: 14.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct SvgSink {
    style: SvgStyle,
    out: String,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document written by the last `begin`..`end` frame.
    pub fn finish(self) -> String {
        self.out
    }
}

// Writing into a String cannot fail; the fmt::Result is discarded.
impl DrawSink for SvgSink {
    fn begin(&mut self, canvas: CanvasSize, transform: ViewTransform) {
        self.out.clear();
        let [a, b, c, d, e, f] = transform.to_matrix();
        let _ = writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = canvas.width,
            h = canvas.height
        );
        let _ = writeln!(self.out, r#"<g transform="matrix({a} {b} {c} {d} {e} {f})">"#);
    }

    fn line(&mut self, seg: &Segment) {
        let stroke = match seg.role {
            LineRole::Axis => self.style.axis,
            LineRole::Tick => self.style.tick,
        };
        let _ = writeln!(
            self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="1"/>"#,
            seg.from.x, seg.from.y, seg.to.x, seg.to.y
        );
    }

    fn circle(&mut self, circle: &Circle) {
        let _ = writeln!(
            self.out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" data-index="{}"/>"#,
            circle.center.x, circle.center.y, circle.radius, self.style.point, circle.id.0
        );
    }

    fn path(&mut self, path: &LinePath) {
        if path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path.to_svg_data(),
            self.style.line,
            self.style.line_width
        );
    }

    fn rect(&mut self, rect: &LabelBox) {
        let _ = writeln!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}"/>"#,
            rect.left,
            rect.top,
            rect.width,
            rect.height,
            self.style.tooltip_fill,
            r = rect.corner_radius
        );
    }

    fn text(&mut self, label: &TextLabel) {
        let anchor = match label.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let (fill, size, extra) = match label.role {
            TextRole::TickLabel => (self.style.tick_label, self.style.tick_font_size, ""),
            TextRole::Tooltip => (
                self.style.tooltip_text,
                self.style.tooltip_font_size,
                r#" font-family="Arial, sans-serif" font-weight="bold""#,
            ),
        };
        let transform = if label.rotation_deg != 0.0 {
            format!(r#" transform="rotate({}, {}, {})""#, label.rotation_deg, label.pos.x, label.pos.y)
        } else {
            String::new()
        };
        let _ = writeln!(
            self.out,
            r#"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{size}" fill="{fill}"{extra}{transform}>{}</text>"#,
            label.pos.x,
            label.pos.y,
            escape(&label.text)
        );
    }

    fn end(&mut self) {
        self.out.push_str("</g>\n</svg>\n");
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
