// File: crates/linechart-render-skia/src/sink.rs
// Summary: DrawSink that paints linechart-core primitives onto a Skia canvas.

use skia_safe as skia;

use linechart_core::sink::{Circle, DrawSink, LabelBox, LineRole, Segment, TextLabel, TextRole};
use linechart_core::{CanvasSize, LinePath, PathCommand, ViewTransform};

use crate::text::TextShaper;
use crate::theme::Theme;

const TICK_FONT_SIZE: f32 = 12.0;
const TOOLTIP_FONT_SIZE: f32 = 14.0;

pub struct SkiaSink<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    theme: Theme,
    line_width: f32,
    draw_labels: bool,
}

impl<'a> SkiaSink<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper, theme: Theme) -> Self {
        Self { canvas, shaper, theme, line_width: 2.0, draw_labels: true }
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Skip text; keeps raster output independent of installed fonts.
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    fn stroke(color: skia::Color, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        paint
    }

    fn fill(color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        paint
    }
}

impl DrawSink for SkiaSink<'_> {
    fn begin(&mut self, _canvas: CanvasSize, transform: ViewTransform) {
        self.canvas.clear(self.theme.background);
        self.canvas.save();
        let [a, _, _, d, e, f] = transform.to_matrix();
        let m = skia::Matrix::new_all(a as f32, 0.0, e as f32, 0.0, d as f32, f as f32, 0.0, 0.0, 1.0);
        self.canvas.concat(&m);
    }

    fn line(&mut self, seg: &Segment) {
        let color = match seg.role {
            LineRole::Axis => self.theme.axis_line,
            LineRole::Tick => self.theme.tick,
        };
        let paint = Self::stroke(color, 1.0);
        self.canvas.draw_line(
            (seg.from.x as f32, seg.from.y as f32),
            (seg.to.x as f32, seg.to.y as f32),
            &paint,
        );
    }

    fn circle(&mut self, circle: &Circle) {
        let paint = Self::fill(self.theme.point);
        self.canvas.draw_circle(
            (circle.center.x as f32, circle.center.y as f32),
            circle.radius as f32,
            &paint,
        );
    }

    fn path(&mut self, path: &LinePath) {
        if path.is_empty() {
            return;
        }
        let mut sk_path = skia::Path::new();
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => sk_path.move_to((p.x as f32, p.y as f32)),
                PathCommand::LineTo(p) => sk_path.line_to((p.x as f32, p.y as f32)),
            };
        }
        let paint = Self::stroke(self.theme.line_stroke, self.line_width);
        self.canvas.draw_path(&sk_path, &paint);
    }

    fn rect(&mut self, rect: &LabelBox) {
        let r = skia::Rect::from_xywh(rect.left as f32, rect.top as f32, rect.width as f32, rect.height as f32);
        let radius = rect.corner_radius as f32;
        let rrect = skia::RRect::new_rect_xy(r, radius, radius);
        self.canvas.draw_rrect(rrect, &Self::fill(self.theme.tooltip_fill));
    }

    fn text(&mut self, label: &TextLabel) {
        if !self.draw_labels {
            return;
        }
        let (size, color, bold) = match label.role {
            TextRole::TickLabel => (TICK_FONT_SIZE, self.theme.tick_label, false),
            TextRole::Tooltip => (TOOLTIP_FONT_SIZE, self.theme.tooltip_text, true),
        };
        self.shaper.draw_anchored(
            self.canvas,
            &label.text,
            (label.pos.x as f32, label.pos.y as f32),
            size,
            color,
            bold,
            label.anchor,
            label.rotation_deg as f32,
        );
    }

    fn end(&mut self) {
        self.canvas.restore();
    }
}
