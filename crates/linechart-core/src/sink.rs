// File: crates/linechart-core/src/sink.rs
// Summary: Drawing primitives and the sink trait that renderers implement.

use crate::dataset::SampleId;
use crate::path::LinePath;
use crate::types::{CanvasSize, PixelPoint};
use crate::viewport::ViewTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    /// The x or y axis line.
    Axis,
    /// A grid line at a tick value.
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub role: LineRole,
}

/// Data point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: PixelPoint,
    pub radius: f64,
    pub id: SampleId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    TickLabel,
    Tooltip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub pos: PixelPoint,
    pub text: String,
    pub anchor: TextAnchor,
    /// Rotation about `pos` in degrees; negative is counter-clockwise on screen.
    pub rotation_deg: f64,
    pub role: TextRole,
}

/// Rounded background box behind the tooltip text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

/// Everything the core can ask a sink to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line(Segment),
    Circle(Circle),
    Path(LinePath),
    Rect(LabelBox),
    Text(TextLabel),
}

/// Receives base pixel geometry. The viewport transform given to `begin`
/// applies to every primitive of the frame.
pub trait DrawSink {
    fn begin(&mut self, _canvas: CanvasSize, _transform: ViewTransform) {}
    fn line(&mut self, seg: &Segment);
    fn circle(&mut self, circle: &Circle);
    fn path(&mut self, path: &LinePath);
    fn rect(&mut self, rect: &LabelBox);
    fn text(&mut self, label: &TextLabel);
    fn end(&mut self) {}

    /// Dispatch a stored primitive to the matching method.
    fn draw(&mut self, prim: &Primitive) {
        match prim {
            Primitive::Line(s) => self.line(s),
            Primitive::Circle(c) => self.circle(c),
            Primitive::Path(p) => self.path(p),
            Primitive::Rect(r) => self.rect(r),
            Primitive::Text(t) => self.text(t),
        }
    }
}

/// Headless sink that keeps every primitive of the last frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub canvas: Option<CanvasSize>,
    pub transform: ViewTransform,
    pub primitives: Vec<Primitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Segment> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(s) => Some(s),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextLabel> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &LinePath> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
    }
}

impl DrawSink for RecordingSink {
    fn begin(&mut self, canvas: CanvasSize, transform: ViewTransform) {
        self.canvas = Some(canvas);
        self.transform = transform;
        self.primitives.clear();
    }
    fn line(&mut self, seg: &Segment) {
        self.primitives.push(Primitive::Line(*seg));
    }
    fn circle(&mut self, circle: &Circle) {
        self.primitives.push(Primitive::Circle(*circle));
    }
    fn path(&mut self, path: &LinePath) {
        self.primitives.push(Primitive::Path(path.clone()));
    }
    fn rect(&mut self, rect: &LabelBox) {
        self.primitives.push(Primitive::Rect(*rect));
    }
    fn text(&mut self, label: &TextLabel) {
        self.primitives.push(Primitive::Text(label.clone()));
    }
}
