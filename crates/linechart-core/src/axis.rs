// File: crates/linechart-core/src/axis.rs
// Summary: Axis lines and tick marks (grid line + label) in base pixel space.

use crate::scale::Scale;
use crate::sink::{LineRole, Segment, TextAnchor, TextLabel, TextRole};
use crate::ticks::{format_tick, TickSet};
use crate::types::{Axis, PixelPoint};

/// Distance of x tick labels above the canvas bottom edge.
const X_LABEL_BOTTOM_GAP: f64 = 5.0;
/// Horizontal position of the (rotated) y tick labels.
const Y_LABEL_X: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub line: Segment,
    pub label: TextLabel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisGeometry {
    pub axis: Axis,
    pub line: Segment,
    pub ticks: Vec<TickMark>,
}

impl AxisGeometry {
    /// X axis runs along the bottom margin, y axis along the left margin.
    /// Tick grid lines span the plot area; x labels sit under the plot,
    /// y labels left of it, rotated a quarter turn counter-clockwise.
    pub fn build(axis: Axis, scale: &Scale, ticks: &TickSet) -> Self {
        let (left, right, top, bottom) = scale.plot_edges();
        let line = match axis {
            Axis::X => segment((left, bottom), (right, bottom), LineRole::Axis),
            Axis::Y => segment((left, top), (left, bottom), LineRole::Axis),
        };
        let height = scale.canvas.height;
        let ticks = ticks
            .values()
            .iter()
            .map(|&value| match axis {
                Axis::X => {
                    let px = scale.x_to_px(value);
                    TickMark {
                        value,
                        line: segment((px, bottom), (px, top), LineRole::Tick),
                        label: tick_label(PixelPoint::new(px, height - X_LABEL_BOTTOM_GAP), value, 0.0),
                    }
                }
                Axis::Y => {
                    let py = scale.y_to_px(value);
                    TickMark {
                        value,
                        line: segment((right, py), (left, py), LineRole::Tick),
                        label: tick_label(PixelPoint::new(Y_LABEL_X, py), value, -90.0),
                    }
                }
            })
            .collect();
        Self { axis, line, ticks }
    }
}

fn segment(from: (f64, f64), to: (f64, f64), role: LineRole) -> Segment {
    Segment { from: PixelPoint::new(from.0, from.1), to: PixelPoint::new(to.0, to.1), role }
}

fn tick_label(pos: PixelPoint, value: f64, rotation_deg: f64) -> TextLabel {
    TextLabel {
        pos,
        text: format_tick(value),
        anchor: TextAnchor::Middle,
        rotation_deg,
        role: TextRole::TickLabel,
    }
}
