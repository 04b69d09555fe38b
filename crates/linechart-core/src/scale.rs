// File: crates/linechart-core/src/scale.rs
// Summary: Linear data-to-pixel scale derived from a domain and canvas size.

use tracing::warn;

use crate::domain::Domain;
use crate::error::ChartError;
use crate::types::{Axis, CanvasSize, PixelPoint, Sample};

/// Pixel-per-unit factors plus the anchors needed to place values.
/// Y is flipped: data grows upward, pixels grow downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x_scale: f64,
    pub y_scale: f64,
    pub margin: f64,
    pub canvas: CanvasSize,
    domain: Domain,
}

impl Scale {
    /// Derive scale factors for `domain` on a `canvas` inset by `margin` on every side.
    ///
    /// A flat axis (min == max) gets a factor of exactly `0.0` instead of a
    /// division by zero, so its samples collapse onto the margin line.
    pub fn derive(domain: &Domain, canvas: CanvasSize, margin: f64) -> Self {
        let plot_w = (canvas.width - 2.0 * margin).max(0.0);
        let plot_h = (canvas.height - 2.0 * margin).max(0.0);
        let x_scale = axis_factor(domain, Axis::X, plot_w);
        let y_scale = axis_factor(domain, Axis::Y, plot_h);
        Self { x_scale, y_scale, margin, canvas, domain: *domain }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Every degenerate axis, X first, as recoverable errors for callers that
    /// want to surface a warning.
    pub fn degenerate(&self) -> Vec<ChartError> {
        [Axis::X, Axis::Y]
            .into_iter()
            .filter(|&a| self.domain.is_degenerate(a))
            .map(|axis| ChartError::DegenerateDomain { axis, value: self.domain.range(axis).0 })
            .collect()
    }

    // Offsets are taken on halved values so `x - min` cannot overflow when the
    // domain spans more than f64::MAX.
    #[inline]
    pub fn x_to_px(&self, x: f64) -> f64 {
        self.margin + (x * 0.5 - self.domain.min_x * 0.5) * (self.x_scale * 2.0)
    }

    #[inline]
    pub fn y_to_px(&self, y: f64) -> f64 {
        self.canvas.height - self.margin - (y * 0.5 - self.domain.min_y * 0.5) * (self.y_scale * 2.0)
    }

    #[inline]
    pub fn to_pixel(&self, s: Sample) -> PixelPoint {
        PixelPoint::new(self.x_to_px(s.x), self.y_to_px(s.y))
    }

    /// Left/right/top/bottom pixel edges of the plot area.
    pub fn plot_edges(&self) -> (f64, f64, f64, f64) {
        let m = self.margin;
        (m, self.canvas.width - m, m, self.canvas.height - m)
    }
}

fn axis_factor(domain: &Domain, axis: Axis, extent_px: f64) -> f64 {
    if domain.is_degenerate(axis) {
        warn!(%axis, value = domain.range(axis).0, "degenerate domain; collapsing axis to the margin line");
        return 0.0;
    }
    let factor = extent_px / domain.half_span(axis) * 0.5;
    if factor.is_finite() { factor } else { 0.0 }
}
