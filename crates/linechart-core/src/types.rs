// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (samples, canvas sizes, pixel points).

use std::fmt;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 900.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 400.0;
/// Inset reserved on every side for axis lines and labels, in pixels.
pub const MARGIN: f64 = 25.0;
/// Lower bound of the tick counters.
pub const MIN_TICKS: usize = 5;
/// Upper bound of the tick counters.
pub const MAX_TICKS: usize = 12;
/// Radius of a data point marker, in pixels.
pub const POINT_RADIUS: f64 = 4.0;

/// One (x, y) observation. Identity is the sample's position in the dataset,
/// never its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Chart axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Canvas size in pixels.
/// Contract: both fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bit-exact key used for memoization.
    pub fn key(&self) -> (u64, u64) {
        (self.width.to_bits(), self.height.to_bits())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Position in base (untransformed) pixel space; origin top-left, y grows down.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: PixelPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
