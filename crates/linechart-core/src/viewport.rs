// File: crates/linechart-core/src/viewport.rs
// Summary: Tick-count controls and the pass-through zoom/pan transform from an external provider.

use tracing::debug;

use crate::types::{Axis, CanvasSize, PixelPoint, MAX_TICKS, MIN_TICKS};

/// Uniform scale followed by a translation, applied after base pixel mapping:
/// `p' = p * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 };

    pub const fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self { scale, translate_x, translate_y }
    }

    #[inline]
    pub fn apply(&self, p: PixelPoint) -> PixelPoint {
        PixelPoint::new(p.x * self.scale + self.translate_x, p.y * self.scale + self.translate_y)
    }

    /// Map a viewport-space point back to base pixels. `None` for a zero or
    /// non-finite scale.
    pub fn invert(&self, p: PixelPoint) -> Option<PixelPoint> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        Some(PixelPoint::new((p.x - self.translate_x) / self.scale, (p.y - self.translate_y) / self.scale))
    }

    /// Affine matrix `[a, b, c, d, e, f]` in SVG/canvas order.
    pub fn to_matrix(&self) -> [f64; 6] {
        [self.scale, 0.0, 0.0, self.scale, self.translate_x, self.translate_y]
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Zoom/pan is owned elsewhere (gesture handling, a UI toolkit). The chart
/// only announces the size of the region it draws and reads back the
/// current transform.
pub trait ViewportProvider {
    /// Size of the region the provider wraps.
    fn wrap(&mut self, size: CanvasSize);
    /// Current composed zoom/pan transform.
    fn transform(&self) -> ViewTransform;
    /// Return to the unzoomed, unpanned view.
    fn recenter(&mut self);
}

/// Provider holding whatever transform it was last given; no gesture handling.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticViewport {
    size: Option<CanvasSize>,
    transform: ViewTransform,
}

impl StaticViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: ViewTransform) -> Self {
        Self { size: None, transform }
    }

    pub fn size(&self) -> Option<CanvasSize> {
        self.size
    }
}

impl ViewportProvider for StaticViewport {
    fn wrap(&mut self, size: CanvasSize) {
        self.size = Some(size);
    }
    fn transform(&self) -> ViewTransform {
        self.transform
    }
    fn recenter(&mut self) {
        self.transform = ViewTransform::IDENTITY;
    }
}

/// Bounded counter behind one "- N +" control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCounter {
    value: usize,
    min: usize,
    max: usize,
}

impl TickCounter {
    /// `value` is clamped into `[min, max]`; `min` is raised to 2 and `max` to `min`.
    pub fn new(value: usize, min: usize, max: usize) -> Self {
        let min = min.max(2);
        let max = max.max(min);
        Self { value: value.clamp(min, max), min, max }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    /// `false` is the disabled signal for the "+" control.
    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    /// `false` is the disabled signal for the "-" control.
    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    /// No-op at the upper bound. Returns whether the value changed.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.value += 1;
        true
    }

    /// No-op at the lower bound. Returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.value -= 1;
        true
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new(MIN_TICKS, MIN_TICKS, MAX_TICKS)
    }
}

pub struct ViewportController {
    x_ticks: TickCounter,
    y_ticks: TickCounter,
    provider: Box<dyn ViewportProvider>,
}

impl ViewportController {
    pub fn new(x_ticks: TickCounter, y_ticks: TickCounter, provider: Box<dyn ViewportProvider>) -> Self {
        Self { x_ticks, y_ticks, provider }
    }

    pub fn counter(&self, axis: Axis) -> &TickCounter {
        match axis {
            Axis::X => &self.x_ticks,
            Axis::Y => &self.y_ticks,
        }
    }

    fn counter_mut(&mut self, axis: Axis) -> &mut TickCounter {
        match axis {
            Axis::X => &mut self.x_ticks,
            Axis::Y => &mut self.y_ticks,
        }
    }

    pub fn tick_count(&self, axis: Axis) -> usize {
        self.counter(axis).value()
    }

    pub fn increment(&mut self, axis: Axis) -> bool {
        let changed = self.counter_mut(axis).increment();
        if changed {
            debug!(%axis, ticks = self.tick_count(axis), "tick count increased");
        }
        changed
    }

    pub fn decrement(&mut self, axis: Axis) -> bool {
        let changed = self.counter_mut(axis).decrement();
        if changed {
            debug!(%axis, ticks = self.tick_count(axis), "tick count decreased");
        }
        changed
    }

    pub fn wrap(&mut self, size: CanvasSize) {
        self.provider.wrap(size);
    }

    pub fn transform(&self) -> ViewTransform {
        self.provider.transform()
    }

    pub fn recenter(&mut self) {
        self.provider.recenter();
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(TickCounter::default(), TickCounter::default(), Box::new(StaticViewport::new()))
    }
}

impl std::fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportController")
            .field("x_ticks", &self.x_ticks)
            .field("y_ticks", &self.y_ticks)
            .field("transform", &self.transform())
            .finish()
    }
}
