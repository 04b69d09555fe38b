// File: crates/linechart-demo/src/pan_zoom.rs
// Summary: Pixel-space pan/zoom provider standing in for a gesture-handling layer.

use linechart_core::{CanvasSize, PixelPoint, ViewTransform, ViewportProvider};

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct PanZoomViewport {
    size: CanvasSize,
    transform: ViewTransform,
}

impl PanZoomViewport {
    pub fn new(size: CanvasSize) -> Self {
        Self { size, transform: ViewTransform::IDENTITY }
    }

    /// Multiply the zoom by `factor`, keeping the content under `cursor` fixed.
    pub fn zoom_at(&mut self, cursor: PixelPoint, factor: f64) {
        let t = self.transform;
        let scale = (t.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let k = scale / t.scale;
        self.transform = ViewTransform::new(
            scale,
            cursor.x - (cursor.x - t.translate_x) * k,
            cursor.y - (cursor.y - t.translate_y) * k,
        );
    }

    pub fn zoom_center(&mut self, factor: f64) {
        let center = PixelPoint::new(self.size.width * 0.5, self.size.height * 0.5);
        self.zoom_at(center, factor);
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.transform.translate_x += dx;
        self.transform.translate_y += dy;
    }
}

impl ViewportProvider for PanZoomViewport {
    fn wrap(&mut self, size: CanvasSize) {
        self.size = size;
    }
    fn transform(&self) -> ViewTransform {
        self.transform
    }
    fn recenter(&mut self) {
        self.transform = ViewTransform::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_keeps_cursor_fixed() {
        let mut v = PanZoomViewport::new(CanvasSize::new(900.0, 400.0));
        let cursor = PixelPoint::new(300.0, 120.0);
        v.zoom_at(cursor, 2.0);
        let t = v.transform();
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.apply(cursor), cursor);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut v = PanZoomViewport::new(CanvasSize::new(100.0, 100.0));
        v.zoom_center(1000.0);
        assert_eq!(v.transform().scale, MAX_ZOOM);
        v.recenter();
        assert!(v.transform().is_identity());
    }

    #[test]
    fn pan_accumulates() {
        let mut v = PanZoomViewport::new(CanvasSize::new(100.0, 100.0));
        v.pan_by_pixels(10.0, -5.0);
        v.pan_by_pixels(2.0, 1.0);
        assert_eq!(v.transform(), ViewTransform::new(1.0, 12.0, -4.0));
    }
}
