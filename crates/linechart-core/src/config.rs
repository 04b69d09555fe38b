// File: crates/linechart-core/src/config.rs
// Summary: Chart configuration (canvas, margin, tick bounds, tooltip box) loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::types::{CanvasSize, HEIGHT, MARGIN, MAX_TICKS, MIN_TICKS, POINT_RADIUS, WIDTH};

/// Tooltip box geometry, relative to the hovered point.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipStyle {
    /// Horizontal distance from the point to the tooltip anchor.
    pub offset_x: f64,
    pub box_width: f64,
    pub box_height: f64,
    /// How far the box top sits above the anchor.
    pub box_rise: f64,
    pub corner_radius: f64,
    /// Text inset from the box's left edge.
    pub text_inset: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            box_width: 120.0,
            box_height: 20.0,
            box_rise: 14.0,
            corner_radius: 3.0,
            text_inset: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub min_ticks: usize,
    pub max_ticks: usize,
    pub initial_x_ticks: usize,
    pub initial_y_ticks: usize,
    pub point_radius: f64,
    pub tooltip: TooltipStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: MARGIN,
            min_ticks: MIN_TICKS,
            max_ticks: MAX_TICKS,
            initial_x_ticks: MIN_TICKS,
            initial_y_ticks: MIN_TICKS,
            point_radius: POINT_RADIUS,
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let cfg: ChartConfig = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&src)
    }

    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_ticks < 2 {
            return Err(ChartError::Config(format!("min_ticks must be at least 2, got {}", self.min_ticks)));
        }
        if self.min_ticks > self.max_ticks {
            return Err(ChartError::Config(format!(
                "min_ticks ({}) exceeds max_ticks ({})",
                self.min_ticks, self.max_ticks
            )));
        }
        for (name, v) in [("initial_x_ticks", self.initial_x_ticks), ("initial_y_ticks", self.initial_y_ticks)] {
            if v < self.min_ticks || v > self.max_ticks {
                return Err(ChartError::Config(format!(
                    "{name} ({v}) outside [{}, {}]",
                    self.min_ticks, self.max_ticks
                )));
            }
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(ChartError::Config(format!("margin must be a non-negative number, got {}", self.margin)));
        }
        if !(self.width.is_finite() && self.width > 2.0 * self.margin) {
            return Err(ChartError::Config(format!("width {} leaves no plot area with margin {}", self.width, self.margin)));
        }
        if !(self.height.is_finite() && self.height > 2.0 * self.margin) {
            return Err(ChartError::Config(format!("height {} leaves no plot area with margin {}", self.height, self.margin)));
        }
        if !(self.point_radius.is_finite() && self.point_radius > 0.0) {
            return Err(ChartError::Config(format!("point_radius must be positive, got {}", self.point_radius)));
        }
        Ok(())
    }
}
