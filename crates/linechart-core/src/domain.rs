// File: crates/linechart-core/src/domain.rs
// Summary: Data extents (min/max per axis) scanned from a sample sequence.

use crate::error::{ChartError, Result};
use crate::types::{Axis, Sample};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Domain {
    /// Scan `samples` for the extent of each axis.
    /// Fails on an empty slice before any reduction happens.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let (first, rest) = samples.split_first().ok_or(ChartError::EmptyDataset)?;
        let mut d = Self { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        for s in rest {
            d.min_x = d.min_x.min(s.x);
            d.max_x = d.max_x.max(s.x);
            d.min_y = d.min_y.min(s.y);
            d.max_y = d.max_y.max(s.y);
        }
        Ok(d)
    }

    /// `(min, max)` of one axis.
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }

    /// Half of `max - min`. Finite for any finite domain, even when the full
    /// span would overflow `f64`.
    pub fn half_span(&self, axis: Axis) -> f64 {
        let (lo, hi) = self.range(axis);
        hi * 0.5 - lo * 0.5
    }

    pub fn is_degenerate(&self, axis: Axis) -> bool {
        let (lo, hi) = self.range(axis);
        lo == hi
    }

    pub fn contains(&self, s: Sample) -> bool {
        s.x >= self.min_x && s.x <= self.max_x && s.y >= self.min_y && s.y <= self.max_y
    }
}
