// File: crates/linechart-core/src/ticks.rs
// Summary: Evenly spaced tick values spanning one domain axis.

use crate::domain::Domain;
use crate::error::{ChartError, Result};
use crate::types::Axis;

/// `count` values linearly spaced over `[min, max]`, both endpoints included.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    values: Vec<f64>,
}

impl TickSet {
    /// `tick[i] = min + i * (max - min) / (count - 1)`.
    /// Rejects `count < 2`, where the spacing is undefined.
    pub fn generate(min: f64, max: f64, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(ChartError::InvalidTickCount { count });
        }
        // work in halves so a span wider than f64::MAX stays finite
        let half_step = (max * 0.5 - min * 0.5) / (count - 1) as f64;
        let mut values: Vec<f64> = (0..count).map(|i| (min * 0.5 + half_step * i as f64) * 2.0).collect();
        // pin the endpoint; accumulated rounding must not move it
        values[count - 1] = max;
        Ok(Self { values })
    }

    pub fn for_axis(domain: &Domain, axis: Axis, count: usize) -> Result<Self> {
        let (min, max) = domain.range(axis);
        Self::generate(min, max, count)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn spacing(&self) -> f64 {
        match self.values.as_slice() {
            [first, .., last] => (last * 0.5 - first * 0.5) / (self.values.len() - 1) as f64 * 2.0,
            _ => 0.0,
        }
    }
}

/// Tick label text: one decimal place.
pub fn format_tick(value: f64) -> String {
    format!("{value:.1}")
}
