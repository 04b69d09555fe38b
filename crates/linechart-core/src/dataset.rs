// File: crates/linechart-core/src/dataset.rs
// Summary: Immutable sample arena addressed by index-based identities.

use crate::error::{ChartError, Result};
use crate::types::Sample;

/// Identity of a sample: its position in the input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(pub usize);

impl SampleId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable set of samples. Input order is preserved; the path and
/// point identities both rely on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Build a dataset, rejecting empty input and non-finite coordinates.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if let Some((index, s)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(ChartError::NonFiniteSample { index, x: s.x, y: s.y });
        }
        Ok(Self { samples })
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        Self::new(pairs.into_iter().map(Sample::from).collect())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, id: SampleId) -> Option<Sample> {
        self.samples.get(id.0).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples paired with their identities, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (SampleId, Sample)> + '_ {
        self.samples.iter().enumerate().map(|(i, s)| (SampleId(i), *s))
    }
}
