// File: crates/linechart-core/src/error.rs
// Summary: Error kinds raised while deriving chart geometry.

use thiserror::Error;

use crate::types::Axis;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No samples to scan; rendering cannot proceed.
    #[error("dataset is empty; nothing to chart")]
    EmptyDataset,

    /// Flat axis (min == max). Recovered by a zero scale factor.
    #[error("degenerate {axis} domain: min == max == {value}")]
    DegenerateDomain { axis: Axis, value: f64 },

    #[error("invalid tick count {count}; at least 2 ticks are required")]
    InvalidTickCount { count: usize },

    #[error("sample {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteSample { index: usize, x: f64, y: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ChartError {
    fn from(err: toml::de::Error) -> Self {
        ChartError::TomlParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
