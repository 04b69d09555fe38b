// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart geometry, interaction state and sinks.

pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod memo;
pub mod path;
pub mod scale;
pub mod sink;
pub mod svg;
pub mod ticks;
pub mod tooltip;
pub mod types;
pub mod viewport;

pub use axis::{AxisGeometry, TickMark};
pub use chart::{BaseLayout, ChartLayout, LineChart, RecomputeStats};
pub use config::{ChartConfig, TooltipStyle};
pub use dataset::{Dataset, SampleId};
pub use domain::Domain;
pub use error::{ChartError, Result};
pub use path::{LinePath, PathCommand};
pub use scale::Scale;
pub use sink::{DrawSink, Primitive, RecordingSink};
pub use svg::SvgSink;
pub use ticks::TickSet;
pub use tooltip::{HoverEvent, TooltipLabel, TooltipSelector, TooltipState};
pub use types::{Axis, CanvasSize, PixelPoint, Sample};
pub use viewport::{StaticViewport, TickCounter, ViewTransform, ViewportController, ViewportProvider};
