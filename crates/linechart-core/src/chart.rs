// File: crates/linechart-core/src/chart.rs
// Summary: LineChart ties dataset, derived geometry, tick controls and tooltip state together
// and emits the frame into a DrawSink.

use tracing::debug;

use crate::axis::AxisGeometry;
use crate::config::ChartConfig;
use crate::dataset::{Dataset, SampleId};
use crate::domain::Domain;
use crate::error::{ChartError, Result};
use crate::memo::Memo;
use crate::path::LinePath;
use crate::scale::Scale;
use crate::sink::{Circle, DrawSink};
use crate::ticks::TickSet;
use crate::tooltip::{PointerTracker, TooltipLabel, TooltipSelector, TooltipState};
use crate::types::{Axis, CanvasSize, PixelPoint, Sample};
use crate::viewport::{StaticViewport, TickCounter, ViewportController, ViewportProvider};

/// Inputs of the base geometry: dataset revision, canvas size and margin (bit patterns).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BaseKey {
    revision: u64,
    canvas: (u64, u64),
    margin: u64,
}

/// Geometry that depends only on the dataset and the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseLayout {
    pub domain: Domain,
    pub scale: Scale,
    /// Marker centers, indexed by `SampleId`.
    pub points: Vec<PixelPoint>,
    pub path: LinePath,
}

impl BaseLayout {
    pub fn derive(dataset: &Dataset, canvas: CanvasSize, margin: f64) -> Result<Self> {
        let samples = dataset.samples();
        let domain = Domain::from_samples(samples)?;
        let scale = Scale::derive(&domain, canvas, margin);
        let points = samples.iter().map(|s| scale.to_pixel(*s)).collect();
        let path = LinePath::build(samples, &scale);
        Ok(Self { domain, scale, points, path })
    }
}

/// Borrowed view of the current derived geometry.
#[derive(Clone, Copy, Debug)]
pub struct ChartLayout<'a> {
    pub base: &'a BaseLayout,
    pub x_axis: &'a AxisGeometry,
    pub y_axis: &'a AxisGeometry,
}

impl ChartLayout<'_> {
    pub fn domain(&self) -> &Domain {
        &self.base.domain
    }

    pub fn scale(&self) -> &Scale {
        &self.base.scale
    }

    pub fn axis(&self, axis: Axis) -> &AxisGeometry {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
        }
    }

    /// Recoverable flat-axis conditions, one per flat axis.
    pub fn degenerate(&self) -> Vec<ChartError> {
        self.base.scale.degenerate()
    }
}

/// Number of times each derived part has been recomputed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    pub base: u32,
    pub x_ticks: u32,
    pub y_ticks: u32,
}

pub struct LineChart {
    dataset: Dataset,
    revision: u64,
    config: ChartConfig,
    viewport: ViewportController,
    selector: TooltipSelector,
    pointer: PointerTracker,
    base: Memo<BaseKey, BaseLayout>,
    x_axis: Memo<(BaseKey, usize), AxisGeometry>,
    y_axis: Memo<(BaseKey, usize), AxisGeometry>,
    stats: RecomputeStats,
}

impl LineChart {
    /// Build a chart over `samples`. Fails on an empty dataset or an invalid config.
    pub fn new(samples: Vec<Sample>, config: ChartConfig) -> Result<Self> {
        Self::with_provider(samples, config, Box::new(StaticViewport::new()))
    }

    pub fn with_provider(
        samples: Vec<Sample>,
        config: ChartConfig,
        provider: Box<dyn ViewportProvider>,
    ) -> Result<Self> {
        config.validate()?;
        let dataset = Dataset::new(samples)?;
        let x = TickCounter::new(config.initial_x_ticks, config.min_ticks, config.max_ticks);
        let y = TickCounter::new(config.initial_y_ticks, config.min_ticks, config.max_ticks);
        let mut viewport = ViewportController::new(x, y, provider);
        viewport.wrap(config.canvas());
        debug!(samples = dataset.len(), width = config.width, height = config.height, "line chart created");
        Ok(Self {
            dataset,
            revision: 0,
            config,
            viewport,
            selector: TooltipSelector::new(),
            pointer: PointerTracker::new(),
            base: Memo::new(),
            x_axis: Memo::new(),
            y_axis: Memo::new(),
            stats: RecomputeStats::default(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn canvas(&self) -> CanvasSize {
        self.config.canvas()
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    pub fn tooltip_state(&self) -> TooltipState {
        self.selector.state()
    }

    pub fn recompute_stats(&self) -> RecomputeStats {
        self.stats
    }

    /// Replace every sample. The tooltip and pointer state refer to old
    /// indices and are cleared.
    pub fn replace_dataset(&mut self, samples: Vec<Sample>) -> Result<()> {
        self.dataset = Dataset::new(samples)?;
        self.revision += 1;
        self.selector.reset();
        self.pointer.clear();
        debug!(samples = self.dataset.len(), revision = self.revision, "dataset replaced");
        Ok(())
    }

    /// Resize the canvas; the viewport provider is told the new wrap size.
    pub fn set_canvas_size(&mut self, size: CanvasSize) -> Result<()> {
        let mut next = self.config.clone();
        next.width = size.width;
        next.height = size.height;
        next.validate()?;
        self.config = next;
        self.viewport.wrap(size);
        Ok(())
    }

    pub fn increment_ticks(&mut self, axis: Axis) -> bool {
        self.viewport.increment(axis)
    }

    pub fn decrement_ticks(&mut self, axis: Axis) -> bool {
        self.viewport.decrement(axis)
    }

    fn base_key(&self) -> BaseKey {
        BaseKey {
            revision: self.revision,
            canvas: self.config.canvas().key(),
            margin: self.config.margin.to_bits(),
        }
    }

    /// Current derived geometry, recomputing only the parts whose inputs changed.
    pub fn layout(&mut self) -> Result<ChartLayout<'_>> {
        let key = self.base_key();
        let dataset = &self.dataset;
        let canvas = self.config.canvas();
        let margin = self.config.margin;
        let stats = &mut self.stats;

        let base = self.base.get_or_try_compute(key, || {
            stats.base += 1;
            debug!(revision = key.revision, width = canvas.width, height = canvas.height, "deriving domain and scale");
            BaseLayout::derive(dataset, canvas, margin)
        })?;

        let xn = self.viewport.tick_count(Axis::X);
        let x_axis = self.x_axis.get_or_try_compute((key, xn), || {
            stats.x_ticks += 1;
            debug!(count = xn, "deriving x ticks");
            let ticks = TickSet::for_axis(&base.domain, Axis::X, xn)?;
            Ok::<_, ChartError>(AxisGeometry::build(Axis::X, &base.scale, &ticks))
        })?;

        let yn = self.viewport.tick_count(Axis::Y);
        let y_axis = self.y_axis.get_or_try_compute((key, yn), || {
            stats.y_ticks += 1;
            debug!(count = yn, "deriving y ticks");
            let ticks = TickSet::for_axis(&base.domain, Axis::Y, yn)?;
            Ok::<_, ChartError>(AxisGeometry::build(Axis::Y, &base.scale, &ticks))
        })?;

        Ok(ChartLayout { base, x_axis, y_axis })
    }

    pub fn hover_enter(&mut self, id: SampleId) {
        if self.dataset.get(id).is_some() {
            self.selector.hover_enter(id);
        }
    }

    pub fn hover_leave(&mut self, id: SampleId) {
        self.selector.hover_leave(id);
    }

    /// Marker under a viewport-space position. Later samples are drawn on top
    /// and win when markers overlap.
    pub fn hit_test(&mut self, pointer: PixelPoint) -> Result<Option<SampleId>> {
        let transform = self.viewport.transform();
        let radius = self.config.point_radius;
        let Some(base_pt) = transform.invert(pointer) else {
            return Ok(None);
        };
        let layout = self.layout()?;
        let hit = layout
            .base
            .points
            .iter()
            .enumerate()
            .rev()
            .find(|(_, p)| p.distance_sq(base_pt) <= radius * radius)
            .map(|(i, _)| SampleId(i));
        Ok(hit)
    }

    /// Feed a pointer position (viewport space); returns the active tooltip afterwards.
    pub fn pointer_moved(&mut self, pointer: PixelPoint) -> Result<Option<SampleId>> {
        let hit = self.hit_test(pointer)?;
        for event in self.pointer.update(hit) {
            self.selector.apply(event);
        }
        Ok(self.selector.active())
    }

    pub fn pointer_left(&mut self) {
        for event in self.pointer.update(None) {
            self.selector.apply(event);
        }
    }

    /// Tooltip geometry for the active sample, in base pixels.
    pub fn tooltip(&mut self) -> Result<Option<TooltipLabel>> {
        let Some((id, sample)) = self.active_sample() else {
            return Ok(None);
        };
        let style = self.config.tooltip;
        let layout = self.layout()?;
        Ok(layout.base.points.get(id.0).map(|p| TooltipLabel::layout(id, sample, *p, &style)))
    }

    fn active_sample(&self) -> Option<(SampleId, Sample)> {
        let id = self.selector.active()?;
        self.dataset.get(id).map(|s| (id, s))
    }

    /// Emit one frame: x axis and ticks, y axis and ticks, point markers,
    /// the data path, then the tooltip on top.
    pub fn render(&mut self, sink: &mut dyn DrawSink) -> Result<()> {
        let tooltip = self.tooltip()?;
        let canvas = self.config.canvas();
        let transform = self.viewport.transform();
        let radius = self.config.point_radius;
        let layout = self.layout()?;

        sink.begin(canvas, transform);
        for axis in [layout.x_axis, layout.y_axis] {
            sink.line(&axis.line);
            for tick in &axis.ticks {
                sink.line(&tick.line);
                sink.text(&tick.label);
            }
        }
        for (i, center) in layout.base.points.iter().enumerate() {
            sink.circle(&Circle { center: *center, radius, id: SampleId(i) });
        }
        sink.path(&layout.base.path);
        if let Some(t) = tooltip {
            sink.rect(&t.rect);
            sink.text(&t.text);
        }
        sink.end();
        Ok(())
    }
}

impl std::fmt::Debug for LineChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineChart")
            .field("samples", &self.dataset.len())
            .field("revision", &self.revision)
            .field("viewport", &self.viewport)
            .field("tooltip", &self.selector.state())
            .finish()
    }
}
