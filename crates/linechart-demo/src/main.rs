// File: crates/linechart-demo/src/main.rs
// Summary: Demo loads x,y samples (CSV or built-in), applies tick counts, zoom/pan and an
// optional hovered point, then writes the chart as PNG and SVG.

mod data;
mod pan_zoom;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use linechart_core::{Axis, ChartConfig, LineChart, SampleId, SvgSink, TooltipState};
use linechart_render_skia::{render_to_png, theme, RenderOptions};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::pan_zoom::PanZoomViewport;

#[derive(Parser, Debug)]
#[command(name = "linechart-demo", about = "Render an x,y line chart to PNG and SVG")]
struct Cli {
    /// CSV file with x,y columns; the built-in sample set is used when omitted
    input: Option<PathBuf>,

    /// TOML chart configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of x axis ticks (clamped to the configured bounds)
    #[arg(long)]
    x_ticks: Option<usize>,

    /// Number of y axis ticks (clamped to the configured bounds)
    #[arg(long)]
    y_ticks: Option<usize>,

    /// Zoom factor about the canvas center
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_x: f64,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_y: f64,

    /// Index of the sample whose tooltip is shown
    #[arg(long)]
    hover: Option<usize>,

    /// Theme preset: light, dark, high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(p) => ChartConfig::from_path(p).with_context(|| format!("loading config {}", p.display()))?,
        None => ChartConfig::default(),
    };

    let samples = match &cli.input {
        Some(p) => data::load_xy_csv(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?,
        None => data::sample_data(),
    };
    info!(samples = samples.len(), "loaded samples");

    let mut viewport = PanZoomViewport::new(config.canvas());
    if cli.zoom != 1.0 {
        viewport.zoom_center(cli.zoom);
    }
    viewport.pan_by_pixels(cli.pan_x, cli.pan_y);

    let mut chart = LineChart::with_provider(samples, config, Box::new(viewport))
        .context("cannot build chart; check the input data")?;

    if let Some(n) = cli.x_ticks {
        step_ticks_to(&mut chart, Axis::X, n);
    }
    if let Some(n) = cli.y_ticks {
        step_ticks_to(&mut chart, Axis::Y, n);
    }

    if let Some(i) = cli.hover {
        chart.hover_enter(SampleId(i));
        if chart.tooltip_state() == TooltipState::Idle {
            warn!(index = i, samples = chart.dataset().len(), "hover index out of range; no tooltip");
        }
    }

    {
        let layout = chart.layout()?;
        for w in layout.degenerate() {
            warn!("{w}");
        }
        let d = layout.domain();
        info!(min_x = d.min_x, max_x = d.max_x, min_y = d.min_y, max_y = d.max_y, "domain");
    }

    let stem = cli
        .input
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("sample");

    let opts = RenderOptions { theme: theme::find(&cli.theme), ..RenderOptions::default() };
    let png = cli.out_dir.join(format!("chart_{stem}.png"));
    render_to_png(&mut chart, &opts, &png)?;
    info!(path = %png.display(), "wrote png");

    let mut svg = SvgSink::new();
    chart.render(&mut svg)?;
    let svg_path = png.with_extension("svg");
    std::fs::write(&svg_path, svg.finish()).with_context(|| format!("writing {}", svg_path.display()))?;
    info!(path = %svg_path.display(), "wrote svg");

    Ok(())
}

/// Drive the +/- control until it reaches `target` or a bound disables it.
fn step_ticks_to(chart: &mut LineChart, axis: Axis, target: usize) {
    loop {
        let current = chart.viewport().tick_count(axis);
        let moved = match current.cmp(&target) {
            std::cmp::Ordering::Less => chart.increment_ticks(axis),
            std::cmp::Ordering::Greater => chart.decrement_ticks(axis),
            std::cmp::Ordering::Equal => break,
        };
        if !moved {
            warn!(%axis, requested = target, using = current, "tick count clamped");
            break;
        }
    }
}
