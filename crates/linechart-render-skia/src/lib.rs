// File: crates/linechart-render-skia/src/lib.rs
// Summary: Headless raster rendering of a LineChart using Skia CPU surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use linechart_core::LineChart;

pub mod sink;
pub mod text;
pub mod theme;

pub use sink::SkiaSink;
pub use text::TextShaper;
pub use theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            draw_labels: true,
            line_width: 2.0,
        }
    }
}

fn make_surface(chart: &LineChart) -> Result<skia::Surface> {
    let canvas = chart.canvas();
    let (w, h) = (canvas.width.ceil() as i32, canvas.height.ceil() as i32);
    skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))
}

fn paint_frame(chart: &mut LineChart, opts: &RenderOptions, surface: &mut skia::Surface) -> Result<()> {
    let shaper = TextShaper::new();
    let mut sink = SkiaSink::new(surface.canvas(), &shaper, opts.theme)
        .with_line_width(opts.line_width)
        .with_labels(opts.draw_labels);
    chart.render(&mut sink).context("deriving chart geometry")?;
    Ok(())
}

/// Render into a tightly packed RGBA8 buffer. Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(chart: &mut LineChart, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = make_surface(chart)?;
    paint_frame(chart, opts, &mut surface)?;

    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((pixels, w, h, row_bytes))
}

/// Render and encode as PNG in memory.
pub fn render_to_png_bytes(chart: &mut LineChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = make_surface(chart)?;
    paint_frame(chart, opts, &mut surface)?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    chart: &mut LineChart,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "png written");
    Ok(())
}
