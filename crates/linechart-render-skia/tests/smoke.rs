// File: crates/linechart-render-skia/tests/smoke.rs
// Purpose: End-to-end raster render smoke tests (PNG file, PNG bytes, RGBA buffer).

use linechart_core::{ChartConfig, LineChart, Sample, SampleId};
use linechart_render_skia::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions, Theme};

fn small_chart() -> LineChart {
    let data = [(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]
        .into_iter()
        .map(Sample::from)
        .collect();
    let cfg = ChartConfig { width: 320.0, height: 200.0, ..ChartConfig::default() };
    LineChart::new(data, cfg).expect("valid chart")
}

#[test]
fn render_smoke_png() {
    let mut chart = small_chart();
    chart.hover_enter(SampleId(3));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&mut chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&mut chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = small_chart();
    let opts = RenderOptions { theme: Theme::dark(), draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = render_to_rgba8(&mut chart, &opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left corner is outside the plot area: opaque dark background
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}
