// File: crates/linechart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use linechart_core::{ChartConfig, LineChart, Sample, SampleId};
use linechart_render_skia::{render_to_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(hover: Option<usize>) -> Vec<u8> {
    let data = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)]
        .into_iter()
        .map(Sample::from)
        .collect();
    let cfg = ChartConfig { width: 400.0, height: 240.0, ..ChartConfig::default() };
    let mut chart = LineChart::new(data, cfg).expect("chart");
    if let Some(i) = hover {
        chart.hover_enter(SampleId(i));
    }
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    render_to_png_bytes(&mut chart, &opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/basic_chart.png");
    write_or_compare(&path, &render_bytes(None));
}

#[test]
fn golden_tooltip_box() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/tooltip_box.png");
    write_or_compare(&path, &render_bytes(Some(3)));
}

#[test]
fn tooltip_changes_pixels() {
    let plain = image::load_from_memory(&render_bytes(None)).expect("decode").to_rgba8();
    let hovered = image::load_from_memory(&render_bytes(Some(3))).expect("decode").to_rgba8();
    assert_ne!(plain.as_raw(), hovered.as_raw());
}
