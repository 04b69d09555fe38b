// File: crates/linechart-render-skia/src/theme.rs
// Summary: Light/Dark color presets for the raster sink.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub point: skia::Color,
    pub line_stroke: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tick_label: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            point: skia::Color::from_argb(255, 0x34, 0x98, 0xdb),
            line_stroke: skia::Color::from_argb(255, 0x34, 0x98, 0xdb),
            tooltip_fill: skia::Color::from_argb(255, 173, 255, 47), // greenyellow
            tooltip_text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 40, 40, 45),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            point: skia::Color::from_argb(255, 64, 160, 255),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            tooltip_fill: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_text: skia::Color::from_argb(255, 18, 18, 20),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tick_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            point: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            tooltip_fill: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_text: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
