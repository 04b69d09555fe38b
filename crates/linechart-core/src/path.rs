// File: crates/linechart-core/src/path.rs
// Summary: Polyline geometry through the samples, in input order.

use crate::scale::Scale;
use crate::types::{PixelPoint, Sample};

/// A command in a polyline path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start the polyline without drawing.
    MoveTo(PixelPoint),
    /// Draw a straight segment to the point.
    LineTo(PixelPoint),
}

impl PathCommand {
    pub fn point(&self) -> PixelPoint {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    commands: Vec<PathCommand>,
}

impl LinePath {
    /// Move to the first mapped sample, then line to every following one.
    /// Order is never changed, so non-monotonic x values make the path backtrack.
    /// An empty slice gives an empty path.
    pub fn build(samples: &[Sample], scale: &Scale) -> Self {
        let mut commands = Vec::with_capacity(samples.len());
        let mut iter = samples.iter();
        if let Some(first) = iter.next() {
            commands.push(PathCommand::MoveTo(scale.to_pixel(*first)));
            commands.extend(iter.map(|s| PathCommand::LineTo(scale.to_pixel(*s))));
        }
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// SVG path data, e.g. `M25,75 L50,25`.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let (tag, p) = match cmd {
                PathCommand::MoveTo(p) => ('M', p),
                PathCommand::LineTo(p) => ('L', p),
            };
            out.push_str(&format!("{tag}{},{}", p.x, p.y));
        }
        out
    }
}
