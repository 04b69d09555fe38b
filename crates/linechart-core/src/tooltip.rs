// File: crates/linechart-core/src/tooltip.rs
// Summary: Single-active tooltip state machine, tooltip geometry and pointer hover tracking.

use tracing::trace;

use crate::config::TooltipStyle;
use crate::dataset::SampleId;
use crate::sink::{LabelBox, TextAnchor, TextLabel, TextRole};
use crate::types::{PixelPoint, Sample};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Idle,
    Showing(SampleId),
}

/// Hover transitions delivered by the presentation layer, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(SampleId),
    Leave(SampleId),
}

/// At most one tooltip is active. A leave only clears the tooltip of the
/// point that is currently showing, so a late leave from a previously hovered
/// point cannot hide the tooltip another point just opened.
#[derive(Clone, Debug, Default)]
pub struct TooltipSelector {
    state: TooltipState,
}

impl TooltipSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn active(&self) -> Option<SampleId> {
        match self.state {
            TooltipState::Idle => None,
            TooltipState::Showing(id) => Some(id),
        }
    }

    pub fn hover_enter(&mut self, id: SampleId) {
        trace!(index = id.0, "tooltip enter");
        self.state = TooltipState::Showing(id);
    }

    pub fn hover_leave(&mut self, id: SampleId) {
        if self.state == TooltipState::Showing(id) {
            trace!(index = id.0, "tooltip leave");
            self.state = TooltipState::Idle;
        } else {
            trace!(index = id.0, state = ?self.state, "stale tooltip leave ignored");
        }
    }

    pub fn apply(&mut self, event: HoverEvent) {
        match event {
            HoverEvent::Enter(id) => self.hover_enter(id),
            HoverEvent::Leave(id) => self.hover_leave(id),
        }
    }

    /// Drop the active tooltip unconditionally (dataset replaced).
    pub fn reset(&mut self) {
        self.state = TooltipState::Idle;
    }
}

/// Tooltip box and text for one sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLabel {
    pub id: SampleId,
    pub rect: LabelBox,
    pub text: TextLabel,
}

impl TooltipLabel {
    /// Anchor at `point` shifted right by the style offset; the text shows the
    /// raw sample values (x to 0 decimals, y to 3).
    pub fn layout(id: SampleId, sample: Sample, point: PixelPoint, style: &TooltipStyle) -> Self {
        let anchor = PixelPoint::new(point.x + style.offset_x, point.y);
        let rect = LabelBox {
            left: anchor.x,
            top: anchor.y - style.box_rise,
            width: style.box_width,
            height: style.box_height,
            corner_radius: style.corner_radius,
        };
        let text = TextLabel {
            pos: PixelPoint::new(anchor.x + style.text_inset, anchor.y),
            text: format_tooltip(sample),
            anchor: TextAnchor::Start,
            rotation_deg: 0.0,
            role: TextRole::Tooltip,
        };
        Self { id, rect, text }
    }
}

pub fn format_tooltip(s: Sample) -> String {
    format!("(x: {:.0}, y: {:.3})", s.x, s.y)
}

/// Turns "which marker is under the pointer" snapshots into enter/leave events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    hovered: Option<SampleId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<SampleId> {
        self.hovered
    }

    /// Leave for the old marker comes before enter for the new one.
    pub fn update(&mut self, hit: Option<SampleId>) -> Vec<HoverEvent> {
        if hit == self.hovered {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.hovered {
            events.push(HoverEvent::Leave(old));
        }
        if let Some(new) = hit {
            events.push(HoverEvent::Enter(new));
        }
        self.hovered = hit;
        events
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }
}
