// File: crates/linechart-core/tests/interaction.rs
// Purpose: Tooltip state machine, pointer tracking, tick counters and the viewport pass-through.

use linechart_core::tooltip::{format_tooltip, PointerTracker};
use linechart_core::viewport::StaticViewport;
use linechart_core::{
    Axis, CanvasSize, HoverEvent, PixelPoint, Sample, SampleId, TickCounter, TooltipLabel, TooltipSelector,
    TooltipState, TooltipStyle, ViewTransform, ViewportController, ViewportProvider,
};

const A: SampleId = SampleId(0);
const B: SampleId = SampleId(1);

#[test]
fn stale_leave_does_not_clear_newer_tooltip() {
    let mut sel = TooltipSelector::new();
    sel.hover_enter(A);
    sel.hover_enter(B);
    sel.hover_leave(A);
    assert_eq!(sel.state(), TooltipState::Showing(B));
    sel.hover_leave(B);
    assert_eq!(sel.state(), TooltipState::Idle);
}

#[test]
fn leave_while_idle_is_ignored() {
    let mut sel = TooltipSelector::new();
    sel.hover_leave(A);
    assert_eq!(sel.state(), TooltipState::Idle);
    assert_eq!(sel.active(), None);
}

#[test]
fn duplicate_coordinates_keep_distinct_identities() {
    // Two samples at the same position are still different tooltips.
    let mut sel = TooltipSelector::new();
    sel.apply(HoverEvent::Enter(SampleId(3)));
    sel.apply(HoverEvent::Leave(SampleId(4)));
    assert_eq!(sel.active(), Some(SampleId(3)));
}

#[test]
fn tracker_emits_leave_before_enter() {
    let mut t = PointerTracker::new();
    assert_eq!(t.update(Some(A)), vec![HoverEvent::Enter(A)]);
    assert!(t.update(Some(A)).is_empty());
    assert_eq!(t.update(Some(B)), vec![HoverEvent::Leave(A), HoverEvent::Enter(B)]);
    assert_eq!(t.update(None), vec![HoverEvent::Leave(B)]);
    assert_eq!(t.hovered(), None);
}

#[test]
fn tooltip_label_is_offset_from_point() {
    let style = TooltipStyle::default();
    let label = TooltipLabel::layout(B, Sample::new(12.6, 0.12345), PixelPoint::new(100.0, 50.0), &style);
    assert_eq!(label.rect.left, 110.0);
    assert_eq!(label.rect.top, 36.0);
    assert_eq!((label.rect.width, label.rect.height), (120.0, 20.0));
    assert_eq!(label.text.pos, PixelPoint::new(114.0, 50.0));
    assert_eq!(label.text.text, "(x: 13, y: 0.123)");
}

#[test]
fn tooltip_text_uses_raw_values() {
    assert_eq!(format_tooltip(Sample::new(1.0, 2.0)), "(x: 1, y: 2.000)");
    assert_eq!(format_tooltip(Sample::new(-4.2, -0.0006)), "(x: -4, y: -0.001)");
}

#[test]
fn counter_is_clamped_at_bounds() {
    let mut c = TickCounter::new(12, 5, 12);
    assert!(!c.can_increment());
    assert!(!c.increment());
    assert_eq!(c.value(), 12);

    let mut c = TickCounter::new(5, 5, 12);
    assert!(!c.can_decrement());
    assert!(!c.decrement());
    assert_eq!(c.value(), 5);
    assert!(c.increment());
    assert_eq!(c.value(), 6);
}

#[test]
fn counter_construction_clamps_inputs() {
    assert_eq!(TickCounter::new(40, 5, 12).value(), 12);
    assert_eq!(TickCounter::new(0, 0, 3).bounds(), (2, 3));
    assert_eq!(TickCounter::new(0, 0, 3).value(), 2);
}

#[test]
fn controller_axes_are_independent() {
    let mut vc = ViewportController::default();
    assert!(vc.increment(Axis::X));
    assert!(vc.increment(Axis::X));
    assert_eq!(vc.tick_count(Axis::X), 7);
    assert_eq!(vc.tick_count(Axis::Y), 5);
    assert!(!vc.decrement(Axis::Y));
}

#[test]
fn transform_round_trips_through_inverse() {
    let t = ViewTransform::new(2.0, -30.0, 12.0);
    let p = PixelPoint::new(40.0, 10.0);
    let q = t.apply(p);
    assert_eq!(q, PixelPoint::new(50.0, 32.0));
    assert_eq!(t.invert(q), Some(p));
    assert_eq!(ViewTransform::new(0.0, 0.0, 0.0).invert(q), None);
    assert_eq!(t.to_matrix(), [2.0, 0.0, 0.0, 2.0, -30.0, 12.0]);
}

#[test]
fn controller_passes_provider_transform_through() {
    let mut vc = ViewportController::new(
        TickCounter::default(),
        TickCounter::default(),
        Box::new(StaticViewport::with_transform(ViewTransform::new(1.5, 4.0, 0.0))),
    );
    vc.wrap(CanvasSize::new(300.0, 200.0));
    assert_eq!(vc.transform(), ViewTransform::new(1.5, 4.0, 0.0));
    vc.recenter();
    assert!(vc.transform().is_identity());
}

#[test]
fn static_viewport_records_wrap_size() {
    let mut v = StaticViewport::new();
    v.wrap(CanvasSize::new(640.0, 480.0));
    assert_eq!(v.size(), Some(CanvasSize::new(640.0, 480.0)));
}
