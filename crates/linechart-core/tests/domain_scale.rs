// File: crates/linechart-core/tests/domain_scale.rs
// Purpose: Domain extents and data-to-pixel mapping, including flat axes.

use linechart_core::{Axis, CanvasSize, ChartError, Dataset, Domain, PixelPoint, Sample, Scale};

fn samples(pairs: &[(f64, f64)]) -> Vec<Sample> {
    pairs.iter().copied().map(Sample::from).collect()
}

#[test]
fn domain_bounds_every_sample() {
    let data = samples(&[(3.0, -1.0), (-2.0, 4.5), (7.5, 0.25), (3.0, 4.5), (0.0, -8.0)]);
    let d = Domain::from_samples(&data).expect("non-empty");
    assert_eq!((d.min_x, d.max_x), (-2.0, 7.5));
    assert_eq!((d.min_y, d.max_y), (-8.0, 4.5));
    for s in &data {
        assert!(d.contains(*s), "{s:?} outside {d:?}");
    }
}

#[test]
fn single_sample_domain_is_a_point() {
    let d = Domain::from_samples(&samples(&[(2.0, 3.0)])).expect("one sample");
    assert!(d.is_degenerate(Axis::X));
    assert!(d.is_degenerate(Axis::Y));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(Domain::from_samples(&[]), Err(ChartError::EmptyDataset));
    assert_eq!(Dataset::new(Vec::new()), Err(ChartError::EmptyDataset));
}

#[test]
fn non_finite_sample_is_rejected() {
    let err = Dataset::from_pairs([(0.0, 1.0), (f64::NAN, 2.0)]).unwrap_err();
    assert!(matches!(err, ChartError::NonFiniteSample { index: 1, .. }));
}

#[test]
fn to_pixel_flips_y_and_insets_by_margin() {
    let d = Domain { min_x: 0.0, max_x: 2.0, min_y: 0.0, max_y: 1.0 };
    let scale = Scale::derive(&d, CanvasSize::new(100.0, 100.0), 25.0);
    assert_eq!(scale.x_scale, 25.0);
    assert_eq!(scale.y_scale, 50.0);
    assert_eq!(scale.to_pixel(Sample::new(0.0, 0.0)), PixelPoint::new(25.0, 75.0));
    assert_eq!(scale.to_pixel(Sample::new(2.0, 1.0)), PixelPoint::new(75.0, 25.0));
    assert_eq!(scale.to_pixel(Sample::new(1.0, 0.5)), PixelPoint::new(50.0, 50.0));
    assert!(scale.degenerate().is_empty());
}

#[test]
fn doubling_width_roughly_doubles_x_scale() {
    let d = Domain { min_x: 10.0, max_x: 60.0, min_y: 0.0, max_y: 1.0 };
    let narrow = Scale::derive(&d, CanvasSize::new(1000.0, 400.0), 25.0);
    let wide = Scale::derive(&d, CanvasSize::new(2000.0, 400.0), 25.0);
    let ratio = wide.x_scale / narrow.x_scale;
    assert!((ratio - 1950.0 / 950.0).abs() < 1e-12);
    assert!((ratio - 2.0).abs() < 0.1, "ratio {ratio}");
    assert_eq!(wide.y_scale, narrow.y_scale);
}

#[test]
fn degenerate_x_collapses_to_margin() {
    let data = samples(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]);
    let d = Domain::from_samples(&data).unwrap();
    let scale = Scale::derive(&d, CanvasSize::new(900.0, 400.0), 25.0);
    assert_eq!(scale.x_scale, 0.0);
    for s in &data {
        let p = scale.to_pixel(*s);
        assert_eq!(p.x, 25.0);
        assert!(p.y.is_finite());
    }
    assert_eq!(scale.degenerate(), vec![ChartError::DegenerateDomain { axis: Axis::X, value: 5.0 }]);
}

#[test]
fn degenerate_y_collapses_to_bottom_margin() {
    let data = samples(&[(0.0, 7.0), (4.0, 7.0)]);
    let d = Domain::from_samples(&data).unwrap();
    let scale = Scale::derive(&d, CanvasSize::new(200.0, 100.0), 25.0);
    assert_eq!(scale.y_scale, 0.0);
    assert_eq!(scale.to_pixel(data[1]), PixelPoint::new(175.0, 75.0));
    assert!(matches!(scale.degenerate().as_slice(), [ChartError::DegenerateDomain { axis: Axis::Y, .. }]));
}

#[test]
fn single_sample_is_flat_on_both_axes() {
    let data = samples(&[(3.0, -2.0)]);
    let d = Domain::from_samples(&data).unwrap();
    let scale = Scale::derive(&d, CanvasSize::new(900.0, 400.0), 25.0);
    assert_eq!(
        scale.degenerate(),
        vec![
            ChartError::DegenerateDomain { axis: Axis::X, value: 3.0 },
            ChartError::DegenerateDomain { axis: Axis::Y, value: -2.0 },
        ]
    );
    assert_eq!(scale.to_pixel(data[0]), PixelPoint::new(25.0, 375.0));
}

#[test]
fn span_wider_than_f64_max_maps_to_finite_pixels() {
    let data = samples(&[(-1e308, 0.0), (1e308, 1.0)]);
    let d = Domain::from_samples(&data).unwrap();
    let scale = Scale::derive(&d, CanvasSize::new(900.0, 400.0), 25.0);
    assert!(scale.x_scale > 0.0 && scale.x_scale.is_finite());
    assert!(scale.degenerate().is_empty());

    let left = scale.to_pixel(data[0]);
    let right = scale.to_pixel(data[1]);
    assert_eq!(left, PixelPoint::new(25.0, 375.0));
    assert!((right.x - 875.0).abs() < 1e-9, "right edge at {}", right.x);
    assert_eq!(right.y, 25.0);
    assert!((scale.x_to_px(0.0) - 450.0).abs() < 1e-9);
}
