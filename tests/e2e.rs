mod common;

use common::synthetic_segments::{decreasing_lane_segments, segments_on_quadratic};
use lane_curve::render::{io, render_scene, RenderOptions};
use lane_curve::{extract_points, sample_curve, Interpolator, QuadraticKalman};
use std::fs;

#[test]
fn decreasing_lane_fits_a_decreasing_curve() {
    let segments = decreasing_lane_segments();
    let points = extract_points(&segments);
    assert_eq!(points.len(), 9);

    let mut estimator = QuadraticKalman::new(0.01, 10.0).unwrap();
    estimator.fit(&points).unwrap();

    let samples = sample_curve(&estimator, -2.0, 2.0, 0.05);
    assert!(samples.len() > 50);
    for pair in samples.windows(2) {
        assert!(
            pair[1].y < pair[0].y,
            "curve not decreasing at x={}: {} -> {}",
            pair[0].x,
            pair[0].y,
            pair[1].y
        );
    }
    assert!(estimator.predict(-1.0) > estimator.predict(1.0));
}

#[test]
fn segments_on_a_parabola_recover_its_shape() {
    let (a, b, c) = (1.0, -0.5, 2.0);
    let segments = segments_on_quadratic(a, b, c, &[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    let points = extract_points(&segments);

    let mut estimator = QuadraticKalman::new(1e-4, 1e-3).unwrap();
    estimator.fit(&points).unwrap();

    // Segment midpoints sit a hair above the chord, so allow a loose tolerance.
    for x in [-2.5, 0.0, 2.5] {
        let expected = a * x * x + b * x + c;
        let got = estimator.predict(x);
        assert!(
            (got - expected).abs() < 0.05,
            "predict({x}) = {got}, expected ~{expected}"
        );
    }
}

#[test]
fn full_pipeline_writes_image_and_equation() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("out/lane_curve.ppm");
    let equation_path = dir.path().join("out/equation.txt");

    let segments = decreasing_lane_segments();
    let points = extract_points(&segments);
    let mut estimator = QuadraticKalman::new(0.01, 10.0).unwrap();
    estimator.fit(&points).unwrap();

    let curve = sample_curve(&estimator, -2.0, 2.0, 0.01);
    let options = RenderOptions {
        width: 200,
        height: 160,
        ..Default::default()
    };
    let canvas = render_scene(&segments, &curve, &points, &options);
    io::save_image(&canvas, &image_path).unwrap();
    io::write_text_file(&equation_path, &estimator.describe()).unwrap();

    let ppm = fs::read_to_string(&image_path).unwrap();
    assert!(ppm.starts_with("P3\n200 160\n255\n"));

    let equation = fs::read_to_string(&equation_path).unwrap();
    assert!(equation.starts_with("y = "), "unexpected equation: {equation}");

    // Both segment and curve colors must appear in the raster.
    let has_color = |color: [u8; 3]| {
        canvas
            .data()
            .iter()
            .any(|&px| px == color)
    };
    assert!(has_color(options.segment_color), "segments not drawn");
    assert!(has_color(options.curve_color), "curve not drawn");
}
