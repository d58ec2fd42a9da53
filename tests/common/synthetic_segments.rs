use lane_curve::LineSegment;

/// Three lane-marking segments descending from upper-left to lower-right,
/// visibly decreasing over `x` in `[-1.2, 1.9]`.
pub fn decreasing_lane_segments() -> Vec<LineSegment> {
    vec![
        LineSegment::new(-1.2, 12.2, -0.8, 11.8),
        LineSegment::new(0.8, 7.0, 1.2, 5.0),
        LineSegment::new(1.5, 3.29, 1.9, 0.73),
    ]
}

/// Short segments whose endpoints all lie exactly on `y = ax^2 + bx + c`,
/// centered at the given x positions.
pub fn segments_on_quadratic(a: f64, b: f64, c: f64, centers: &[f64]) -> Vec<LineSegment> {
    let eval = |x: f64| a * x * x + b * x + c;
    centers
        .iter()
        .map(|&x| {
            let (x1, x2) = (x - 0.1, x + 0.1);
            LineSegment::new(x1, eval(x1), x2, eval(x2))
        })
        .collect()
}
