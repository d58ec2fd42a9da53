//! Representative-point extraction from line segments.
//!
//! The estimator consumes points, not segments. For every segment this module
//! emits three observations in a fixed order: the midpoint first (the most
//! stable sample of the marking), then the start point, then the end point.
//! Segment order is preserved, so the produced sequence is deterministic and
//! exactly three times the segment count.

use crate::types::{LineSegment, Point};

/// Extract representative points from an ordered sequence of segments.
///
/// Pure and total for finite inputs; an empty slice yields an empty vector.
pub fn extract_points(segments: &[LineSegment]) -> Vec<Point> {
    let mut points = Vec::with_capacity(segments.len() * 3);
    for seg in segments {
        points.push(seg.midpoint());
        points.push(seg.start());
        points.push(seg.end());
    }
    points
}
