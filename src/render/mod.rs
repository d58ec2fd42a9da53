//! Raster diagnostics for fitted curves.
//!
//! Maps data-space geometry into a fixed-size pixel canvas and draws the
//! input segments, the sampled curve polyline, and (optionally) the extracted
//! points. The mapping is an axis-aligned affine transform from the segments'
//! bounding box, expanded by a margin fraction, with the y axis flipped so
//! larger `y` is higher in the image. Rendering is purely a consumer of the
//! estimator's outputs; its correctness is independent of the filter numerics.

mod canvas;
pub mod io;

pub use canvas::Canvas;

use crate::types::{LineSegment, Point};

/// Knobs for [`render_scene`]. The defaults match the demo output: a
/// 1000x800 white canvas, green segments, a blue curve, red point markers,
/// and a 10% margin around the data bounding box.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    /// Bounding-box expansion as a fraction of the data range per axis.
    pub margin: f64,
    pub background: [u8; 3],
    pub segment_color: [u8; 3],
    pub curve_color: [u8; 3],
    pub point_color: [u8; 3],
    pub draw_points: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            margin: 0.1,
            background: [255, 255, 255],
            segment_color: [0, 200, 0],
            curve_color: [0, 0, 255],
            point_color: [255, 0, 0],
            draw_points: true,
        }
    }
}

/// Axis-aligned affine map from data space to pixel space.
struct DataToPixel {
    min_x: f64,
    min_y: f64,
    scale_x: f64,
    scale_y: f64,
    height: usize,
}

impl DataToPixel {
    fn map(&self, p: Point) -> (i32, i32) {
        let px = (p.x - self.min_x) * self.scale_x;
        let py = (p.y - self.min_y) * self.scale_y;
        // y flipped: data-space up is image-space down.
        (px as i32, (self.height as f64 - 1.0 - py) as i32)
    }
}

/// Render segments, a sampled curve, and optional point markers into a canvas.
///
/// The data bounding box is taken from the segment endpoints (the curve may
/// legitimately shoot outside it; out-of-range pixels are clipped). With no
/// segments the box falls back to the curve and marker points; a fully empty
/// scene yields the bare background.
pub fn render_scene(
    segments: &[LineSegment],
    curve: &[Point],
    markers: &[Point],
    options: &RenderOptions,
) -> Canvas {
    let mut canvas = Canvas::new(options.width, options.height, options.background);
    let Some(map) = data_to_pixel(segments, curve, markers, options) else {
        return canvas;
    };

    for seg in segments {
        canvas.draw_line(
            map.map(seg.start()),
            map.map(seg.end()),
            options.segment_color,
            1,
        );
    }

    for pair in curve.windows(2) {
        canvas.draw_line(
            map.map(pair[0]),
            map.map(pair[1]),
            options.curve_color,
            1,
        );
    }

    if options.draw_points {
        for &p in markers {
            canvas.draw_marker(map.map(p), options.point_color, 2);
        }
    }

    canvas
}

fn data_to_pixel(
    segments: &[LineSegment],
    curve: &[Point],
    markers: &[Point],
    options: &RenderOptions,
) -> Option<DataToPixel> {
    let mut bbox = Bbox::default();
    for seg in segments {
        bbox.include(seg.start());
        bbox.include(seg.end());
    }
    if segments.is_empty() {
        for &p in curve.iter().chain(markers) {
            bbox.include(p);
        }
    }
    let (mut min_x, mut max_x, mut min_y, mut max_y) = bbox.finish()?;

    // Expand by the margin fraction; degenerate ranges get a unit pad so the
    // scale stays finite.
    let range_x = max_x - min_x;
    let range_y = max_y - min_y;
    let pad_x = if range_x > 0.0 { range_x * options.margin } else { 1.0 };
    let pad_y = if range_y > 0.0 { range_y * options.margin } else { 1.0 };
    min_x -= pad_x;
    max_x += pad_x;
    min_y -= pad_y;
    max_y += pad_y;

    Some(DataToPixel {
        min_x,
        min_y,
        scale_x: (options.width as f64 - 1.0) / (max_x - min_x),
        scale_y: (options.height as f64 - 1.0) / (max_y - min_y),
        height: options.height,
    })
}

#[derive(Default)]
struct Bbox {
    min_x: Option<f64>,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bbox {
    fn include(&mut self, p: Point) {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return;
        }
        match self.min_x {
            None => {
                self.min_x = Some(p.x);
                self.max_x = p.x;
                self.min_y = p.y;
                self.max_y = p.y;
            }
            Some(min_x) => {
                self.min_x = Some(min_x.min(p.x));
                self.max_x = self.max_x.max(p.x);
                self.min_y = self.min_y.min(p.y);
                self.max_y = self.max_y.max(p.y);
            }
        }
    }

    fn finish(self) -> Option<(f64, f64, f64, f64)> {
        self.min_x.map(|min_x| (min_x, self.max_x, self.min_y, self.max_y))
    }
}
