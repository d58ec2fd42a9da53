/// Owned RGB raster with a fixed size.
///
/// Coordinates handed to the drawing methods are signed and clipped to the
/// canvas, so callers can draw shapes that spill over the border.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: [u8; 3]) -> Self {
        Self {
            width,
            height,
            data: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Set a pixel, silently clipping out-of-bounds coordinates.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: [u8; 3]) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = color;
        }
    }

    /// Raw row-major pixel data.
    pub fn data(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Draw a line with Bresenham's algorithm. `thickness` is the half-width
    /// of the square stamp applied at every step; 0 gives a one-pixel line.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: [u8; 3], thickness: i32) {
        let (x1, y1) = from;
        let (x2, y2) = to;
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        let (mut x, mut y) = (x1, y1);
        loop {
            self.stamp_square(x, y, color, thickness);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a diamond-shaped marker of the given radius centered on `(x, y)`.
    pub fn draw_marker(&mut self, center: (i32, i32), color: [u8; 3], radius: i32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() + dy.abs() <= radius {
                    self.put_pixel(center.0 + dx, center.1 + dy, color);
                }
            }
        }
    }

    fn stamp_square(&mut self, x: i32, y: i32, color: [u8; 3], thickness: i32) {
        for dy in -thickness..=thickness {
            for dx in -thickness..=thickness {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some(y as usize * self.width + x as usize)
        }
    }
}
