//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use crate::geometry::{Point, Polygon};

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Ceiling of `num / den` for `den > 0`
#[inline]
fn ceil_div(num: i64, den: i64) -> i64 {
    let q = num.div_euclid(den);
    if num.rem_euclid(den) == 0 {
        q
    } else {
        q + 1
    }
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            // Buffer is smaller than expected - recalculate height to fit
            let adjusted_height = actual_size / width;
            (width, adjusted_height)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    /// Get the frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            for px in x0..x1 {
                self.buffer[row_start + px] = color;
            }
        }
    }

    /// Set a single pixel (bounds-checked)
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = y * self.width + x;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Fill a polygon with the even-odd rule, alpha blended
    ///
    /// Pixel `(x, y)` is covered exactly when `polygon.contains_point((x, y))`
    /// holds, so what is painted matches what hit-tests.
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: u32) {
        if polygon.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let bounds = polygon.bounding_rect();
        let y0 = bounds.top().max(0);
        let y1 = bounds.bottom().min(self.height as i32 - 1);
        let max_x = self.width as i64;

        let mut crossings: Vec<i64> = Vec::with_capacity(polygon.len());
        for y in y0..=y1 {
            crossings.clear();
            for (a, b) in polygon.edges() {
                if (a.y > y) == (b.y > y) {
                    continue;
                }
                let mut dy = i64::from(b.y) - i64::from(a.y);
                let dx = i64::from(b.x) - i64::from(a.x);
                let mut num = i64::from(a.x) * dy + (i64::from(y) - i64::from(a.y)) * dx;
                if dy < 0 {
                    dy = -dy;
                    num = -num;
                }
                crossings.push(ceil_div(num, dy));
            }
            crossings.sort_unstable();

            for span in crossings.chunks_exact(2) {
                let start = span[0].clamp(0, max_x);
                let end = span[1].clamp(0, max_x);
                for x in start..end {
                    self.blend_pixel(x as usize, y as usize, color);
                }
            }
        }
    }

    /// Stroke a polygon outline with a square pen of `pen_width` pixels
    pub fn stroke_polygon(&mut self, polygon: &Polygon, pen_width: i32, color: u32) {
        if polygon.is_empty() {
            return;
        }
        for (a, b) in polygon.edges() {
            self.draw_line(a, b, pen_width, color);
        }
    }

    /// Bresenham line stamped with a square pen
    fn draw_line(&mut self, from: Point, to: Point, pen_width: i32, color: u32) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.stamp(x, y, pen_width, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Square of side `size` centered on `(cx, cy)`
    fn stamp(&mut self, cx: i32, cy: i32, size: i32, color: u32) {
        let size = size.max(1);
        let x0 = (cx - size / 2).max(0);
        let y0 = (cy - size / 2).max(0);
        let x1 = cx - size / 2 + size;
        let y1 = cy - size / 2 + size;
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let alpha = (color >> 24) & 0xFF;
        for py in y0..y1 {
            for px in x0..x1 {
                if alpha == 0xFF {
                    self.set_pixel(px as usize, py as usize, color);
                } else {
                    self.blend_pixel(px as usize, py as usize, color);
                }
            }
        }
    }
}
