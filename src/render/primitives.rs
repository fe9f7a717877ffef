//! Primitive rendering functions.
//!
//! Implements integer rasterization for lines and circle outlines.

use crate::color::Rgb;
use crate::framebuffer::PixelGrid;
use crate::geometry::{Circle, Edge, LineSegment, Pixel};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a pixel grid.
    fn draw(&self, grid: &mut PixelGrid, color: Rgb);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Iterator over the pixels of a Bresenham line, in stepping order from
/// `start` to `end`, both inclusive.
///
/// The stepping follows the direction given. Use [`line_pixels`] for a pixel
/// set that does not depend on which endpoint comes first.
///
/// State is kept in `i64`, so any pair of `i32` endpoints steps without
/// overflow. [`Iterator::nth`] jumps ahead in constant time.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    origin: (i64, i64),
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    step: i64,
    done: bool,
}

impl BresenhamLine {
    /// Start stepping from `start` towards `end`.
    #[must_use]
    pub fn new(start: Pixel, end: Pixel) -> Self {
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            origin: (x0, y0),
            x: x0,
            y: y0,
            end: (x1, y1),
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            step: 0,
            done: false,
        }
    }

    /// Number of steps along the major axis; the line has `major() + 1` pixels.
    fn major(&self) -> i64 {
        self.dx.max(self.dy)
    }

    /// Reposition to the state after `step` major-axis steps.
    ///
    /// After `k` steps along an x-major line the y offset is
    /// `ceil((2k·dy - dx) / 2dx)`; y-major lines swap the roles. The error term
    /// follows from the offsets, so stepping on from here matches stepping
    /// from the start. Requires `0 <= step <= major()`.
    fn seek(&mut self, step: i64) {
        let k = i128::from(step);
        let (dx, dy) = (i128::from(self.dx), i128::from(self.dy));
        let (i, j) = if dx >= dy {
            (k, minor_offset(k, dy, dx))
        } else {
            (minor_offset(k, dx, dy), k)
        };

        self.x = self.origin.0 + self.sx * i as i64;
        self.y = self.origin.1 + self.sy * j as i64;
        self.err = (dx - dy - i * dy + j * dx) as i64;
        self.step = step;
    }

    /// Inclusive range of steps whose major-axis coordinate lies inside a
    /// `width` × `height` grid, or `None` if the line never crosses it.
    fn visible_steps(&self, width: u32, height: u32) -> Option<(i64, i64)> {
        let (origin, dir, size) = if self.dx >= self.dy {
            (self.origin.0, self.sx, i64::from(width))
        } else {
            (self.origin.1, self.sy, i64::from(height))
        };
        let (lo, hi) = if dir > 0 {
            (-origin, size - 1 - origin)
        } else {
            (origin - (size - 1), origin)
        };
        let (lo, hi) = (lo.max(0), hi.min(self.major()));
        (lo <= hi).then_some((lo, hi))
    }
}

/// `ceil((2k·minor - major) / 2major)`, the minor-axis offset after `k` steps.
fn minor_offset(k: i128, minor: i128, major: i128) -> i128 {
    if major == 0 {
        return 0;
    }
    -(major - 2 * k * minor).div_euclid(2 * major)
}

impl Iterator for BresenhamLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.done {
            return None;
        }

        // Every visited address lies between the two i32 endpoints.
        let current = Pixel::new(self.x as i32, self.y as i32);
        if (self.x, self.y) == self.end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        self.step += 1;

        Some(current)
    }

    fn nth(&mut self, n: usize) -> Option<Pixel> {
        if self.done {
            return None;
        }
        let target = self.step.saturating_add(i64::try_from(n).unwrap_or(i64::MAX));
        if target > self.major() {
            self.done = true;
            return None;
        }
        self.seek(target);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Each step moves along the major axis by exactly one.
        let remaining = usize::try_from(self.major() - self.step + 1).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Pixels of the 8-connected line between `start` and `end`, both inclusive.
///
/// Endpoints are put in canonical order (smaller `(x, y)` first) before
/// stepping, so swapping them yields the same pixel set.
#[must_use]
pub fn line_pixels(start: Pixel, end: Pixel) -> BresenhamLine {
    if end < start {
        BresenhamLine::new(end, start)
    } else {
        BresenhamLine::new(start, end)
    }
}

/// Draw a line using Bresenham's algorithm.
///
/// Only the steps whose major-axis coordinate falls inside the grid are
/// visited, so far off-grid endpoints cost nothing extra. The pixels written
/// are exactly the in-grid pixels of [`line_pixels`].
///
/// # Arguments
///
/// * `grid` - Target pixel grid
/// * `start`, `end` - Endpoints, both painted
/// * `color` - Line color
pub fn draw_line(grid: &mut PixelGrid, start: Pixel, end: Pixel, color: Rgb) {
    let mut line = line_pixels(start, end);
    let Some((first, last)) = line.visible_steps(grid.width(), grid.height()) else {
        return;
    };

    line.seek(first);
    let visible = usize::try_from(last - first + 1).unwrap_or(usize::MAX);
    for pixel in line.take(visible) {
        grid.write_pixel(pixel, color);
    }
}

impl Drawable for LineSegment {
    fn draw(&self, grid: &mut PixelGrid, color: Rgb) {
        draw_line(grid, self.start, self.end, color);
    }
}

impl Drawable for Edge {
    fn draw(&self, grid: &mut PixelGrid, color: Rgb) {
        draw_line(grid, self.start.to_pixel(), self.end.to_pixel(), color);
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Iterator over the pixels of a midpoint circle outline.
///
/// Each midpoint iteration yields its 8 symmetric points in turn; the
/// iterator holds only the current octant state.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    err: i64,
    octant: u8,
}

impl MidpointCircle {
    /// Start tracing the outline of radius `radius` around `center`.
    #[must_use]
    pub fn new(center: Pixel, radius: i32) -> Self {
        Self {
            cx: i64::from(center.x),
            cy: i64::from(center.y),
            x: i64::from(radius),
            y: 0,
            err: 0,
            octant: 0,
        }
    }

    fn advance(&mut self) {
        self.y += 1;
        self.err += 1 + 2 * self.y;
        if 2 * (self.err - self.x) + 1 > 0 {
            self.x -= 1;
            self.err += 1 - 2 * self.x;
        }
        self.octant = 0;
    }
}

impl Iterator for MidpointCircle {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        while self.x >= self.y {
            let (x, y) = (self.x, self.y);
            let (dx, dy) = match self.octant {
                0 => (x, y),
                1 => (y, x),
                2 => (-y, x),
                3 => (-x, y),
                4 => (-x, -y),
                5 => (-y, -x),
                6 => (y, -x),
                7 => (x, -y),
                _ => {
                    self.advance();
                    continue;
                }
            };
            self.octant += 1;

            // Addresses past the i32 range are off every grid.
            if let (Ok(px), Ok(py)) = (i32::try_from(self.cx + dx), i32::try_from(self.cy + dy)) {
                return Some(Pixel::new(px, py));
            }
        }
        None
    }
}

/// Pixels of a circle outline using the midpoint algorithm.
///
/// Every iteration yields the 8 symmetric points, so addresses on the axes
/// and diagonals may repeat. A radius of 0 yields the center (8 times); a
/// negative radius yields nothing.
#[must_use]
pub fn circle_pixels(center: Pixel, radius: i32) -> MidpointCircle {
    MidpointCircle::new(center, radius)
}

/// Draw a circle outline.
///
/// # Arguments
///
/// * `grid` - Target pixel grid
/// * `center` - Center pixel
/// * `radius` - Radius in pixels
/// * `color` - Outline color
pub fn draw_circle(grid: &mut PixelGrid, center: Pixel, radius: i32, color: Rgb) {
    for pixel in circle_pixels(center, radius) {
        grid.write_pixel(pixel, color);
    }
}

impl Drawable for Circle {
    fn draw(&self, grid: &mut PixelGrid, color: Rgb) {
        draw_circle(grid, self.center, self.radius, color);
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn coord() -> impl Strategy<Value = i32> {
        -200i32..200
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// The pixel set does not depend on endpoint order.
        #[test]
        fn prop_line_swap_symmetric(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let a: BTreeSet<Pixel> = line_pixels(Pixel::new(x0, y0), Pixel::new(x1, y1)).collect();
            let b: BTreeSet<Pixel> = line_pixels(Pixel::new(x1, y1), Pixel::new(x0, y0)).collect();
            prop_assert_eq!(a, b);
        }

        /// Both endpoints are emitted, and consecutive pixels are 8-connected.
        #[test]
        fn prop_line_connected(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let start = Pixel::new(x0, y0);
            let end = Pixel::new(x1, y1);
            let pixels: Vec<Pixel> = BresenhamLine::new(start, end).collect();

            prop_assert_eq!(pixels.first(), Some(&start));
            prop_assert_eq!(pixels.last(), Some(&end));
            prop_assert_eq!(pixels.iter().filter(|&&p| p == end).count(), 1);
            for pair in pixels.windows(2) {
                prop_assert!((pair[0].x - pair[1].x).abs() <= 1);
                prop_assert!((pair[0].y - pair[1].y).abs() <= 1);
                prop_assert_ne!(pair[0], pair[1]);
            }
            let major = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert_eq!(pixels.len(), major + 1);
        }

        /// The circle outline is closed under 90-degree rotation about its center.
        #[test]
        fn prop_circle_rotation_symmetric(cx in coord(), cy in coord(), r in 0i32..60) {
            let center = Pixel::new(cx, cy);
            let set: BTreeSet<Pixel> = circle_pixels(center, r).collect();
            for p in &set {
                let (dx, dy) = (p.x - cx, p.y - cy);
                prop_assert!(set.contains(&Pixel::new(cx - dy, cy + dx)));
            }
        }

        /// Jumping ahead lands on the same pixel as stepping there.
        #[test]
        fn prop_line_nth_matches_stepping(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord(), pick in 0usize..400
        ) {
            let pixels: Vec<Pixel> = BresenhamLine::new(Pixel::new(x0, y0), Pixel::new(x1, y1)).collect();
            let n = pick % pixels.len();
            let mut line = BresenhamLine::new(Pixel::new(x0, y0), Pixel::new(x1, y1));
            prop_assert_eq!(line.nth(n), Some(pixels[n]));
            let rest: Vec<Pixel> = line.collect();
            prop_assert_eq!(&rest[..], &pixels[n + 1..]);
        }

        /// The clipped draw writes exactly the in-grid pixels of the full line.
        #[test]
        fn prop_draw_line_matches_unclipped(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let (start, end) = (Pixel::new(x0, y0), Pixel::new(x1, y1));
            let mut clipped = PixelGrid::new(40, 30).expect("grid creation should succeed");
            let mut full = PixelGrid::new(40, 30).expect("grid creation should succeed");

            draw_line(&mut clipped, start, end, Rgb::RED);
            for pixel in line_pixels(start, end) {
                full.write_pixel(pixel, Rgb::RED);
            }

            let a: Vec<Pixel> = clipped.written_pixels().collect();
            let b: Vec<Pixel> = full.written_pixels().collect();
            prop_assert_eq!(a, b);
        }
    }
}
