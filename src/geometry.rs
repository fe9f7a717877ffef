//! Geometric primitives.
//!
//! [`Point`] is a continuous coordinate used by curves and transforms, while
//! [`Pixel`] is an integer grid address. The rasterizer is the only place that
//! converts one into the other, via [`Point::to_pixel`].

/// A 2D point with real coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to the nearest pixel address.
    ///
    /// Halfway cases round to the even neighbour, so `2.5` becomes `2` and
    /// `3.5` becomes `4`. Values beyond the `i32` range saturate.
    #[must_use]
    pub fn to_pixel(self) -> Pixel {
        Pixel::new(self.x.round_ties_even() as i32, self.y.round_ties_even() as i32)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pixel> for Point {
    fn from(p: Pixel) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// An integer pixel address. May lie outside any particular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel address.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered pair of points in a wireframe model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create an edge from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// A straight segment between two pixel addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    /// Start pixel.
    pub start: Pixel,
    /// End pixel (inclusive).
    pub end: Pixel,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Pixel, end: Pixel) -> Self {
        Self { start, end }
    }
}

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Center pixel.
    pub center: Pixel,
    /// Radius in pixels. Negative radii produce no pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Pixel, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// A cubic Bézier curve given by four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Control points `p0..p3`.
    pub points: [Point; 4],
}

impl CubicBezier {
    /// Create a new curve.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Evaluate the Bernstein blend at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;

        Point::new(
            b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        )
    }
}

/// A cubic Hermite curve given by two endpoints and two tangent vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteCurve {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Tangent at the start.
    pub start_tangent: Point,
    /// Tangent at the end.
    pub end_tangent: Point,
}

impl HermiteCurve {
    /// Create a new curve.
    #[must_use]
    pub const fn new(start: Point, end: Point, start_tangent: Point, end_tangent: Point) -> Self {
        Self {
            start,
            end,
            start_tangent,
            end_tangent,
        }
    }

    /// Evaluate the Hermite blend at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let h1 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h2 = -2.0 * t3 + 3.0 * t2;
        let h3 = t3 - 2.0 * t2 + t;
        let h4 = t3 - t2;

        Point::new(
            h1 * self.start.x + h2 * self.end.x + h3 * self.start_tangent.x + h4 * self.end_tangent.x,
            h1 * self.start.y + h2 * self.end.y + h3 * self.start_tangent.y + h4 * self.end_tangent.y,
        )
    }
}
