//! The graphics engine: one pixel grid plus one wireframe edge list.
//!
//! All drawing and transform operations go through an explicit
//! [`GraphicsEngine`] value; there is no global canvas.

use log::trace;

use crate::color::Rgb;
use crate::config::Config;
use crate::error::Result;
use crate::framebuffer::PixelGrid;
use crate::geometry::{CubicBezier, HermiteCurve, Pixel, Point};
use crate::render::{self, CurveSteps};
use crate::transform::{EdgeList, Matrix3};

/// Owns a [`PixelGrid`] and an [`EdgeList`] for one drawing session.
#[derive(Debug, Clone)]
pub struct GraphicsEngine {
    grid: PixelGrid,
    edges: EdgeList,
    steps: CurveSteps,
}

impl GraphicsEngine {
    /// Create an engine with a black `width` × `height` grid and default curve steps.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_kernel::prelude::*;
    ///
    /// let mut engine = GraphicsEngine::new(10, 10).unwrap();
    /// engine.draw_line(Pixel::new(0, 0), Pixel::new(9, 9), Rgb::RED);
    /// assert_eq!(engine.grid().get(4, 4), Some(Rgb::RED));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            grid: PixelGrid::new(width, height)?,
            edges: EdgeList::new(),
            steps: CurveSteps::default(),
        })
    }

    /// Create an engine sized and tuned by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.canvas.width, config.canvas.height)?.with_steps(config.curves))
    }

    /// Use `steps` for subsequent curve drawing.
    #[must_use]
    pub fn with_steps(mut self, steps: CurveSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Current curve sample counts.
    #[must_use]
    pub const fn steps(&self) -> CurveSteps {
        self.steps
    }

    /// The pixel grid.
    #[must_use]
    pub const fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// The edge list.
    #[must_use]
    pub const fn edges(&self) -> &EdgeList {
        &self.edges
    }

    /// All cells in row-major order, as stored (unwritten cells keep the
    /// creation background).
    #[must_use]
    pub fn export_grid(&self) -> Vec<Rgb> {
        self.grid.cells().to_vec()
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    /// Draw a Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, start: Pixel, end: Pixel, color: Rgb) {
        trace!("line {start:?} -> {end:?}");
        render::draw_line(&mut self.grid, start, end, color);
    }

    /// Draw a midpoint circle outline.
    pub fn draw_circle(&mut self, center: Pixel, radius: i32, color: Rgb) {
        trace!("circle {center:?} r={radius}");
        render::draw_circle(&mut self.grid, center, radius, color);
    }

    /// Draw a cubic Bézier curve through control points `p0..p3`.
    pub fn draw_bezier(&mut self, p0: Point, p1: Point, p2: Point, p3: Point, color: Rgb) {
        trace!("bezier {p0:?} {p1:?} {p2:?} {p3:?}");
        let curve = CubicBezier::new(p0, p1, p2, p3);
        render::draw_bezier(&mut self.grid, &curve, self.steps.bezier_steps, color);
    }

    /// Draw a Hermite curve from `(x0, y0)` to `(x1, y1)` with tangents
    /// `(rx0, ry0)` and `(rx1, ry1)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_hermite(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        rx0: f64,
        ry0: f64,
        rx1: f64,
        ry1: f64,
        color: Rgb,
    ) {
        let curve = HermiteCurve::new(
            Point::new(x0, y0),
            Point::new(x1, y1),
            Point::new(rx0, ry0),
            Point::new(rx1, ry1),
        );
        trace!("hermite {curve:?}");
        render::draw_hermite(&mut self.grid, &curve, self.steps.hermite_steps, color);
    }

    /// Rasterize every edge of the edge list.
    pub fn draw_edges(&mut self, color: Rgb) {
        trace!("drawing {} edges", self.edges.len());
        self.edges.draw(&mut self.grid, color);
    }

    // ------------------------------------------------------------------------
    // Wireframe model
    // ------------------------------------------------------------------------

    /// Record a standalone point.
    pub fn add_point(&mut self, point: Point) {
        self.edges.add_point(point);
    }

    /// Append an edge.
    pub fn add_edge(&mut self, start: Point, end: Point) {
        self.edges.add_edge(start, end);
    }

    /// Apply an arbitrary homogeneous transform to the edge list.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if a point maps to `w = 0`; the edge list is unchanged.
    pub fn transform(&mut self, matrix: &Matrix3) -> Result<()> {
        self.edges.transform(matrix)
    }

    /// Rotate the edge list by `degrees` about the origin.
    ///
    /// # Errors
    ///
    /// See [`GraphicsEngine::transform`].
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.edges.rotate(degrees)
    }

    /// Scale the edge list by `factor` about the origin.
    ///
    /// # Errors
    ///
    /// See [`GraphicsEngine::transform`].
    pub fn dilation(&mut self, factor: f64) -> Result<()> {
        self.edges.dilation(factor)
    }

    /// Translate the edge list by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// See [`GraphicsEngine::transform`].
    pub fn translation(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.edges.translation(dx, dy)
    }
}
