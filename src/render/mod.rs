//! Rasterization of vector primitives.
//!
//! Each shape has a pure coordinate generator and a `draw_*` function that
//! writes the generated pixels into a [`PixelGrid`](crate::framebuffer::PixelGrid).
//! Out-of-grid coordinates are dropped by the grid, never reported.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer 8-connected lines
//! - **Midpoint Circle**: outline with 8-way symmetry
//! - **Cubic Bézier / Hermite**: fixed-step parametric sampling
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod curves;
mod primitives;

pub use curves::{
    bezier_samples, draw_bezier, draw_hermite, hermite_samples, sample_parameters, CurveSteps,
    DEFAULT_BEZIER_STEPS, DEFAULT_HERMITE_STEPS,
};
pub use primitives::{
    circle_pixels, draw_circle, draw_line, line_pixels, BresenhamLine, Drawable, MidpointCircle,
};
