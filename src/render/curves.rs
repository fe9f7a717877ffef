//! Parametric curve sampling.
//!
//! Curves are sampled at `t = i / S` for `i` in `0..S`. The parameter never
//! reaches `t = 1`, so the final endpoint is only painted when an earlier
//! sample rounds onto it. Samples are not joined: a small `S` gives a dotted
//! curve.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::framebuffer::PixelGrid;
use crate::geometry::{CubicBezier, HermiteCurve, Pixel};
use crate::render::Drawable;

/// Default number of samples for cubic Bézier curves.
pub const DEFAULT_BEZIER_STEPS: u32 = 20;

/// Default number of samples for Hermite curves.
pub const DEFAULT_HERMITE_STEPS: u32 = 100;

/// Sample counts used when rasterizing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveSteps {
    /// Samples per cubic Bézier curve.
    #[serde(default = "default_bezier_steps")]
    pub bezier_steps: u32,

    /// Samples per Hermite curve.
    #[serde(default = "default_hermite_steps")]
    pub hermite_steps: u32,
}

fn default_bezier_steps() -> u32 {
    DEFAULT_BEZIER_STEPS
}
fn default_hermite_steps() -> u32 {
    DEFAULT_HERMITE_STEPS
}

impl Default for CurveSteps {
    fn default() -> Self {
        Self {
            bezier_steps: default_bezier_steps(),
            hermite_steps: default_hermite_steps(),
        }
    }
}

/// Parameter values `0, 1/S, ..., (S-1)/S`. Empty when `steps` is 0.
pub fn sample_parameters(steps: u32) -> impl Iterator<Item = f64> {
    let total = f64::from(steps);
    (0..steps).map(move |i| f64::from(i) / total)
}

/// Rounded sample positions of a cubic Bézier curve, one per step,
/// evaluated lazily.
pub fn bezier_samples(curve: &CubicBezier, steps: u32) -> impl Iterator<Item = Pixel> {
    let curve = *curve;
    sample_parameters(steps).map(move |t| curve.evaluate(t).to_pixel())
}

/// Rounded sample positions of a Hermite curve, one per step, evaluated
/// lazily.
pub fn hermite_samples(curve: &HermiteCurve, steps: u32) -> impl Iterator<Item = Pixel> {
    let curve = *curve;
    sample_parameters(steps).map(move |t| curve.evaluate(t).to_pixel())
}

/// Draw a cubic Bézier curve as `steps` unconnected samples.
pub fn draw_bezier(grid: &mut PixelGrid, curve: &CubicBezier, steps: u32, color: Rgb) {
    for pixel in bezier_samples(curve, steps) {
        grid.write_pixel(pixel, color);
    }
}

/// Draw a Hermite curve as `steps` unconnected samples.
pub fn draw_hermite(grid: &mut PixelGrid, curve: &HermiteCurve, steps: u32, color: Rgb) {
    for pixel in hermite_samples(curve, steps) {
        grid.write_pixel(pixel, color);
    }
}

impl Drawable for CubicBezier {
    fn draw(&self, grid: &mut PixelGrid, color: Rgb) {
        draw_bezier(grid, self, DEFAULT_BEZIER_STEPS, color);
    }
}

impl Drawable for HermiteCurve {
    fn draw(&self, grid: &mut PixelGrid, color: Rgb) {
        draw_hermite(grid, self, DEFAULT_HERMITE_STEPS, color);
    }
}
