//! # raster-kernel
//!
//! A small 2D graphics kernel: rasterizes lines, circles, cubic Bézier and
//! Hermite curves onto a fixed pixel grid, and applies homogeneous
//! rotation/scale/translation transforms to a wireframe edge list.
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_kernel::prelude::*;
//!
//! let mut engine = GraphicsEngine::new(500, 500)?;
//! engine.draw_circle(Pixel::new(250, 250), 200, Rgb::YELLOW);
//! engine.draw_hermite(150.0, 350.0, 350.0, 350.0, 250.0, 250.0, 250.0, -250.0, Rgb::YELLOW);
//!
//! let png = PngEncoder::to_bytes(engine.grid(), Rgb::WHITE)?;
//! assert!(!png.is_empty());
//! # Ok::<(), raster_kernel::Error>(())
//! ```
//!
//! ## Layout
//!
//! - [`framebuffer`]: bounds-checked pixel grid
//! - [`render`]: line, circle and curve rasterization
//! - [`transform`]: 3×3 homogeneous matrices and the edge list
//! - [`engine`]: one grid plus one edge list per drawing session
//! - [`script`] and [`output`]: command-script driver and PNG export

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type.
pub mod color;

/// Pixel grid for rasterization output.
pub mod framebuffer;

/// Geometric primitives (points, pixels, edges, curves).
pub mod geometry;

// ============================================================================
// Rasterization and Transforms
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Homogeneous transforms and the wireframe edge list.
pub mod transform;

/// Graphics engine owning a grid and an edge list.
pub mod engine;

// ============================================================================
// Driver Modules
// ============================================================================

/// Command script parsing and execution.
pub mod script;

/// Output encoders (PNG).
pub mod output;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-kernel operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_kernel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgb;
    pub use crate::config::Config;
    pub use crate::engine::GraphicsEngine;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::PixelGrid;
    pub use crate::geometry::{Circle, CubicBezier, Edge, HermiteCurve, LineSegment, Pixel, Point};
    pub use crate::output::PngEncoder;
    pub use crate::render::{CurveSteps, Drawable};
    pub use crate::transform::{EdgeList, Matrix3};
}
