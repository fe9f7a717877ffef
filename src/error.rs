//! Error types for raster-kernel operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-kernel operations.
///
/// Pixel writes and rasterization never fail: out-of-bounds coordinates are
/// dropped by the grid. Only transforms, I/O and the driver layers report errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a pixel grid.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A transform produced a zero homogeneous component.
    #[error("Division by zero: homogeneous component is 0 for point ({x}, {y})")]
    DivisionByZero {
        /// X coordinate of the input point.
        x: f64,
        /// Y coordinate of the input point.
        y: f64,
    },

    /// Malformed command script.
    #[error("Script error at line {line}: {message}")]
    Script {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Configuration file could not be read.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration file could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// 1-based line number (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}
