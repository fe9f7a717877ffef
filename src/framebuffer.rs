//! Pixel grid for rasterization output.
//!
//! A fixed-size, row-major grid of [`Rgb`] cells. Writes are bounds-checked
//! "pokes": an address outside the grid is silently ignored. The grid also
//! remembers which cells were ever written so the export stage can substitute
//! a fill color for untouched background.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Pixel;

/// Fixed-size RGB pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Cells in row-major order.
    cells: Vec<Rgb>,
    /// Parallel to `cells`: whether the cell has been written since creation or the last clear.
    written: Vec<bool>,
}

impl PixelGrid {
    /// Create a new grid with every cell set to black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_kernel::framebuffer::PixelGrid;
    ///
    /// let grid = PixelGrid::new(800, 600).unwrap();
    /// assert_eq!(grid.width(), 800);
    /// assert_eq!(grid.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_background(width, height, Rgb::BLACK)
    }

    /// Create a new grid with every cell set to `background`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_background(width: u32, height: u32, background: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);

        Ok(Self {
            width,
            height,
            cells: vec![background; size],
            written: vec![false; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the stored cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    /// Check whether `(x, y)` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Set the cell at `(x, y)` to `color`.
    ///
    /// Does nothing if the coordinates are out of bounds.
    #[inline]
    pub fn write(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = color;
            self.written[idx] = true;
        }
    }

    /// Set the cell at `pixel` to `color`. See [`PixelGrid::write`].
    #[inline]
    pub fn write_pixel(&mut self, pixel: Pixel, color: Rgb) {
        self.write(pixel.x, pixel.y, color);
    }

    /// Get the color at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether the cell at `(x, y)` has been written.
    ///
    /// Out-of-bounds coordinates are never written.
    #[must_use]
    pub fn is_written(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.written[idx])
    }

    /// Iterate over the addresses of all written cells in row-major order.
    pub fn written_pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        let width = self.width as usize;
        self.written
            .iter()
            .enumerate()
            .filter(|(_, &w)| w)
            .map(move |(idx, _)| Pixel::new((idx % width) as i32, (idx / width) as i32))
    }

    /// Reset every cell to `color` and mark the grid as unwritten.
    pub fn clear(&mut self, color: Rgb) {
        self.cells.fill(color);
        self.written.fill(false);
    }

    /// Export the full grid in row-major order.
    ///
    /// Cells that were never written are reported as `fill` instead of the
    /// stored background.
    #[must_use]
    pub fn export(&self, fill: Rgb) -> Vec<Rgb> {
        self.cells
            .iter()
            .zip(&self.written)
            .map(|(&cell, &written)| if written { cell } else { fill })
            .collect()
    }

    /// Export the grid as tightly packed 3-byte RGB data. See [`PixelGrid::export`].
    #[must_use]
    pub fn to_rgb_bytes(&self, fill: Rgb) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() * 3);
        for color in self.export(fill) {
            bytes.extend_from_slice(&color.to_array());
        }
        bytes
    }

    /// Calculate the cell index for a coordinate, if in bounds.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = PixelGrid::new(100, 50).unwrap();
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 50);
        assert_eq!(grid.pixel_count(), 5000);
        assert_eq!(grid.get(0, 0), Some(Rgb::BLACK));
        assert_eq!(grid.get(99, 49), Some(Rgb::BLACK));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(PixelGrid::new(0, 100).is_err());
        assert!(PixelGrid::new(100, 0).is_err());
        assert!(PixelGrid::new(0, 0).is_err());
    }

    #[test]
    fn test_write_and_get() {
        let mut grid = PixelGrid::new(10, 10).unwrap();

        grid.write(5, 5, Rgb::BLUE);
        assert_eq!(grid.get(5, 5), Some(Rgb::BLUE));
        assert!(grid.is_written(5, 5));
        assert!(!grid.is_written(4, 5));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut grid = PixelGrid::new(10, 10).unwrap();
        let before = grid.clone();

        grid.write(-1, 0, Rgb::RED);
        grid.write(0, -1, Rgb::RED);
        grid.write(10, 0, Rgb::RED);
        grid.write(0, 10, Rgb::RED);
        grid.write(i32::MAX, i32::MIN, Rgb::RED);

        assert_eq!(grid, before);
        assert_eq!(grid.get(10, 10), None);
        assert_eq!(grid.get(-1, -1), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut grid = PixelGrid::new(4, 4).unwrap();
        grid.write(1, 2, Rgb::RED);
        grid.write(1, 2, Rgb::GREEN);
        assert_eq!(grid.get(1, 2), Some(Rgb::GREEN));
    }

    #[test]
    fn test_export_fills_unwritten_cells() {
        let mut grid = PixelGrid::new(3, 2).unwrap();
        grid.write(1, 0, Rgb::BLACK);
        grid.write(2, 1, Rgb::RED);

        let exported = grid.export(Rgb::WHITE);
        assert_eq!(
            exported,
            vec![
                Rgb::WHITE,
                Rgb::BLACK,
                Rgb::WHITE,
                Rgb::WHITE,
                Rgb::WHITE,
                Rgb::RED
            ]
        );
    }

    #[test]
    fn test_to_rgb_bytes() {
        let mut grid = PixelGrid::new(2, 1).unwrap();
        grid.write(0, 0, Rgb::new(1, 2, 3));

        assert_eq!(grid.to_rgb_bytes(Rgb::WHITE), vec![1, 2, 3, 255, 255, 255]);
    }

    #[test]
    fn test_written_pixels_row_major() {
        let mut grid = PixelGrid::new(5, 5).unwrap();
        grid.write(4, 0, Rgb::RED);
        grid.write(0, 3, Rgb::RED);
        grid.write(2, 1, Rgb::RED);

        let written: Vec<_> = grid.written_pixels().collect();
        assert_eq!(
            written,
            vec![Pixel::new(4, 0), Pixel::new(2, 1), Pixel::new(0, 3)]
        );
    }

    #[test]
    fn test_clear() {
        let mut grid = PixelGrid::new(10, 10).unwrap();
        grid.write(3, 3, Rgb::RED);
        grid.clear(Rgb::BLUE);

        assert_eq!(grid.get(3, 3), Some(Rgb::BLUE));
        assert!(!grid.is_written(3, 3));
        assert_eq!(grid.written_pixels().count(), 0);
    }

    #[test]
    fn test_with_background() {
        let grid = PixelGrid::with_background(4, 4, Rgb::YELLOW).unwrap();
        assert_eq!(grid.get(2, 2), Some(Rgb::YELLOW));
        assert_eq!(grid.export(Rgb::WHITE)[0], Rgb::WHITE);
    }
}
