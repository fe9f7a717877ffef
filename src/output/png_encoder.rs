//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Grids are written as 8-bit
//! RGB; cells that were never drawn are emitted as the caller's fill color.

use crate::color::Rgb;
use crate::error::Result;
use crate::framebuffer::PixelGrid;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for pixel grid output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a pixel grid to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(grid: &PixelGrid, path: P, fill: Rgb) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(grid, BufWriter::new(file), fill)
    }

    /// Encode a pixel grid to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(grid: &PixelGrid, fill: Rgb) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(grid, &mut buffer, fill)?;
        Ok(buffer)
    }

    fn encode<W: Write>(grid: &PixelGrid, writer: W, fill: Rgb) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, grid.width(), grid.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&grid.to_rgb_bytes(fill))?;
        writer.finish()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_to_bytes() {
        let mut grid = PixelGrid::new(10, 10).unwrap();
        grid.write(3, 3, Rgb::RED);

        let bytes = PngEncoder::to_bytes(&grid, Rgb::WHITE).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_roundtrip_pixels() {
        let mut grid = PixelGrid::new(3, 2).unwrap();
        grid.write(0, 0, Rgb::BLACK);
        grid.write(2, 1, Rgb::BLUE);

        let bytes = PngEncoder::to_bytes(&grid, Rgb::WHITE).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(&buf[..info.buffer_size()], grid.to_rgb_bytes(Rgb::WHITE).as_slice());
        assert_eq!(&buf[3..6], &[255, 255, 255]);
    }
}
