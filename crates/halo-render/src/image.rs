//! A rendered frame stored as linear, unclamped RGBA.

use std::path::Path;

use glam::Vec4;

use crate::error::RenderError;

/// Index of `(x, y)` in a row-major buffer `width` pixels wide, computed in
/// `usize` so large frames do not wrap.
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// A rendered frame, row-major with the top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel colors. Length = `width * height`.
    pub pixels: Vec<Vec4>,
}

impl FrameImage {
    /// Create a transparent black image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec4::ZERO; width as usize * height as usize],
        }
    }

    /// Copy one finished row into place.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `colors.len() != width`.
    pub(crate) fn write_row(&mut self, row: u32, colors: &[Vec4]) {
        let start = pixel_offset(self.width, 0, row);
        self.pixels[start..start + self.width as usize].copy_from_slice(colors);
    }

    /// Color at `(x, y)`, with `y = 0` the top row.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> Vec4 {
        self.pixels[pixel_offset(self.width, x, y)]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Clamp every channel to `[0, 1]` and quantize to RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            for channel in pixel.to_array() {
                bytes.push((channel.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        bytes
    }

    /// Encode as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut png_buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.to_rgba8())?;
            writer.finish()?;
        }
        Ok(png_buf)
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
