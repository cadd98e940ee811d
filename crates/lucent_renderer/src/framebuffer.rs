//! Packed 32-bit framebuffer and image export.

use std::path::Path;

use image::RgbImage;
use log::info;
use thiserror::Error;

/// Errors from exporting the framebuffer to an image file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write framebuffer image: {0}")]
    Image(#[from] image::ImageError),
}

/// A width x height buffer of 0xFFRRGGBB pixels, row-major, origin
/// top-left.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a framebuffer cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF00_0000; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable pixel storage for the frame dispatcher.
    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Get the packed pixel at (x, y).
    pub fn pixel_at(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(x + y * self.width) as usize]
    }

    /// Write the buffer to an image file; the format follows the
    /// extension (e.g. `.bmp`, `.png`).
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let mut img = RgbImage::new(self.width, self.height);
        for (i, pixel) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            let r = ((pixel >> 16) & 0xFF) as u8;
            let g = ((pixel >> 8) & 0xFF) as u8;
            let b = (pixel & 0xFF) as u8;
            img.put_pixel(x, y, image::Rgb([r, g, b]));
        }
        img.save(path)?;

        info!("saved {}x{} framebuffer to {}", self.width, self.height, path.display());
        Ok(())
    }
}
