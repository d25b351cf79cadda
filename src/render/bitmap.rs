//! # Bitmap Preparation
//!
//! Turns images into the 384-dot, 48-bytes-per-line layout expected by
//! [`Printer::print_bitmap_image`](crate::printer::Printer::print_bitmap_image).
//!
//! ```
//! use as289r2::render::bitmap::Bitmap;
//!
//! let stripes = Bitmap::from_fn(16, |x, _y| if (x / 8) % 2 == 0 { 1.0 } else { 0.0 });
//! assert_eq!(stripes.lines, 16);
//! assert_eq!(stripes.data.len(), 48 * 16);
//! ```

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use super::dither::{self, DitheringAlgorithm};
use crate::error::{PrinterError, Result};
use crate::printer::PrinterConfig;

/// A 1-bit image sized for the print head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Number of 48-byte lines
    pub lines: u16,
    /// Packed dots, `48 * lines` bytes
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Render an intensity function over the full print width.
    ///
    /// `intensity(x, y)`: 0.0 = white, 1.0 = black.
    pub fn from_fn<F>(lines: u16, intensity: F) -> Self
    where
        F: Fn(usize, usize) -> f32,
    {
        let width = PrinterConfig::AS289R2.width_dots as usize;
        let data = dither::generate_raster(
            width,
            lines as usize,
            |x, y, _w, _h| intensity(x, y),
            DitheringAlgorithm::Bayer,
        );
        Self { lines, data }
    }

    /// Scale an image to the print width, preserving aspect ratio, and
    /// dither it.
    ///
    /// ## Errors
    ///
    /// [`PrinterError::Image`] if the image is empty or its scaled height
    /// does not fit the 16-bit line count.
    pub fn from_image(source: &DynamicImage, algorithm: DitheringAlgorithm) -> Result<Self> {
        if source.width() == 0 || source.height() == 0 {
            return Err(PrinterError::Image("image has no pixels".to_string()));
        }

        let width = PrinterConfig::AS289R2.width_dots as u32;
        let aspect = source.height() as f32 / source.width() as f32;
        let height = ((width as f32 * aspect).round() as u32).max(1);
        let lines = u16::try_from(height).map_err(|_| {
            PrinterError::Image(format!(
                "scaled image is {} lines tall, maximum is {}",
                height,
                u16::MAX
            ))
        })?;

        let resized = source.resize_exact(width, height, FilterType::Lanczos3);
        let grayscale = resized.to_luma8();

        let data = dither::generate_raster(
            width as usize,
            height as usize,
            |x, y, _w, _h| {
                let pixel = grayscale.get_pixel(x as u32, y as u32);
                1.0 - (pixel[0] as f32 / 255.0)
            },
            algorithm,
        );

        debug!(lines, bytes = data.len(), "rasterized image");
        Ok(Self { lines, data })
    }

    /// Load an image file and convert it with [`Bitmap::from_image`].
    pub fn open<P: AsRef<Path>>(path: P, algorithm: DitheringAlgorithm) -> Result<Self> {
        let path = path.as_ref();
        let source = image::open(path).map_err(|e| {
            PrinterError::Image(format!("Failed to load {}: {}", path.display(), e))
        })?;
        Self::from_image(&source, algorithm)
    }
}
