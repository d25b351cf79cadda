//! # Dithering
//!
//! Converts continuous-tone intensities to the 1-bit dots the AS-289R2
//! prints.
//!
//! ## Algorithms
//!
//! | Method | Speed | Quality | Artifacts |
//! |--------|-------|---------|-----------|
//! | Bayer 8x8 | Fast | Good | Regular pattern |
//! | Threshold | Fastest | Poor | Banding |
//!
//! ## The Bayer Matrix
//!
//! For each pixel position (x, y) the threshold is
//! `(BAYER8[y mod 8][x mod 8] + 0.5) / 64`, so full black always prints and
//! full white never does.
//!
//! ```
//! use as289r2::render::dither;
//!
//! let row: Vec<bool> = vec![true, true, false, false, true, false, true, false];
//! assert_eq!(dither::pack_row(&row), vec![0b11001010]);
//! ```

use std::str::FromStr;

/// Dithering algorithm used when rasterizing images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitheringAlgorithm {
    /// Ordered 8x8 Bayer dithering
    #[default]
    Bayer,
    /// Fixed 50% threshold, best for line art and logos
    Threshold,
}

impl FromStr for DitheringAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bayer" => Ok(Self::Bayer),
            "threshold" => Ok(Self::Threshold),
            other => Err(format!(
                "Unknown dithering '{}'. Use 'bayer' or 'threshold'",
                other
            )),
        }
    }
}

/// Bayer 8x8 dithering matrix, values 0-63
pub const BAYER8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Get the Bayer threshold for a pixel position, in (0, 1).
#[inline]
pub fn threshold(x: usize, y: usize) -> f32 {
    let matrix_value = BAYER8[y & 7][x & 7];
    (matrix_value as f32 + 0.5) / 64.0
}

/// Decide whether to print a dot. `intensity`: 0.0 = white, 1.0 = black.
///
/// ```
/// use as289r2::render::dither::{should_print, DitheringAlgorithm};
///
/// assert!(should_print(0, 0, 1.0, DitheringAlgorithm::Bayer));
/// assert!(!should_print(0, 0, 0.0, DitheringAlgorithm::Bayer));
/// assert!(should_print(3, 7, 0.6, DitheringAlgorithm::Threshold));
/// ```
#[inline]
pub fn should_print(x: usize, y: usize, intensity: f32, algorithm: DitheringAlgorithm) -> bool {
    match algorithm {
        DitheringAlgorithm::Bayer => intensity > threshold(x, y),
        DitheringAlgorithm::Threshold => intensity > 0.5,
    }
}

/// Pack a row of pixels into bytes, MSB = leftmost, padded with white.
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }

    bytes
}

/// Generate a dithered raster from an intensity function.
///
/// Length = `ceil(width/8) * height` bytes.
///
/// ```
/// use as289r2::render::dither::{generate_raster, DitheringAlgorithm};
///
/// let data = generate_raster(384, 10, |x, _y, w, _h| x as f32 / w as f32, DitheringAlgorithm::Bayer);
/// assert_eq!(data.len(), 48 * 10);
/// ```
pub fn generate_raster<F>(
    width: usize,
    height: usize,
    intensity_fn: F,
    algorithm: DitheringAlgorithm,
) -> Vec<u8>
where
    F: Fn(usize, usize, usize, usize) -> f32,
{
    let width_bytes = width.div_ceil(8);
    let mut data = Vec::with_capacity(width_bytes * height);
    let mut row_pixels = Vec::with_capacity(width);

    for y in 0..height {
        row_pixels.clear();
        for x in 0..width {
            let intensity = intensity_fn(x, y, width, height);
            row_pixels.push(should_print(x, y, intensity, algorithm));
        }
        data.extend(pack_row(&row_pixels));
    }

    data
}
