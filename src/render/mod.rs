//! # Rendering Module
//!
//! Prepares bitmap payloads for the printer.
//!
//! - [`dither`]: Bayer and threshold conversion to 1-bit dots
//! - [`bitmap`]: Image loading and scaling to the 384-dot print width
//!
//! ```no_run
//! use as289r2::render::{bitmap::Bitmap, dither::DitheringAlgorithm};
//!
//! let logo = Bitmap::open("logo.png", DitheringAlgorithm::Bayer)?;
//! // logo.data is ready for Printer::print_bitmap_image(mode, logo.lines, &logo.data)
//! # Ok::<(), as289r2::error::PrinterError>(())
//! ```

pub mod bitmap;
pub mod dither;
