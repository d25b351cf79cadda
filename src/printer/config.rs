//! # Printer Configuration
//!
//! Hardware specifications for the AS-289R2 thermal printer shield.
//!
//! | Model | Width (dots) | Bytes/line | Resolution | Default baud |
//! |-------|--------------|------------|------------|--------------|
//! | AS-289R2 | 384 | 48 | 8 dots/mm | 9600 |
//!
//! ```
//! use as289r2::printer::PrinterConfig;
//!
//! let config = PrinterConfig::AS289R2;
//! println!("Print width: {} dots ({} bytes)",
//!          config.width_dots,
//!          config.width_bytes);
//! ```

/// # Printer Configuration
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For AS-289R2:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width_mm = 384 / 8 = 48mm (on 58mm paper)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Print width in bytes (width_dots / 8), one bitmap line
    pub width_bytes: u16,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Factory serial baud rate
    pub baud: u32,
}

impl PrinterConfig {
    /// # NADA Electronics AS-289R2 Configuration
    ///
    /// 58mm paper thermal printer shield with a serial (TTL UART) input.
    pub const AS289R2: Self = Self {
        name: "NADA AS-289R2",
        width_dots: 384,
        width_bytes: 48,
        dpi: 203,
        baud: 9600,
    };

    /// Calculate dots per millimeter
    ///
    /// ```
    /// use as289r2::printer::PrinterConfig;
    ///
    /// let config = PrinterConfig::AS289R2;
    /// assert!((config.dots_per_mm() - 8.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }

    /// Convert millimeters to dots
    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> u16 {
        (mm * self.dots_per_mm()).round() as u16
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::AS289R2
    }
}
