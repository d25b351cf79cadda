//! # Bitmap Image Commands
//!
//! The AS-289R2 prints bitmaps through a single command with a mode byte
//! and a big-endian line count:
//!
//! ```text
//! FS * m nH nL d1...dk      k = 48 × n
//! 1C 2A m nH nL data
//! ```
//!
//! Each line is 384 dots = 48 bytes, MSB = leftmost dot, 1 = black.
//!
//! ## Modes
//!
//! | Mode | Byte | Payload |
//! |------|------|---------|
//! | Print buffer | 0x61 | none |
//! | Register | 0x62 | yes |
//! | Register, then print | 0x63 | yes |
//! | Print, then register | 0x64 | yes |
//! | Line print | 0x65 | yes |
//!
//! The header and the payload are built separately so a transport can
//! stream large images without copying them into the header buffer.

use serde::{Deserialize, Serialize};

use crate::error::{PrinterError, Result};

use super::commands::{FS, u16_be};

/// Bytes per printed line (384 dots / 8)
pub const LINE_BYTES: usize = 48;

/// Length of the `FS * m nH nL` header
pub const HEADER_LEN: usize = 5;

/// Bitmap operation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitmapMode {
    /// Print the image buffer already held by the printer (no payload)
    PrintBuffer = 0x61,
    /// Store the payload in the image buffer
    Register = 0x62,
    /// Store, then print
    RegisterThenPrint = 0x63,
    /// Print the current buffer, then store the payload
    PrintThenRegister = 0x64,
    /// Print the payload directly, line by line
    #[default]
    LinePrint = 0x65,
}

impl BitmapMode {
    /// Whether image bytes follow the header
    #[inline]
    pub const fn has_payload(self) -> bool {
        !matches!(self, BitmapMode::PrintBuffer)
    }
}

/// Number of payload bytes required for `lines` lines
#[inline]
pub const fn payload_len(lines: u16) -> usize {
    LINE_BYTES * lines as usize
}

/// # Bitmap Header (FS * m nH nL)
///
/// ```
/// use as289r2::protocol::graphics::{header, BitmapMode};
///
/// assert_eq!(header(BitmapMode::LinePrint, 0x0102), [0x1C, 0x2A, 0x65, 0x01, 0x02]);
/// ```
#[inline]
pub fn header(mode: BitmapMode, lines: u16) -> [u8; HEADER_LEN] {
    let [hi, lo] = u16_be(lines);
    [FS, b'*', mode as u8, hi, lo]
}

/// Select the payload slice for a bitmap command.
///
/// Returns an empty slice for [`BitmapMode::PrintBuffer`] without touching
/// `image`. Otherwise returns exactly `48 × lines` bytes.
///
/// ## Errors
///
/// [`PrinterError::ContractViolation`] if `image` is shorter than the line
/// count requires.
pub fn payload(mode: BitmapMode, lines: u16, image: &[u8]) -> Result<&[u8]> {
    if !mode.has_payload() {
        return Ok(&[]);
    }

    let needed = payload_len(lines);
    image.get(..needed).ok_or_else(|| {
        PrinterError::ContractViolation(format!(
            "bitmap needs {} bytes for {} lines, got {}",
            needed,
            lines,
            image.len()
        ))
    })
}

/// Build a complete bitmap command in one buffer.
///
/// ```
/// use as289r2::protocol::graphics::{bitmap, BitmapMode};
///
/// let image = vec![0xFF; 48 * 2];
/// let cmd = bitmap(BitmapMode::RegisterThenPrint, 2, &image).unwrap();
/// assert_eq!(cmd.len(), 5 + 96);
/// ```
pub fn bitmap(mode: BitmapMode, lines: u16, image: &[u8]) -> Result<Vec<u8>> {
    let body = payload(mode, lines, image)?;
    let mut cmd = Vec::with_capacity(HEADER_LEN + body.len());
    cmd.extend(header(mode, lines));
    cmd.extend_from_slice(body);
    Ok(cmd)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_big_endian() {
        assert_eq!(header(BitmapMode::Register, 1), [0x1C, 0x2A, 0x62, 0x00, 0x01]);
        assert_eq!(header(BitmapMode::Register, 300), [0x1C, 0x2A, 0x62, 0x01, 0x2C]);
        assert_eq!(header(BitmapMode::PrintBuffer, 0xFFFF), [0x1C, 0x2A, 0x61, 0xFF, 0xFF]);
    }

    #[test]
    fn test_payload_exact_length() {
        let image = vec![0xAA; LINE_BYTES * 3 + 10];
        let body = payload(BitmapMode::LinePrint, 3, &image).unwrap();
        assert_eq!(body.len(), 144);
    }

    #[test]
    fn test_payload_short_buffer_rejected() {
        let image = vec![0x00; LINE_BYTES * 2 - 1];
        assert!(matches!(
            payload(BitmapMode::LinePrint, 2, &image),
            Err(PrinterError::ContractViolation(_))
        ));
    }

    #[test]
    fn test_print_buffer_ignores_image() {
        let body = payload(BitmapMode::PrintBuffer, 100, &[]).unwrap();
        assert!(body.is_empty());
        assert_eq!(bitmap(BitmapMode::PrintBuffer, 100, &[]).unwrap().len(), HEADER_LEN);
    }

    #[test]
    fn test_mode_bytes() {
        assert_eq!(BitmapMode::PrintBuffer as u8, 0x61);
        assert_eq!(BitmapMode::Register as u8, 0x62);
        assert_eq!(BitmapMode::RegisterThenPrint as u8, 0x63);
        assert_eq!(BitmapMode::PrintThenRegister as u8, 0x64);
        assert_eq!(BitmapMode::LinePrint as u8, 0x65);
    }

    #[test]
    fn test_zero_lines() {
        let cmd = bitmap(BitmapMode::LinePrint, 0, &[]).unwrap();
        assert_eq!(cmd, vec![0x1C, 0x2A, 0x65, 0x00, 0x00]);
    }
}
