//! # AS-289R2 Basic Commands
//!
//! Control bytes, initialization, paper movement and spacing commands for
//! the AS-289R2 thermal printer.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `CR`, `CAN`, `EM`
//! - Two bytes: `ESC @`
//! - Prefix plus fixed parameters: `ESC J n`, `FS e w h`
//! - Prefix plus variable payload: `GS x l n data...`, `FS * m hi lo data...`
//!
//! ## Byte Order
//!
//! The one multi-byte integer in the protocol (bitmap line count) is
//! **big-endian**: `u16` value 0x1234 is sent as bytes `[0x12, 0x34]`.

use serde::{Deserialize, Serialize};

use crate::error::{PrinterError, Result};

use super::variant::ProtocolVariant;

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Prefix for most formatting commands
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - Prefix for enlargement and bitmap commands
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - Prefix for barcode and QR commands
pub const GS: u8 = 0x1D;

/// DC2 (Device Control 2) - Prefix for Kanji font selection
pub const DC2: u8 = 0x12;

/// CR (Carriage Return) - Print the line buffer and advance one line
pub const CR: u8 = 0x0D;

/// CAN (Cancel) - Clear the image buffer, [`ProtocolVariant::NulTerminated`] framing
pub const CAN: u8 = 0x18;

/// EM (End of Medium) - Clear the image buffer, [`ProtocolVariant::SelectorByte`] framing
pub const EM: u8 = 0x19;

/// Default line spacing in dots (`ESC 3 4`)
pub const DEFAULT_LINE_SPACING: u8 = 0x04;

/// Default inter-character space in dots (`ESC SP 1`)
pub const DEFAULT_INTER_CHARACTER_SPACE: u8 = 0x01;

/// Largest line-feed count accepted in one command
pub const MAX_LINE_FEEDS: u32 = 0xFFFF;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on defaults.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use as289r2::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Clear Image Buffer (EM or CAN)
///
/// Discards any data held in the printer's image buffer. The control byte
/// differs between the two protocol framings.
///
/// ```
/// use as289r2::protocol::{commands, ProtocolVariant};
///
/// assert_eq!(commands::clear_buffer(ProtocolVariant::SelectorByte), vec![0x19]);
/// assert_eq!(commands::clear_buffer(ProtocolVariant::NulTerminated), vec![0x18]);
/// ```
#[inline]
pub fn clear_buffer(variant: ProtocolVariant) -> Vec<u8> {
    vec![variant.clear_buffer_byte()]
}

// ============================================================================
// PAPER MOVEMENT
// ============================================================================

/// # Line Feed (CR × n)
///
/// The AS-289R2 treats `CR` as "print and advance". `n = 0` yields an
/// empty sequence.
///
/// ## Errors
///
/// [`PrinterError::ContractViolation`] when `n` exceeds [`MAX_LINE_FEEDS`].
///
/// ```
/// use as289r2::protocol::commands;
///
/// assert_eq!(commands::line_feeds(3).unwrap(), vec![0x0D, 0x0D, 0x0D]);
/// assert!(commands::line_feeds(0).unwrap().is_empty());
/// assert!(commands::line_feeds(u32::MAX).is_err());
/// ```
pub fn line_feeds(n: u32) -> Result<Vec<u8>> {
    if n > MAX_LINE_FEEDS {
        return Err(PrinterError::ContractViolation(format!(
            "line feed count must be at most {}, got {}",
            MAX_LINE_FEEDS, n
        )));
    }
    Ok(vec![CR; n as usize])
}

/// # Paper Feed (ESC J n)
///
/// Feeds paper forward by `n` dot lines.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC J n  |
/// | Hex     | 1B 4A n  |
#[inline]
pub fn paper_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// # Print Position (ESC l n)
///
/// Sets the left print position in characters.
#[inline]
pub fn print_position(n: u8) -> Vec<u8> {
    vec![ESC, b'l', n]
}

/// Print direction for `ESC I n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintDirection {
    /// Normal top-to-bottom output
    #[default]
    Lister = 0,
    /// Rotated output for long text strips
    Texter = 1,
}

/// # Print Direction (ESC I n)
///
/// `0` = lister (normal), `1` = texter (rotated).
#[inline]
pub fn print_direction(direction: PrintDirection) -> Vec<u8> {
    vec![ESC, b'I', direction as u8]
}

// ============================================================================
// SPACING
// ============================================================================

/// # Line Spacing (ESC 3 n)
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

/// Restore the default line spacing (`ESC 3 4`)
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    line_spacing(DEFAULT_LINE_SPACING)
}

/// # Inter-Character Space (ESC SP n)
#[inline]
pub fn inter_character_space(n: u8) -> Vec<u8> {
    vec![ESC, b' ', n]
}

/// Restore the default inter-character space (`ESC SP 1`)
#[inline]
pub fn default_inter_character_space() -> Vec<u8> {
    inter_character_space(DEFAULT_INTER_CHARACTER_SPACE)
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as big-endian bytes [high, low]
///
/// ```
/// use as289r2::protocol::commands::u16_be;
///
/// assert_eq!(u16_be(0x1234), [0x12, 0x34]);
/// assert_eq!(u16_be(384), [0x01, 0x80]);
/// ```
#[inline]
pub const fn u16_be(value: u16) -> [u8; 2] {
    [(value >> 8) as u8, value as u8]
}

/// Narrow a caller-supplied value to one parameter byte.
///
/// Values above 255 are rejected instead of being truncated.
///
/// ```
/// use as289r2::protocol::commands::byte_param;
///
/// assert_eq!(byte_param("space", 255).unwrap(), 0xFF);
/// assert!(byte_param("space", 256).is_err());
/// ```
pub fn byte_param(name: &str, value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        PrinterError::ContractViolation(format!(
            "{} must be in 0..=255, got {}",
            name, value
        ))
    })
}

// ============================================================================
// TESTS
// ============================================================================
