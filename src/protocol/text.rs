//! # Text Styling Commands
//!
//! Font selection, character enlargement and script modes.
//!
//! ## Character Sizes
//!
//! | Command | Effect |
//! |---------|--------|
//! | `ESC N 1` | Double height |
//! | `ESC W 1` | Double width |
//! | `FS W 1` | Quadruple (double width and height) |
//! | `ESC L 1` | Large 48×96 font |
//! | `FS e w h` | Arbitrary enlargement |
//!
//! ## Example
//!
//! ```
//! use as289r2::protocol::text::{self, AnkFont};
//!
//! let mut data = Vec::new();
//! data.extend(text::ank_font(AnkFont::Size8x16));
//! data.extend(text::double_width_on());
//! data.extend(b"TOTAL\r");
//! data.extend(text::double_width_off());
//! ```

use serde::{Deserialize, Serialize};

use super::commands::{DC2, ESC, FS};

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Kanji (full-width) font sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KanjiFont {
    /// 24×24 dots
    #[default]
    #[serde(rename = "24x24")]
    Size24x24 = 0x30,
    /// 16×16 dots
    #[serde(rename = "16x16")]
    Size16x16 = 0x31,
}

/// ANK (alphanumeric and kana, half-width) font sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnkFont {
    /// 8×16 dots
    #[serde(rename = "8x16")]
    Size8x16 = 0x30,
    /// 12×24 dots
    #[default]
    #[serde(rename = "12x24")]
    Size12x24 = 0x31,
    /// 16×16 dots
    #[serde(rename = "16x16")]
    Size16x16 = 0x32,
    /// 24×24 dots
    #[serde(rename = "24x24")]
    Size24x24 = 0x33,
}

/// # Select ANK Font (ESC h n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC h n  |
/// | Hex     | 1B 68 n  |
///
/// ```
/// use as289r2::protocol::text::{ank_font, AnkFont};
///
/// assert_eq!(ank_font(AnkFont::Size8x16), vec![0x1B, 0x68, 0x30]);
/// ```
#[inline]
pub fn ank_font(font: AnkFont) -> Vec<u8> {
    vec![ESC, b'h', font as u8]
}

/// # Select Kanji Font (DC2 S n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | DC2 S n  |
/// | Hex     | 12 53 n  |
#[inline]
pub fn kanji_font(font: KanjiFont) -> Vec<u8> {
    vec![DC2, b'S', font as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Double height on (`ESC N 1`)
#[inline]
pub fn double_height_on() -> Vec<u8> {
    vec![ESC, b'N', b'1']
}

/// Double height off (`ESC N 0`)
#[inline]
pub fn double_height_off() -> Vec<u8> {
    vec![ESC, b'N', b'0']
}

/// Double width on (`ESC W 1`)
#[inline]
pub fn double_width_on() -> Vec<u8> {
    vec![ESC, b'W', b'1']
}

/// Double width off (`ESC W 0`)
#[inline]
pub fn double_width_off() -> Vec<u8> {
    vec![ESC, b'W', b'0']
}

/// # Large Font On (ESC L 1)
///
/// Switches to the 48×96 dot font.
#[inline]
pub fn large_font_on() -> Vec<u8> {
    vec![ESC, b'L', b'1']
}

/// Large font off (`ESC L 0`)
#[inline]
pub fn large_font_off() -> Vec<u8> {
    vec![ESC, b'L', b'0']
}

/// Quadruple size on (`FS W 1`)
#[inline]
pub fn quadruple_on() -> Vec<u8> {
    vec![FS, b'W', b'1']
}

/// Quadruple size off (`FS W 0`)
#[inline]
pub fn quadruple_off() -> Vec<u8> {
    vec![FS, b'W', b'0']
}

/// # Enlargement (FS e w h)
///
/// Sets horizontal and vertical magnification independently.
///
/// ```
/// use as289r2::protocol::text::enlargement;
///
/// assert_eq!(enlargement(2, 3), vec![0x1C, 0x65, 0x02, 0x03]);
/// ```
#[inline]
pub fn enlargement(width: u8, height: u8) -> Vec<u8> {
    vec![FS, b'e', width, height]
}

/// Reset enlargement to 1×1 (`FS e 1 1`, ASCII digits)
#[inline]
pub fn enlargement_off() -> Vec<u8> {
    enlargement(b'1', b'1')
}

// ============================================================================
// SCRIPT
// ============================================================================

/// Superscript / subscript modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptMode {
    /// Normal baseline
    #[default]
    Cancel = 0,
    /// Superscript
    Super = 1,
    /// Subscript
    Sub = 2,
}

/// # Script Mode (ESC s n)
#[inline]
pub fn script(mode: ScriptMode) -> Vec<u8> {
    vec![ESC, b's', mode as u8]
}

/// # Cancel Script (ESC s '0')
///
/// Uses the ASCII digit form, which the firmware treats the same as
/// [`ScriptMode::Cancel`].
#[inline]
pub fn script_off() -> Vec<u8> {
    vec![ESC, b's', b'0']
}

// ============================================================================
// TESTS
// ============================================================================
