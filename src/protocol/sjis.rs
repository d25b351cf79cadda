//! # Shift-JIS Text Encoding
//!
//! The AS-289R2 reads text as Shift-JIS: ASCII and half-width katakana are
//! single bytes, Kanji and full-width kana are two bytes rendered with the
//! font selected by `DC2 S n`.
//!
//! ```
//! use as289r2::protocol::sjis;
//!
//! assert_eq!(sjis::encode("AB\r").unwrap(), b"AB\r".to_vec());
//! assert_eq!(sjis::encode("日本").unwrap(), vec![0x93, 0xFA, 0x96, 0x7B]);
//! ```

use encoding_rs::SHIFT_JIS;

use crate::error::{PrinterError, Result};

/// Encode text as Shift-JIS bytes.
///
/// ## Errors
///
/// [`PrinterError::ContractViolation`] naming the first character with no
/// Shift-JIS representation. Nothing is substituted.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
    if !had_errors {
        return Ok(bytes.into_owned());
    }

    let mut buf = [0u8; 4];
    let unmapped = text
        .chars()
        .find(|ch| SHIFT_JIS.encode(ch.encode_utf8(&mut buf)).2);

    Err(PrinterError::ContractViolation(match unmapped {
        Some(ch) => format!(
            "character '{}' (U+{:04X}) has no Shift-JIS encoding",
            ch, ch as u32
        ),
        None => "text has no Shift-JIS encoding".to_string(),
    }))
}
