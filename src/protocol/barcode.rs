//! # Barcode and QR Code Commands
//!
//! ## QR Codes (GS x)
//!
//! ```text
//! GS x e n d1...dn
//! 1D 78 e n data
//! ```
//!
//! `n` is a single length byte, so payloads are limited to 255 bytes.
//!
//! ## 1D Barcodes (GS k)
//!
//! The header is `GS k m`. What follows depends on the
//! [`ProtocolVariant`]:
//!
//! ```text
//! SelectorByte:   1D 6B m (m & 0x0F) data
//! NulTerminated:  1D 6B m data 00
//! ```
//!
//! ## Bar Geometry
//!
//! - `GS h n`: bar height in dots (default 0x50)
//! - `GS w n w`: narrow and wide bar widths (default 2 and 5)

use serde::{Deserialize, Serialize};

use crate::error::{PrinterError, Result};

use super::commands::GS;
use super::variant::ProtocolVariant;

/// Maximum QR payload that fits the one-byte length field
pub const MAX_QR_LEN: usize = u8::MAX as usize;

/// Default bar height in dots
pub const DEFAULT_BAR_HEIGHT: u8 = 0x50;

/// Default narrow bar width in dots
pub const DEFAULT_NARROW_BAR: u8 = 0x02;

/// Default wide bar width in dots
pub const DEFAULT_WIDE_BAR: u8 = 0x05;

// ============================================================================
// QR CODE
// ============================================================================

/// QR error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QrErrorLevel {
    /// ~7% recovery
    L = 0x4C,
    /// ~15% recovery
    #[default]
    M = 0x4D,
    /// ~25% recovery
    Q = 0x51,
    /// ~30% recovery
    H = 0x48,
}

/// # Print QR Code (GS x e n data)
///
/// ## Errors
///
/// Returns [`PrinterError::ContractViolation`] when `data` is longer than
/// [`MAX_QR_LEN`] bytes.
///
/// ```
/// use as289r2::protocol::barcode::{qr_code, QrErrorLevel};
///
/// let cmd = qr_code(QrErrorLevel::M, b"HELLO").unwrap();
/// assert_eq!(&cmd[..4], &[0x1D, 0x78, 0x4D, 5]);
/// assert_eq!(&cmd[4..], b"HELLO");
/// ```
pub fn qr_code(level: QrErrorLevel, data: &[u8]) -> Result<Vec<u8>> {
    let len = u8::try_from(data.len()).map_err(|_| {
        PrinterError::ContractViolation(format!(
            "QR payload is {} bytes, maximum is {}",
            data.len(),
            MAX_QR_LEN
        ))
    })?;

    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.extend([GS, b'x', level as u8, len]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

// ============================================================================
// 1D BARCODES
// ============================================================================

/// Barcode symbologies
///
/// | Kind | Data |
/// |------|------|
/// | UPC-A | 11 digits + check digit |
/// | JAN13 | 12 digits + check digit |
/// | JAN8 | 7 digits + check digit |
/// | CODE39 | variable, up to 20 |
/// | ITF | variable, up to 20 |
/// | CODABAR (NW7) | variable, up to 20 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeKind {
    UpcA = 0x30,
    Jan13 = 0x32,
    Jan8 = 0x33,
    Code39 = 0x34,
    Itf = 0x35,
    Codabar = 0x36,
}

impl BarcodeKind {
    /// Selector byte derived from the symbology code (`m & 0x0F`)
    #[inline]
    pub const fn selector(self) -> u8 {
        (self as u8) & 0x0F
    }
}

/// # Print Barcode (GS k m ...)
///
/// ## Errors
///
/// With [`ProtocolVariant::NulTerminated`], data containing a NUL byte is
/// rejected since the printer would end the barcode there.
///
/// ```
/// use as289r2::protocol::barcode::{barcode, BarcodeKind};
/// use as289r2::protocol::ProtocolVariant;
///
/// let cmd = barcode(ProtocolVariant::SelectorByte, BarcodeKind::Jan8, b"4901234").unwrap();
/// assert_eq!(&cmd[..4], &[0x1D, 0x6B, 0x33, 0x03]);
///
/// let cmd = barcode(ProtocolVariant::NulTerminated, BarcodeKind::Jan8, b"4901234").unwrap();
/// assert_eq!(&cmd[..3], &[0x1D, 0x6B, 0x33]);
/// assert_eq!(cmd.last(), Some(&0x00));
/// ```
pub fn barcode(variant: ProtocolVariant, kind: BarcodeKind, data: &[u8]) -> Result<Vec<u8>> {
    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.extend([GS, b'k', kind as u8]);

    match variant {
        ProtocolVariant::SelectorByte => {
            cmd.push(kind.selector());
            cmd.extend_from_slice(data);
        }
        ProtocolVariant::NulTerminated => {
            if let Some(pos) = data.iter().position(|&b| b == 0) {
                return Err(PrinterError::ContractViolation(format!(
                    "barcode data contains NUL at offset {}",
                    pos
                )));
            }
            cmd.extend_from_slice(data);
            cmd.push(0x00);
        }
    }

    Ok(cmd)
}

/// # Bar Height (GS h n)
#[inline]
pub fn bar_height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n]
}

/// Restore the default bar height (`GS h 0x50`)
#[inline]
pub fn default_bar_height() -> Vec<u8> {
    bar_height(DEFAULT_BAR_HEIGHT)
}

/// # Bar Widths (GS w narrow wide)
#[inline]
pub fn bar_size(narrow: u8, wide: u8) -> Vec<u8> {
    vec![GS, b'w', narrow, wide]
}

/// Restore the default bar widths (`GS w 2 5`)
#[inline]
pub fn default_bar_size() -> Vec<u8> {
    bar_size(DEFAULT_NARROW_BAR, DEFAULT_WIDE_BAR)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qr_header() {
        let cmd = qr_code(QrErrorLevel::H, b"https://example.com").unwrap();
        assert_eq!(&cmd[..4], &[0x1D, 0x78, 0x48, 19]);
        assert_eq!(&cmd[4..], b"https://example.com");
    }

    #[test]
    fn test_qr_levels() {
        assert_eq!(qr_code(QrErrorLevel::L, b"").unwrap().len(), 4);
        assert_eq!(qr_code(QrErrorLevel::L, b"").unwrap()[2], 0x4C);
        assert_eq!(qr_code(QrErrorLevel::M, b"").unwrap()[2], 0x4D);
        assert_eq!(qr_code(QrErrorLevel::Q, b"").unwrap()[2], 0x51);
        assert_eq!(qr_code(QrErrorLevel::H, b"").unwrap()[2], 0x48);
    }

    #[test]
    fn test_qr_max_length_accepted() {
        let data = vec![b'A'; 255];
        let cmd = qr_code(QrErrorLevel::M, &data).unwrap();
        assert_eq!(cmd[3], 0xFF);
        assert_eq!(cmd.len(), 4 + 255);
    }

    #[test]
    fn test_qr_over_length_rejected() {
        let data = vec![b'A'; 256];
        assert!(matches!(
            qr_code(QrErrorLevel::M, &data),
            Err(PrinterError::ContractViolation(_))
        ));
    }

    #[test]
    fn test_barcode_selector_framing() {
        let cmd =
            barcode(ProtocolVariant::SelectorByte, BarcodeKind::Jan13, b"490123456789").unwrap();
        let mut expected = vec![0x1D, 0x6B, 0x32, 0x02];
        expected.extend(b"490123456789");
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_barcode_nul_framing() {
        let cmd = barcode(ProtocolVariant::NulTerminated, BarcodeKind::Code39, b"ABC").unwrap();
        assert_eq!(cmd, vec![0x1D, 0x6B, 0x34, b'A', b'B', b'C', 0x00]);
    }

    #[test]
    fn test_barcode_nul_in_data_rejected() {
        let result = barcode(ProtocolVariant::NulTerminated, BarcodeKind::Itf, b"12\x0034");
        assert!(matches!(result, Err(PrinterError::ContractViolation(_))));

        // The selector framing has no terminator, so NUL passes through
        let cmd = barcode(ProtocolVariant::SelectorByte, BarcodeKind::Itf, b"12\x0034").unwrap();
        assert_eq!(cmd.len(), 4 + 5);
    }

    #[test]
    fn test_selector_bytes() {
        assert_eq!(BarcodeKind::UpcA.selector(), 0x00);
        assert_eq!(BarcodeKind::Jan13.selector(), 0x02);
        assert_eq!(BarcodeKind::Jan8.selector(), 0x03);
        assert_eq!(BarcodeKind::Code39.selector(), 0x04);
        assert_eq!(BarcodeKind::Itf.selector(), 0x05);
        assert_eq!(BarcodeKind::Codabar.selector(), 0x06);
    }

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_height(100), vec![0x1D, 0x68, 100]);
        assert_eq!(default_bar_height(), vec![0x1D, 0x68, 0x50]);
        assert_eq!(bar_size(3, 7), vec![0x1D, 0x77, 3, 7]);
        assert_eq!(default_bar_size(), vec![0x1D, 0x77, 0x02, 0x05]);
    }
}
