//! # Protocol Variants
//!
//! Two historical framings of the AS-289R2 protocol exist. They differ in
//! the clear-buffer control byte and in how barcode data is delimited:
//!
//! | Variant | Clear buffer | Barcode framing |
//! |---------|--------------|-----------------|
//! | [`SelectorByte`](ProtocolVariant::SelectorByte) | `EM` (0x19) | `GS k m (m & 0x0F) data` |
//! | [`NulTerminated`](ProtocolVariant::NulTerminated) | `CAN` (0x18) | `GS k m data NUL` |
//!
//! Sending one firmware the other framing corrupts the print job. Neither
//! is documented as authoritative for current hardware, so there is no
//! default: callers choose explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::commands::{CAN, EM};

/// Framing selected for the target firmware revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolVariant {
    /// Framing of the mbed OS driver release 1.1.0 (January 2020):
    /// clear buffer is `EM`, barcodes carry a derived selector byte and no
    /// terminator.
    SelectorByte,
    /// Alternate framing: clear buffer is `CAN`, barcode data is followed
    /// by a NUL terminator.
    NulTerminated,
}

impl ProtocolVariant {
    /// All variants, for CLI listings
    pub const ALL: [ProtocolVariant; 2] =
        [ProtocolVariant::SelectorByte, ProtocolVariant::NulTerminated];

    /// Control byte that clears the image buffer
    #[inline]
    pub const fn clear_buffer_byte(self) -> u8 {
        match self {
            ProtocolVariant::SelectorByte => EM,
            ProtocolVariant::NulTerminated => CAN,
        }
    }

    /// Stable name used on the command line and in job files
    pub const fn name(self) -> &'static str {
        match self {
            ProtocolVariant::SelectorByte => "selector-byte",
            ProtocolVariant::NulTerminated => "nul-terminated",
        }
    }
}

impl fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProtocolVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProtocolVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown protocol variant '{}' (expected selector-byte or nul-terminated)",
                    s
                )
            })
    }
}
