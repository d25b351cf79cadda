//! # AS-289R2 Protocol Implementation
//!
//! Low-level command builders for the AS-289R2 thermal printer protocol.
//! Every function here is pure: it returns the bytes of one command and
//! never touches a transport. [`crate::printer::Printer`] wraps them into
//! operations that write to a [`crate::transport::Transport`].
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes, init, feeds, spacing
//! - [`text`]: Fonts, character size, script
//! - [`barcode`]: QR codes and 1D barcodes
//! - [`graphics`]: Bitmap images
//! - [`sjis`]: Shift-JIS text encoding
//! - [`variant`]: The two historical protocol framings
//!
//! ## Usage Example
//!
//! ```
//! use as289r2::protocol::{barcode, commands, text, ProtocolVariant};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::double_width_on());
//! data.extend(b"AS-289R2\r");
//! data.extend(text::double_width_off());
//! data.extend(barcode::qr_code(barcode::QrErrorLevel::M, b"hello").unwrap());
//! data.extend(commands::clear_buffer(ProtocolVariant::SelectorByte));
//! ```

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod sjis;
pub mod text;
pub mod variant;

pub use variant::ProtocolVariant;
