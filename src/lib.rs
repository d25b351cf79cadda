//! # as289r2 - AS-289R2 Thermal Printer Encoder
//!
//! Drives the NADA Electronics AS-289R2 thermal printer shield over a serial
//! link by encoding typed operations into its binary control-code protocol.
//!
//! - **Protocol implementation**: pure command builders, one per command
//! - **Encoder**: [`Printer`], which validates parameters and writes each
//!   command to a [`Transport`] in order
//! - **Transport**: raw serial TTY, any `io::Write`, or an in-memory recorder
//! - **Rendering**: image scaling and dithering for bitmap printing
//! - **Jobs**: JSON operation lists replayed through the encoder
//!
//! ## Quick Start
//!
//! ```no_run
//! use as289r2::{
//!     printer::Printer,
//!     protocol::{ProtocolVariant, barcode::QrErrorLevel},
//!     transport::SerialTransport,
//! };
//!
//! let transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
//! let mut printer = Printer::connect(transport, ProtocolVariant::SelectorByte)?;
//!
//! printer.set_double_size_width()?;
//! printer.print_text("AS-289R2\r")?;
//! printer.clear_double_size_width()?;
//! printer.print_qr_code(QrErrorLevel::M, b"hello")?;
//! printer.put_line_feed(3)?;
//!
//! # Ok::<(), as289r2::error::PrinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command builders and protocol variants |
//! | [`printer`] | Encoder and printer configuration |
//! | [`transport`] | Byte sinks |
//! | [`render`] | Bitmap preparation |
//! | [`job`] | JSON print jobs |
//! | [`error`] | Error types |
//!
//! ## Protocol Variants
//!
//! Two firmware framings differ in the clear-buffer byte and in barcode
//! delimiting. See [`protocol::variant`]; the choice is always explicit.

pub mod error;
pub mod job;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::PrinterError;
pub use printer::{Printer, PrinterConfig};
pub use protocol::ProtocolVariant;
pub use transport::{SerialTransport, Transport};
