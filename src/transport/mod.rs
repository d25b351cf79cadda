//! # Printer Transport Layer
//!
//! This module provides the byte sinks the encoder writes to.
//!
//! The encoder only depends on the [`Transport`] trait: accept a slice of
//! bytes and transmit it in order, without reordering or dropping bytes.
//!
//! ## Available Transports
//!
//! - [`serial`]: TTY serial device configured for raw 8N1 at a given baud rate
//! - [`writer`]: Any [`std::io::Write`] (files, pipes, sockets)
//! - [`recording`]: In-memory recorder with failure injection, for tests and dry runs

pub mod recording;
pub mod serial;
pub mod writer;

pub use recording::RecordingTransport;
pub use serial::SerialTransport;
pub use writer::WriterTransport;

use crate::error::Result;

/// Ordered, write-only byte sink.
///
/// Implementations must transmit every byte of `data` in order before
/// returning `Ok`. A failure is reported as
/// [`PrinterError::Transport`](crate::error::PrinterError::Transport) and
/// may leave a prefix of `data` already on the wire.
pub trait Transport {
    /// Transmit `data` in order.
    fn write(&mut self, data: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }
}
