//! Transport over any [`std::io::Write`].

use std::io::Write;

use super::Transport;
use crate::error::{PrinterError, Result};

/// Adapts a writer (file, pipe, socket, `Vec<u8>`) into a [`Transport`].
///
/// Each write is followed by a flush so bytes reach the sink before the
/// operation returns.
///
/// ```
/// use as289r2::transport::{Transport, WriterTransport};
///
/// let mut t = WriterTransport::new(Vec::new());
/// t.write(&[0x1B, 0x40]).unwrap();
/// assert_eq!(t.into_inner(), vec![0x1B, 0x40]);
/// ```
#[derive(Debug)]
pub struct WriterTransport<W: Write> {
    inner: W,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner
            .write_all(data)
            .map_err(|e| PrinterError::Transport(format!("Write failed: {}", e)))?;
        self.inner
            .flush()
            .map_err(|e| PrinterError::Transport(format!("Flush failed: {}", e)))
    }
}
