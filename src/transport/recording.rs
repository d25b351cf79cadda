//! In-memory transport that records every write call.
//!
//! Used by the test suite to check exact byte sequences and write
//! boundaries, and by the CLI's `--dry-run` mode. A failure can be
//! injected on the n-th write to exercise error propagation.

use super::Transport;
use crate::error::{PrinterError, Result};

/// Records each `write` call as a separate chunk.
#[derive(Debug, Default, Clone)]
pub struct RecordingTransport {
    writes: Vec<Vec<u8>>,
    attempts: usize,
    fail_on: Option<usize>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the write with the given zero-based attempt index.
    ///
    /// The failing write is not recorded. Later writes succeed again.
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Self::default()
        }
    }

    /// Successful writes, one entry per call
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Number of write calls made, including the failed one
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// All successfully written bytes, concatenated in order
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Drop recorded writes, keeping the failure setting
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Transport for RecordingTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let attempt = self.attempts;
        self.attempts += 1;

        if self.fail_on == Some(attempt) {
            return Err(PrinterError::Transport(format!(
                "injected failure on write {}",
                attempt
            )));
        }

        self.writes.push(data.to_vec());
        Ok(())
    }
}
