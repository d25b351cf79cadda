//! # Serial TTY Transport
//!
//! This module drives the AS-289R2 over a serial device such as
//! `/dev/ttyUSB0` or `/dev/serial0` (the printer shield's TX line wired to
//! a UART).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data is transmitted without
//! modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation, which
//!   would corrupt the `CR` line-feed command)
//! - **8-bit characters**: CS8 (8 data bits, no parity, 1 stop bit)
//! - **Non-canonical mode**: Disable ICANON
//! - **Baud rate**: 9600 by default, the shield's factory setting
//!
//! ## Chunked Writes
//!
//! Bitmap payloads can be tens of kilobytes. Large writes are split into
//! chunks, with an optional delay between them for slow links
//! (`--chunk-size` and `--chunk-delay-ms` on the command line).

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use super::Transport;
use crate::error::{PrinterError, Result};

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default baud rate of the AS-289R2 shield
pub const DEFAULT_BAUD: u32 = 9600;

/// Default chunk size for writes (bytes)
pub const CHUNK_SIZE: usize = 1024;

/// Baud rates accepted by [`SerialTransport::open`]
pub const SUPPORTED_BAUD_RATES: [u32; 8] = [1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200];

/// # Serial Printer Transport
///
/// ```no_run
/// use as289r2::transport::{SerialTransport, Transport};
/// use as289r2::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
/// transport.write(&commands::init())?;
///
/// # Ok::<(), as289r2::error::PrinterError>(())
/// ```
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a serial device and configure it for raw output at `baud`.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - `baud` is not one of [`SUPPORTED_BAUD_RATES`]
    /// - The device doesn't exist or permission is denied (dialout group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self> {
        let path = device.as_ref();
        let speed = baud_to_speed(baud)?;

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            PrinterError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), speed)?;
        debug!(device = %path.display(), baud, "opened serial transport");

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::ZERO,
        })
    }

    /// Set the chunk size for large writes. Default is 1024 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is none.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        write_chunked(&mut self.file, data, self.chunk_size, self.chunk_delay)
    }
}

/// Write `data` in chunks of at most `chunk_size` bytes, sleeping `delay`
/// between chunks, then flush.
fn write_chunked<W: Write>(
    sink: &mut W,
    data: &[u8],
    chunk_size: usize,
    delay: Duration,
) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    let mut chunks = data.chunks(chunk_size.max(1)).peekable();
    while let Some(chunk) = chunks.next() {
        sink.write_all(chunk)
            .map_err(|e| PrinterError::Transport(format!("Write failed: {}", e)))?;
        trace!(len = chunk.len(), "wrote chunk");

        if chunks.peek().is_some() && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    sink.flush()
        .map_err(|e| PrinterError::Transport(format!("Flush failed: {}", e)))
}

/// Map a numeric baud rate to the termios speed constant.
fn baud_to_speed(baud: u32) -> Result<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        other => {
            return Err(PrinterError::ContractViolation(format!(
                "unsupported baud rate {} (expected one of {:?})",
                other, SUPPORTED_BAUD_RATES
            )));
        }
    };
    Ok(speed)
}

/// Configure a file descriptor for raw 8N1 output at `speed`.
///
/// IXON/IXOFF/IXANY are cleared because 0x11 and 0x13 appear in bitmap
/// payloads.
fn configure_tty_raw(fd: i32, speed: libc::speed_t) -> Result<()> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // 8 data bits, no parity, one stop bit
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert_eq!(DEFAULT_DEVICE, "/dev/ttyUSB0");
        assert_eq!(DEFAULT_BAUD, 9600);
    }

    #[test]
    fn test_supported_baud_rates_map() {
        for baud in SUPPORTED_BAUD_RATES {
            assert!(baud_to_speed(baud).is_ok(), "{} should be supported", baud);
        }
        assert_eq!(baud_to_speed(9600).unwrap(), libc::B9600);
    }

    #[test]
    fn test_unsupported_baud_rejected() {
        assert!(matches!(
            baud_to_speed(12345),
            Err(PrinterError::ContractViolation(_))
        ));
    }

    /// Records the size of each `write` call
    #[derive(Default)]
    struct ChunkLog {
        sizes: Vec<usize>,
        flushes: usize,
    }

    impl Write for ChunkLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.sizes.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_chunked_splits_payload() {
        let mut log = ChunkLog::default();
        write_chunked(&mut log, &[0u8; 2500], CHUNK_SIZE, Duration::ZERO).unwrap();
        assert_eq!(log.sizes, vec![1024, 1024, 452]);
        assert_eq!(log.flushes, 1);
    }

    #[test]
    fn test_write_chunked_delays_between_chunks() {
        let mut log = ChunkLog::default();
        let delay = Duration::from_millis(20);
        let start = std::time::Instant::now();
        write_chunked(&mut log, &[0u8; 30], 10, delay).unwrap();
        assert_eq!(log.sizes, vec![10, 10, 10]);
        // Two gaps between three chunks, none after the last
        assert!(start.elapsed() >= delay * 2);
    }

    #[test]
    fn test_write_chunked_empty_is_noop() {
        let mut log = ChunkLog::default();
        write_chunked(&mut log, &[], 0, Duration::ZERO).unwrap();
        assert!(log.sizes.is_empty());
        assert_eq!(log.flushes, 0);
    }

    #[test]
    fn test_open_missing_device() {
        let result = SerialTransport::open("/dev/does-not-exist-as289r2", 9600);
        assert!(matches!(result, Err(PrinterError::Transport(_))));
    }

    // Writing requires an attached printer; see the `as289r2` CLI for manual checks.
}
