//! # Device Transport
//!
//! Writes a finished job to a printer device node (`/dev/usb/lp0`,
//! `/dev/ttyUSB0`, `/dev/rfcomm0`, ...) or any other writable path.
//!
//! ## TTY Configuration
//!
//! Serial and Bluetooth devices are TTYs and are switched to raw mode so
//! binary data is transmitted without modification:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL
//! - **No flow control**: IXON, IXOFF, IXANY (0x11/0x13 occur in raster data)
//! - **No output processing**: OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN off
//!
//! Non-TTY targets (USB line printer nodes, plain files) are written as is.
//!
//! ## Chunked Writes
//!
//! Data is written in 4096-byte chunks with a 2ms pause between them so
//! small printer buffers keep up.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use super::Transport;
use crate::error::{PrinterError, Result};

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Device Transport
///
/// ## Example
///
/// ```no_run
/// use thermal_printer::transport::{DeviceTransport, Transport};
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&[0x1B, 0x40])?;
/// # Ok::<(), thermal_printer::error::PrinterError>(())
/// ```
pub struct DeviceTransport<W: Write = File> {
    writer: W,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport<File> {
    /// Open a device for writing, switching TTYs to raw mode.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            PrinterError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_if_tty(&file)?;

        Ok(Self::from_writer(file))
    }
}

impl<W: Write> DeviceTransport<W> {
    /// Wrap an already open writer.
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        }
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for DeviceTransport<W> {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let mut chunks = data.chunks(self.chunk_size).peekable();
        while let Some(chunk) = chunks.next() {
            self.writer
                .write_all(chunk)
                .map_err(|e| PrinterError::Transport(format!("Write failed: {}", e)))?;

            if chunks.peek().is_some() && !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }

        self.writer
            .flush()
            .map_err(|e| PrinterError::Transport(format!("Flush failed: {}", e)))
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &File) -> Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } == 1 {
        configure_tty_raw(fd)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_if_tty(_file: &File) -> Result<()> {
    Ok(())
}

/// Put a TTY file descriptor into raw mode.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<()> {
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
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(PrinterError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the size of every write.
    #[derive(Default)]
    struct Recorder {
        writes: Vec<usize>,
        data: Vec<u8>,
        flushed: bool,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.len());
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_small_write_is_single_chunk() {
        let mut transport = DeviceTransport::from_writer(Recorder::default());
        transport.write_all(&[1, 2, 3]).unwrap();
        let recorder = transport.into_inner();
        assert_eq!(recorder.writes, vec![3]);
        assert!(recorder.flushed);
    }

    #[test]
    fn test_large_write_is_chunked() {
        let mut transport = DeviceTransport::from_writer(Recorder::default());
        transport.set_chunk_delay(Duration::ZERO);
        let data = vec![0xAA; CHUNK_SIZE * 2 + 10];
        transport.write_all(&data).unwrap();
        let recorder = transport.into_inner();
        assert_eq!(recorder.writes, vec![CHUNK_SIZE, CHUNK_SIZE, 10]);
        assert_eq!(recorder.data, data);
    }

    #[test]
    fn test_write_error_is_transport_error() {
        let mut transport = DeviceTransport::from_writer(Broken);
        let err = transport.write_all(&[1]).unwrap_err();
        assert!(matches!(err, PrinterError::Transport(_)));
    }

    #[test]
    fn test_open_missing_device() {
        let err = DeviceTransport::open("/definitely/not/a/printer").err().unwrap();
        assert!(matches!(err, PrinterError::Transport(_)));
    }

    #[test]
    fn test_open_plain_file() {
        let path = std::env::temp_dir().join(format!("thermal-printer-{}.bin", std::process::id()));
        std::fs::write(&path, b"").unwrap();
        let mut transport = DeviceTransport::open(&path).unwrap();
        transport.write_all(b"job").unwrap();
        drop(transport);
        assert_eq!(std::fs::read(&path).unwrap(), b"job");
        std::fs::remove_file(&path).unwrap();
    }
}
