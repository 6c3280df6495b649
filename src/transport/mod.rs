//! # Printer Transport Layer
//!
//! Hands a finished job to something that delivers it. The engine never
//! retries; a failed write is reported and the job buffer is kept.
//!
//! ## Available Transports
//!
//! - [`DeviceTransport`]: device node or file, chunked, raw TTY mode
//! - `Vec<u8>`: collects the bytes in memory

pub mod device;

pub use device::DeviceTransport;

use crate::error::Result;

/// Destination for job bytes.
pub trait Transport {
    fn write_all(&mut self, data: &[u8]) -> Result<()>;
}

impl Transport for Vec<u8> {
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}
