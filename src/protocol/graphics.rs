//! # Raster Graphics Commands
//!
//! Converts decoded bitmaps into 1-bit raster data and wraps it in each
//! dialect's raster image command.
//!
//! ## Bit Packing
//!
//! Raster data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! ```
//!
//! Rows are padded to a whole number of bytes.

use super::commands::{ESC, GS, u16_le};
use crate::error::{PrinterError, Result};

/// A decoded bitmap: RGBA8 pixels, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Whether the pixel at (x, y) prints as a black dot.
    ///
    /// Transparent pixels (alpha <= 126) are paper. Opaque pixels print when
    /// the mean of R, G and B is below 128.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        match self.pixels.get(idx..idx + 4) {
            Some([r, g, b, a]) => {
                let mean = (*r as u32 + *g as u32 + *b as u32) / 3;
                *a > 126 && mean < 128
            }
            _ => false,
        }
    }

    /// Width of one packed raster row in bytes.
    #[inline]
    pub fn width_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Pack the bitmap into 1-bit raster rows.
    ///
    /// ## Example
    ///
    /// ```
    /// use thermal_printer::protocol::graphics::Bitmap;
    ///
    /// // 2x1 image: black pixel, white pixel
    /// let bitmap = Bitmap {
    ///     width: 2,
    ///     height: 1,
    ///     pixels: vec![0, 0, 0, 255, 255, 255, 255, 255],
    /// };
    /// assert_eq!(bitmap.to_raster(), vec![0b1000_0000]);
    /// ```
    pub fn to_raster(&self) -> Vec<u8> {
        let width_bytes = self.width_bytes();
        let mut data = vec![0u8; width_bytes * self.height as usize];
        for y in 0..self.height {
            let row = y as usize * width_bytes;
            for x in 0..self.width {
                if self.is_dark(x, y) {
                    data[row + x as usize / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        data
    }

    /// Raster dimensions as (width_bytes, height) in the u16 range both
    /// dialects encode.
    fn raster_dims(&self) -> Result<(u16, u16)> {
        let width_bytes = u16::try_from(self.width_bytes());
        let height = u16::try_from(self.height);
        match (width_bytes, height) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(PrinterError::Image(format!(
                "{}x{} bitmap exceeds raster command limits",
                self.width, self.height
            ))),
        }
    }
}

// ============================================================================
// STAR: RASTER MODE GRAPHICS (ESC GS S)
// ============================================================================

/// # Star Raster Graphics (ESC GS S m xL xH yL yH n d1...dk)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS S m xL xH yL yH n d1...dk |
/// | Hex     | 1B 1D 53 m xL xH yL yH n d1...dk |
///
/// - `m`: Mode (1 = monochrome)
/// - `xL, xH`: Width in bytes, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `n`: Color (0 = black)
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::graphics;
///
/// let data = vec![0xAA; 72 * 100];
/// let cmd = graphics::star_raster(72, 100, &data);
/// assert_eq!(&cmd[0..9], &[0x1B, 0x1D, 0x53, 1, 72, 0, 100, 0, 0]);
/// ```
pub fn star_raster(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes as usize * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(9 + data.len());
    cmd.extend_from_slice(&[ESC, GS, b'S', 1, xl, xh, yl, yh, 0]);
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// EPSON: RASTER BIT IMAGE (GS v 0)
// ============================================================================

/// # Epson Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// - `m`: Scaling mode (0 = normal density)
/// - `xL, xH`: Width in bytes, little-endian
/// - `yL, yH`: Height in dots, little-endian
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::graphics;
///
/// let cmd = graphics::epson_raster(1, 2, &[0xFF, 0x00]);
/// assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0, 1, 0, 2, 0, 0xFF, 0x00]);
/// ```
pub fn epson_raster(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {}, got {}",
        width_bytes as usize * height as usize,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.extend_from_slice(&[GS, b'v', b'0', 0, xl, xh, yl, yh]);
    cmd.extend_from_slice(data);
    cmd
}

/// Pack a bitmap and wrap it in the Star raster command.
pub fn star_raster_image(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let (width_bytes, height) = bitmap.raster_dims()?;
    Ok(star_raster(width_bytes, height, &bitmap.to_raster()))
}

/// Pack a bitmap and wrap it in the Epson raster command.
pub fn epson_raster_image(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let (width_bytes, height) = bitmap.raster_dims()?;
    Ok(epson_raster(width_bytes, height, &bitmap.to_raster()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Bitmap {
        Bitmap {
            width,
            height,
            pixels: rgba.repeat((width * height) as usize),
        }
    }

    #[test]
    fn test_black_pixels_pack_msb_first() {
        let bitmap = solid(10, 1, [0, 0, 0, 255]);
        // 10 dots -> 2 bytes, last 6 bits of the second byte are padding
        assert_eq!(bitmap.to_raster(), vec![0xFF, 0xC0]);
    }

    #[test]
    fn test_transparent_pixels_are_paper() {
        let bitmap = solid(8, 2, [0, 0, 0, 0]);
        assert_eq!(bitmap.to_raster(), vec![0x00, 0x00]);
    }

    #[test]
    fn test_light_pixels_are_paper() {
        let bitmap = solid(8, 1, [200, 200, 200, 255]);
        assert_eq!(bitmap.to_raster(), vec![0x00]);
    }

    #[test]
    fn test_star_raster_header() {
        let data = vec![0xFF; 72 * 100];
        let cmd = star_raster(72, 100, &data);
        assert_eq!(&cmd[0..9], &[0x1B, 0x1D, 0x53, 1, 72, 0, 100, 0, 0]);
        assert_eq!(cmd.len(), 9 + 72 * 100);
    }

    #[test]
    fn test_star_raster_large_height() {
        let data = vec![0x00; 500];
        let cmd = star_raster(1, 500, &data);
        // 500 = 0x01F4 -> [0xF4, 0x01] in little-endian
        assert_eq!(cmd[6], 0xF4);
        assert_eq!(cmd[7], 0x01);
    }

    #[test]
    fn test_epson_raster_preserves_data() {
        let data: Vec<u8> = (0..48u8).collect();
        let cmd = epson_raster(4, 12, &data);
        assert_eq!(&cmd[0..8], &[0x1D, 0x76, 0x30, 0, 4, 0, 12, 0]);
        assert_eq!(&cmd[8..], &data[..]);
    }

    #[test]
    fn test_raster_image_from_bitmap() {
        let bitmap = solid(16, 2, [0, 0, 0, 255]);
        let cmd = epson_raster_image(&bitmap).unwrap();
        assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0, 2, 0, 2, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_raster_image_rejects_oversized_height() {
        let bitmap = Bitmap {
            width: 1,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert!(matches!(
            star_raster_image(&bitmap),
            Err(PrinterError::Image(_))
        ));
    }
}
