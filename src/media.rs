//! # Media Pipeline
//!
//! Turns encoded images into raster image commands, and symbol requests
//! into symbol commands, through the active dialect.
//!
//! Image decoding sits behind [`ImageDecoder`] so callers can plug in their
//! own; [`PngDecoder`] (backed by the `image` crate) is the default.

use std::path::Path;
use std::sync::Arc;

use image::ImageFormat;

use crate::dialect::Dialect;
use crate::error::{PrinterError, Result};
use crate::protocol::graphics::Bitmap;
use crate::protocol::symbol::{SymbolKind, SymbolSettings};

/// File suffixes accepted by path-based image printing.
pub const IMAGE_SUFFIXES: &[&str] = &[".png"];

/// Decodes encoded image bytes into an RGBA8 [`Bitmap`].
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap>;
}

/// PNG decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| PrinterError::Decode(format!("Failed to decode image: {}", e)))?;
        let rgba = image.to_rgba8();
        Ok(Bitmap {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }
}

/// Whether `path` names a supported image file (suffix, case-insensitive).
///
/// ```
/// use thermal_printer::media::is_supported_image_path;
///
/// assert!(is_supported_image_path("logo.PNG".as_ref()));
/// assert!(!is_supported_image_path("photo.jpg".as_ref()));
/// ```
pub fn is_supported_image_path(path: &Path) -> bool {
    let name = path.to_string_lossy().to_ascii_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Read an image file, rejecting unsupported suffixes before touching disk.
pub async fn read_image(path: &Path) -> Result<Vec<u8>> {
    if !is_supported_image_path(path) {
        return Err(PrinterError::UnsupportedFormat(path.display().to_string()));
    }
    Ok(tokio::fs::read(path).await?)
}

/// Decode `bytes` on the blocking thread pool.
pub async fn decode_image(decoder: Arc<dyn ImageDecoder>, bytes: Vec<u8>) -> Result<Bitmap> {
    tokio::task::spawn_blocking(move || decoder.decode(&bytes))
        .await
        .map_err(|e| PrinterError::Decode(format!("Decode task failed: {}", e)))?
}

/// Decode `bytes` and build the dialect's raster image command.
pub async fn raster_command(
    dialect: &dyn Dialect,
    decoder: Arc<dyn ImageDecoder>,
    bytes: Vec<u8>,
) -> Result<Vec<u8>> {
    let bitmap = decode_image(decoder, bytes).await?;
    dialect.raster_image(&bitmap)
}

/// Symbol command; `data` and `settings` are forwarded untouched.
pub fn symbol_command(
    dialect: &dyn Dialect,
    kind: SymbolKind,
    data: &str,
    settings: &SymbolSettings,
) -> Result<Vec<u8>> {
    dialect.symbol(kind, data.as_bytes(), settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::EpsonDialect;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_suffix_check() {
        assert!(is_supported_image_path(Path::new("/tmp/logo.png")));
        assert!(is_supported_image_path(Path::new("LOGO.Png")));
        assert!(!is_supported_image_path(Path::new("photo.jpg")));
        assert!(!is_supported_image_path(Path::new("png")));
    }

    #[test]
    fn test_png_decoder() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let bitmap = PngDecoder.decode(&png(&img)).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (3, 2));
        assert_eq!(bitmap.pixels.len(), 3 * 2 * 4);
        assert!(bitmap.is_dark(0, 0));
        assert!(!bitmap.is_dark(1, 0));
    }

    #[test]
    fn test_decode_failure() {
        let err = PngDecoder.decode(b"not a png").unwrap_err();
        assert!(matches!(err, PrinterError::Decode(_)));
    }

    #[tokio::test]
    async fn test_raster_command_epson() {
        let img = RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 255]));
        let cmd = raster_command(&EpsonDialect, Arc::new(PngDecoder), png(&img))
            .await
            .unwrap();
        assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0x00, 1, 0, 1, 0, 0xFF]);
    }

    #[tokio::test]
    async fn test_read_image_rejects_before_io() {
        let err = read_image(Path::new("/definitely/missing/photo.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, PrinterError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_read_image_missing_png_is_io() {
        let err = read_image(Path::new("/definitely/missing/logo.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, PrinterError::Io(_)));
    }
}
