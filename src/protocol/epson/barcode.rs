//! # ESC/POS Barcode Commands
//!
//! | Type | Command |
//! |------|---------|
//! | 1D barcodes | GS H, GS f, GS h, GS w, GS k m n data |
//! | QR Code | GS ( k, cn = 49 |
//! | PDF417 | GS ( k, cn = 48 |
//! | MaxiCode | GS ( k, cn = 50 |
//!
//! ## 2D Function Blocks
//!
//! Every 2D command shares the `GS ( k pL pH cn fn [params]` frame, where
//! `pL pH` is the little-endian count of bytes following it. A symbol is
//! configured with one block per setting, the payload is stored with
//! `fn = 80`, then printed with `fn = 81`.

use super::super::commands::{GS, u16_le};
use crate::error::{PrinterError, Result};

/// `GS ( k pL pH cn fn params...`
fn function(cn: u8, fun: u8, params: &[u8]) -> Vec<u8> {
    // Parameters are at most a few bytes; payloads go through `store`.
    let [pl, ph] = u16_le(2 + params.len() as u16);
    let mut cmd = vec![GS, b'(', b'k', pl, ph, cn, fun];
    cmd.extend_from_slice(params);
    cmd
}

/// Store symbol data in the symbol save area (fn = 80, m = 48).
fn store(cn: u8, kind: &str, data: &[u8]) -> Result<Vec<u8>> {
    let len = data
        .len()
        .checked_add(3)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| {
            PrinterError::Symbol(format!(
                "{} payload of {} bytes exceeds the 65532-byte limit",
                kind,
                data.len()
            ))
        })?;
    let [pl, ph] = u16_le(len);
    let mut cmd = vec![GS, b'(', b'k', pl, ph, cn, 80, 48];
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// Print the stored symbol (fn = 81, m = 48).
fn print(cn: u8) -> Vec<u8> {
    function(cn, 81, &[48])
}

// ============================================================================
// 1D BARCODE COMMANDS (GS k)
// ============================================================================

/// 1D Barcode command builders
pub mod barcode1d {
    use super::GS;
    use crate::error::{PrinterError, Result};
    use crate::protocol::symbol::{BarcodeType, HriFont, HriPosition, SymbolSettings};

    /// Default bar height in dots
    pub const DEFAULT_HEIGHT: u8 = 162;

    /// Default module width in dots
    pub const DEFAULT_MODULE_WIDTH: u8 = 3;

    /// GS k function B symbology code `m`
    pub fn type_code(barcode_type: BarcodeType) -> u8 {
        match barcode_type {
            BarcodeType::UpcA => 65,
            BarcodeType::UpcE => 66,
            BarcodeType::Ean13 => 67,
            BarcodeType::Ean8 => 68,
            BarcodeType::Code39 => 69,
            BarcodeType::Itf => 70,
            BarcodeType::Codabar => 71,
            BarcodeType::Code93 => 72,
            BarcodeType::Code128 => 73,
        }
    }

    /// HRI print position (GS H n)
    pub fn hri_position(pos: HriPosition) -> Vec<u8> {
        let n = match pos {
            HriPosition::None => 0,
            HriPosition::Above => 1,
            HriPosition::Below => 2,
            HriPosition::Both => 3,
        };
        vec![GS, b'H', n]
    }

    /// HRI font (GS f n)
    pub fn hri_font(font: HriFont) -> Vec<u8> {
        vec![GS, b'f', font as u8]
    }

    /// Bar height in dots (GS h n, 1-255)
    pub fn height(dots: u8) -> Vec<u8> {
        vec![GS, b'h', dots.max(1)]
    }

    /// Module width in dots (GS w n, 2-6)
    pub fn module_width(dots: u8) -> Vec<u8> {
        vec![GS, b'w', dots.clamp(2, 6)]
    }

    /// # Print Barcode (GS k m n d1...dn)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS k m n d1...dn |
    /// | Hex     | 1D 6B m n d1...dn |
    ///
    /// Code128 payloads must start with a code set selector (`{A`, `{B` or
    /// `{C`); `{B` is prepended when the payload has none.
    ///
    /// ## Errors
    ///
    /// Payloads longer than 255 bytes return [`PrinterError::Symbol`].
    ///
    /// ## Example
    ///
    /// ```
    /// use thermal_printer::protocol::epson::barcode::barcode1d;
    /// use thermal_printer::protocol::symbol::{BarcodeType, SymbolSettings};
    ///
    /// let cmd = barcode1d::barcode(BarcodeType::Code128, b"42", &SymbolSettings::default()).unwrap();
    /// assert!(cmd.ends_with(&[0x1D, b'k', 73, 4, b'{', b'B', b'4', b'2']));
    /// ```
    pub fn barcode(
        barcode_type: BarcodeType,
        data: &[u8],
        settings: &SymbolSettings,
    ) -> Result<Vec<u8>> {
        let mut payload = Vec::with_capacity(data.len() + 2);
        if barcode_type == BarcodeType::Code128 && !data.starts_with(b"{") {
            payload.extend_from_slice(b"{B");
        }
        payload.extend_from_slice(data);

        let n = u8::try_from(payload.len()).map_err(|_| {
            PrinterError::Symbol(format!(
                "barcode payload of {} bytes exceeds the 255-byte limit",
                payload.len()
            ))
        })?;

        let mut cmd = Vec::new();
        cmd.extend(hri_position(settings.hri_position.unwrap_or_default()));
        cmd.extend(hri_font(settings.hri_font.unwrap_or_default()));
        cmd.extend(height(settings.height.unwrap_or(DEFAULT_HEIGHT)));
        cmd.extend(module_width(settings.width.unwrap_or(DEFAULT_MODULE_WIDTH)));
        cmd.extend_from_slice(&[GS, b'k', type_code(barcode_type), n]);
        cmd.extend(payload);
        Ok(cmd)
    }
}

// ============================================================================
// QR CODE COMMANDS (cn = 49)
// ============================================================================

/// QR Code command builders
pub mod qr {
    use super::{function, print, store};
    use crate::error::Result;
    use crate::protocol::symbol::{QrErrorLevel, SymbolSettings};

    const CN: u8 = 49;

    /// Select the model (fn 65): 49 = Model 1, 50 = Model 2
    pub fn set_model(model: u8) -> Vec<u8> {
        function(CN, 65, &[48 + model.clamp(1, 2), 0])
    }

    /// Module size in dots (fn 67, 1-16)
    pub fn set_cell_size(size: u8) -> Vec<u8> {
        function(CN, 67, &[size.clamp(1, 16)])
    }

    /// Error correction level (fn 69): 48 = L ... 51 = H
    pub fn set_error_correction(level: QrErrorLevel) -> Vec<u8> {
        function(CN, 69, &[48 + level as u8])
    }

    /// Full QR sequence (defaults: model 2, cell size 6, level M).
    ///
    /// ## Example
    ///
    /// ```
    /// use thermal_printer::protocol::epson::barcode::qr;
    /// use thermal_printer::protocol::symbol::SymbolSettings;
    ///
    /// let cmd = qr::generate(b"https://example.com", &SymbolSettings::default()).unwrap();
    /// assert!(cmd.ends_with(&[0x1D, b'(', b'k', 3, 0, 49, 81, 48]));
    /// ```
    pub fn generate(data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        let mut cmd = Vec::new();
        cmd.extend(set_model(settings.model.unwrap_or(2)));
        cmd.extend(set_cell_size(settings.cell_size.unwrap_or(6)));
        cmd.extend(set_error_correction(settings.correction.unwrap_or_default()));
        cmd.extend(store(CN, "QR", data)?);
        cmd.extend(print(CN));
        Ok(cmd)
    }
}

// ============================================================================
// PDF417 COMMANDS (cn = 48)
// ============================================================================

/// PDF417 command builders
pub mod pdf417 {
    use super::{function, print, store};
    use crate::error::Result;
    use crate::protocol::symbol::SymbolSettings;

    const CN: u8 = 48;

    /// Data columns (fn 65, 0 = auto, 1-30)
    pub fn set_columns(columns: u8) -> Vec<u8> {
        function(CN, 65, &[columns.min(30)])
    }

    /// Rows (fn 66, 0 = auto, 3-90)
    pub fn set_rows(rows: u8) -> Vec<u8> {
        let r = if rows == 0 { 0 } else { rows.clamp(3, 90) };
        function(CN, 66, &[r])
    }

    /// Module width in dots (fn 67, 2-8)
    pub fn set_module_width(width: u8) -> Vec<u8> {
        function(CN, 67, &[width.clamp(2, 8)])
    }

    /// Row height as a multiple of module width (fn 68, 2-8)
    pub fn set_row_height(height: u8) -> Vec<u8> {
        function(CN, 68, &[height.clamp(2, 8)])
    }

    /// Error correction level by level number (fn 69, m = 48, 0-8)
    pub fn set_ecc_level(level: u8) -> Vec<u8> {
        function(CN, 69, &[48, 48 + level.min(8)])
    }

    /// Standard or truncated symbol (fn 70)
    pub fn set_truncated(truncated: bool) -> Vec<u8> {
        function(CN, 70, &[truncated as u8])
    }

    /// Full PDF417 sequence (defaults: auto size, width 3, row height 3, ECC 1).
    pub fn generate(data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        let mut cmd = Vec::new();
        cmd.extend(set_columns(settings.columns.unwrap_or(0)));
        cmd.extend(set_rows(settings.rows.unwrap_or(0)));
        cmd.extend(set_module_width(settings.width.unwrap_or(3)));
        cmd.extend(set_row_height(settings.row_height.unwrap_or(3)));
        cmd.extend(set_ecc_level(settings.ecc_level.unwrap_or(1)));
        cmd.extend(set_truncated(settings.truncated.unwrap_or(false)));
        cmd.extend(store(CN, "PDF417", data)?);
        cmd.extend(print(CN));
        Ok(cmd)
    }
}

// ============================================================================
// MAXICODE COMMANDS (cn = 50)
// ============================================================================

/// MaxiCode command builders
pub mod maxicode {
    use super::{function, print, store};
    use crate::error::Result;
    use crate::protocol::symbol::SymbolSettings;

    const CN: u8 = 50;

    /// Mode (fn 65): 50-54 select modes 2-6
    pub fn set_mode(mode: u8) -> Vec<u8> {
        function(CN, 65, &[48 + mode.clamp(2, 6)])
    }

    /// Full MaxiCode sequence (default mode 2).
    pub fn generate(data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        let mut cmd = Vec::new();
        cmd.extend(set_mode(settings.mode.unwrap_or(2)));
        cmd.extend(store(CN, "MaxiCode", data)?);
        cmd.extend(print(CN));
        Ok(cmd)
    }
}
