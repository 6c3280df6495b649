//! # StarPRNT Barcode Commands
//!
//! | Type | Command |
//! |------|---------|
//! | 1D barcodes | ESC b n1 n2 n3 n4 data RS |
//! | QR Code | ESC GS y S / ESC GS y D / ESC GS y P |
//! | PDF417 | ESC GS x S / ESC GS x D / ESC GS x P |
//!
//! StarPRNT has no MaxiCode command.
//!
//! ## QR Code Usage
//!
//! QR codes are generated in a multi-step process: configure (model, error
//! correction, cell size), send the data, print.
//!
//! ```
//! use thermal_printer::protocol::star::barcode::qr;
//! use thermal_printer::protocol::symbol::QrErrorLevel;
//!
//! let mut data = Vec::new();
//! data.extend(qr::set_model(2));
//! data.extend(qr::set_error_correction(QrErrorLevel::M));
//! data.extend(qr::set_cell_size(4));
//! data.extend(qr::set_data(b"https://example.com").unwrap());
//! data.extend(qr::print());
//! ```
//!
//! ## Reference
//!
//! StarPRNT Command Specifications Rev. 4.10, Sections 2.3.14-2.3.16.

use super::super::commands::{ESC, GS, RS};
use crate::error::{PrinterError, Result};

/// Two-byte little-endian length prefix shared by the 2D data commands.
fn data_len(kind: &str, data: &[u8]) -> Result<[u8; 2]> {
    let len = u16::try_from(data.len()).map_err(|_| {
        PrinterError::Symbol(format!(
            "{} payload of {} bytes exceeds the 65535-byte limit",
            kind,
            data.len()
        ))
    })?;
    Ok([len as u8, (len >> 8) as u8])
}

// ============================================================================
// 1D BARCODE COMMANDS (ESC b)
// ============================================================================

/// 1D Barcode command builders
pub mod barcode1d {
    use super::{ESC, RS};
    use crate::protocol::symbol::{BarcodeType, HriPosition, SymbolSettings};

    /// Default bar height in dots
    pub const DEFAULT_HEIGHT: u8 = 80;

    /// Default narrow module width in dots
    pub const DEFAULT_MODULE_WIDTH: u8 = 2;

    /// StarPRNT n1 barcode type code
    pub fn type_code(barcode_type: BarcodeType) -> u8 {
        match barcode_type {
            BarcodeType::UpcE => 48,
            BarcodeType::UpcA => 49,
            BarcodeType::Ean8 => 50,
            BarcodeType::Ean13 => 51,
            BarcodeType::Code39 => 52,
            BarcodeType::Itf => 53,
            BarcodeType::Code128 => 54,
            BarcodeType::Code93 => 55,
            BarcodeType::Codabar => 56, // NW-7
        }
    }

    /// Build the n2 parameter (HRI and line feed).
    ///
    /// n2 is a lookup value, not a bitfield:
    ///
    /// | n2 | Font   | Position | Line feed |
    /// |----|--------|----------|-----------|
    /// | 49 | ---    | None     | Execute   |
    /// | 50 | Font A | Under    | Execute   |
    ///
    /// StarPRNT only prints HRI under the bars, so every visible position
    /// maps to 50.
    fn build_n2(hri_pos: HriPosition) -> u8 {
        match hri_pos {
            HriPosition::None => 49,
            HriPosition::Above | HriPosition::Below | HriPosition::Both => 50,
        }
    }

    /// Mode byte n3 from the narrow module width in dots (2-4).
    fn build_n3(module_width: u8) -> u8 {
        48 + module_width.clamp(2, 4) - 1
    }

    /// # Print 1D Barcode (ESC b n1 n2 n3 n4 data RS)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | ESC b n1 n2 n3 n4 data RS |
    /// | Hex     | 1B 62 n1 n2 n3 n4 data 1E |
    ///
    /// - `n1`: Barcode type
    /// - `n2`: HRI options
    /// - `n3`: Mode (module width)
    /// - `n4`: Height in dots (1-255)
    ///
    /// ## Example
    ///
    /// ```
    /// use thermal_printer::protocol::star::barcode::barcode1d;
    /// use thermal_printer::protocol::symbol::{BarcodeType, SymbolSettings};
    ///
    /// let cmd = barcode1d::barcode(BarcodeType::Code39, b"TEST", &SymbolSettings::default());
    /// assert_eq!(&cmd[0..6], &[0x1B, b'b', 52, 50, 49, 80]);
    /// assert_eq!(*cmd.last().unwrap(), 0x1E);
    /// ```
    pub fn barcode(barcode_type: BarcodeType, data: &[u8], settings: &SymbolSettings) -> Vec<u8> {
        let n1 = type_code(barcode_type);
        let n2 = build_n2(settings.hri_position.unwrap_or_default());
        let n3 = build_n3(settings.width.unwrap_or(DEFAULT_MODULE_WIDTH));
        let n4 = settings.height.unwrap_or(DEFAULT_HEIGHT).max(1);

        let mut cmd = Vec::with_capacity(6 + data.len() + 1);
        cmd.extend_from_slice(&[ESC, b'b', n1, n2, n3, n4]);
        cmd.extend_from_slice(data);
        cmd.push(RS);
        cmd
    }
}

// ============================================================================
// QR CODE COMMANDS (ESC GS y)
// ============================================================================

/// QR Code command builders
pub mod qr {
    use super::{ESC, GS, data_len};
    use crate::error::Result;
    use crate::protocol::symbol::{QrErrorLevel, SymbolSettings};

    /// # Set QR Code Model (ESC GS y S 0 n)
    ///
    /// - `n = 1`: Model 1
    /// - `n = 2`: Model 2 (recommended)
    pub fn set_model(model: u8) -> Vec<u8> {
        vec![ESC, GS, b'y', b'S', b'0', model.clamp(1, 2)]
    }

    /// # Set QR Error Correction Level (ESC GS y S 1 n)
    ///
    /// | Level | n | Recovery |
    /// |-------|---|----------|
    /// | L | 0 | ~7% |
    /// | M | 1 | ~15% |
    /// | Q | 2 | ~25% |
    /// | H | 3 | ~30% |
    pub fn set_error_correction(level: QrErrorLevel) -> Vec<u8> {
        vec![ESC, GS, b'y', b'S', b'1', level as u8]
    }

    /// # Set QR Cell Size (ESC GS y S 2 n)
    ///
    /// - `n`: Cell size in dots (1-8)
    pub fn set_cell_size(size: u8) -> Vec<u8> {
        vec![ESC, GS, b'y', b'S', b'2', size.clamp(1, 8)]
    }

    /// # Set QR Code Data (ESC GS y D 1 m nL nH data)
    ///
    /// Uses AUTO mode (m = 0) so the printer picks the encoding.
    ///
    /// ## Errors
    ///
    /// Payloads longer than 65535 bytes return [`crate::PrinterError::Symbol`].
    pub fn set_data(data: &[u8]) -> Result<Vec<u8>> {
        let [nl, nh] = data_len("QR", data)?;
        let mut cmd = vec![ESC, GS, b'y', b'D', b'1', 0, nl, nh];
        cmd.extend_from_slice(data);
        Ok(cmd)
    }

    /// # Print QR Code (ESC GS y P)
    pub fn print() -> Vec<u8> {
        vec![ESC, GS, b'y', b'P']
    }

    /// Full QR sequence (defaults: model 2, level M, cell size 4).
    pub fn generate(data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        let mut cmd = Vec::new();
        cmd.extend(set_model(settings.model.unwrap_or(2)));
        cmd.extend(set_error_correction(settings.correction.unwrap_or_default()));
        cmd.extend(set_cell_size(settings.cell_size.unwrap_or(4)));
        cmd.extend(set_data(data)?);
        cmd.extend(print());
        Ok(cmd)
    }
}

// ============================================================================
// PDF417 COMMANDS (ESC GS x)
// ============================================================================

/// PDF417 barcode command builders
pub mod pdf417 {
    use super::{ESC, GS, data_len};
    use crate::error::Result;
    use crate::protocol::symbol::SymbolSettings;

    /// # Set PDF417 Size, Fixed Rows/Columns (ESC GS x S 0 1 p1 p2)
    ///
    /// - `rows`: 0 for auto, or 3-90
    /// - `columns`: 0 for auto, or 1-30
    pub fn set_size_fixed(rows: u8, columns: u8) -> Vec<u8> {
        let r = if rows == 0 { 0 } else { rows.clamp(3, 90) };
        let c = if columns == 0 { 0 } else { columns.clamp(1, 30) };
        vec![ESC, GS, b'x', b'S', b'0', 1, r, c]
    }

    /// # Set PDF417 ECC Level (ESC GS x S 1 n)
    ///
    /// - `n`: ECC level (0-8)
    pub fn set_ecc_level(level: u8) -> Vec<u8> {
        vec![ESC, GS, b'x', b'S', b'1', level.min(8)]
    }

    /// # Set PDF417 Module Width (ESC GS x S 2 n)
    pub fn set_module_width(width: u8) -> Vec<u8> {
        vec![ESC, GS, b'x', b'S', b'2', width.clamp(1, 10)]
    }

    /// # Set PDF417 Module Aspect Ratio (ESC GS x S 3 n)
    ///
    /// Module height = module width * n
    pub fn set_module_aspect(aspect: u8) -> Vec<u8> {
        vec![ESC, GS, b'x', b'S', b'3', aspect.clamp(1, 10)]
    }

    /// # Set PDF417 Data (ESC GS x D nL nH data)
    pub fn set_data(data: &[u8]) -> Result<Vec<u8>> {
        let [nl, nh] = data_len("PDF417", data)?;
        let mut cmd = vec![ESC, GS, b'x', b'D', nl, nh];
        cmd.extend_from_slice(data);
        Ok(cmd)
    }

    /// # Print PDF417 (ESC GS x P)
    pub fn print() -> Vec<u8> {
        vec![ESC, GS, b'x', b'P']
    }

    /// Full PDF417 sequence (defaults: auto size, ECC 1, width 2, aspect 3).
    pub fn generate(data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        let mut cmd = Vec::new();
        cmd.extend(set_size_fixed(
            settings.rows.unwrap_or(0),
            settings.columns.unwrap_or(0),
        ));
        cmd.extend(set_ecc_level(settings.ecc_level.unwrap_or(1)));
        cmd.extend(set_module_width(settings.width.unwrap_or(2)));
        cmd.extend(set_module_aspect(settings.row_height.unwrap_or(3)));
        cmd.extend(set_data(data)?);
        cmd.extend(print());
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::symbol::{BarcodeType, HriPosition, QrErrorLevel, SymbolSettings};

    #[test]
    fn test_code128_barcode() {
        let cmd = barcode1d::barcode(BarcodeType::Code128, b"ABC", &SymbolSettings::default());
        assert_eq!(cmd, vec![0x1B, b'b', 54, 50, 49, 80, b'A', b'B', b'C', 0x1E]);
    }

    #[test]
    fn test_barcode_without_hri() {
        let settings = SymbolSettings {
            hri_position: Some(HriPosition::None),
            height: Some(40),
            width: Some(4),
            ..Default::default()
        };
        let cmd = barcode1d::barcode(BarcodeType::Ean13, b"4126570807191", &settings);
        assert_eq!(&cmd[0..6], &[0x1B, b'b', 51, 49, 51, 40]);
    }

    #[test]
    fn test_barcode_height_never_zero() {
        let settings = SymbolSettings {
            height: Some(0),
            ..Default::default()
        };
        let cmd = barcode1d::barcode(BarcodeType::Itf, b"12", &settings);
        assert_eq!(cmd[5], 1);
    }

    #[test]
    fn test_qr_generate_defaults() {
        let cmd = qr::generate(b"Hi", &SymbolSettings::default()).unwrap();
        let mut expected = Vec::new();
        expected.extend([0x1B, 0x1D, b'y', b'S', b'0', 2]);
        expected.extend([0x1B, 0x1D, b'y', b'S', b'1', 1]);
        expected.extend([0x1B, 0x1D, b'y', b'S', b'2', 4]);
        expected.extend([0x1B, 0x1D, b'y', b'D', b'1', 0, 2, 0, b'H', b'i']);
        expected.extend([0x1B, 0x1D, b'y', b'P']);
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_qr_settings_applied() {
        let settings = SymbolSettings {
            correction: Some(QrErrorLevel::H),
            cell_size: Some(20),
            ..Default::default()
        };
        let cmd = qr::generate(b"x", &settings).unwrap();
        assert!(cmd.windows(6).any(|w| w == [0x1B, 0x1D, b'y', b'S', b'1', 3]));
        // Cell size clamps to 8
        assert!(cmd.windows(6).any(|w| w == [0x1B, 0x1D, b'y', b'S', b'2', 8]));
    }

    #[test]
    fn test_qr_data_length_little_endian() {
        let data = vec![b'A'; 300];
        let cmd = qr::set_data(&data).unwrap();
        // 300 = 0x012C
        assert_eq!(cmd[6], 0x2C);
        assert_eq!(cmd[7], 0x01);
    }

    #[test]
    fn test_qr_rejects_oversized_payload() {
        let data = vec![0u8; 70_000];
        assert!(matches!(qr::set_data(&data), Err(PrinterError::Symbol(_))));
    }

    #[test]
    fn test_pdf417_generate() {
        let cmd = pdf417::generate(b"PDF", &SymbolSettings::default()).unwrap();
        assert_eq!(&cmd[0..8], &[0x1B, 0x1D, b'x', b'S', b'0', 1, 0, 0]);
        assert!(cmd.windows(6).any(|w| w == [0x1B, 0x1D, b'x', b'D', 3, 0]));
        assert!(cmd.ends_with(&[0x1B, 0x1D, b'x', b'P']));
    }

    #[test]
    fn test_pdf417_size_clamps() {
        assert_eq!(pdf417::set_size_fixed(1, 50), vec![0x1B, 0x1D, b'x', b'S', b'0', 1, 3, 30]);
    }
}
