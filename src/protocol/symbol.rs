//! # Symbol Requests
//!
//! Dialect-neutral description of a barcode or 2D symbol request. The engine
//! forwards `{kind, data, settings}` verbatim; each dialect applies its own
//! defaults and clamps when it encodes the command.
//!
//! Settings deserialize from JSON with every field optional:
//!
//! ```
//! use thermal_printer::protocol::symbol::{SymbolSettings, QrErrorLevel};
//!
//! let settings: SymbolSettings =
//!     serde_json::from_str(r#"{"cell_size": 6, "correction": "h"}"#).unwrap();
//! assert_eq!(settings.cell_size, Some(6));
//! assert_eq!(settings.correction, Some(QrErrorLevel::H));
//! ```

use serde::{Deserialize, Serialize};

/// The family of symbol a request encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Qr,
    Pdf417,
    Code128,
    MaxiCode,
    /// Generic 1D barcode; the concrete symbology comes from
    /// [`SymbolSettings::barcode_type`].
    Barcode,
}

impl SymbolKind {
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Qr => "QR code",
            SymbolKind::Pdf417 => "PDF417",
            SymbolKind::Code128 => "Code128",
            SymbolKind::MaxiCode => "MaxiCode",
            SymbolKind::Barcode => "Barcode",
        }
    }
}

/// 1D barcode symbologies understood by both dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeType {
    UpcA,
    UpcE,
    #[default]
    Ean13,
    Ean8,
    Code39,
    Itf,
    Codabar,
    Code93,
    Code128,
}

/// HRI (Human Readable Interpretation) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HriPosition {
    /// No HRI text printed
    None,
    /// HRI above barcode
    Above,
    /// HRI below barcode (default)
    #[default]
    Below,
    /// HRI both above and below
    Both,
}

/// HRI font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HriFont {
    #[default]
    #[serde(rename = "A", alias = "a")]
    A,
    #[serde(rename = "B", alias = "b")]
    B,
}

/// QR Code error correction level
///
/// | Level | Recovery |
/// |-------|----------|
/// | L | ~7% |
/// | M | ~15% (default) |
/// | Q | ~25% |
/// | H | ~30% |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QrErrorLevel {
    #[serde(rename = "L", alias = "l")]
    L = 0,
    #[default]
    #[serde(rename = "M", alias = "m")]
    M = 1,
    #[serde(rename = "Q", alias = "q")]
    Q = 2,
    #[serde(rename = "H", alias = "h")]
    H = 3,
}

/// Options for a symbol request.
///
/// Unset fields fall back to the dialect's defaults. Fields that do not apply
/// to the requested [`SymbolKind`] are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolSettings {
    /// Symbology for generic barcodes.
    pub barcode_type: Option<BarcodeType>,
    /// Bar height in dots (1D barcodes).
    pub height: Option<u8>,
    /// Module width in dots (1D barcodes and PDF417).
    pub width: Option<u8>,
    pub hri_position: Option<HriPosition>,
    pub hri_font: Option<HriFont>,
    /// QR module size in dots.
    pub cell_size: Option<u8>,
    /// QR error correction level.
    pub correction: Option<QrErrorLevel>,
    /// QR model (1 or 2).
    pub model: Option<u8>,
    /// PDF417 data columns (0 = automatic).
    pub columns: Option<u8>,
    /// PDF417 rows (0 = automatic).
    pub rows: Option<u8>,
    /// PDF417 row height as a multiple of the module width.
    pub row_height: Option<u8>,
    /// PDF417 error correction level (0-8).
    pub ecc_level: Option<u8>,
    /// Truncated PDF417 (right row indicators omitted).
    pub truncated: Option<bool>,
    /// MaxiCode mode (2-6).
    pub mode: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_is_empty() {
        let settings: SymbolSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, SymbolSettings::default());
    }

    #[test]
    fn test_barcode_settings_deserialize() {
        let settings: SymbolSettings = serde_json::from_str(
            r#"{"barcode_type": "code39", "height": 80, "hri_position": "none", "hri_font": "B"}"#,
        )
        .unwrap();
        assert_eq!(settings.barcode_type, Some(BarcodeType::Code39));
        assert_eq!(settings.height, Some(80));
        assert_eq!(settings.hri_position, Some(HriPosition::None));
        assert_eq!(settings.hri_font, Some(HriFont::B));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SymbolKind::MaxiCode.name(), "MaxiCode");
        assert_eq!(SymbolKind::Qr.name(), "QR code");
    }
}
