//! # Printer Dialects
//!
//! A [`Dialect`] is one manufacturer's command vocabulary. The engine only
//! ever asks a dialect for bytes; it never branches on which printer it is
//! talking to, so adding a manufacturer means adding one `Dialect` impl.
//!
//! | Dialect | Protocol | Module |
//! |---------|----------|--------|
//! | [`EpsonDialect`] | ESC/POS | [`crate::protocol::epson`] |
//! | [`StarDialect`] | StarPRNT | [`crate::protocol::star`] |
//!
//! ## Example
//!
//! ```
//! use thermal_printer::dialect::{Command, Dialect, EpsonDialect, StarDialect};
//!
//! assert_eq!(EpsonDialect.command(Command::Cut).unwrap(), vec![0x1D, 0x56, 0x00]);
//! assert_eq!(StarDialect.command(Command::Cut).unwrap(), vec![0x1B, 0x64, 0x02]);
//! ```

use std::fmt;

use crate::error::{PrinterError, Result};
use crate::protocol::graphics::{self, Bitmap};
use crate::protocol::symbol::{BarcodeType, SymbolKind, SymbolSettings};
use crate::protocol::text::{Alignment, Font, TextSize};
use crate::protocol::{codepage, commands, epson, star};

/// Fixed commands every dialect is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cut,
    PartialCut,
    BoldOn,
    BoldOff,
    UnderlineOn,
    UnderlineThickOn,
    UnderlineOff,
    InvertOn,
    InvertOff,
    UpsideDownOn,
    UpsideDownOff,
    FontA,
    FontB,
    TextNormal,
    TextDoubleHeight,
    TextDoubleWidth,
    TextQuadArea,
    AlignLeft,
    AlignCenter,
    AlignRight,
    LineFeed,
    VerticalTab,
    HardwareInit,
    Beep,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Cut => "Cut",
            Command::PartialCut => "Partial cut",
            Command::BoldOn => "Bold on",
            Command::BoldOff => "Bold off",
            Command::UnderlineOn => "Underline on",
            Command::UnderlineThickOn => "Thick underline on",
            Command::UnderlineOff => "Underline off",
            Command::InvertOn => "Invert on",
            Command::InvertOff => "Invert off",
            Command::UpsideDownOn => "Upside down on",
            Command::UpsideDownOff => "Upside down off",
            Command::FontA => "Font A",
            Command::FontB => "Font B",
            Command::TextNormal => "Normal text size",
            Command::TextDoubleHeight => "Double height text",
            Command::TextDoubleWidth => "Double width text",
            Command::TextQuadArea => "Quad area text",
            Command::AlignLeft => "Align left",
            Command::AlignCenter => "Align center",
            Command::AlignRight => "Align right",
            Command::LineFeed => "Line feed",
            Command::VerticalTab => "Vertical tab",
            Command::HardwareInit => "Hardware init",
            Command::Beep => "Beep",
        }
    }

    /// Bold toggle for a flag.
    pub fn bold(enabled: bool) -> Self {
        if enabled { Command::BoldOn } else { Command::BoldOff }
    }

    /// Alignment command for an [`Alignment`].
    pub fn align(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => Command::AlignLeft,
            Alignment::Center => Command::AlignCenter,
            Alignment::Right => Command::AlignRight,
        }
    }
}

/// One manufacturer's command table.
///
/// Symbol payloads are passed through unvalidated; a dialect reports only
/// what it cannot encode (length fields, missing capabilities).
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Manufacturer name, used in error messages.
    fn name(&self) -> &'static str;

    /// Bytes for a fixed command, or `UnsupportedCommand`.
    fn command(&self, cmd: Command) -> Result<Vec<u8>>;

    /// Cash drawer kick code(s), in the order they must be sent.
    fn cash_drawer_kick(&self) -> Vec<Vec<u8>>;

    /// Select-code-page command for a named code page.
    fn code_page(&self, name: &str) -> Option<Vec<u8>>;

    /// Names accepted by [`Dialect::code_page`].
    fn code_pages(&self) -> Vec<&'static str>;

    /// Custom character size; expansion steps 0-7 (1x-8x).
    fn text_size(&self, height: u8, width: u8) -> Result<Vec<u8>>;

    /// Barcode or 2D symbol command.
    fn symbol(&self, kind: SymbolKind, data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>>;

    /// Raster image command for a decoded bitmap.
    fn raster_image(&self, bitmap: &Bitmap) -> Result<Vec<u8>>;

    /// `UnsupportedCommand` error for this dialect.
    fn unsupported(&self, command: &'static str) -> PrinterError {
        PrinterError::UnsupportedCommand {
            dialect: self.name(),
            command,
        }
    }
}

// ============================================================================
// EPSON
// ============================================================================

/// Epson ESC/POS
#[derive(Debug, Clone, Copy, Default)]
pub struct EpsonDialect;

impl Dialect for EpsonDialect {
    fn name(&self) -> &'static str {
        "Epson"
    }

    fn command(&self, cmd: Command) -> Result<Vec<u8>> {
        let bytes = match cmd {
            Command::Cut => epson::cut_full(),
            Command::PartialCut => epson::cut_partial(),
            Command::BoldOn => epson::bold_on(),
            Command::BoldOff => epson::bold_off(),
            Command::UnderlineOn => epson::underline(1),
            Command::UnderlineThickOn => epson::underline(2),
            Command::UnderlineOff => epson::underline(0),
            Command::InvertOn => epson::invert(true),
            Command::InvertOff => epson::invert(false),
            Command::UpsideDownOn => epson::upside_down(true),
            Command::UpsideDownOff => epson::upside_down(false),
            Command::FontA => epson::font(Font::A),
            Command::FontB => epson::font(Font::B),
            Command::TextNormal => epson::print_mode(TextSize::Normal),
            Command::TextDoubleHeight => epson::print_mode(TextSize::DoubleHeight),
            Command::TextDoubleWidth => epson::print_mode(TextSize::DoubleWidth),
            Command::TextQuadArea => epson::print_mode(TextSize::QuadArea),
            Command::AlignLeft => epson::align(Alignment::Left),
            Command::AlignCenter => epson::align(Alignment::Center),
            Command::AlignRight => epson::align(Alignment::Right),
            Command::LineFeed => commands::line_feed(),
            Command::VerticalTab => commands::vertical_tab(),
            Command::HardwareInit => commands::init(),
            Command::Beep => return Err(self.unsupported(cmd.name())),
        };
        Ok(bytes)
    }

    fn cash_drawer_kick(&self) -> Vec<Vec<u8>> {
        vec![epson::cash_drawer_pulse(false), epson::cash_drawer_pulse(true)]
    }

    fn code_page(&self, name: &str) -> Option<Vec<u8>> {
        codepage::EPSON.get(name).map(epson::codepage)
    }

    fn code_pages(&self) -> Vec<&'static str> {
        codepage::EPSON.names().collect()
    }

    fn text_size(&self, height: u8, width: u8) -> Result<Vec<u8>> {
        Ok(epson::size(height, width))
    }

    fn symbol(&self, kind: SymbolKind, data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        use epson::barcode::{barcode1d, maxicode, pdf417, qr};

        match kind {
            SymbolKind::Qr => qr::generate(data, settings),
            SymbolKind::Pdf417 => pdf417::generate(data, settings),
            SymbolKind::MaxiCode => maxicode::generate(data, settings),
            SymbolKind::Code128 => barcode1d::barcode(BarcodeType::Code128, data, settings),
            SymbolKind::Barcode => {
                barcode1d::barcode(settings.barcode_type.unwrap_or_default(), data, settings)
            }
        }
    }

    fn raster_image(&self, bitmap: &Bitmap) -> Result<Vec<u8>> {
        graphics::epson_raster_image(bitmap)
    }
}

// ============================================================================
// STAR
// ============================================================================

/// Star StarPRNT
#[derive(Debug, Clone, Copy, Default)]
pub struct StarDialect;

impl Dialect for StarDialect {
    fn name(&self) -> &'static str {
        "Star"
    }

    fn command(&self, cmd: Command) -> Result<Vec<u8>> {
        let bytes = match cmd {
            Command::Cut => star::cut_full_feed(),
            Command::PartialCut => star::cut_partial_feed(),
            Command::BoldOn => star::bold_on(),
            Command::BoldOff => star::bold_off(),
            Command::UnderlineOn => star::underline(1),
            Command::UnderlineThickOn => star::underline(2),
            Command::UnderlineOff => star::underline(0),
            Command::InvertOn => star::invert_on(),
            Command::InvertOff => star::invert_off(),
            Command::UpsideDownOn => star::upside_down_on(),
            Command::UpsideDownOff => star::upside_down_off(),
            Command::FontA => star::font(Font::A),
            Command::FontB => star::font(Font::B),
            Command::TextNormal => star::size_preset(TextSize::Normal),
            Command::TextDoubleHeight => star::size_preset(TextSize::DoubleHeight),
            Command::TextDoubleWidth => star::size_preset(TextSize::DoubleWidth),
            Command::TextQuadArea => star::size_preset(TextSize::QuadArea),
            Command::AlignLeft => star::align(Alignment::Left),
            Command::AlignCenter => star::align(Alignment::Center),
            Command::AlignRight => star::align(Alignment::Right),
            Command::LineFeed => commands::line_feed(),
            Command::VerticalTab => commands::vertical_tab(),
            Command::HardwareInit => commands::init(),
            Command::Beep => star::beep(),
        };
        Ok(bytes)
    }

    fn cash_drawer_kick(&self) -> Vec<Vec<u8>> {
        vec![star::cash_drawer()]
    }

    fn code_page(&self, name: &str) -> Option<Vec<u8>> {
        codepage::STAR.get(name).map(star::codepage)
    }

    fn code_pages(&self) -> Vec<&'static str> {
        codepage::STAR.names().collect()
    }

    fn text_size(&self, height: u8, width: u8) -> Result<Vec<u8>> {
        Ok(star::size(height, width))
    }

    fn symbol(&self, kind: SymbolKind, data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
        use star::barcode::{barcode1d, pdf417, qr};

        match kind {
            SymbolKind::Qr => qr::generate(data, settings),
            SymbolKind::Pdf417 => pdf417::generate(data, settings),
            SymbolKind::MaxiCode => Err(self.unsupported(kind.name())),
            SymbolKind::Code128 => Ok(barcode1d::barcode(BarcodeType::Code128, data, settings)),
            SymbolKind::Barcode => Ok(barcode1d::barcode(
                settings.barcode_type.unwrap_or_default(),
                data,
                settings,
            )),
        }
    }

    fn raster_image(&self, bitmap: &Bitmap) -> Result<Vec<u8>> {
        graphics::star_raster_image(bitmap)
    }
}
