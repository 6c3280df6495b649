//! # Epson ESC/POS Commands
//!
//! Command builders for Epson TM-series receipt printers and the many
//! ESC/POS-compatible printers that follow them.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text (1 or 2 dots) |
//! | Invert | GS B n | White on black |
//! | Print mode | ESC ! n | Double height / double width presets |
//! | Size | GS ! n | 1x-8x expansion |
//! | Upside Down | ESC { n | 180° rotation |
//!
//! ## Reference
//!
//! Based on the "ESC/POS Application Programming Guide" by Seiko Epson Corp.

pub mod barcode;

use super::commands::{ESC, GS};
use super::text::{Alignment, Font, TextSize};

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Full Cut (GS V 0)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 0   |
/// | Hex     | 1D 56 00 |
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![GS, b'V', 0]
}

/// # Partial Cut (GS V 1)
///
/// Leaves one point uncut so the receipt stays on the roll.
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, b'V', 1]
}

// ============================================================================
// TEXT ALIGNMENT AND FONT
// ============================================================================

/// # Select Justification (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::epson;
/// use thermal_printer::protocol::text::Alignment;
///
/// assert_eq!(epson::align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// # Select Character Font (ESC M n)
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// EMPHASIS, UNDERLINE, INVERT, UPSIDE-DOWN
// ============================================================================

/// Enable bold (ESC E 1)
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// Disable bold (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

/// # Underline Mode (ESC - n)
///
/// - `n = 0`: Off
/// - `n = 1`: 1 dot thick
/// - `n = 2`: 2 dots thick
#[inline]
pub fn underline(n: u8) -> Vec<u8> {
    vec![ESC, b'-', n.min(2)]
}

/// # White/Black Reverse Printing (GS B n)
#[inline]
pub fn invert(enabled: bool) -> Vec<u8> {
    vec![GS, b'B', enabled as u8]
}

/// # Upside-Down Printing (ESC { n)
///
/// Takes effect only when set at the beginning of a line.
#[inline]
pub fn upside_down(enabled: bool) -> Vec<u8> {
    vec![ESC, b'{', enabled as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Select Print Mode (ESC ! n)
///
/// Bit 4 doubles the height, bit 5 doubles the width. Used for the size
/// presets.
///
/// | Preset | n |
/// |--------|---|
/// | Normal | 0x00 |
/// | Double height | 0x10 |
/// | Double width | 0x20 |
/// | Quad area | 0x30 |
pub fn print_mode(preset: TextSize) -> Vec<u8> {
    let n = match preset {
        TextSize::Normal => 0x00,
        TextSize::DoubleHeight => 0x10,
        TextSize::DoubleWidth => 0x20,
        TextSize::QuadArea => 0x30,
    };
    vec![ESC, b'!', n]
}

/// # Select Character Size (GS ! n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
///
/// Bits 4-6 hold the width expansion, bits 0-2 the height expansion
/// (0 = 1x ... 7 = 8x).
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::epson;
///
/// // Triple height, double width
/// assert_eq!(epson::size(2, 1), vec![0x1D, 0x21, 0x12]);
/// ```
pub fn size(height_mult: u8, width_mult: u8) -> Vec<u8> {
    let h = height_mult.min(7);
    let w = width_mult.min(7);
    vec![GS, b'!', (w << 4) | h]
}

// ============================================================================
// CODE PAGE
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// See [`crate::protocol::codepage::EPSON`] for the named values.
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// # Generate Pulse (ESC p m t1 t2)
///
/// - `m`: Connector pin (0 = pin 2, 1 = pin 5)
/// - `t1`: On time, in 2ms units
/// - `t2`: Off time, in 2ms units
///
/// Drawers may be wired to either pin, so both pulses are sent together.
pub fn cash_drawer_pulse(pin5: bool) -> Vec<u8> {
    vec![ESC, b'p', pin5 as u8, 25, 120]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut() {
        assert_eq!(cut_full(), vec![0x1D, 0x56, 0x00]);
        assert_eq!(cut_partial(), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_align_and_font() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
    }

    #[test]
    fn test_styles() {
        assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
        assert_eq!(underline(2), vec![0x1B, 0x2D, 0x02]);
        assert_eq!(invert(true), vec![0x1D, 0x42, 0x01]);
        assert_eq!(upside_down(false), vec![0x1B, 0x7B, 0x00]);
    }

    #[test]
    fn test_print_mode_presets() {
        assert_eq!(print_mode(TextSize::Normal), vec![0x1B, 0x21, 0x00]);
        assert_eq!(print_mode(TextSize::DoubleHeight), vec![0x1B, 0x21, 0x10]);
        assert_eq!(print_mode(TextSize::DoubleWidth), vec![0x1B, 0x21, 0x20]);
        assert_eq!(print_mode(TextSize::QuadArea), vec![0x1B, 0x21, 0x30]);
    }

    #[test]
    fn test_size_clamps() {
        assert_eq!(size(0, 0), vec![0x1D, 0x21, 0x00]);
        assert_eq!(size(7, 7), vec![0x1D, 0x21, 0x77]);
        assert_eq!(size(10, 10), vec![0x1D, 0x21, 0x77]);
    }

    #[test]
    fn test_cash_drawer_pulses() {
        assert_eq!(cash_drawer_pulse(false), vec![0x1B, 0x70, 0x00, 25, 120]);
        assert_eq!(cash_drawer_pulse(true), vec![0x1B, 0x70, 0x01, 25, 120]);
    }
}
