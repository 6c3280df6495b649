//! # StarPRNT Commands
//!
//! Command builders for Star Micronics receipt printers (TSP100, TSP650II,
//! TSP700II, mC-Print, ...).
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E / ESC F | **Emphasized** text |
//! | Underline | ESC - n | Underlined text |
//! | Invert | ESC 4 / ESC 5 | White on black |
//! | Size | ESC i n1 n2 | 1x-8x expansion |
//! | Upside Down | SI / DC2 | 180° rotation |
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

pub mod barcode;

use super::commands::{BEL, DC2, ESC, GS, RS, SI};
use super::text::{Alignment, Font, TextSize};

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Feed to Cut Position, Then Full Cut (ESC d 2)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d 2  |
/// | Hex     | 1B 64 02 |
///
/// Prints any pending data, feeds the last printed line past the cutter,
/// then cuts.
#[inline]
pub fn cut_full_feed() -> Vec<u8> {
    vec![ESC, b'd', 2]
}

/// # Feed to Cut Position, Then Partial Cut (ESC d 3)
///
/// Same as `cut_full_feed()` but leaves a small uncut hinge.
#[inline]
pub fn cut_partial_feed() -> Vec<u8> {
    vec![ESC, b'd', 3]
}

// ============================================================================
// TEXT ALIGNMENT AND FONT
// ============================================================================

/// # Set Text Alignment (ESC GS a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS a n |
/// | Hex     | 1B 1D 61 n |
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::star;
/// use thermal_printer::protocol::text::Alignment;
///
/// assert_eq!(star::align(Alignment::Center), vec![0x1B, 0x1D, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, GS, b'a', alignment as u8]
}

/// # Select Font (ESC RS F n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC RS F n |
/// | Hex     | 1B 1E 46 n |
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, RS, b'F', f as u8]
}

// ============================================================================
// EMPHASIS, UNDERLINE, INVERT, UPSIDE-DOWN
// ============================================================================

/// Enable bold (ESC E)
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// Disable bold (ESC F)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

/// # Set Underline Mode (ESC - n)
///
/// - `n = 0`: Underline OFF
/// - `n = 1`: Underline ON (1 dot thick)
/// - `n = 2`: Underline ON (2 dots thick)
#[inline]
pub fn underline(n: u8) -> Vec<u8> {
    vec![ESC, b'-', n.min(2)]
}

/// Enable inverted (white on black) printing (ESC 4)
#[inline]
pub fn invert_on() -> Vec<u8> {
    vec![ESC, b'4']
}

/// Disable inverted printing (ESC 5)
#[inline]
pub fn invert_off() -> Vec<u8> {
    vec![ESC, b'5']
}

/// Enable upside-down mode (SI)
#[inline]
pub fn upside_down_on() -> Vec<u8> {
    vec![SI]
}

/// Disable upside-down mode (DC2)
#[inline]
pub fn upside_down_off() -> Vec<u8> {
    vec![DC2]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (ESC i n1 n2)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC i n1 n2 |
/// | Hex     | 1B 69 n1 n2 |
///
/// - `n1`: Vertical expansion (0-7 = 1x to 8x)
/// - `n2`: Horizontal expansion (0-7 = 1x to 8x)
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::star;
///
/// assert_eq!(star::size(1, 1), vec![0x1B, 0x69, 0x01, 0x01]);
/// // Clamped to 8x
/// assert_eq!(star::size(10, 10), vec![0x1B, 0x69, 0x07, 0x07]);
/// ```
pub fn size(height_mult: u8, width_mult: u8) -> Vec<u8> {
    vec![ESC, b'i', height_mult.min(7), width_mult.min(7)]
}

/// Size preset expressed with `ESC i`
pub fn size_preset(preset: TextSize) -> Vec<u8> {
    match preset {
        TextSize::Normal => size(0, 0),
        TextSize::DoubleHeight => size(1, 0),
        TextSize::DoubleWidth => size(0, 1),
        TextSize::QuadArea => size(1, 1),
    }
}

// ============================================================================
// CODE PAGE
// ============================================================================

/// # Set Code Page (ESC GS t n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS t n |
/// | Hex     | 1B 1D 74 n |
///
/// See [`crate::protocol::codepage::STAR`] for the named values.
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, GS, b't', n]
}

// ============================================================================
// PERIPHERALS
// ============================================================================

/// # Drive Peripheral Device #1 (BEL)
///
/// Kicks the cash drawer wired to the printer's DK port. Star printers use a
/// single code; pulse timing is set by the printer's memory switches.
#[inline]
pub fn cash_drawer() -> Vec<u8> {
    vec![BEL]
}

/// # Buzzer (ESC GS BEL m n1 n2)
///
/// - `m`: Buzzer number (1)
/// - `n1`: On time, in 20ms units
/// - `n2`: Off time, in 20ms units
#[inline]
pub fn beep() -> Vec<u8> {
    vec![ESC, GS, BEL, 1, 2, 5]
}
