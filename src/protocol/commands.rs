//! # Shared Control Codes
//!
//! Control bytes and commands common to both supported command dialects
//! (Epson ESC/POS and Star StarPRNT).
//!
//! ## Escape Sequence Structure
//!
//! Both dialects build commands from the same ASCII control bytes:
//! - Single byte: `LF`, `VT`, `BEL`
//! - Two bytes: `ESC @`, `ESC E`
//! - Multi-byte with parameters: `ESC a n`, `GS ( k pL pH cn fn ...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding in both dialects:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Epson uses `GS` alone for graphics, barcodes and cutting; Star uses it
/// after `ESC` (`ESC GS`) for alignment, code pages and 2D symbols.
pub const GS: u8 = 0x1D;

/// RS (Record Separator)
///
/// Star font selection prefix (`ESC RS F`) and 1D barcode terminator.
pub const RS: u8 = 0x1E;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// VT (Vertical Tab) - Advance to the next vertical tab position
///
/// With no vertical tabs configured, both dialects treat it as a line feed.
pub const VT: u8 = 0x0B;

/// BEL - Star peripheral (cash drawer) drive
pub const BEL: u8 = 0x07;

/// SI (Shift In) - Star upside-down on
pub const SI: u8 = 0x0F;

/// DC2 (Device Control 2) - Star upside-down off
pub const DC2: u8 = 0x12;

// ============================================================================
// COMMON COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Identical in both
/// dialects.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Line feed (LF)
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// Vertical tab (VT)
#[inline]
pub fn vertical_tab() -> Vec<u8> {
    vec![VT]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use thermal_printer::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_line_feed_and_vertical_tab() {
        assert_eq!(line_feed(), vec![0x0A]);
        assert_eq!(vertical_tab(), vec![0x0B]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
    }
}
