//! # Receipt Printer Protocols
//!
//! Low-level command builders for the two supported command dialects:
//! Epson ESC/POS and Star StarPRNT. Every builder returns the raw bytes of
//! one command; nothing here holds state.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes shared by both dialects (ESC, GS, LF, ESC @)
//! - [`epson`]: ESC/POS text, cut, drawer and barcode commands
//! - [`star`]: StarPRNT text, cut, drawer and barcode commands
//! - [`codepage`]: Named code page tables per dialect
//! - [`graphics`]: Bitmap packing and raster image commands
//! - [`symbol`]: Dialect-neutral barcode/2D symbol settings
//! - [`text`]: Dialect-neutral alignment, font and size names
//!
//! ## Usage Example
//!
//! ```
//! use thermal_printer::protocol::{commands, epson, text::Alignment};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(epson::align(Alignment::Center));
//! data.extend(epson::bold_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(epson::bold_off());
//! data.extend(epson::cut_full());
//! ```

pub mod codepage;
pub mod commands;
pub mod epson;
pub mod graphics;
pub mod star;
pub mod symbol;
pub mod text;
