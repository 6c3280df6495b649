//! # thermal-printer - Receipt Printer Command Library
//!
//! Builds the exact byte stream for Epson (ESC/POS) and Star (StarPRNT)
//! receipt printers from high-level formatting calls. It provides:
//!
//! - **Protocol implementation**: command builders for both dialects
//! - **Layout**: rule lines, left/right rows, even and custom tables
//! - **Media**: PNG raster images, 1D barcodes, QR, PDF417 and MaxiCode
//! - **Transport**: device writer with raw TTY mode and chunking
//! - **JSON jobs**: whole print jobs described as JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use thermal_printer::{
//!     printer::{PrinterOptions, PrinterType, ThermalPrinter},
//!     layout::TableCell,
//!     protocol::text::Alignment,
//!     transport::DeviceTransport,
//! };
//!
//! let mut printer = ThermalPrinter::new(PrinterOptions::new(PrinterType::Epson))?;
//!
//! printer.align_center()?;
//! printer.set_text_double_height()?;
//! printer.println("CAFE");
//! printer.set_text_normal()?;
//! printer.align_left()?;
//! printer.draw_line()?;
//! printer.table_custom(&[
//!     TableCell::new("Espresso").fraction(0.5),
//!     TableCell::new("2").fraction(0.25).align(Alignment::Center),
//!     TableCell::new("4.00").fraction(0.25).align(Alignment::Right),
//! ])?;
//! printer.left_right("Total", "4.00")?;
//! printer.cut()?;
//!
//! let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
//! printer.execute(&mut transport)?;
//!
//! # Ok::<(), thermal_printer::error::PrinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Epson and Star command builders |
//! | [`dialect`] | Per-manufacturer command tables |
//! | [`printer`] | Options and the [`ThermalPrinter`] engine |
//! | [`layout`] | Text layout algorithms |
//! | [`media`] | Image decoding and symbol dispatch |
//! | [`transport`] | Communication backends |
//! | [`job`] | JSON print jobs |
//! | [`error`] | Error types |

pub mod buffer;
pub mod charset;
pub mod dialect;
pub mod error;
pub mod job;
pub mod layout;
pub mod media;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::PrinterError;
pub use printer::{PrinterOptions, PrinterType, ThermalPrinter};
pub use transport::{DeviceTransport, Transport};
