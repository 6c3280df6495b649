//! # Printer Configuration
//!
//! Which dialect to speak and how the paper is laid out.
//!
//! ## Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | width | 48 columns (Font A on 80mm paper) |
//! | character_set | `SLOVENIA` |
//! | remove_special_characters | `false` (reserved) |
//! | line_character | `-` |
//!
//! ## Usage
//!
//! ```
//! use thermal_printer::printer::{PrinterOptions, PrinterType};
//!
//! let options = PrinterOptions::new(PrinterType::Star)
//!     .width(42)
//!     .character_set("PC437_USA");
//! assert!(options.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dialect::{Dialect, EpsonDialect, StarDialect};
use crate::error::{PrinterError, Result};

/// Printer manufacturer, selecting the command dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterType {
    #[default]
    Epson,
    Star,
}

impl PrinterType {
    pub const ALL: [PrinterType; 2] = [PrinterType::Epson, PrinterType::Star];

    pub fn name(self) -> &'static str {
        match self {
            PrinterType::Epson => "epson",
            PrinterType::Star => "star",
        }
    }

    /// The dialect strategy for this printer type.
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            PrinterType::Epson => Box::new(EpsonDialect),
            PrinterType::Star => Box::new(StarDialect),
        }
    }
}

impl fmt::Display for PrinterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrinterType {
    type Err = PrinterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "epson" => Ok(PrinterType::Epson),
            "star" => Ok(PrinterType::Star),
            other => Err(PrinterError::InvalidConfig(format!(
                "Unknown printer type '{}'. Use 'epson' or 'star'",
                other
            ))),
        }
    }
}

/// Construction options for a [`ThermalPrinter`](super::ThermalPrinter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterOptions {
    #[serde(rename = "type")]
    pub printer_type: PrinterType,

    /// Paper width in character columns
    pub width: usize,

    /// Code page selected at construction
    pub character_set: String,

    /// Reserved; has no effect on output
    pub remove_special_characters: bool,

    /// Character repeated by `draw_line`
    pub line_character: char,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            printer_type: PrinterType::default(),
            width: 48,
            character_set: "SLOVENIA".to_string(),
            remove_special_characters: false,
            line_character: '-',
        }
    }
}

impl PrinterOptions {
    pub fn new(printer_type: PrinterType) -> Self {
        Self {
            printer_type,
            ..Default::default()
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn character_set(mut self, name: impl Into<String>) -> Self {
        self.character_set = name.into();
        self
    }

    pub fn remove_special_characters(mut self, enabled: bool) -> Self {
        self.remove_special_characters = enabled;
        self
    }

    pub fn line_character(mut self, ch: char) -> Self {
        self.line_character = ch;
        self
    }

    /// Reject options no engine can be built from.
    ///
    /// The character set is checked later, against the dialect.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(PrinterError::InvalidConfig(
                "width must be at least 1 column".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
