//! # Text Styling Vocabulary
//!
//! Dialect-neutral names for text alignment, font and size presets. The
//! dialect modules translate these into their own byte sequences.
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```
//!
//! ## Font Selection (80mm paper)
//!
//! | Font | Size | Columns |
//! |------|------|---------|
//! | Font A | 12×24 dots | 48 chars |
//! | Font B | 9×17 / 9×24 dots | 64 chars |

use serde::{Deserialize, Serialize};

/// Text alignment options
///
/// Also used for alignment inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    #[serde(alias = "LEFT")]
    Left = 0,
    #[serde(alias = "CENTER")]
    Center = 1,
    #[serde(alias = "RIGHT")]
    Right = 2,
}

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Font {
    /// Font A: 12×24 dots, 48 columns on 80mm paper
    #[default]
    #[serde(rename = "A", alias = "a")]
    A = 0,
    /// Font B: narrower, 64 columns on 80mm paper
    #[serde(rename = "B", alias = "b")]
    B = 1,
}

/// Character size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    #[default]
    Normal,
    DoubleHeight,
    DoubleWidth,
    /// Double height and double width
    QuadArea,
}
