//! JSON schema types for print jobs.

use std::path::PathBuf;

use serde::Deserialize;

use crate::layout::TableCell;
use crate::printer::PrinterOptions;
use crate::protocol::symbol::SymbolSettings;
use crate::protocol::text::{Alignment, Font, TextSize};

fn default_true() -> bool {
    true
}

/// Top-level JSON job.
#[derive(Debug, Clone, Deserialize)]
pub struct PrintJob {
    /// Printer options; every field has a default.
    #[serde(default)]
    pub printer: PrinterOptions,
    /// Commands, applied in order.
    pub commands: Vec<JobCommand>,
}

/// A single engine call.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobCommand {
    Print {
        text: String,
    },
    Println {
        text: String,
    },
    NewLine,
    VerticalTab,
    Bold {
        #[serde(default = "default_true")]
        enabled: bool,
    },
    Underline {
        #[serde(default = "default_true")]
        enabled: bool,
    },
    UnderlineThick {
        #[serde(default = "default_true")]
        enabled: bool,
    },
    Invert {
        #[serde(default = "default_true")]
        enabled: bool,
    },
    UpsideDown {
        #[serde(default = "default_true")]
        enabled: bool,
    },
    Align {
        align: Alignment,
    },
    Font {
        font: Font,
    },
    /// Size preset: "normal", "double_height", "double_width", "quad_area".
    TextSize {
        size: TextSize,
    },
    /// Custom size in expansion steps 0-7.
    SetTextSize {
        height: u8,
        width: u8,
    },
    CharacterSet {
        name: String,
    },
    Cut,
    PartialCut,
    CashDrawer,
    Beep,
    DrawLine,
    LeftRight {
        left: String,
        right: String,
    },
    Table {
        cells: Vec<String>,
    },
    TableCustom {
        cells: Vec<TableCell>,
    },
    Qr {
        data: String,
        #[serde(default)]
        settings: SymbolSettings,
    },
    Barcode {
        data: String,
        #[serde(default)]
        settings: SymbolSettings,
    },
    Code128 {
        data: String,
        #[serde(default)]
        settings: SymbolSettings,
    },
    Pdf417 {
        data: String,
        #[serde(default)]
        settings: SymbolSettings,
    },
    MaxiCode {
        data: String,
        #[serde(default)]
        settings: SymbolSettings,
    },
    /// PNG file on disk.
    Image {
        path: PathBuf,
    },
    /// Encoded PNG bytes.
    ImageBytes {
        bytes: Vec<u8>,
    },
    /// Raw bytes, appended verbatim.
    Raw {
        bytes: Vec<u8>,
    },
    Clear,
}

impl JobCommand {
    /// The `type` tag, for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            JobCommand::Print { .. } => "print",
            JobCommand::Println { .. } => "println",
            JobCommand::NewLine => "new_line",
            JobCommand::VerticalTab => "vertical_tab",
            JobCommand::Bold { .. } => "bold",
            JobCommand::Underline { .. } => "underline",
            JobCommand::UnderlineThick { .. } => "underline_thick",
            JobCommand::Invert { .. } => "invert",
            JobCommand::UpsideDown { .. } => "upside_down",
            JobCommand::Align { .. } => "align",
            JobCommand::Font { .. } => "font",
            JobCommand::TextSize { .. } => "text_size",
            JobCommand::SetTextSize { .. } => "set_text_size",
            JobCommand::CharacterSet { .. } => "character_set",
            JobCommand::Cut => "cut",
            JobCommand::PartialCut => "partial_cut",
            JobCommand::CashDrawer => "cash_drawer",
            JobCommand::Beep => "beep",
            JobCommand::DrawLine => "draw_line",
            JobCommand::LeftRight { .. } => "left_right",
            JobCommand::Table { .. } => "table",
            JobCommand::TableCustom { .. } => "table_custom",
            JobCommand::Qr { .. } => "qr",
            JobCommand::Barcode { .. } => "barcode",
            JobCommand::Code128 { .. } => "code128",
            JobCommand::Pdf417 { .. } => "pdf417",
            JobCommand::MaxiCode { .. } => "maxi_code",
            JobCommand::Image { .. } => "image",
            JobCommand::ImageBytes { .. } => "image_bytes",
            JobCommand::Raw { .. } => "raw",
            JobCommand::Clear => "clear",
        }
    }
}
