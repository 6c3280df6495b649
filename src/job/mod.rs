//! # JSON Job API
//!
//! Describe a whole print job as JSON and render it to printer bytes.
//! Each command maps to one [`ThermalPrinter`] call.
//!
//! ## Example
//!
//! ```
//! use thermal_printer::job::PrintJob;
//!
//! let json = r#"{
//!     "printer": {"type": "star", "width": 32},
//!     "commands": [
//!         {"type": "align", "align": "center"},
//!         {"type": "bold"},
//!         {"type": "println", "text": "HELLO"},
//!         {"type": "bold", "enabled": false},
//!         {"type": "draw_line"},
//!         {"type": "left_right", "left": "Total", "right": "9.99"},
//!         {"type": "cut"}
//!     ]
//! }"#;
//!
//! let job = PrintJob::from_json(json).unwrap();
//! let bytes = tokio::runtime::Runtime::new().unwrap().block_on(job.render()).unwrap();
//! assert!(!bytes.is_empty());
//! ```

mod schema;

pub use schema::{JobCommand, PrintJob};

use crate::error::{PrinterError, Result};
use crate::printer::ThermalPrinter;

impl PrintJob {
    /// Parse a job from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PrinterError::Job(format!("Invalid job: {}", e)))
    }

    /// Build an engine from `printer` and apply every command.
    ///
    /// Stops at the first failing command.
    pub async fn render(&self) -> Result<Vec<u8>> {
        let mut printer = ThermalPrinter::new(self.printer.clone())?;
        self.apply(&mut printer).await?;
        Ok(printer.buffer())
    }

    /// Apply every command to an existing engine.
    pub async fn apply(&self, printer: &mut ThermalPrinter) -> Result<()> {
        for (index, command) in self.commands.iter().enumerate() {
            command.apply(printer).await.map_err(|e| {
                PrinterError::Job(format!("command {} ({}): {}", index, command.name(), e))
            })?;
        }
        Ok(())
    }
}

impl JobCommand {
    /// Run this command against `printer`.
    pub async fn apply(&self, printer: &mut ThermalPrinter) -> Result<()> {
        match self {
            JobCommand::Print { text } => printer.print(text),
            JobCommand::Println { text } => printer.println(text),
            JobCommand::NewLine => printer.new_line()?,
            JobCommand::VerticalTab => printer.print_vertical_tab()?,
            JobCommand::Bold { enabled } => printer.bold(*enabled)?,
            JobCommand::Underline { enabled } => printer.underline(*enabled)?,
            JobCommand::UnderlineThick { enabled } => printer.underline_thick(*enabled)?,
            JobCommand::Invert { enabled } => printer.invert(*enabled)?,
            JobCommand::UpsideDown { enabled } => printer.upside_down(*enabled)?,
            JobCommand::Align { align } => printer.align(*align)?,
            JobCommand::Font { font } => printer.font(*font)?,
            JobCommand::TextSize { size } => printer.text_size(*size)?,
            JobCommand::SetTextSize { height, width } => printer.set_text_size(*height, *width)?,
            JobCommand::CharacterSet { name } => printer.set_character_set(name)?,
            JobCommand::Cut => printer.cut()?,
            JobCommand::PartialCut => printer.partial_cut()?,
            JobCommand::CashDrawer => printer.open_cash_drawer(),
            JobCommand::Beep => printer.beep()?,
            JobCommand::DrawLine => printer.draw_line()?,
            JobCommand::LeftRight { left, right } => printer.left_right(left, right)?,
            JobCommand::Table { cells } => printer.table(cells)?,
            JobCommand::TableCustom { cells } => printer.table_custom(cells)?,
            JobCommand::Qr { data, settings } => printer.print_qr(data, settings)?,
            JobCommand::Barcode { data, settings } => printer.print_barcode(data, settings)?,
            JobCommand::Code128 { data, settings } => printer.code128(data, settings)?,
            JobCommand::Pdf417 { data, settings } => printer.pdf417(data, settings)?,
            JobCommand::MaxiCode { data, settings } => printer.maxi_code(data, settings)?,
            JobCommand::Image { path } => {
                printer.print_image(path).await?;
            }
            JobCommand::ImageBytes { bytes } => {
                printer.print_image_buffer(bytes).await?;
            }
            JobCommand::Raw { bytes } => printer.add(bytes),
            JobCommand::Clear => printer.clear(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::PrinterType;
    use crate::protocol::text::Alignment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_defaults() {
        let job = PrintJob::from_json(r#"{"commands": [{"type": "cut"}]}"#).unwrap();
        assert_eq!(job.printer.printer_type, PrinterType::Epson);
        assert_eq!(job.printer.width, 48);
        assert!(matches!(job.commands[0], JobCommand::Cut));
    }

    #[test]
    fn test_parse_table_custom() {
        let job = PrintJob::from_json(
            r#"{"commands": [{"type": "table_custom", "cells": [
                {"text": "Item", "width": {"fraction": 0.5}},
                {"text": "Qty", "align": "CENTER", "bold": true}
            ]}]}"#,
        )
        .unwrap();
        match &job.commands[0] {
            JobCommand::TableCustom { cells } => {
                assert_eq!(cells.len(), 2);
                assert_eq!(cells[1].align, Alignment::Center);
                assert!(cells[1].bold);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_is_job_error() {
        let err = PrintJob::from_json(r#"{"commands": [{"type": "fly"}]}"#).unwrap_err();
        assert!(matches!(err, PrinterError::Job(_)));
    }

    #[tokio::test]
    async fn test_render_in_order() {
        let job = PrintJob::from_json(
            r#"{"printer": {"type": "epson", "character_set": "PC437_USA"},
                "commands": [
                    {"type": "bold"},
                    {"type": "print", "text": "A"},
                    {"type": "bold", "enabled": false},
                    {"type": "raw", "bytes": [7]}
                ]}"#,
        )
        .unwrap();
        let bytes = job.render().await.unwrap();
        assert_eq!(
            bytes,
            vec![0x1B, 0x74, 0, 0x1B, 0x45, 1, b'A', 0x1B, 0x45, 0, 7]
        );
    }

    #[tokio::test]
    async fn test_failing_command_names_index() {
        let job = PrintJob::from_json(
            r#"{"commands": [{"type": "println", "text": "ok"}, {"type": "beep"}]}"#,
        )
        .unwrap();
        let err = job.render().await.unwrap_err();
        match err {
            PrinterError::Job(msg) => {
                assert!(msg.starts_with("command 1 (beep)"), "{}", msg);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_image_path_rejected() {
        let job = PrintJob::from_json(r#"{"commands": [{"type": "image", "path": "photo.jpg"}]}"#)
            .unwrap();
        let err = job.render().await.unwrap_err();
        assert!(err.to_string().contains("image"));
    }
}
