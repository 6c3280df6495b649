//! # Thermal Printer Engine
//!
//! [`ThermalPrinter`] owns the options, the dialect and the job buffer, and
//! exposes the formatting API. Every call appends its bytes in call order.
//! A call that fails appends nothing.

use std::path::Path;
use std::sync::Arc;

use crate::buffer::JobBuffer;
use crate::charset::CharacterSet;
use crate::dialect::{Command, Dialect};
use crate::error::Result;
use crate::layout::{self, Op, TableCell};
use crate::media::{self, ImageDecoder, PngDecoder};
use crate::protocol::symbol::{SymbolKind, SymbolSettings};
use crate::protocol::text::{Alignment, Font, TextSize};
use crate::transport::Transport;

use super::config::{PrinterOptions, PrinterType};

/// Receipt printer command buffer.
///
/// Intended for sequential use by one caller. Independent instances share
/// nothing.
///
/// ## Example
///
/// ```
/// use thermal_printer::printer::{PrinterOptions, PrinterType, ThermalPrinter};
///
/// let mut printer = ThermalPrinter::new(PrinterOptions::new(PrinterType::Epson)).unwrap();
/// printer.align_center().unwrap();
/// printer.bold(true).unwrap();
/// printer.println("RECEIPT");
/// printer.bold(false).unwrap();
/// printer.left_right("Total", "9.99").unwrap();
/// printer.cut().unwrap();
/// assert!(printer.text().contains("RECEIPT"));
/// ```
pub struct ThermalPrinter {
    options: PrinterOptions,
    dialect: Box<dyn Dialect>,
    charset: CharacterSet,
    buffer: JobBuffer,
    decoder: Arc<dyn ImageDecoder>,
}

impl std::fmt::Debug for ThermalPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThermalPrinter")
            .field("options", &self.options)
            .field("dialect", &self.dialect)
            .field("charset", &self.charset)
            .field("buffer_len", &self.buffer.len())
            .finish()
    }
}

impl ThermalPrinter {
    /// Build an engine and select the configured character set.
    ///
    /// Fails if the options are invalid or the dialect doesn't know the
    /// character set; no engine exists in that case.
    pub fn new(options: PrinterOptions) -> Result<Self> {
        let dialect = options.printer_type.dialect();
        Self::with_dialect(options, dialect)
    }

    /// Build an engine around a custom dialect.
    ///
    /// `options.printer_type` is kept for reporting only.
    pub fn with_dialect(options: PrinterOptions, dialect: Box<dyn Dialect>) -> Result<Self> {
        options.validate()?;
        let mut buffer = JobBuffer::new();
        let charset = CharacterSet::initial(dialect.as_ref(), &options.character_set, &mut buffer)?;
        Ok(Self {
            options,
            dialect,
            charset,
            buffer,
            decoder: Arc::new(PngDecoder),
        })
    }

    /// Replace the image decoder.
    pub fn with_decoder(mut self, decoder: impl ImageDecoder + 'static) -> Self {
        self.decoder = Arc::new(decoder);
        self
    }

    // ===== Configuration =====

    pub fn width(&self) -> usize {
        self.options.width
    }

    pub fn printer_type(&self) -> PrinterType {
        self.options.printer_type
    }

    /// Name of the active code page.
    pub fn character_set(&self) -> &str {
        self.charset.active()
    }

    pub fn remove_special_characters(&self) -> bool {
        self.options.remove_special_characters
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Switch code page. Unknown names leave everything unchanged.
    pub fn set_character_set(&mut self, name: &str) -> Result<()> {
        self.charset
            .switch(self.dialect.as_ref(), name, &mut self.buffer)
    }

    // ===== Text =====

    /// Append text without a line break.
    pub fn print(&mut self, text: &str) {
        self.buffer.append_text(text);
    }

    /// Append text followed by `\n`.
    pub fn println(&mut self, text: &str) {
        self.buffer.append_text(text);
        self.buffer.append_text("\n");
    }

    /// Dialect line feed.
    pub fn new_line(&mut self) -> Result<()> {
        self.emit(&[Command::LineFeed])
    }

    pub fn print_vertical_tab(&mut self) -> Result<()> {
        self.emit(&[Command::VerticalTab])
    }

    // ===== Styles =====

    pub fn bold(&mut self, enabled: bool) -> Result<()> {
        self.emit(&[Command::bold(enabled)])
    }

    pub fn underline(&mut self, enabled: bool) -> Result<()> {
        self.emit(&[toggle(enabled, Command::UnderlineOn, Command::UnderlineOff)])
    }

    pub fn underline_thick(&mut self, enabled: bool) -> Result<()> {
        self.emit(&[toggle(enabled, Command::UnderlineThickOn, Command::UnderlineOff)])
    }

    pub fn invert(&mut self, enabled: bool) -> Result<()> {
        self.emit(&[toggle(enabled, Command::InvertOn, Command::InvertOff)])
    }

    pub fn upside_down(&mut self, enabled: bool) -> Result<()> {
        self.emit(&[toggle(enabled, Command::UpsideDownOn, Command::UpsideDownOff)])
    }

    pub fn align(&mut self, alignment: Alignment) -> Result<()> {
        self.emit(&[Command::align(alignment)])
    }

    pub fn align_left(&mut self) -> Result<()> {
        self.align(Alignment::Left)
    }

    pub fn align_center(&mut self) -> Result<()> {
        self.align(Alignment::Center)
    }

    pub fn align_right(&mut self) -> Result<()> {
        self.align(Alignment::Right)
    }

    pub fn font(&mut self, font: Font) -> Result<()> {
        let cmd = match font {
            Font::A => Command::FontA,
            Font::B => Command::FontB,
        };
        self.emit(&[cmd])
    }

    /// Size preset.
    pub fn text_size(&mut self, size: TextSize) -> Result<()> {
        let cmd = match size {
            TextSize::Normal => Command::TextNormal,
            TextSize::DoubleHeight => Command::TextDoubleHeight,
            TextSize::DoubleWidth => Command::TextDoubleWidth,
            TextSize::QuadArea => Command::TextQuadArea,
        };
        self.emit(&[cmd])
    }

    pub fn set_text_normal(&mut self) -> Result<()> {
        self.text_size(TextSize::Normal)
    }

    pub fn set_text_double_height(&mut self) -> Result<()> {
        self.text_size(TextSize::DoubleHeight)
    }

    pub fn set_text_double_width(&mut self) -> Result<()> {
        self.text_size(TextSize::DoubleWidth)
    }

    pub fn set_text_quad_area(&mut self) -> Result<()> {
        self.text_size(TextSize::QuadArea)
    }

    /// Custom size, expansion steps 0-7 (1x-8x), clamped.
    pub fn set_text_size(&mut self, height: u8, width: u8) -> Result<()> {
        let bytes = self.dialect.text_size(height, width)?;
        self.buffer.append(&bytes);
        Ok(())
    }

    // ===== Paper and peripherals =====

    /// Feed, full cut, reinitialise.
    pub fn cut(&mut self) -> Result<()> {
        self.emit(&[
            Command::VerticalTab,
            Command::VerticalTab,
            Command::Cut,
            Command::HardwareInit,
        ])
    }

    /// Feed, partial cut, reinitialise.
    pub fn partial_cut(&mut self) -> Result<()> {
        self.emit(&[
            Command::VerticalTab,
            Command::VerticalTab,
            Command::PartialCut,
            Command::HardwareInit,
        ])
    }

    pub fn open_cash_drawer(&mut self) {
        for code in self.dialect.cash_drawer_kick() {
            self.buffer.append(&code);
        }
    }

    pub fn beep(&mut self) -> Result<()> {
        self.emit(&[Command::Beep])
    }

    // ===== Layout =====

    /// Full-width rule of the configured line character.
    pub fn draw_line(&mut self) -> Result<()> {
        self.lower(&layout::draw_line(self.options.width, self.options.line_character))
    }

    pub fn left_right(&mut self, left: &str, right: &str) -> Result<()> {
        self.lower(&layout::left_right(left, right, self.options.width))
    }

    pub fn table<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<()> {
        self.lower(&layout::table(cells, self.options.width))
    }

    pub fn table_custom(&mut self, cells: &[TableCell]) -> Result<()> {
        self.lower(&layout::table_custom(cells, self.options.width))
    }

    // ===== Symbols =====

    pub fn print_qr(&mut self, data: &str, settings: &SymbolSettings) -> Result<()> {
        self.symbol(SymbolKind::Qr, data, settings)
    }

    /// 1D barcode of `settings.barcode_type`.
    pub fn print_barcode(&mut self, data: &str, settings: &SymbolSettings) -> Result<()> {
        self.symbol(SymbolKind::Barcode, data, settings)
    }

    pub fn code128(&mut self, data: &str, settings: &SymbolSettings) -> Result<()> {
        self.symbol(SymbolKind::Code128, data, settings)
    }

    pub fn pdf417(&mut self, data: &str, settings: &SymbolSettings) -> Result<()> {
        self.symbol(SymbolKind::Pdf417, data, settings)
    }

    pub fn maxi_code(&mut self, data: &str, settings: &SymbolSettings) -> Result<()> {
        self.symbol(SymbolKind::MaxiCode, data, settings)
    }

    fn symbol(&mut self, kind: SymbolKind, data: &str, settings: &SymbolSettings) -> Result<()> {
        let bytes = media::symbol_command(self.dialect.as_ref(), kind, data, settings)?;
        self.buffer.append(&bytes);
        Ok(())
    }

    // ===== Images =====

    /// Print a PNG file. Returns the appended raster command.
    ///
    /// Paths without a `.png` suffix are rejected before any I/O.
    pub async fn print_image(&mut self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let bytes = media::read_image(path.as_ref()).await?;
        self.print_encoded(bytes).await
    }

    /// Print an encoded image already in memory. Returns the appended
    /// raster command.
    pub async fn print_image_buffer(&mut self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.print_encoded(bytes.to_vec()).await
    }

    /// Decoding runs off the async runtime.
    async fn print_encoded(&mut self, bytes: Vec<u8>) -> Result<Vec<u8>> {
        let decoder = Arc::clone(&self.decoder);
        let command = media::raster_command(self.dialect.as_ref(), decoder, bytes).await?;
        self.buffer.append(&command);
        Ok(command)
    }

    // ===== Buffer =====

    /// Append raw bytes verbatim.
    pub fn add(&mut self, bytes: &[u8]) {
        self.buffer.append(bytes);
    }

    /// Copy of the job bytes.
    pub fn buffer(&self) -> Vec<u8> {
        self.buffer.snapshot()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Job bytes as (lossy) UTF-8 text.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn set_buffer(&mut self, bytes: Vec<u8>) {
        self.buffer.replace(bytes);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Hand the job bytes to a transport. The buffer is kept.
    pub fn execute(&self, transport: &mut dyn Transport) -> Result<()> {
        transport.write_all(self.buffer.as_bytes())
    }

    // ===== Lowering =====

    /// Append a run of fixed commands, all or nothing.
    fn emit(&mut self, commands: &[Command]) -> Result<()> {
        let mut bytes = Vec::new();
        for &cmd in commands {
            bytes.extend(self.dialect.command(cmd)?);
        }
        self.buffer.append(&bytes);
        Ok(())
    }

    /// Append layout ops, rolling back on failure.
    fn lower(&mut self, ops: &[Op]) -> Result<()> {
        let mark = self.buffer.len();
        for op in ops {
            let bytes = match op {
                Op::Text(s) => Ok(s.as_bytes().to_vec()),
                Op::Bold(enabled) => self.dialect.command(Command::bold(*enabled)),
                Op::Newline => self.dialect.command(Command::LineFeed),
            };
            match bytes {
                Ok(bytes) => self.buffer.append(&bytes),
                Err(e) => {
                    self.buffer.truncate(mark);
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

fn toggle(enabled: bool, on: Command, off: Command) -> Command {
    if enabled { on } else { off }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrinterError;
    use crate::protocol::graphics::Bitmap;
    use pretty_assertions::assert_eq;

    fn epson() -> ThermalPrinter {
        let mut p = ThermalPrinter::new(PrinterOptions::new(PrinterType::Epson)).unwrap();
        p.clear();
        p
    }

    fn star() -> ThermalPrinter {
        let mut p = ThermalPrinter::new(PrinterOptions::new(PrinterType::Star)).unwrap();
        p.clear();
        p
    }

    #[test]
    fn test_construction_selects_character_set() {
        let p = ThermalPrinter::new(PrinterOptions::new(PrinterType::Epson)).unwrap();
        assert_eq!(p.character_set(), "SLOVENIA");
        assert_eq!(p.buffer(), vec![0x1B, 0x74, 18]);

        let p = ThermalPrinter::new(PrinterOptions::new(PrinterType::Star)).unwrap();
        assert_eq!(p.buffer(), vec![0x1B, 0x1D, 0x74, 4]);
    }

    #[test]
    fn test_construction_fails_on_unknown_character_set() {
        let err = ThermalPrinter::new(PrinterOptions::default().character_set("NOPE")).unwrap_err();
        assert!(matches!(err, PrinterError::UnknownCodePage(_)));
    }

    #[test]
    fn test_construction_fails_on_zero_width() {
        let err = ThermalPrinter::new(PrinterOptions::default().width(0)).unwrap_err();
        assert!(matches!(err, PrinterError::InvalidConfig(_)));
    }

    #[test]
    fn test_text_and_newline() {
        let mut p = epson();
        p.print("a");
        p.println("b");
        p.new_line().unwrap();
        assert_eq!(p.buffer(), b"ab\n\n".to_vec());
    }

    #[test]
    fn test_cut_sequence() {
        let mut p = epson();
        p.cut().unwrap();
        assert_eq!(p.buffer(), vec![0x0B, 0x0B, 0x1D, 0x56, 0x00, 0x1B, 0x40]);

        let mut p = star();
        p.partial_cut().unwrap();
        assert_eq!(p.buffer(), vec![0x0B, 0x0B, 0x1B, 0x64, 0x03, 0x1B, 0x40]);
    }

    #[test]
    fn test_cash_drawer() {
        let mut p = epson();
        p.open_cash_drawer();
        assert_eq!(
            p.buffer(),
            vec![0x1B, 0x70, 0x00, 25, 120, 0x1B, 0x70, 0x01, 25, 120]
        );

        let mut p = star();
        p.open_cash_drawer();
        assert_eq!(p.buffer(), vec![0x07]);
    }

    #[test]
    fn test_unsupported_leaves_buffer() {
        let mut p = epson();
        p.print("keep");
        assert!(p.beep().is_err());
        assert!(p.maxi_code("x", &SymbolSettings::default()).is_ok());

        let mut s = star();
        s.print("keep");
        let err = s.maxi_code("x", &SymbolSettings::default()).unwrap_err();
        assert!(matches!(err, PrinterError::UnsupportedCommand { .. }));
        assert_eq!(s.text(), "keep");
    }

    #[test]
    fn test_bold_table_cell_lowers_through_dialect() {
        let mut p = star();
        let cells = [TableCell::new("A").columns(2).bold()];
        p.table_custom(&cells).unwrap();
        assert_eq!(p.buffer(), vec![0x1B, b'E', b'A', 0x1B, b'F', b' ', 0x0A]);
    }

    #[test]
    fn test_draw_line_uses_options() {
        let mut p = ThermalPrinter::new(
            PrinterOptions::new(PrinterType::Epson)
                .width(5)
                .line_character('='),
        )
        .unwrap();
        p.clear();
        p.draw_line().unwrap();
        assert_eq!(p.text(), "=====\n");
    }

    #[test]
    fn test_buffer_replace_and_add() {
        let mut p = epson();
        p.set_buffer(vec![1, 2]);
        p.add(&[3]);
        assert_eq!(p.as_bytes(), &[1, 2, 3]);
    }

    struct SolidDecoder;

    impl ImageDecoder for SolidDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<Bitmap> {
            Ok(Bitmap {
                width: 8,
                height: 1,
                pixels: [0, 0, 0, 255].repeat(8),
            })
        }
    }

    #[tokio::test]
    async fn test_custom_decoder() {
        let mut p = star().with_decoder(SolidDecoder);
        let cmd = p.print_image_buffer(b"anything").await.unwrap();
        assert_eq!(cmd, vec![0x1B, 0x1D, 0x53, 1, 1, 0, 1, 0, 0, 0xFF]);
        assert_eq!(p.buffer(), cmd);
    }

    #[derive(Debug)]
    struct NoLineFeed;

    impl Dialect for NoLineFeed {
        fn name(&self) -> &'static str {
            "NoLineFeed"
        }

        fn command(&self, cmd: Command) -> Result<Vec<u8>> {
            match cmd {
                Command::LineFeed | Command::HardwareInit => Err(self.unsupported(cmd.name())),
                other => crate::dialect::EpsonDialect.command(other),
            }
        }

        fn cash_drawer_kick(&self) -> Vec<Vec<u8>> {
            Vec::new()
        }

        fn code_page(&self, name: &str) -> Option<Vec<u8>> {
            crate::dialect::EpsonDialect.code_page(name)
        }

        fn code_pages(&self) -> Vec<&'static str> {
            crate::dialect::EpsonDialect.code_pages()
        }

        fn text_size(&self, height: u8, width: u8) -> Result<Vec<u8>> {
            crate::dialect::EpsonDialect.text_size(height, width)
        }

        fn symbol(&self, kind: SymbolKind, data: &[u8], settings: &SymbolSettings) -> Result<Vec<u8>> {
            crate::dialect::EpsonDialect.symbol(kind, data, settings)
        }

        fn raster_image(&self, bitmap: &Bitmap) -> Result<Vec<u8>> {
            crate::dialect::EpsonDialect.raster_image(bitmap)
        }
    }

    #[test]
    fn test_failed_layout_rolls_back() {
        let mut p = ThermalPrinter::with_dialect(PrinterOptions::default(), Box::new(NoLineFeed))
            .unwrap();
        p.print("kept");
        let before = p.buffer();

        let cells = [TableCell::new("Total").bold(), TableCell::new("x".repeat(60))];
        let err = p.table_custom(&cells).unwrap_err();
        assert!(matches!(err, PrinterError::UnsupportedCommand { .. }));
        assert_eq!(p.buffer(), before);

        assert!(p.draw_line().is_err());
        assert_eq!(p.buffer(), before);

        assert!(p.left_right("a", "b").is_err());
        assert_eq!(p.buffer(), before);
    }

    #[test]
    fn test_failed_cut_appends_nothing() {
        let mut p = ThermalPrinter::with_dialect(PrinterOptions::default(), Box::new(NoLineFeed))
            .unwrap();
        let before = p.buffer();

        let err = p.cut().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Hardware init is not supported by NoLineFeed printers"
        );
        assert_eq!(p.buffer(), before);

        assert!(p.partial_cut().is_err());
        assert_eq!(p.buffer(), before);
    }

    #[derive(Default)]
    struct ThreadDecoder {
        thread: std::sync::Mutex<Option<std::thread::ThreadId>>,
    }

    impl ImageDecoder for Arc<ThreadDecoder> {
        fn decode(&self, bytes: &[u8]) -> Result<Bitmap> {
            if let Ok(mut thread) = self.thread.lock() {
                *thread = Some(std::thread::current().id());
            }
            SolidDecoder.decode(bytes)
        }
    }

    #[tokio::test]
    async fn test_decode_runs_off_runtime_thread() {
        let decoder = Arc::new(ThreadDecoder::default());
        let mut p = epson().with_decoder(Arc::clone(&decoder));
        p.print_image_buffer(b"anything").await.unwrap();

        let decoded_on = *decoder.thread.lock().unwrap();
        assert!(decoded_on.is_some());
        assert_ne!(decoded_on, Some(std::thread::current().id()));
    }

    #[tokio::test]
    async fn test_decode_failure_leaves_buffer() {
        let mut p = epson();
        p.print("before");
        let err = p.print_image_buffer(b"garbage").await.unwrap_err();
        assert!(matches!(err, PrinterError::Decode(_)));
        assert_eq!(p.text(), "before");
    }
}
