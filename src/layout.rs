//! # Text Layout
//!
//! Pure, dialect-free layout for fixed-width receipt columns: rule lines,
//! left/right justified rows, even tables and custom tables whose cells
//! wrap onto continuation lines.
//!
//! Every function returns a list of [`Op`]s; the engine lowers them to
//! bytes through the active dialect. Widths are counted in characters
//! (`chars()`), never bytes.
//!
//! ## Example
//!
//! ```
//! use thermal_printer::layout::{self, Op};
//!
//! let ops = layout::left_right("Total", "9.99", 12);
//! assert_eq!(ops, vec![Op::Text("Total   9.99".into()), Op::Newline]);
//! ```

use serde::Deserialize;

use crate::protocol::text::Alignment;

/// Rows a single [`table_custom`] call may emit before giving up on
/// remaining overflow.
pub const MAX_TABLE_ROWS: usize = 256;

/// One layout step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Text(String),
    Bold(bool),
    Newline,
}

/// How wide a [`TableCell`] is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellWidth {
    /// Even share of whatever the explicit cells leave over.
    #[default]
    Auto,
    /// Share of the total width, `0.0..=1.0`, floored.
    Fraction(f64),
    /// Exact number of characters.
    Columns(usize),
}

/// A cell of a custom table.
///
/// ## Example
///
/// ```
/// use thermal_printer::layout::TableCell;
/// use thermal_printer::protocol::text::Alignment;
///
/// let cell = TableCell::new("Qty").fraction(0.25).align(Alignment::Right).bold();
/// assert!(cell.bold);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TableCell {
    pub text: String,
    pub align: Alignment,
    pub width: CellWidth,
    pub bold: bool,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn fraction(mut self, fraction: f64) -> Self {
        self.width = CellWidth::Fraction(fraction);
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.width = CellWidth::Columns(columns);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// `ch` repeated `width` times, then a line break.
pub fn draw_line(width: usize, ch: char) -> Vec<Op> {
    let mut ops = Vec::with_capacity(2);
    push_text(&mut ops, &ch.to_string().repeat(width));
    ops.push(Op::Newline);
    ops
}

/// `left` and `right` on one line, spaces between.
///
/// When the two don't fit, the padding is zero and the line simply runs
/// long.
pub fn left_right(left: &str, right: &str, width: usize) -> Vec<Op> {
    let used = left.chars().count() + right.chars().count();
    let padding = width.saturating_sub(used);
    let line = format!("{left}{}{right}", " ".repeat(padding));

    let mut ops = Vec::with_capacity(2);
    push_text(&mut ops, &line);
    ops.push(Op::Newline);
    ops
}

/// Evenly split table row.
///
/// Each column is `width / cells.len()` wide (remainder dropped). Text is
/// right-padded to the column and never truncated.
pub fn table<S: AsRef<str>>(cells: &[S], width: usize) -> Vec<Op> {
    let mut ops = Vec::new();
    if !cells.is_empty() {
        let column = width / cells.len();
        let mut line = String::new();
        for cell in cells {
            let text = cell.as_ref();
            line.push_str(text);
            line.push_str(&spaces(column.saturating_sub(text.chars().count())));
        }
        push_text(&mut ops, &line);
    }
    ops.push(Op::Newline);
    ops
}

/// Table row with per-cell widths, alignment and bold.
///
/// Text longer than its column shows `column - 1` characters and carries
/// the rest to a continuation line, where cells that fit render blank.
/// Continuation lines repeat until every cell is consumed or
/// [`MAX_TABLE_ROWS`] lines have been emitted.
pub fn table_custom(cells: &[TableCell], width: usize) -> Vec<Op> {
    let widths = resolve_widths(cells, width);
    let mut pending: Vec<String> = cells.iter().map(|c| c.text.clone()).collect();
    let mut ops = Vec::new();

    for _ in 0..MAX_TABLE_ROWS {
        let mut carry = Vec::with_capacity(cells.len());
        let mut overflow = false;

        for ((cell, text), &column) in cells.iter().zip(&pending).zip(&widths) {
            let (visible, rest) = if text.chars().count() > column {
                split_chars(text, column.saturating_sub(1))
            } else {
                (text.as_str(), "")
            };
            overflow |= !rest.is_empty();
            render_cell(&mut ops, visible, column, cell.align, cell.bold);
            carry.push(rest.to_string());
        }
        ops.push(Op::Newline);

        if !overflow {
            return ops;
        }
        pending = carry;
    }

    let dropped: usize = pending.iter().map(|t| t.chars().count()).sum();
    eprintln!(
        "[layout] table_custom stopped after {} rows, {} characters not printed",
        MAX_TABLE_ROWS, dropped
    );
    ops
}

/// Column width of each cell.
fn resolve_widths(cells: &[TableCell], width: usize) -> Vec<usize> {
    let explicit: usize = cells
        .iter()
        .map(|c| match c.width {
            CellWidth::Fraction(f) => fraction_of(width, f),
            CellWidth::Columns(n) => n,
            CellWidth::Auto => 0,
        })
        .sum();
    let autos = cells
        .iter()
        .filter(|c| c.width == CellWidth::Auto)
        .count();
    let auto_width = match autos {
        0 => 0,
        n => width.saturating_sub(explicit) / n,
    };

    cells
        .iter()
        .map(|c| match c.width {
            CellWidth::Fraction(f) => fraction_of(width, f),
            CellWidth::Columns(n) => n,
            CellWidth::Auto => auto_width,
        })
        .collect()
}

/// Tolerance for products like `50 * 0.58` landing just under an integer.
const FRACTION_EPSILON: f64 = 1e-9;

fn fraction_of(width: usize, fraction: f64) -> usize {
    // Negative and NaN saturate to 0.
    (width as f64 * fraction + FRACTION_EPSILON).floor() as usize
}

fn render_cell(ops: &mut Vec<Op>, text: &str, column: usize, align: Alignment, bold: bool) {
    let gap = column.saturating_sub(text.chars().count());
    let (before, after) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        // Trailing side is one short.
        Alignment::Center if gap == 0 => (0, 0),
        Alignment::Center => (gap / 2, (gap / 2).saturating_sub(1)),
    };

    push_text(ops, &spaces(before));
    if bold && !text.is_empty() {
        ops.push(Op::Bold(true));
        push_text(ops, text);
        ops.push(Op::Bold(false));
    } else {
        push_text(ops, text);
    }
    push_text(ops, &spaces(after));
}

/// Append text, merging into a preceding `Text` op.
fn push_text(ops: &mut Vec<Op>, text: &str) {
    if text.is_empty() {
        return;
    }
    match ops.last_mut() {
        Some(Op::Text(prev)) => prev.push_str(text),
        _ => ops.push(Op::Text(text.to_string())),
    }
}

/// Split after `n` characters.
fn split_chars(text: &str, n: usize) -> (&str, &str) {
    let at = text.char_indices().nth(n).map_or(text.len(), |(i, _)| i);
    text.split_at(at)
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}
