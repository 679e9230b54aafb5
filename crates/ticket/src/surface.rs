//! Drawing-backend boundary

use crate::Result;
use pdf_canvas::{Align, PdfCanvas};

/// The narrow drawing interface the composer writes against
///
/// Coordinates are PDF points with a bottom-left origin. Any backend that
/// can place aligned monospaced text and stroke line segments can render a
/// ticket; the composer never sees an output format.
pub trait Surface {
    /// Draw one line of text
    ///
    /// `x` is the left edge, center point, or right edge of the text
    /// depending on `align`.
    fn draw_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        align: Align,
        bold: bool,
        size: f64,
    ) -> Result<()>;

    /// Draw a line segment, dashed or solid
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, dashed: bool) -> Result<()>;
}

impl Surface for PdfCanvas {
    fn draw_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        align: Align,
        bold: bool,
        size: f64,
    ) -> Result<()> {
        PdfCanvas::draw_text(self, x, y, text, align, bold, size);
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, dashed: bool) -> Result<()> {
        PdfCanvas::draw_line(self, x1, y1, x2, y2, dashed);
        Ok(())
    }
}

/// One recorded text row
#[derive(Debug, Clone, PartialEq)]
pub struct PrintedRow {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: Align,
    pub bold: bool,
    pub size: f64,
}

/// Text-only backend that records every call instead of drawing
///
/// Tests assert on document structure through this without decoding PDF
/// bytes.
#[derive(Debug, Default)]
pub struct VirtualPrinter {
    /// Text rows in draw order
    pub rows: Vec<PrintedRow>,
    /// Line segments as (x1, y1, x2, y2, dashed)
    pub lines: Vec<(f64, f64, f64, f64, bool)>,
}

impl VirtualPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of all recorded rows, in draw order
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.text.clone()).collect()
    }

    /// The first recorded row whose text equals `text`
    pub fn row(&self, text: &str) -> Option<&PrintedRow> {
        self.rows.iter().find(|row| row.text == text)
    }
}

impl Surface for VirtualPrinter {
    fn draw_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        align: Align,
        bold: bool,
        size: f64,
    ) -> Result<()> {
        self.rows.push(PrintedRow {
            text: text.to_string(),
            x,
            y,
            align,
            bold,
            size,
        });
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, dashed: bool) -> Result<()> {
        self.lines.push((x1, y1, x2, y2, dashed));
        Ok(())
    }
}
