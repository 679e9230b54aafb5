//! Downward-only write cursor

use crate::layout::{FONT_SIZE_NORMAL, LINE_HEIGHT, MARGIN};
use crate::surface::Surface;
use crate::Result;
use pdf_canvas::Align;

/// Alignment, weight, and size for one row of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub align: Align,
    pub bold: bool,
    pub size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            align: Align::Left,
            bold: false,
            size: FONT_SIZE_NORMAL,
        }
    }
}

impl TextStyle {
    /// Left-aligned regular text at the normal size
    pub fn normal() -> Self {
        Self::default()
    }

    /// Bold variant of the normal style
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    /// Centered variant of the normal style
    pub fn centered() -> Self {
        Self {
            align: Align::Center,
            ..Self::default()
        }
    }
}

/// Cursor owning the current vertical write position on a page
///
/// Starts one line below the top margin and only ever moves downward, one
/// line height at a time. There is no re-seeking and no overwrite.
pub struct TextCursor<'a, S: Surface> {
    surface: &'a mut S,
    width: f64,
    y: f64,
}

impl<'a, S: Surface> TextCursor<'a, S> {
    /// Create a cursor for a page of the given size in points
    pub fn new(surface: &'a mut S, width: f64, height: f64) -> Self {
        Self {
            surface,
            width,
            y: height - MARGIN - LINE_HEIGHT,
        }
    }

    /// Current baseline position, measured from the page bottom
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Draw one row and advance to the next line slot
    ///
    /// Left-aligned rows start at the left margin, centered rows center on
    /// the page, right-aligned rows end at the right margin.
    pub fn write_line(&mut self, text: &str, style: TextStyle) -> Result<()> {
        self.place(text, 0.0, style)?;
        self.advance();
        Ok(())
    }

    /// Draw on the current line slot without advancing
    ///
    /// Multi-column rows are built from several `place` calls followed by
    /// one [`advance`](Self::advance). `indent` shifts a left-aligned
    /// column right of the margin; centered and right-aligned text ignores
    /// it.
    pub fn place(&mut self, text: &str, indent: f64, style: TextStyle) -> Result<()> {
        let x = match style.align {
            Align::Left => MARGIN + indent,
            Align::Center => self.width / 2.0,
            Align::Right => self.width - MARGIN,
        };
        self.surface
            .draw_text(x, self.y, text, style.align, style.bold, style.size)
    }

    /// Draw right-aligned on the row emitted immediately before this slot
    ///
    /// Totals place their value on the label row this way, so label and
    /// value share one visual line.
    pub fn place_back(&mut self, text: &str, style: TextStyle) -> Result<()> {
        self.surface.draw_text(
            self.width - MARGIN,
            self.y + LINE_HEIGHT,
            text,
            Align::Right,
            style.bold,
            style.size,
        )
    }

    /// Move down one line slot without drawing
    pub fn advance(&mut self) {
        self.y -= LINE_HEIGHT;
    }

    /// Dashed rule across the vertical midpoint of the next line slot,
    /// then advance
    pub fn draw_separator(&mut self) -> Result<()> {
        let y = self.y + LINE_HEIGHT / 2.0;
        self.surface
            .draw_line(MARGIN, y, self.width - MARGIN, y, true)?;
        self.advance();
        Ok(())
    }
}
