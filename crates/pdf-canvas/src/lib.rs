//! PDF Canvas - From-scratch single-page PDF generation
//!
//! This crate provides functionality for:
//! - Creating a single-page PDF of arbitrary dimensions
//! - Drawing aligned text with the base-14 Courier fonts
//! - Drawing solid or dashed line segments
//! - Saving the document to a file or a byte buffer
//!
//! # Example
//!
//! ```ignore
//! use pdf_canvas::{Align, PdfCanvas};
//!
//! let mut canvas = PdfCanvas::new(164.4, 170.0);
//! canvas.draw_text(82.2, 150.0, "HELLO", Align::Center, true, 10.0);
//! canvas.draw_line(5.7, 140.0, 158.7, 140.0, true);
//! canvas.save("output.pdf")?;
//! ```

mod document;
mod graphics;
mod text;

pub use document::PdfCanvas;
pub use text::{encode_winansi, text_width, GLYPH_WIDTH_RATIO};

use thiserror::Error;

/// Errors that can occur while assembling or saving a canvas
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }
}
