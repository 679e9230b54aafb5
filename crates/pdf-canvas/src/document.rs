//! Single-page canvas and document assembly

use crate::graphics::line_operations;
use crate::text::text_operations;
use crate::{Align, CanvasError, Result};
use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::xref::XrefType;
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

/// Font resource names registered on the page
const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// A single-page canvas accumulating draw operations
///
/// Operations are buffered in memory; the PDF document is assembled once,
/// when the canvas is finished or saved.
pub struct PdfCanvas {
    width: f64,
    height: f64,
    operations: Vec<Operation>,
}

impl PdfCanvas {
    /// Create a canvas for a single page of the given size in points
    ///
    /// # Example
    /// ```ignore
    /// let canvas = PdfCanvas::new(164.4, 170.0);
    /// ```
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            operations: Vec::new(),
        }
    }

    /// Page width in points
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height in points
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Draw one line of text
    ///
    /// # Arguments
    /// * `x` - X coordinate in points; left edge, center point, or right
    ///   edge of the text depending on `align`
    /// * `y` - Baseline y coordinate in points (from the bottom)
    /// * `text` - Text to draw
    /// * `align` - Horizontal alignment relative to `x`
    /// * `bold` - Use Courier-Bold instead of Courier
    /// * `size` - Font size in points
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, align: Align, bold: bool, size: f64) {
        // Nothing to render
        if text.is_empty() {
            return;
        }

        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        self.operations
            .extend(text_operations(text, x, y, align, font, size));
    }

    /// Draw a line segment, dashed (1 on, 1 off) or solid
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, dashed: bool) {
        self.operations
            .extend(line_operations(x1, y1, x2, y2, dashed));
    }

    /// Assemble the document and return its bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut doc = self.into_document()?;

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| CanvasError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Assemble the document and write it to a file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let mut doc = self.into_document()?;

        doc.save(path)
            .map_err(|e| CanvasError::SaveError(e.to_string()))?;

        Ok(())
    }

    /// Build the lopdf document: one page, Courier font resources, a single
    /// content stream, and an Info dictionary.
    fn into_document(self) -> Result<Document> {
        let mut doc = Document::with_version("1.4");
        doc.reference_table.cross_reference_type = XrefType::CrossReferenceTable;

        let pages_id = doc.new_object_id();

        let font_regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let font_bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier-Bold",
            "Encoding" => "WinAnsiEncoding",
        });

        let content = Content {
            operations: self.operations,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => font_regular_id,
                FONT_BOLD => font_bold_id,
            },
        });

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        doc.set_object(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Count" => 1,
                "Kids" => vec![page_id.into()],
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    (self.width as f32).into(),
                    (self.height as f32).into(),
                ],
            },
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let date = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let info_id = doc.add_object(dictionary! {
            "Producer" => Object::string_literal("ticket58"),
            "CreationDate" => Object::string_literal(date),
        });
        doc.trailer.set("Info", info_id);

        doc.compress();

        Ok(doc)
    }
}
