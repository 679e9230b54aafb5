//! Text measurement, encoding, and operator generation

use crate::Align;
use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

/// Glyph advance of the Courier fonts as a fraction of the em square.
///
/// Every glyph in Courier and Courier-Bold is 600/1000 units wide, so text
/// width is a pure function of character count and font size.
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Width of `text` in points at the given font size.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * GLYPH_WIDTH_RATIO * font_size
}

/// Encode text for a WinAnsiEncoding string operand.
///
/// Code points below 256 map to single bytes; anything outside that range
/// is replaced with `?`. This covers the Latin-1 block WinAnsiEncoding and
/// Unicode agree on, which is all a Spanish-language receipt needs.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 256 {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

/// Generate PDF operators for one aligned text string
///
/// Creates the text operators (BT, Tf, Td, Tj, ET) to show `text` at a
/// specific position. The x coordinate is shifted left by half the text
/// width for centered text and by the full width for right-aligned text,
/// so `x` means left edge, center point, or right edge respectively.
///
/// # Arguments
/// * `text` - Text to show (WinAnsi-encoded into the Tj operand)
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Horizontal alignment relative to `x`
/// * `font` - Font resource name (e.g. "F1")
/// * `size` - Font size in points
pub(crate) fn text_operations(
    text: &str,
    x: f64,
    y: f64,
    align: Align,
    font: &str,
    size: f64,
) -> Vec<Operation> {
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -text_width(text, size) / 2.0,
        Align::Right => -text_width(text, size),
    };
    let final_x = x + x_offset;

    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), (size as f32).into()]),
        Operation::new("Td", vec![(final_x as f32).into(), (y as f32).into()]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_winansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}
