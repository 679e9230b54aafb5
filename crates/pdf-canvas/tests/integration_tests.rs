//! Integration tests for pdf-canvas
//!
//! These tests assemble real documents and parse them back with lopdf.

use lopdf::content::Content;
use lopdf::{Document, Object};
use pdf_canvas::{Align, PdfCanvas};

/// Parse generated bytes back into a document
fn load(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).expect("Failed to parse generated PDF")
}

/// Decode the first page's content stream into operations
fn page_content(doc: &Document) -> Content {
    let page_id = *doc
        .get_pages()
        .get(&1)
        .expect("Document should have a first page");
    let data = doc
        .get_page_content(page_id)
        .expect("Failed to read page content");
    Content::decode(&data).expect("Failed to decode content stream")
}

/// Look up a font dictionary entry (e.g. "F1") and return its BaseFont name
fn base_font(doc: &Document, resource_name: &str) -> Vec<u8> {
    let page_id = *doc.get_pages().get(&1).expect("missing page");
    let page = doc
        .get_object(page_id)
        .and_then(Object::as_dict)
        .expect("page is not a dictionary");

    let resources = page.get(b"Resources").expect("missing Resources");
    let resources = match resources {
        Object::Reference(id) => doc
            .get_object(*id)
            .and_then(Object::as_dict)
            .expect("Resources reference is not a dictionary"),
        Object::Dictionary(dict) => dict,
        _ => panic!("Resources is neither a dictionary nor a reference"),
    };

    let fonts = resources
        .get(b"Font")
        .and_then(Object::as_dict)
        .expect("missing Font dictionary");
    let font = match fonts.get(resource_name.as_bytes()).expect("missing font") {
        Object::Reference(id) => doc
            .get_object(*id)
            .and_then(Object::as_dict)
            .expect("font reference is not a dictionary"),
        Object::Dictionary(dict) => dict,
        _ => panic!("font entry is neither a dictionary nor a reference"),
    };

    font.get(b"BaseFont")
        .and_then(Object::as_name)
        .expect("missing BaseFont")
        .to_vec()
}

#[test]
fn test_finish_produces_single_page_document() {
    let canvas = PdfCanvas::new(164.41, 170.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");

    let doc = load(&bytes);
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_media_box_matches_canvas_size() {
    let canvas = PdfCanvas::new(164.41, 170.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");
    let doc = load(&bytes);

    let page_id = *doc.get_pages().get(&1).expect("missing page");
    let page = doc
        .get_object(page_id)
        .and_then(Object::as_dict)
        .expect("page is not a dictionary");

    // MediaBox is inherited from the Pages node
    let parent_id = page
        .get(b"Parent")
        .and_then(Object::as_reference)
        .expect("missing Parent");
    let pages = doc
        .get_object(parent_id)
        .and_then(Object::as_dict)
        .expect("Pages is not a dictionary");
    let media_box = pages
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("missing MediaBox");

    assert_eq!(media_box.len(), 4);
    let width = media_box[2].as_float().expect("bad MediaBox width");
    let height = media_box[3].as_float().expect("bad MediaBox height");
    assert!((width - 164.41).abs() < 0.01);
    assert!((height - 170.0).abs() < 0.01);
}

#[test]
fn test_courier_fonts_are_registered() {
    let canvas = PdfCanvas::new(164.41, 170.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");
    let doc = load(&bytes);

    assert_eq!(base_font(&doc, "F1"), b"Courier".to_vec());
    assert_eq!(base_font(&doc, "F2"), b"Courier-Bold".to_vec());
}

#[test]
fn test_text_round_trips_through_content_stream() {
    let mut canvas = PdfCanvas::new(200.0, 200.0);
    canvas.draw_text(10.0, 100.0, "HELLO", Align::Left, false, 8.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");

    let doc = load(&bytes);
    let content = page_content(&doc);

    let operators: Vec<&str> = content
        .operations
        .iter()
        .map(|op| op.operator.as_str())
        .collect();
    assert_eq!(operators, vec!["BT", "Tf", "Td", "Tj", "ET"]);

    let tj = &content.operations[3];
    match &tj.operands[0] {
        Object::String(text, _) => assert_eq!(text, b"HELLO"),
        other => panic!("Tj operand is not a string: {other:?}"),
    }
}

#[test]
fn test_bold_text_uses_second_font() {
    let mut canvas = PdfCanvas::new(200.0, 200.0);
    canvas.draw_text(10.0, 100.0, "TOTAL:", Align::Left, true, 8.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");

    let doc = load(&bytes);
    let content = page_content(&doc);

    let tf = &content.operations[1];
    assert_eq!(tf.operator, "Tf");
    assert_eq!(tf.operands[0], Object::Name(b"F2".to_vec()));
}

#[test]
fn test_dashed_line_round_trips() {
    let mut canvas = PdfCanvas::new(200.0, 200.0);
    canvas.draw_line(5.0, 50.0, 195.0, 50.0, true);
    let bytes = canvas.finish().expect("Failed to finish canvas");

    let doc = load(&bytes);
    let content = page_content(&doc);

    let operators: Vec<&str> = content
        .operations
        .iter()
        .map(|op| op.operator.as_str())
        .collect();
    assert_eq!(operators, vec!["d", "m", "l", "S", "d"]);
}

#[test]
fn test_mixed_operations_preserve_order() {
    let mut canvas = PdfCanvas::new(200.0, 400.0);
    canvas.draw_text(100.0, 380.0, "CASA X", Align::Center, true, 10.0);
    canvas.draw_line(5.0, 370.0, 195.0, 370.0, true);
    canvas.draw_text(5.0, 350.0, "FECHA: 01/01/2026", Align::Left, false, 8.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");

    let doc = load(&bytes);
    let content = page_content(&doc);

    let operators: Vec<&str> = content
        .operations
        .iter()
        .map(|op| op.operator.as_str())
        .collect();
    assert_eq!(
        operators,
        vec!["BT", "Tf", "Td", "Tj", "ET", "d", "m", "l", "S", "d", "BT", "Tf", "Td", "Tj", "ET"]
    );
}

#[test]
fn test_non_latin_text_still_parses() {
    let mut canvas = PdfCanvas::new(200.0, 200.0);
    canvas.draw_text(100.0, 100.0, "¡GRACIAS POR SU COMPRA!", Align::Center, true, 8.0);
    let bytes = canvas.finish().expect("Failed to finish canvas");

    let doc = load(&bytes);
    let content = page_content(&doc);

    let tj = &content.operations[3];
    match &tj.operands[0] {
        Object::String(text, _) => {
            assert_eq!(text[0], 0xA1);
            assert!(text.ends_with(b"COMPRA!"));
        }
        other => panic!("Tj operand is not a string: {other:?}"),
    }
}
