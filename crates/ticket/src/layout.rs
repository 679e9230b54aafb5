//! Page geometry and height estimation

/// Points per millimeter (PDF user space runs at 72 points per inch).
pub const MM: f64 = 72.0 / 25.4;

/// Width of a 58mm thermal roll, in points.
pub const PAGE_WIDTH: f64 = 58.0 * MM;

/// Horizontal margin kept clear on both page edges, in points.
pub const MARGIN: f64 = 2.0 * MM;

/// Vertical spacing between successive rows, in points.
pub const LINE_HEIGHT: f64 = 10.0;

/// Font size for regular rows.
pub const FONT_SIZE_NORMAL: f64 = 8.0;

/// Font size for the merchant name row.
pub const FONT_SIZE_HEADER: f64 = 10.0;

/// Font size for item detail rows.
pub const FONT_SIZE_DETAIL: f64 = FONT_SIZE_NORMAL - 1.0;

/// Offset of the item-name column from the left margin, in points.
pub const PRODUCT_COLUMN: f64 = 10.0 * MM;

/// Item names are cut to this many characters.
pub const ITEM_NAME_WIDTH: usize = 18;

/// Customer addresses wrap into chunks of this many characters.
pub const ADDRESS_CHUNK_WIDTH: usize = 25;

/// Line allowance for the fixed sections: header (4), order info (up to 4),
/// separators (2), totals (3), footer (2).
const BASE_LINES: usize = 15;

/// Line allowance per item: the primary row plus a possible detail row.
const LINES_PER_ITEM: usize = 2;

/// Estimate the page height for a ticket with `item_count` items.
///
/// This over-approximates on purpose: trailing blank space at the bottom of
/// the roll is acceptable, running out of vertical space is not.
pub fn estimate_height(item_count: usize) -> f64 {
    (BASE_LINES + LINES_PER_ITEM * item_count) as f64 * LINE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_estimate_height_no_items() {
        assert_eq!(estimate_height(0), 150.0);
    }

    #[test]
    fn test_estimate_height_one_item() {
        assert_eq!(estimate_height(1), 170.0);
    }

    #[test]
    fn test_estimate_height_formula() {
        for n in 0..50 {
            assert_eq!(estimate_height(n), (15 + 2 * n) as f64 * LINE_HEIGHT);
        }
    }

    #[test]
    fn test_page_width_is_58mm() {
        assert!((PAGE_WIDTH - 164.409).abs() < 0.01);
    }
}
