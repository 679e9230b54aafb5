//! Ticket - 58mm thermal receipt layout engine
//!
//! This crate provides:
//! - A serde data model for the ticket JSON payload
//! - Page-height estimation from the item count
//! - A downward-only text cursor with aligned row placement
//! - A fixed-section composer (header, order info, items, totals,
//!   customer, footer) with a fail-soft payment-detail block
//! - PDF output through the pdf-canvas backend
//!
//! # Example
//!
//! ```ignore
//! use ticket::{parse_ticket, render_to_pdf};
//!
//! let data = parse_ticket(payload_json)?;
//! let bytes = render_to_pdf(&data)?;
//! std::fs::write("ticket.pdf", bytes)?;
//! ```

mod compose;
mod cursor;
pub mod layout;
mod model;
mod surface;
mod text;

pub use compose::{compose, render_to_file, render_to_pdf};
pub use cursor::{TextCursor, TextStyle};
pub use model::{parse_ticket, Customer, LineItem, Merchant, Order, TicketData};
pub use pdf_canvas::Align;
pub use surface::{PrintedRow, Surface, VirtualPrinter};
pub use text::{format_money, truncate_chars, wrap_chunks};

use thiserror::Error;

/// Errors that can occur while building a ticket
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Failed to parse ticket data: {0}")]
    ParseError(String),

    #[error("Canvas error: {0}")]
    CanvasError(#[from] pdf_canvas::CanvasError),
}

/// Result type for ticket operations
pub type Result<T> = std::result::Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_keeps_cause() {
        let err = TicketError::ParseError("missing field `productos`".to_string());
        assert!(err.to_string().contains("productos"));
    }
}
