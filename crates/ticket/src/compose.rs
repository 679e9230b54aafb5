//! Section-by-section ticket composition
//!
//! This module walks a [`TicketData`] top to bottom and emits every row of
//! the receipt through a [`TextCursor`]. The section order is fixed:
//! merchant header, order info, item table, totals and payment, optional
//! customer block, farewell footer.

use std::path::Path;

use chrono::Local;
use pdf_canvas::{Align, PdfCanvas};

use crate::cursor::{TextCursor, TextStyle};
use crate::layout::{
    estimate_height, ADDRESS_CHUNK_WIDTH, FONT_SIZE_DETAIL, FONT_SIZE_HEADER, ITEM_NAME_WIDTH,
    PAGE_WIDTH, PRODUCT_COLUMN,
};
use crate::model::{Order, TicketData};
use crate::surface::Surface;
use crate::text::{format_money, truncate_chars, wrap_chunks};
use crate::Result;

/// Outcome of resolving the RECIBIDO/CAMBIO rows for an order
enum PaymentBlock {
    /// Rows are shown with these resolved amounts
    Rendered { tendered: f64, change: f64 },
    /// Non-cash order without a tendered amount, rows are not shown
    Omitted,
    /// Amounts could not be resolved, rows are dropped with a warning
    Skipped(String),
}

/// Decide whether the tendered/change rows appear and with which amounts
///
/// The rows appear when the payment method is cash or when an explicit
/// non-zero tendered amount is present. A cash order without a tendered
/// amount is assumed paid exactly, so the order total stands in for it.
/// Unresolvable amounts never abort the ticket.
fn payment_block(order: &Order) -> PaymentBlock {
    let is_cash = order.payment_method.to_uppercase() == "EFECTIVO";
    let tendered_given = order.amount_tendered.is_some_and(|v| v != 0.0);
    if !is_cash && !tendered_given {
        return PaymentBlock::Omitted;
    }

    let tendered = match order.amount_tendered {
        Some(v) if v != 0.0 => v,
        _ => order.total,
    };
    let change = order.change_due.unwrap_or(0.0);
    if !tendered.is_finite() || !change.is_finite() {
        return PaymentBlock::Skipped(format!(
            "amounts are not finite (recibido {tendered}, cambio {change})"
        ));
    }

    PaymentBlock::Rendered { tendered, change }
}

/// Compose every receipt section onto `surface`
///
/// `width` and `height` are the page dimensions in points; `height` is
/// expected to come from [`estimate_height`] so all sections fit.
pub fn compose<S: Surface>(
    surface: &mut S,
    width: f64,
    height: f64,
    data: &TicketData,
) -> Result<()> {
    let mut cursor = TextCursor::new(surface, width, height);

    // Merchant header
    cursor.write_line(
        &data.merchant.name.to_uppercase(),
        TextStyle {
            align: Align::Center,
            bold: true,
            size: FONT_SIZE_HEADER,
        },
    )?;
    cursor.write_line(
        &format!("Tel: {}", data.merchant.phone),
        TextStyle::centered(),
    )?;
    cursor.write_line(&data.merchant.address, TextStyle::centered())?;
    cursor.draw_separator()?;

    // Order info
    let now = Local::now();
    cursor.write_line(
        &format!("FECHA: {}", now.format("%d/%m/%Y")),
        TextStyle::normal(),
    )?;
    cursor.write_line(
        &format!("HORA:  {}", now.format("%H:%M:%S")),
        TextStyle::normal(),
    )?;
    cursor.write_line(&format!("TICKET: {}", data.order.id), TextStyle::bold())?;
    if let Some(kind) = &data.order.kind {
        cursor.write_line(&format!("MODO: {}", kind.to_uppercase()), TextStyle::bold())?;
    }
    if let Some(table) = &data.order.table {
        if !table.is_empty() {
            cursor.write_line(&format!("MESA: {table}"), TextStyle::bold())?;
        }
    }
    cursor.draw_separator()?;

    // Item table
    cursor.place("Cant", 0.0, TextStyle::bold())?;
    cursor.place("Producto", PRODUCT_COLUMN, TextStyle::bold())?;
    cursor.place(
        "Total",
        0.0,
        TextStyle {
            align: Align::Right,
            ..TextStyle::bold()
        },
    )?;
    cursor.advance();

    for item in &data.items {
        cursor.place(&item.quantity.to_string(), 0.0, TextStyle::normal())?;
        cursor.place(
            truncate_chars(&item.name, ITEM_NAME_WIDTH),
            PRODUCT_COLUMN,
            TextStyle::normal(),
        )?;
        cursor.place(
            &format_money(item.unit_price),
            0.0,
            TextStyle {
                align: Align::Right,
                ..TextStyle::normal()
            },
        )?;
        cursor.advance();

        if let Some(detail) = &item.detail {
            if !detail.is_empty() {
                cursor.write_line(
                    &format!("  *{detail}"),
                    TextStyle {
                        size: FONT_SIZE_DETAIL,
                        ..TextStyle::normal()
                    },
                )?;
            }
        }
    }
    cursor.draw_separator()?;

    // Totals and payment
    cursor.write_line("SUBTOTAL:", TextStyle::normal())?;
    cursor.place_back(&format_money(data.order.subtotal), TextStyle::normal())?;
    cursor.write_line("TOTAL:", TextStyle::bold())?;
    cursor.place_back(&format_money(data.order.total), TextStyle::bold())?;
    cursor.write_line(
        &format!("PAGO: {}", data.order.payment_method.to_uppercase()),
        TextStyle::normal(),
    )?;

    match payment_block(&data.order) {
        PaymentBlock::Rendered { tendered, change } => {
            cursor.write_line(
                &format!("RECIBIDO: {}", format_money(tendered)),
                TextStyle::normal(),
            )?;
            cursor.write_line(
                &format!("CAMBIO:   {}", format_money(change)),
                TextStyle::bold(),
            )?;
        }
        PaymentBlock::Omitted => {}
        PaymentBlock::Skipped(reason) => {
            tracing::warn!("Payment details error: {reason}");
        }
    }

    // Customer block, delivery orders only. No separator follows the
    // totals unless this block does.
    if let Some(customer) = &data.order.customer {
        cursor.draw_separator()?;
        cursor.write_line("CLIENTE:", TextStyle::bold())?;
        cursor.write_line(&customer.name, TextStyle::normal())?;
        cursor.write_line(&customer.phone, TextStyle::normal())?;
        for chunk in wrap_chunks(&customer.address, ADDRESS_CHUNK_WIDTH) {
            cursor.write_line(&chunk, TextStyle::normal())?;
        }
        cursor.draw_separator()?;
    }

    // Footer
    cursor.write_line(
        "¡GRACIAS POR SU COMPRA!",
        TextStyle {
            bold: true,
            ..TextStyle::centered()
        },
    )?;
    cursor.write_line("Vuelva pronto", TextStyle::centered())?;

    Ok(())
}

fn compose_canvas(data: &TicketData) -> Result<PdfCanvas> {
    let height = estimate_height(data.items.len());
    let mut canvas = PdfCanvas::new(PAGE_WIDTH, height);
    compose(&mut canvas, PAGE_WIDTH, height, data)?;
    Ok(canvas)
}

/// Render a ticket to an in-memory PDF
///
/// The page is 58mm wide and exactly as tall as
/// [`estimate_height`] reports for the item count.
pub fn render_to_pdf(data: &TicketData) -> Result<Vec<u8>> {
    Ok(compose_canvas(data)?.finish()?)
}

/// Render a ticket and write the PDF to disk
///
/// # Arguments
///
/// * `data` - Parsed ticket data
/// * `path` - Destination file path
pub fn render_to_file<P: AsRef<Path>>(data: &TicketData, path: P) -> Result<()> {
    Ok(compose_canvas(data)?.save(path)?)
}
