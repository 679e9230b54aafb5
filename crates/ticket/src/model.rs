//! Ticket payload data model

use crate::{Result, TicketError};
use serde::Deserialize;

/// Full payload for one ticket: merchant context, order, and line items
#[derive(Debug, Clone, Deserialize)]
pub struct TicketData {
    /// Merchant block (`comercio`)
    #[serde(rename = "comercio")]
    pub merchant: Merchant,

    /// Order block (`pedido`)
    #[serde(rename = "pedido")]
    pub order: Order,

    /// Line items (`productos`)
    #[serde(rename = "productos")]
    pub items: Vec<LineItem>,
}

/// Merchant identity printed in the header
#[derive(Debug, Clone, Deserialize)]
pub struct Merchant {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "direccion")]
    pub address: String,
}

/// One order
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: String,

    /// Order kind, e.g. "Domicilio" (`tipo`)
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,

    /// Table identifier for dine-in orders (`mesa`)
    #[serde(rename = "mesa", default)]
    pub table: Option<String>,

    pub subtotal: f64,

    pub total: f64,

    /// Payment method, e.g. "Efectivo" (`metodo_pago`)
    #[serde(rename = "metodo_pago")]
    pub payment_method: String,

    /// Cash handed over by the customer (`pago_con`)
    #[serde(rename = "pago_con", default)]
    pub amount_tendered: Option<f64>,

    /// Change returned to the customer (`cambio`)
    #[serde(rename = "cambio", default)]
    pub change_due: Option<f64>,

    /// Delivery recipient (`cliente`)
    #[serde(rename = "cliente", default)]
    pub customer: Option<Customer>,
}

/// Delivery recipient printed after the totals
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "direccion")]
    pub address: String,
}

/// One product row
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// Quantity as supplied; the layout does not validate it
    #[serde(rename = "cantidad")]
    pub quantity: i64,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "precio")]
    pub unit_price: f64,

    /// Variant or extras note (`detalle`)
    #[serde(rename = "detalle", default)]
    pub detail: Option<String>,
}

/// Parse a ticket payload from JSON
///
/// # Arguments
/// * `json` - Payload with `comercio`, `pedido`, and `productos` blocks
///
/// # Example
/// ```ignore
/// let data = parse_ticket(r#"{"comercio": {...}, "pedido": {...}, "productos": []}"#)?;
/// ```
pub fn parse_ticket(json: &str) -> Result<TicketData> {
    serde_json::from_str(json).map_err(|e| TicketError::ParseError(e.to_string()))
}
