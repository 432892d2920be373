use std::fmt;

use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{numeric, positive};

/// Order status. Known values get their own variant; anything else a screen
/// wrote is kept verbatim so reports bucket it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub const PENDING: &'static str = "Pendente";
    pub const IN_PROGRESS: &'static str = "Em Andamento";
    pub const COMPLETED: &'static str = "Concluído";

    /// The options offered by the order form, in form order.
    pub fn choices() -> [OrderStatus; 3] {
        [OrderStatus::Completed, OrderStatus::Pending, OrderStatus::InProgress]
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => Self::PENDING,
            OrderStatus::InProgress => Self::IN_PROGRESS,
            OrderStatus::Completed => Self::COMPLETED,
            OrderStatus::Other(s) => s.as_str(),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Other(String::new())
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::PENDING => OrderStatus::Pending,
            Self::IN_PROGRESS => OrderStatus::InProgress,
            Self::COMPLETED => OrderStatus::Completed,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        OrderStatus::from(s.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer order (`pedidos`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "numeric::text")]
    pub id: String,
    /// Free-text order number typed by the user.
    #[serde(rename = "numeroPedido", deserialize_with = "numeric::text")]
    pub number: String,
    /// Soft reference to a customer id.
    #[serde(rename = "cliente", deserialize_with = "numeric::text")]
    pub customer_id: String,
    /// Soft reference to an employee id.
    #[serde(rename = "funcionario", deserialize_with = "numeric::text")]
    pub employee_id: String,
    /// Soft reference to a product id.
    #[serde(rename = "produto", deserialize_with = "numeric::text")]
    pub product_id: String,
    #[serde(rename = "quantidade", deserialize_with = "numeric::count")]
    pub quantity: u32,
    /// Snapshot of the product's price when it was selected. Not a join: later
    /// product price edits must not rewrite historical orders.
    #[serde(rename = "precoUnitario", deserialize_with = "numeric::number")]
    pub unit_price: f64,
    /// `quantity * unit_price` as computed when the order was saved. Older
    /// records may lack it.
    #[serde(
        deserialize_with = "numeric::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<f64>,
    #[serde(deserialize_with = "lenient_status")]
    pub status: OrderStatus,
    /// Keys this crate does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A status stored as something other than text (`null`, a number) is read
/// through the same text rules as every other field.
fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OrderStatus, D::Error> {
    numeric::text(deserializer).map(OrderStatus::from)
}

impl Order {
    /// Recomputed line total, independent of the stored `total`.
    pub fn line_total(&self) -> f64 {
        crate::pricing::line_total(self.quantity as f64, self.unit_price)
    }
}

/// Payload for placing an order, and the full replacement submitted by the
/// edit form. `total` is recomputed before it is stored.
#[derive(Debug, Clone, Validate)]
pub struct OrderCreate {
    #[garde(length(min = 1))]
    pub number: String,
    #[garde(length(min = 1))]
    pub customer_id: String,
    #[garde(length(min = 1))]
    pub employee_id: String,
    #[garde(length(min = 1))]
    pub product_id: String,
    #[garde(range(min = 1))]
    pub quantity: u32,
    #[garde(custom(positive))]
    pub unit_price: f64,
    #[garde(custom(positive))]
    pub total: f64,
    #[garde(custom(known_or_named))]
    pub status: OrderStatus,
}

fn known_or_named(status: &OrderStatus, _ctx: &()) -> garde::Result {
    if status.as_str().trim().is_empty() {
        return Err(garde::Error::new("status is required"));
    }
    Ok(())
}
