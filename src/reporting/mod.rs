//! Order aggregation for the report screen.
//!
//! Everything here is a pure function of the collections passed in: no I/O, no
//! hidden state, and the same input always yields the same buckets in the same
//! order. Sorting for display is left to the caller.

mod listing;
mod tally;

pub use listing::*;
pub use tally::Tally;

use serde::Serialize;
use tracing::warn;

use crate::domain::{Customer, Order};
use crate::lookup::{RecordIndex, UNKNOWN_LABEL};
use crate::pricing::format_amount;

/// Number of orders per status, keyed by the status text exactly as stored.
pub fn count_by_status(orders: &[Order]) -> Tally<usize> {
    let mut counts = Tally::new();
    for order in orders {
        *counts.bucket(order.status.as_str()) += 1;
    }
    counts
}

/// An order whose stored amounts could not be used as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQualityIssue {
    pub order_id: String,
    pub reason: String,
}

/// Sum of order totals per customer name, plus the orders whose total had to
/// be reconstructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerTotals {
    pub totals: Tally<f64>,
    pub issues: Vec<DataQualityIssue>,
}

/// Sums `total` per customer name. Orders pointing at a customer that no
/// longer exists are summed under [`UNKNOWN_LABEL`].
///
/// A stored total is trusted when present. When it is missing the order
/// contributes `quantity * unit_price` instead and is reported in
/// [`CustomerTotals::issues`].
pub fn total_by_customer(orders: &[Order], customers: &[Customer]) -> CustomerTotals {
    let index = RecordIndex::new(customers, |c| c.id.as_str());
    let mut result = CustomerTotals::default();

    for order in orders {
        let amount = match order.total {
            Some(total) if total.is_finite() => total,
            stored => {
                let reason = if stored.is_some() {
                    "stored total is not a finite number"
                } else {
                    "stored total is missing"
                };
                warn!(order_id = %order.id, reason, "Using quantity x unit price for order total");
                result.issues.push(DataQualityIssue {
                    order_id: order.id.clone(),
                    reason: reason.to_string(),
                });
                order.line_total()
            }
        };

        let name = index.label_or_unknown(&order.customer_id, |c| c.name.as_str());
        *result.totals.bucket(name) += amount;
    }

    result
}

/// One line of the report table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub number: String,
    pub customer: String,
    pub status: String,
    pub total: String,
}

pub fn order_rows(orders: &[Order], customers: &[Customer]) -> Vec<OrderRow> {
    let index = RecordIndex::new(customers, |c| c.id.as_str());
    orders
        .iter()
        .map(|order| OrderRow {
            number: order.number.clone(),
            customer: index
                .label_or_unknown(&order.customer_id, |c| c.name.as_str())
                .to_string(),
            status: order.status.to_string(),
            total: format_amount(order.total.unwrap_or_else(|| order.line_total())),
        })
        .collect()
}

/// Everything the report screen renders: the table and both chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReport {
    pub rows: Vec<OrderRow>,
    pub by_status: Tally<usize>,
    pub by_customer: CustomerTotals,
}

impl OrderReport {
    pub fn build(orders: &[Order], customers: &[Customer]) -> Self {
        Self {
            rows: order_rows(orders, customers),
            by_status: count_by_status(orders),
            by_customer: total_by_customer(orders, customers),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
