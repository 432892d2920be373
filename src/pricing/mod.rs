//! Line-item pricing for the order form.
//!
//! Keeps an [`OrderDraft`]'s derived amounts consistent while the user picks a
//! product and types a quantity. Editing a draft is infallible: invalid
//! numeric input is coerced to zero so the form always has something to show.
//! Only [`OrderDraft::into_create`] can refuse, when the quantity is not a
//! whole number of units.

mod coerce;
mod currency;

pub use coerce::{
    non_negative_or_zero, parse_number, to_non_negative_number_or_zero, to_number_or_zero,
};
pub use currency::{format_amount, format_currency, format_currency_input};

use tracing::debug;

use crate::domain::{Order, OrderCreate, OrderStatus, Product};
use crate::lookup::RecordIndex;

/// `quantity * unit_price`, with both sides coerced to non-negative.
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    non_negative_or_zero(quantity) * non_negative_or_zero(unit_price)
}

/// Order form state. `quantity` is kept as typed; the amounts are derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub number: String,
    pub customer_id: String,
    pub employee_id: String,
    pub product_id: String,
    pub quantity: String,
    pub unit_price: f64,
    pub total: f64,
    pub status: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a saved order into the form for editing. Amounts come from the
    /// order itself, not from the product's current price.
    pub fn from_order(order: &Order) -> Self {
        Self {
            number: order.number.clone(),
            customer_id: order.customer_id.clone(),
            employee_id: order.employee_id.clone(),
            product_id: order.product_id.clone(),
            quantity: order.quantity.to_string(),
            unit_price: order.unit_price,
            total: order.total.unwrap_or_else(|| order.line_total()),
            status: order.status.to_string(),
        }
    }

    pub fn quantity_value(&self) -> f64 {
        to_non_negative_number_or_zero(&self.quantity)
    }

    /// Converts the draft into a create payload with `total` recomputed from
    /// the coerced quantity. The remaining rules run when the payload is
    /// submitted.
    ///
    /// # Errors
    /// A fractional or out-of-range quantity is refused rather than rounded,
    /// so the stored total always matches the one the form showed.
    pub fn into_create(self) -> Result<OrderCreate, String> {
        let value = self.quantity_value();
        if value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(format!("quantity: must be a whole number of units, got {}", self.quantity.trim()));
        }
        let quantity = value as u32;
        let total = line_total(value, self.unit_price);
        Ok(OrderCreate {
            number: self.number,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            product_id: self.product_id,
            quantity,
            unit_price: self.unit_price,
            total,
            status: OrderStatus::from(self.status),
        })
    }
}

/// Pricing rule bound to the product list the form was loaded with.
pub struct LineItemPricer<'a> {
    products: RecordIndex<'a, Product>,
}

impl<'a> LineItemPricer<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self {
            products: RecordIndex::new(products, |p| p.id.as_str()),
        }
    }

    /// Selects a product and snapshots its price into the draft.
    ///
    /// Returns the new unit price, or `None` when the id matches no product; in
    /// that case the draft is left untouched.
    pub fn select_product(&self, draft: &mut OrderDraft, product_id: &str) -> Option<f64> {
        let product = self.products.get(product_id)?;
        draft.product_id = product.id.clone();
        draft.unit_price = non_negative_or_zero(product.unit_price);
        draft.total = line_total(draft.quantity_value(), draft.unit_price);
        debug!(product_id, unit_price = draft.unit_price, total = draft.total, "Product selected");
        Some(draft.unit_price)
    }

    /// Stores the typed quantity and recomputes the total, which is returned.
    pub fn set_quantity(&self, draft: &mut OrderDraft, raw: &str) -> f64 {
        set_quantity(draft, raw)
    }
}

/// Quantity edits need no product list; exposed standalone for that reason.
pub fn set_quantity(draft: &mut OrderDraft, raw: &str) -> f64 {
    draft.quantity = raw.to_string();
    draft.total = line_total(draft.quantity_value(), draft.unit_price);
    draft.total
}
