use garde::Validate;
use tracing::warn;

use crate::actor_framework::Entity;
use crate::domain::{describe_report, Order, OrderCreate};
use crate::pricing::line_total;
use crate::store::ORDERS;

use super::actions::{OrderAction, OrderActionResult};

/// Validates the payload and re-derives `total` from quantity and unit price,
/// so a stored order never carries a total that disagrees with its line.
fn checked(payload: &OrderCreate) -> Result<f64, String> {
    payload.validate().map_err(|r| describe_report(&r))?;
    let total = line_total(payload.quantity as f64, payload.unit_price);
    if (total - payload.total).abs() > 1e-6 {
        warn!(submitted = payload.total, recomputed = total, "Submitted order total disagrees with its line");
    }
    Ok(total)
}

impl Entity for Order {
    type CreatePayload = OrderCreate;
    type Patch = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    const COLLECTION: &'static str = ORDERS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, payload: OrderCreate) -> Result<Self, String> {
        let total = checked(&payload)?;
        Ok(Self {
            id,
            number: payload.number,
            customer_id: payload.customer_id,
            employee_id: payload.employee_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
            total: Some(total),
            status: payload.status,
            ..Self::default()
        })
    }

    /// The edit form submits the whole order; every field is replaced.
    fn on_update(&mut self, patch: OrderCreate) -> Result<(), String> {
        let total = checked(&patch)?;
        self.number = patch.number;
        self.customer_id = patch.customer_id;
        self.employee_id = patch.employee_id;
        self.product_id = patch.product_id;
        self.quantity = patch.quantity;
        self.unit_price = patch.unit_price;
        self.total = Some(total);
        self.status = patch.status;
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::SetStatus(status) => {
                if status.as_str().trim().is_empty() {
                    return Err("status: status is required".to_string());
                }
                let previous = std::mem::replace(&mut self.status, status);
                Ok(OrderActionResult::SetStatus(previous))
            }
        }
    }
}
