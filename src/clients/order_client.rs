use tracing::{error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::{CustomerClient, EmployeeClient, ProductClient};
use crate::domain::{Order, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::pricing::{LineItemPricer, OrderDraft};
use crate::reporting::{order_listing, OrderListingRow, OrderReport};

/// Client for interacting with the Order actor.
///
/// Besides CRUD it drives the order form (pricing a draft from the current
/// catalog) and assembles the report views, which need the customer,
/// employee and product collections alongside the orders.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    customer_client: CustomerClient,
    employee_client: EmployeeClient,
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        customer_client: CustomerClient,
        employee_client: EmployeeClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            customer_client,
            employee_client,
            product_client,
        }
    }

    /// Selects a product on the draft, snapshotting its current price.
    ///
    /// Returns the unit price now on the draft.
    #[instrument(skip(self, draft))]
    pub async fn select_product(&self, draft: &mut OrderDraft, product_id: &str) -> Result<f64, OrderError> {
        let products = self.product_client.list_products().await.map_err(|e| {
            error!(error = %e, "Product lookup failed");
            OrderError::InvalidProduct(format!("Product lookup failed: {e}"))
        })?;

        LineItemPricer::new(&products)
            .select_product(draft, product_id)
            .ok_or_else(|| {
                error!("Product not found");
                OrderError::InvalidProduct(product_id.to_string())
            })
    }

    /// Loads a saved order into a draft for the edit form.
    #[instrument(skip(self))]
    pub async fn edit_draft(&self, id: String) -> Result<OrderDraft, OrderError> {
        match self.inner.get(id.clone()).await? {
            Some(order) => Ok(OrderDraft::from_order(&order)),
            None => Err(OrderError::NotFound(id)),
        }
    }

    /// Places a new order. The total is recomputed from the draft's quantity
    /// and unit price before it is validated and stored.
    #[instrument(skip(self))]
    pub async fn place_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        info!("Processing place_order request (Client Side)");
        let payload = draft.into_create().map_err(|e| {
            error!(error = %e, "Order draft refused");
            OrderError::ValidationError(e)
        })?;
        let order = self.inner.create(payload).await?;
        info!(order_id = %order.id, total = ?order.total, "Order placed");
        Ok(order)
    }

    /// Replaces a saved order with the edited draft.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: String, draft: OrderDraft) -> Result<Order, OrderError> {
        info!("Processing update_order request (Client Side)");
        let payload = draft.into_create().map_err(OrderError::ValidationError)?;
        Ok(self.inner.update(id, payload).await?)
    }

    /// Moves an order to `status`, returning the status it had before.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: String, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        match self.inner.perform_action(id, OrderAction::SetStatus(status)).await? {
            OrderActionResult::SetStatus(previous) => Ok(previous),
        }
    }

    /// Builds the report screen from the current orders and customers.
    #[instrument(skip(self))]
    pub async fn report(&self) -> Result<OrderReport, OrderError> {
        let orders = self.inner.list().await?;
        let customers = self
            .customer_client
            .list_customers()
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        info!(orders = orders.len(), customers = customers.len(), "Building order report");
        Ok(OrderReport::build(&orders, &customers))
    }

    /// Order list screen rows with customer, employee and product names.
    #[instrument(skip(self))]
    pub async fn listing(&self) -> Result<Vec<OrderListingRow>, OrderError> {
        let orders = self.inner.list().await?;
        let customers = self
            .customer_client
            .list_customers()
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        let employees = self
            .employee_client
            .list_employees()
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        let products = self
            .product_client
            .list_products()
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        Ok(order_listing(&orders, &customers, &employees, &products))
    }
}

crate::impl_client_methods!(OrderClient, Order, OrderError, order);
