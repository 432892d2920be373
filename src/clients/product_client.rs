use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductPatch};
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

crate::impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// Changes the catalog price. Orders already placed keep the price they
    /// were saved with.
    #[instrument(skip(self))]
    pub async fn set_price(&self, id: String, unit_price: f64) -> Result<Product, ProductError> {
        debug!("Sending request");
        let patch = ProductPatch {
            unit_price: Some(unit_price),
            ..ProductPatch::default()
        };
        self.inner.update(id, patch).await.map_err(ProductError::from)
    }
}
