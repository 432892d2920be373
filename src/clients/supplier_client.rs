use crate::supplier_actor::SupplierError;
use crate::actor_framework::ResourceClient;
use crate::domain::Supplier;

/// Client for interacting with the Supplier actor.
#[derive(Clone)]
pub struct SupplierClient {
    inner: ResourceClient<Supplier>,
}

crate::impl_basic_client!(SupplierClient, Supplier, SupplierError, supplier);
