use crate::customer_actor::CustomerError;
use crate::actor_framework::ResourceClient;
use crate::domain::Customer;

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

crate::impl_basic_client!(CustomerClient, Customer, CustomerError, customer);
