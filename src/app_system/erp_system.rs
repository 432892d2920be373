use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::{uuid_ids, CollectionActor, Entity, IdGenerator, ResourceClient};
use crate::app_system::AppConfig;
use crate::clients::{CustomerClient, EmployeeClient, OrderClient, ProductClient, SupplierClient};
use crate::domain::{Customer, Employee, Order, Product, Supplier};
use crate::employee_actor::EmployeeError;
use crate::locality::StateNames;
use crate::product_actor::ProductError;
use crate::reporting::{
    employee_listing, product_listing, supplier_listing, EmployeeListingRow, ProductListingRow,
    SupplierListingRow,
};
use crate::store::{JsonFileStore, RecordStore, StoreError};
use crate::supplier_actor::SupplierError;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting one actor per collection, wiring the clients
/// together, and handling shutdown.
pub struct ErpSystem {
    pub customer_client: CustomerClient,
    pub supplier_client: SupplierClient,
    pub employee_client: EmployeeClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ErpSystem {
    /// Starts the system on the file-backed store under `config.data_dir`.
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let store = JsonFileStore::open(config.data_dir.clone())?;
        info!(data_dir = %store.data_dir().display(), "Record store opened");
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn new(store: Arc<dyn RecordStore>, config: &AppConfig) -> Self {
        Self::with_ids(store, config.channel_buffer, |_| uuid_ids())
    }

    /// Like [`ErpSystem::new`], with the id generator for each collection
    /// chosen by `ids`.
    pub fn with_ids(
        store: Arc<dyn RecordStore>,
        buffer_size: usize,
        ids: impl Fn(&'static str) -> IdGenerator,
    ) -> Self {
        let mut handles = Vec::new();

        let customer_client = CustomerClient::new(start(&store, buffer_size, ids(Customer::COLLECTION), &mut handles));
        let supplier_client = SupplierClient::new(start(&store, buffer_size, ids(Supplier::COLLECTION), &mut handles));
        let employee_client = EmployeeClient::new(start(&store, buffer_size, ids(Employee::COLLECTION), &mut handles));
        let product_client = ProductClient::new(start(&store, buffer_size, ids(Product::COLLECTION), &mut handles));
        let order_client = OrderClient::new(
            start(&store, buffer_size, ids(Order::COLLECTION), &mut handles),
            customer_client.clone(),
            employee_client.clone(),
            product_client.clone(),
        );

        info!(actors = handles.len(), "System started");

        Self {
            customer_client,
            supplier_client,
            employee_client,
            product_client,
            order_client,
            handles,
        }
    }

    pub async fn product_listing(&self) -> Result<Vec<ProductListingRow>, ProductError> {
        let products = self.product_client.list_products().await?;
        let suppliers = self
            .supplier_client
            .list_suppliers()
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
        Ok(product_listing(&products, &suppliers))
    }

    pub async fn employee_listing(&self, states: &StateNames) -> Result<Vec<EmployeeListingRow>, EmployeeError> {
        let employees = self.employee_client.list_employees().await?;
        Ok(employee_listing(&employees, states))
    }

    pub async fn supplier_listing(&self, states: &StateNames) -> Result<Vec<SupplierListingRow>, SupplierError> {
        let suppliers = self.supplier_client.list_suppliers().await?;
        Ok(supplier_listing(&suppliers, states))
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop once every client holding their sender is gone; the order
        // client holds clones of the others.
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.supplier_client);
        drop(self.employee_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn start<T: Entity>(
    store: &Arc<dyn RecordStore>,
    buffer_size: usize,
    next_id: IdGenerator,
    handles: &mut Vec<tokio::task::JoinHandle<()>>,
) -> ResourceClient<T> {
    let (actor, client) = CollectionActor::<T>::new(buffer_size, Arc::clone(store), next_id);
    handles.push(tokio::spawn(actor.run()));
    client
}
