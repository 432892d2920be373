//! Typed clients, one per collection actor.

mod macros;

mod customer_client;
mod employee_client;
mod order_client;
mod product_client;
mod supplier_client;

pub use customer_client::CustomerClient;
pub use employee_client::EmployeeClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use supplier_client::SupplierClient;
