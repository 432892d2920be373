//! Back-office records for a small business: customers, suppliers, employees,
//! products and orders, persisted as named JSON collections, with order
//! pricing and report aggregation on top.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod formatting;
pub mod locality;
pub mod lookup;
pub mod pricing;
pub mod reporting;
pub mod store;

pub mod customer_actor;
pub mod employee_actor;
pub mod order_actor;
pub mod product_actor;
pub mod supplier_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
