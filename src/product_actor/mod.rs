//! Product catalog records. Orders snapshot a product's price when it is
//! selected, so nothing here reaches back into saved orders.

pub mod entity;
pub mod error;

pub use error::*;
