//! Employee records. Orders reference employees as the seller.

pub mod entity;
pub mod error;

pub use error::*;
