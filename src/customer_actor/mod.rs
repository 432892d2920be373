//! Customer records: registration, edits and removal.

pub mod entity;
pub mod error;

pub use error::*;
