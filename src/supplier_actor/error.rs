use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplierError {
    #[error("Supplier not found: {0}")]
    NotFound(String),
    #[error("Supplier validation error: {0}")]
    ValidationError(String),
    #[error("Supplier database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(SupplierError);
