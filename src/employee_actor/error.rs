use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(String),
    #[error("Employee validation error: {0}")]
    ValidationError(String),
    #[error("Employee database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(EmployeeError);
