use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Cart rejected request: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::Rejected(reason) => CartError::Rejected(reason),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
