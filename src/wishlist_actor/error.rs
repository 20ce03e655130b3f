use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    #[error("Wishlist not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for WishlistError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => WishlistError::NotFound(id),
            other => WishlistError::ActorCommunicationError(other.to_string()),
        }
    }
}
