use thiserror::Error;
use crate::cart_actor::CartError;
use crate::config::ConfigError;
use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use crate::wishlist_actor::WishlistError;

/// Failures while starting, driving, or stopping the whole store.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Seed catalog is invalid: {0}")]
    SeedCatalog(#[from] serde_json::Error),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Wishlist(#[from] WishlistError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Sign-in rejected for {0}")]
    SignInRejected(String),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
