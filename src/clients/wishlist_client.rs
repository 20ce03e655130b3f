use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Wishlist, WishlistCreate};
use crate::wishlist_actor::{WishlistAction, WishlistActionResult, WishlistError};

/// Client for interacting with the Wishlist actor.
#[derive(Clone)]
pub struct WishlistClient {
    inner: ResourceClient<Wishlist>,
    // Held across the owner lookup and the create in `open_wishlist`.
    open_lock: Arc<Mutex<()>>,
}

impl_client_methods!(WishlistClient, Wishlist, WishlistError, wishlist);

impl WishlistClient {
    pub fn new(inner: ResourceClient<Wishlist>) -> Self {
        Self {
            inner,
            open_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the id of `owner`'s wishlist, creating it on first use.
    #[instrument(skip(self))]
    pub async fn open_wishlist(&self, owner: Option<String>) -> Result<String, WishlistError> {
        let _guard = self.open_lock.lock().await;
        if let Some(owner) = owner.as_deref() {
            let existing = self.inner.list().await?
                .into_iter()
                .find(|wishlist| wishlist.owner.as_deref() == Some(owner));
            if let Some(wishlist) = existing {
                return Ok(wishlist.id);
            }
        }
        Ok(self.inner.create(WishlistCreate { owner }).await?.id)
    }

    async fn act(&self, wishlist_id: String, action: WishlistAction) -> Result<WishlistActionResult, WishlistError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(wishlist_id, action).await?)
    }

    /// Returns true if the product was not already saved.
    #[instrument(skip(self))]
    pub async fn add(&self, wishlist_id: String, product_id: String) -> Result<bool, WishlistError> {
        match self.act(wishlist_id, WishlistAction::Add(product_id)).await? {
            WishlistActionResult::Add(added) => Ok(added),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, wishlist_id: String, product_id: String) -> Result<bool, WishlistError> {
        match self.act(wishlist_id, WishlistAction::Remove(product_id)).await? {
            WishlistActionResult::Remove(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    /// Flips membership and returns whether the product is now saved.
    #[instrument(skip(self))]
    pub async fn toggle(&self, wishlist_id: String, product_id: String) -> Result<bool, WishlistError> {
        match self.act(wishlist_id, WishlistAction::Toggle(product_id)).await? {
            WishlistActionResult::Toggle(saved) => Ok(saved),
            other => Err(unexpected(other)),
        }
    }

    pub async fn contains(&self, wishlist_id: String, product_id: String) -> Result<bool, WishlistError> {
        match self.act(wishlist_id, WishlistAction::Contains(product_id)).await? {
            WishlistActionResult::Contains(found) => Ok(found),
            other => Err(unexpected(other)),
        }
    }

    pub async fn items(&self, wishlist_id: String) -> Result<Vec<String>, WishlistError> {
        match self.act(wishlist_id, WishlistAction::Items).await? {
            WishlistActionResult::Items(ids) => Ok(ids),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: WishlistActionResult) -> WishlistError {
    WishlistError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
