use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::ProductClient;
use crate::domain::{Cart, CartCreate, CartItem, CartSummary, PricingRules};

/// Client for interacting with the Cart actor.
///
/// Resolves product ids through the [`ProductClient`] so that cart lines are
/// snapshots of real catalog entries.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    product_client: ProductClient,
    pricing: PricingRules,
    // Held across the owner lookup and the create in `open_cart`.
    open_lock: Arc<Mutex<()>>,
}

impl_client_methods!(CartClient, Cart, CartError, cart);

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, product_client: ProductClient, pricing: PricingRules) -> Self {
        Self {
            inner,
            product_client,
            pricing,
            open_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the id of `owner`'s cart, creating it on first use.
    /// Anonymous shoppers always get a fresh cart.
    #[instrument(skip(self))]
    pub async fn open_cart(&self, owner: Option<String>) -> Result<String, CartError> {
        let _guard = self.open_lock.lock().await;
        if let Some(owner) = owner.as_deref() {
            let existing = self.inner.list().await?
                .into_iter()
                .find(|cart| cart.owner.as_deref() == Some(owner));
            if let Some(cart) = existing {
                debug!(cart_id = %cart.id, "Reusing cart");
                return Ok(cart.id);
            }
        }
        let cart = self.inner.create(CartCreate { owner }).await?;
        debug!(cart_id = %cart.id, "Opened cart");
        Ok(cart.id)
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, cart_id: String, product_id: String, quantity: u32) -> Result<CartItem, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let product = self.product_client.get_product(product_id.clone()).await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or(CartError::UnknownProduct(product_id))?;

        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::AddItem { product, quantity }).await? {
            CartActionResult::AddItem(line) => {
                info!(product_id = %line.product_id, quantity = line.quantity, "Cart line updated");
                Ok(line)
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, cart_id: String, product_id: String) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::RemoveItem(product_id)).await? {
            CartActionResult::RemoveItem(_) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Sets a line's quantity. Zero removes the line; unknown products are ignored.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, cart_id: String, product_id: String, quantity: u32) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::SetQuantity { product_id, quantity }).await? {
            CartActionResult::SetQuantity(_) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn items(&self, cart_id: String) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::Items).await? {
            CartActionResult::Items(items) => Ok(items),
            other => Err(unexpected(other)),
        }
    }

    pub async fn summary(&self, cart_id: String) -> Result<CartSummary, CartError> {
        let items = self.items(cart_id).await?;
        Ok(CartSummary::compute(&items, &self.pricing))
    }

    /// Empties the cart and returns the lines it held, in one actor step.
    #[instrument(skip(self))]
    pub async fn take_items(&self, cart_id: String) -> Result<Vec<CartItem>, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::TakeItems).await? {
            CartActionResult::TakeItems(items) => Ok(items),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub async fn restore(&self, cart_id: String, items: Vec<CartItem>) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::Restore(items)).await? {
            CartActionResult::Restore(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    pub fn pricing(&self) -> &PricingRules {
        &self.pricing
    }

    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn clear(&self, cart_id: String) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::Clear).await? {
            CartActionResult::Clear(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}
