use tracing::{error, info, instrument};
use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::catalog::seed_catalog;
use crate::clients::{CartClient, OrderClient, ProductClient, UserClient, WishlistClient};
use crate::config::StoreConfig;
use crate::domain::{default_users, Cart, Order, Product, Session, User, Wishlist};
use super::SystemError;

/// The storefront system that owns every actor.
///
/// Responsible for starting up actors, seeding the catalog and default
/// accounts, wiring clients together, and handling shutdown.
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub cart_client: CartClient,
    pub wishlist_client: WishlistClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// First id past the largest numeric id among `ids`.
fn next_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok()).max().map_or(1, |max| max + 1)
}

impl StoreSystem {
    /// Starts the store with the bundled catalog. Must be called inside a tokio runtime.
    pub fn new(config: &StoreConfig) -> Result<Self, SystemError> {
        Self::with_catalog(config, seed_catalog()?)
    }

    /// Starts the store with an explicit starting catalog.
    pub fn with_catalog(config: &StoreConfig, catalog: Vec<Product>) -> Result<Self, SystemError> {
        config.validate()?;
        let buffer = config.channel_buffer;

        // 1. Setup Product Service: ids continue after the seeded catalog
        let first_product_id = next_numeric_id(catalog.iter().map(|p| p.id.as_str()));
        let product_count = catalog.len();
        let (product_actor, product_inner) =
            ResourceActor::<Product>::with_items(buffer, sequential_ids("", first_product_id), catalog);
        let product_client = ProductClient::new(product_inner, config.placeholder_image.clone(), config.related_limit);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Setup User Service
        let users = default_users();
        let first_user_id = next_numeric_id(users.iter().map(|u| u.id.as_str()));
        let (user_actor, user_inner) =
            ResourceActor::<User>::with_items(buffer, sequential_ids("", first_user_id), users);
        let user_client = UserClient::new(user_inner, config.demo_password.clone());
        let user_handle = tokio::spawn(user_actor.run());

        // 3. Setup Cart and Wishlist Services
        let (cart_actor, cart_inner) = ResourceActor::<Cart>::new(buffer, sequential_ids("cart_", 1));
        let cart_client = CartClient::new(cart_inner, product_client.clone(), config.pricing());
        let cart_handle = tokio::spawn(cart_actor.run());

        let (wishlist_actor, wishlist_inner) = ResourceActor::<Wishlist>::new(buffer, sequential_ids("wishlist_", 1));
        let wishlist_client = WishlistClient::new(wishlist_inner);
        let wishlist_handle = tokio::spawn(wishlist_actor.run());

        // 4. Setup Order Service (orchestrates all of the above)
        let (order_actor, order_inner) = ResourceActor::<Order>::new(buffer, sequential_ids("order_", 1001));
        let order_client = OrderClient::new(
            order_inner,
            user_client.clone(),
            product_client.clone(),
            cart_client.clone(),
        );
        let order_handle = tokio::spawn(order_actor.run());

        info!(products = product_count, "Store system started");

        Ok(Self {
            product_client,
            user_client,
            cart_client,
            wishlist_client,
            order_client,
            handles: vec![product_handle, user_handle, cart_handle, wishlist_handle, order_handle],
        })
    }

    /// Signs in and returns a session bound to the user's cart and wishlist.
    /// `None` means the credentials were not accepted.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Session>, SystemError> {
        let Some(user) = self.user_client.login(email, password).await? else {
            return Ok(None);
        };
        let cart_id = self.cart_client.open_cart(Some(user.id.clone())).await?;
        let wishlist_id = self.wishlist_client.open_wishlist(Some(user.id.clone())).await?;
        Ok(Some(Session::new(Some(user), cart_id, wishlist_id)))
    }

    /// A session for an anonymous shopper with a fresh cart and wishlist.
    pub async fn guest_session(&self) -> Result<Session, SystemError> {
        let cart_id = self.cart_client.open_cart(None).await?;
        let wishlist_id = self.wishlist_client.open_wishlist(None).await?;
        Ok(Session::new(None, cart_id, wishlist_id))
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down store...");
        // Actors stop once every client clone is gone; clients hold clones of
        // each other, so drop them all before awaiting.
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.wishlist_client);
        drop(self.user_client);
        drop(self.product_client);

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                first_failure.get_or_insert_with(|| SystemError::ActorTask(format!("{:?}", e)));
            }
        }
        if let Some(failure) = first_failure {
            return Err(failure);
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_numeric_id_skips_non_numeric() {
        assert_eq!(next_numeric_id(["1", "11", "x7", "3"].into_iter()), 12);
        assert_eq!(next_numeric_id(std::iter::empty()), 1);
    }

    #[tokio::test]
    async fn test_with_catalog_rejects_invalid_config() {
        let config = StoreConfig { channel_buffer: 0, ..StoreConfig::default() };
        let result = StoreSystem::with_catalog(&config, Vec::new());
        assert!(matches!(result, Err(SystemError::Config(_))));
    }

    #[tokio::test]
    async fn test_shutdown_awaits_every_actor_after_a_failure() {
        let mut system = StoreSystem::with_catalog(&StoreConfig::default(), Vec::new()).unwrap();
        let (finished_tx, finished_rx) = tokio::sync::oneshot::channel::<()>();
        system.handles.insert(0, tokio::spawn(async { panic!("actor crashed") }));
        system.handles.push(tokio::spawn(async move {
            tokio::task::yield_now().await;
            let _ = finished_tx.send(());
        }));

        let result = system.shutdown().await;
        assert!(matches!(result, Err(SystemError::ActorTask(_))));
        // The trailing task was awaited to completion, not abandoned.
        assert!(finished_rx.await.is_ok());
    }

    #[tokio::test]
    async fn test_login_reuses_cart_across_sessions() {
        let system = StoreSystem::new(&StoreConfig::default()).unwrap();

        let first = system.login("user@freshmart.com", "12345").await.unwrap().unwrap();
        let second = system.login("user@freshmart.com", "12345").await.unwrap().unwrap();
        assert_eq!(first.cart_id(), second.cart_id());
        assert_eq!(first.wishlist_id(), second.wishlist_id());
        assert!(!first.is_admin());

        assert!(system.login("user@freshmart.com", "nope").await.unwrap().is_none());

        let guest = system.guest_session().await.unwrap();
        assert_ne!(guest.cart_id(), first.cart_id());
        assert!(guest.user().is_none());

        drop((first, second, guest));
        system.shutdown().await.unwrap();
    }
}
