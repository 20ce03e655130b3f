use tracing::{error, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::clients::{CartClient, ProductClient, UserClient};
use crate::domain::{CartItem, CartSummary, Order, OrderCreate, OrderLine, OrderPatch, OrderStatus, Session};
use crate::order_actor::OrderError;

/// Client for interacting with the Order actor.
///
/// This client handles checkout orchestration, validating the shopper, the
/// cart, and every product in it before recording an order.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    product_client: ProductClient,
    cart_client: CartClient,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        product_client: ProductClient,
        cart_client: CartClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            product_client,
            cart_client,
        }
    }

    /// Turns the session's cart into an order and empties the cart.
    ///
    /// The cart's lines are taken in one step, so the order covers exactly
    /// what was in the cart at that moment. On failure they are put back.
    #[instrument(skip(self, session), fields(cart_id = session.cart_id()))]
    pub async fn checkout(&self, session: &Session) -> Result<Order, OrderError> {
        info!("Processing checkout request (Client Side)");

        // Step 1: Validate user
        let user_id = session.user()
            .map(|user| user.id.clone())
            .ok_or_else(|| OrderError::InvalidUser("checkout requires a signed-in user".to_string()))?;
        match self.user_client.get_user(user_id.clone()).await {
            Ok(Some(user)) => info!(user_name = %user.name, "User validation successful"),
            Ok(None) => {
                error!("User not found");
                return Err(OrderError::InvalidUser(user_id));
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(OrderError::InvalidUser(format!("User validation failed: {}", e)));
            }
        }

        // Step 2: Take the cart's lines; the cart is empty from here on
        let cart_id = session.cart_id().to_string();
        let items = self.cart_client.take_items(cart_id.clone()).await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        match self.place_order(user_id, &items).await {
            Ok(order) => Ok(order),
            Err(e) => {
                // Nothing was ordered, so the shopper keeps their lines.
                if let Err(restore_err) = self.cart_client.restore(cart_id, items).await {
                    error!(error = %restore_err, "Cart lines could not be restored");
                }
                Err(e)
            }
        }
    }

    async fn place_order(&self, user_id: String, items: &[CartItem]) -> Result<Order, OrderError> {
        // Step 3: Validate products
        for item in items {
            match self.product_client.get_product(item.product_id.clone()).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    error!(product_id = %item.product_id, "Product not found");
                    return Err(OrderError::InvalidProduct(item.product_id.clone()));
                }
                Err(e) => {
                    error!(error = %e, "Product validation failed");
                    return Err(OrderError::InvalidProduct(format!("Product validation failed: {}", e)));
                }
            }
        }

        // Step 4: Record the order, totalled from exactly these lines
        let summary = CartSummary::compute(items, self.cart_client.pricing());
        let params = OrderCreate {
            user_id,
            lines: items.iter().map(OrderLine::from).collect(),
            total: summary.total,
        };
        let order = self.inner.create(params).await?;
        info!(order_id = %order.id, total = order.total, "Order recorded");
        Ok(order)
    }

    /// Orders placed by `user_id`, oldest first.
    #[instrument(skip(self))]
    pub async fn orders_for(&self, user_id: String) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|order| order.user_id == user_id).collect())
    }

    #[instrument(skip(self))]
    pub async fn mark_delivered(&self, id: String) -> Result<Order, OrderError> {
        let patch = OrderPatch { status: Some(OrderStatus::Delivered) };
        Ok(self.inner.update(id, patch).await?)
    }
}
