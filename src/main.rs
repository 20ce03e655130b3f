mod domain;
mod catalog;
mod config;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;
mod user_actor;
mod cart_actor;
mod wishlist_actor;
mod order_actor;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, StoreSystem, SystemError};
use crate::catalog::{QueryParams, SortKey};
use crate::config::StoreConfig;
use crate::domain::ProductCreate;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::load()?;
    info!("Starting FreshMart store");

    let system = StoreSystem::new(&config)?;

    // Browse as a guest
    let guest = system.guest_session().await?;
    let span = tracing::info_span!("browse");
    async {
        let params = QueryParams::new()
            .in_category("Electronics")
            .max_price(300.0)
            .sorted_by(SortKey::RatingDesc);
        match system.product_client.search(&params).await {
            Ok(products) => {
                for product in &products {
                    let discount = product.discount_label().unwrap_or_else(|| "-".to_string());
                    info!(
                        product_id = %product.id,
                        name = %product.name,
                        price = product.price,
                        discount = %discount,
                        "Search hit"
                    );
                }
            }
            Err(e) => error!(error = %e, "Search failed"),
        }
        if let Ok(categories) = system.product_client.categories().await {
            info!(categories = ?categories, "Catalog categories");
        }
        if let Ok(related) = system.product_client.related("1".to_string()).await {
            info!(count = related.len(), "Related products for product 1");
        }
        if let Err(e) = system.wishlist_client.toggle(guest.wishlist_id().to_string(), "4".to_string()).await {
            warn!(error = %e, "Wishlist toggle failed");
        }
    }
    .instrument(span)
    .await;

    // Admin adds a product
    let span = tracing::info_span!("admin");
    async {
        match system.login("admin@freshmart.com", &config.demo_password).await {
            Ok(Some(admin)) => {
                let mut params = ProductCreate::new("Stainless Steel Water Bottle", 19.99, "Sports");
                params.original_price = Some(24.99);
                params.description = "Keeps drinks cold for 24 hours.".to_string();
                match system.product_client.add_product(&admin, params).await {
                    Ok(product) => info!(product_id = %product.id, "Admin added product"),
                    Err(e) => error!(error = %e, "Admin could not add product"),
                }
            }
            Ok(None) => warn!("Admin login rejected"),
            Err(e) => error!(error = %e, "Admin login failed"),
        }
    }
    .instrument(span)
    .await;

    // A customer shops and checks out
    let span = tracing::info_span!("checkout");
    let checkout_result = async {
        let session = system
            .login("user@freshmart.com", &config.demo_password)
            .await?
            .ok_or_else(|| SystemError::SignInRejected("user@freshmart.com".to_string()))?;

        let bottles = system.product_client.search(&QueryParams::new().with_text("bottle")).await;
        if let Some(bottle) = bottles.ok().and_then(|found| found.into_iter().next()) {
            system.cart_client.add_to_cart(session.cart_id().to_string(), bottle.id.clone(), 2).await?;
            system.wishlist_client.add(session.wishlist_id().to_string(), bottle.id).await?;
        }
        system.cart_client.add_to_cart(session.cart_id().to_string(), "9".to_string(), 1).await?;

        let summary = system.cart_client.summary(session.cart_id().to_string()).await?;
        info!(
            items = summary.item_count,
            subtotal = summary.subtotal,
            shipping = summary.shipping,
            tax = summary.tax,
            total = summary.total,
            "Cart ready"
        );

        match system.order_client.checkout(&session).await {
            Ok(order) => {
                info!(order_id = %order.id, total = order.total, "Order placed (demo)");
                if let Err(e) = system.order_client.mark_delivered(order.id).await {
                    warn!(error = %e, "Could not mark order delivered");
                }
            }
            Err(e) => error!(error = %e, "Checkout failed"),
        }
        if let Some(user) = session.user() {
            let orders = system.order_client.orders_for(user.id.clone()).await?;
            info!(user_name = %user.name, orders = orders.len(), "Order history");
        }
        let session = session.logout();
        info!(signed_in = session.is_authenticated(), "Customer signed out");
        Ok::<(), SystemError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = checkout_result {
        error!(error = %e, "Customer session failed");
    }
    drop(guest);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
