//! Typed handles over the resource actors. Each client maps framework
//! failures onto its domain error and traces every call.

#[macro_use]
mod macros;

pub mod product_client;
pub mod user_client;
pub mod cart_client;
pub mod wishlist_client;
pub mod order_client;

pub use product_client::ProductClient;
pub use user_client::UserClient;
pub use cart_client::CartClient;
pub use wishlist_client::WishlistClient;
pub use order_client::OrderClient;
