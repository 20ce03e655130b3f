//! Wishlist storage: an ordered, duplicate-free list of product ids per shopper.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
