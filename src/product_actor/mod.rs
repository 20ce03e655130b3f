//! Catalog storage: append-only products with validation at creation.

pub mod entity;
pub mod error;

pub use error::*;
