//! Order history: orders are recorded at checkout and only their status changes.

pub mod entity;
pub mod error;

pub use error::*;
