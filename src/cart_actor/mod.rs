//! Cart storage. Each cart is one entity; line edits are custom actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
