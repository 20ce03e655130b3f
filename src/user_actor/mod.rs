//! Account storage for the mock authentication flow.

pub mod entity;
pub mod error;

pub use error::*;
