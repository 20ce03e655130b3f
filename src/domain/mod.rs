pub mod user;
pub mod product;
pub mod cart;
pub mod order;
pub mod session;

pub use user::*;
pub use product::*;
pub use cart::*;
pub use order::*;
pub use session::*;
