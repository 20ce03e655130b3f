use crate::domain::{CartItem, Product};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds `quantity` units of `product`, merging with an existing line.
    AddItem { product: Product, quantity: u32 },
    /// Drops the line for a product. Absent products are ignored.
    RemoveItem(String),
    /// Sets a line's quantity; zero removes the line.
    SetQuantity { product_id: String, quantity: u32 },
    Clear,
    Items,
    /// Empties the cart and hands back the lines it held.
    TakeItems,
    /// Puts lines back after a failed checkout, merging with current lines.
    Restore(Vec<CartItem>),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The line as it stands after the add
    AddItem(CartItem),
    /// Whether a line was removed
    RemoveItem(bool),
    /// Whether a line was found
    SetQuantity(bool),
    Clear(()),
    Items(Vec<CartItem>),
    TakeItems(Vec<CartItem>),
    Restore(()),
}
