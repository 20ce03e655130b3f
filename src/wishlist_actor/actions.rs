/// Custom actions for Wishlist entities.
#[derive(Debug, Clone)]
pub enum WishlistAction {
    Add(String),
    Remove(String),
    Toggle(String),
    Contains(String),
    Items,
}

/// Results from WishlistActions - variants match 1:1 with WishlistAction
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistActionResult {
    /// Whether the id was newly added
    Add(bool),
    /// Whether the id was present
    Remove(bool),
    /// Membership after the toggle
    Toggle(bool),
    Contains(bool),
    Items(Vec<String>),
}
