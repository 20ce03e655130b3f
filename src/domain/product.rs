use serde::{Deserialize, Serialize};

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
/// Products are append-only: once created they are never patched or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Creates a new Product with the display-only fields left empty.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system for added products)
    /// * `name` - Display name
    /// * `price` - Current selling price
    /// * `category` - Category name
    /// * `rating` - Average review score
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            category: category.into(),
            rating,
            reviews: 0,
            image: String::new(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Percentage saved relative to `original_price`, rounded to the nearest integer.
    ///
    /// Derived on every call from the two price fields, so it can never go stale.
    /// Returns `None` when there is no original price or it is not above `price`.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if !(original > 0.0 && original > self.price) {
            return None;
        }
        Some(((original - self.price) / original * 100.0).round() as u32)
    }

    /// Display label such as `"20% OFF"`.
    pub fn discount_label(&self) -> Option<String> {
        self.discount_percent().map(|pct| format!("{}% OFF", pct))
    }
}

/// Params for adding a new product (every field except the id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            original_price: None,
            category: category.into(),
            rating: 4.0,
            reviews: 0,
            image: String::new(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_is_derived_from_prices() {
        let headphones = Product::new("1", "Wireless Bluetooth Headphones", 79.99, "Electronics", 4.5)
            .with_original_price(99.99);
        assert_eq!(headphones.discount_percent(), Some(20));
        assert_eq!(headphones.discount_label().as_deref(), Some("20% OFF"));

        let shoes = Product::new("6", "Running Shoes Pro", 129.99, "Sports", 4.8)
            .with_original_price(179.99);
        assert_eq!(shoes.discount_label().as_deref(), Some("28% OFF"));
    }

    #[test]
    fn test_no_discount_without_markdown() {
        let plain = Product::new("1", "Smart Watch", 249.99, "Electronics", 4.6);
        assert_eq!(plain.discount_percent(), None);

        let marked_up = plain.clone().with_original_price(199.0);
        assert_eq!(marked_up.discount_label(), None);

        let free = Product::new("2", "Sample", 0.0, "Beauty", 3.0).with_original_price(0.0);
        assert_eq!(free.discount_percent(), None);
    }

    #[test]
    fn test_deserializes_catalog_json() {
        let json = r#"{"id":"9","name":"Yoga Mat","price":39.99,"originalPrice":59.99,
            "category":"Sports","rating":4.4,"reviews":891}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.original_price, Some(59.99));
        assert_eq!(product.description, "");
        assert_eq!(product.discount_percent(), Some(33));
    }
}
