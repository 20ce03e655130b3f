//! Read-side catalog logic: the query engine and the small lookups the
//! storefront pages build on.

pub mod query;

pub use query::{query, QueryParams, SortKey};

use crate::domain::Product;

const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Parses the bundled starter catalog.
pub fn seed_catalog() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(SEED_CATALOG)
}

/// Distinct category names in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|product| product.id == id)
}

/// Up to `limit` other products from the same category, in catalog order.
pub fn related(products: &[Product], product: &Product, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|candidate| candidate.category == product.category && candidate.id != product.id)
        .take(limit)
        .cloned()
        .collect()
}
