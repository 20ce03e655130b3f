//! Filtering, searching, and sorting over a product collection.
//!
//! [`query`] is a pure function: it never mutates its input, never fails, and
//! answers "nothing matched" with an empty `Vec`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::domain::Product;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Final ordering applied to query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
            SortKey::NameAsc => collate(&a.name, &b.name),
            SortKey::NameDesc => collate(&b.name, &a.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

/// Optional filter and sort directives. The default value matches everything
/// and keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub text: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<SortKey>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price_between(self, min: f64, max: f64) -> Self {
        self.min_price(min).max_price(max)
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn min_rating(mut self, min: f64) -> Self {
        self.min_rating = Some(min);
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_by = Some(key);
        self
    }

    /// True when no filter or sort directive is active.
    pub fn is_empty(&self) -> bool {
        self.search_text().is_none()
            && self.category_filter().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
            && self.sort_by.is_none()
    }

    fn search_text(&self) -> Option<String> {
        // Whitespace-only text disables the filter; otherwise match it verbatim.
        self.text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_lowercase)
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }
}

/// Returns the products that satisfy every active filter in `params`, ordered
/// by `params.sort_by` (input order when absent).
///
/// Contradictory bounds such as `min_price > max_price` simply match nothing.
pub fn query(products: &[Product], params: &QueryParams) -> Vec<Product> {
    let text = params.search_text();
    let category = params.category_filter();

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|product| category.is_none_or(|category| product.category == category))
        .filter(|product| text.as_deref().is_none_or(|text| matches_text(product, text)))
        .filter(|product| params.min_price.is_none_or(|min| product.price >= min))
        .filter(|product| params.max_price.is_none_or(|max| product.price <= max))
        .filter(|product| params.min_rating.is_none_or(|min| product.rating >= min))
        .cloned()
        .collect();

    if let Some(key) = params.sort_by {
        // Stable, so equal keys keep their input order.
        matched.sort_by(|a, b| key.compare(a, b));
    }
    matched
}

// `needle` is already lowercased.
fn matches_text(product: &Product, needle: &str) -> bool {
    [&product.name, &product.description, &product.category]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive ordering for display names, falling back to the raw
/// strings so that distinct names never compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Product> {
        vec![
            Product::new("1", "Red Shoe", 10.0, "Sports", 4.0),
            Product::new("2", "Blue Shirt", 20.0, "Fashion", 5.0),
        ]
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Smartphone Pro", 799.99, "Electronics", 4.9)
                .with_description("The latest flagship smartphone with advanced features."),
            Product::new("2", "Organic Cotton T-Shirt", 24.99, "Fashion", 4.3),
            Product::new("3", "yoga mat", 39.99, "Sports", 4.4),
            Product::new("4", "Coffee Maker Deluxe", 89.99, "Home & Garden", 4.6)
                .with_description("Brews smart coffee."),
            Product::new("5", "Bluetooth Speaker", 99.99, "Electronics", 4.5),
            Product::new("6", "Running Shoes Pro", 129.99, "Sports", 4.8),
            Product::new("7", "Book Light", 24.99, "Books", 4.3),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_params_is_identity() {
        let products = catalog();
        assert!(QueryParams::new().is_empty());
        assert_eq!(query(&products, &QueryParams::new()), products);
        assert!(query(&[], &QueryParams::new()).is_empty());
    }

    #[test]
    fn test_min_rating_with_price_sort() {
        let params = QueryParams::new().min_rating(4.5).sorted_by(SortKey::PriceAsc);
        let result = query(&scenario(), &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Blue Shirt");
    }

    #[test]
    fn test_text_search_scenario() {
        let result = query(&scenario(), &QueryParams::new().with_text("shoe"));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let result = query(&scenario(), &QueryParams::new().in_category("Home & Garden"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let products = catalog();
        let upper = query(&products, &QueryParams::new().with_text("SHOE"));
        let lower = query(&products, &QueryParams::new().with_text("shoe"));
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec!["6"]);
    }

    #[test]
    fn test_text_matches_description_and_category() {
        let products = catalog();
        let smart = query(&products, &QueryParams::new().with_text("smart"));
        assert_eq!(ids(&smart), vec!["1", "4"]);

        let garden = query(&products, &QueryParams::new().with_text("garden"));
        assert_eq!(ids(&garden), vec!["4"]);
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let products = catalog();
        for blank in ["", "   ", "\t\n"] {
            let params = QueryParams::new().with_text(blank);
            assert!(params.is_empty());
            assert_eq!(query(&products, &params), products);
        }
        // Surrounding whitespace is part of the substring.
        let padded = query(&products, &QueryParams::new().with_text("  speaker "));
        assert!(padded.is_empty());
        let trailing = query(&scenario(), &QueryParams::new().with_text("shoe "));
        assert!(trailing.is_empty());
        let inner = query(&products, &QueryParams::new().with_text("h s"));
        assert_eq!(ids(&inner), vec!["5"]);
    }

    #[test]
    fn test_category_is_sound_and_complete() {
        let products = catalog();
        let result = query(&products, &QueryParams::new().in_category("Electronics"));
        assert!(result.iter().all(|p| p.category == "Electronics"));
        let expected = products.iter().filter(|p| p.category == "Electronics").count();
        assert_eq!(result.len(), expected);

        // Exact match only.
        assert!(query(&products, &QueryParams::new().in_category("electronics")).is_empty());
        // Empty category means all.
        assert_eq!(query(&products, &QueryParams::new().in_category("")).len(), products.len());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = catalog();
        let result = query(&products, &QueryParams::new().price_between(24.99, 89.99));
        assert_eq!(ids(&result), vec!["2", "3", "4", "7"]);
        assert!(result.iter().all(|p| p.price >= 24.99 && p.price <= 89.99));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let result = query(&catalog(), &QueryParams::new().price_between(100.0, 10.0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filters_combine_as_conjunction() {
        let params = QueryParams::new()
            .in_category("Sports")
            .with_text("pro")
            .min_price(100.0)
            .min_rating(4.8);
        assert_eq!(ids(&query(&catalog(), &params)), vec!["6"]);

        let params = params.min_rating(4.9);
        assert!(query(&catalog(), &params).is_empty());
    }

    #[test]
    fn test_price_sorts_are_stable_mirrors() {
        let products = catalog();
        let asc = query(&products, &QueryParams::new().sorted_by(SortKey::PriceAsc));
        let desc = query(&products, &QueryParams::new().sorted_by(SortKey::PriceDesc));
        assert_eq!(ids(&asc), vec!["2", "7", "3", "4", "5", "6", "1"]);
        assert_eq!(ids(&desc), vec!["1", "6", "5", "4", "3", "2", "7"]);

        let asc_prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
    }

    #[test]
    fn test_rating_sort_keeps_ties_in_input_order() {
        let result = query(&catalog(), &QueryParams::new().sorted_by(SortKey::RatingDesc));
        assert_eq!(ids(&result), vec!["1", "6", "4", "5", "3", "2", "7"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let products = catalog();
        let asc = query(&products, &QueryParams::new().sorted_by(SortKey::NameAsc));
        let names: Vec<&str> = asc.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Bluetooth Speaker",
                "Book Light",
                "Coffee Maker Deluxe",
                "Organic Cotton T-Shirt",
                "Running Shoes Pro",
                "Smartphone Pro",
                "yoga mat",
            ]
        );

        let mut desc = query(&products, &QueryParams::new().sorted_by(SortKey::NameDesc));
        desc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let products = catalog();
        let snapshot = products.clone();
        let _ = query(&products, &QueryParams::new().sorted_by(SortKey::NameDesc));
        assert_eq!(products, snapshot);
    }

    #[test]
    fn test_nan_never_satisfies_a_bound() {
        let products = vec![Product::new("x", "Broken", f64::NAN, "Toys", f64::NAN)];
        assert!(query(&products, &QueryParams::new().min_price(0.0)).is_empty());
        assert!(query(&products, &QueryParams::new().min_rating(0.0)).is_empty());
        assert_eq!(query(&products, &QueryParams::new().sorted_by(SortKey::PriceAsc)).len(), 1);
    }

    #[test]
    fn test_sort_key_tokens() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>(), Ok(key));
        }
        assert_eq!(
            "price".parse::<SortKey>(),
            Err(QueryError::UnknownSortKey("price".to_string()))
        );
    }

    #[test]
    fn test_params_deserialize_from_form_json() {
        let params: QueryParams = serde_json::from_str(
            r#"{"text":"pro","minPrice":50,"maxPrice":1000,"sortBy":"rating-desc"}"#,
        )
        .unwrap();
        assert_eq!(params.sort_by, Some(SortKey::RatingDesc));
        assert_eq!(params.min_price, Some(50.0));
        assert_eq!(ids(&query(&catalog(), &params)), vec!["1", "6"]);
    }
}
