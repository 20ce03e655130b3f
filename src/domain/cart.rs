use serde::{Deserialize, Serialize};
use super::Product;

/// One line of a cart: a snapshot of the product taken when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub category: String,
}

impl CartItem {
    pub fn from_product(id: impl Into<String>, product: &Product, quantity: u32) -> Self {
        Self {
            id: id.into(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            category: product.category.clone(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A shopping cart, owned by a user or by an anonymous session.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: String,
    pub owner: Option<String>,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone)]
pub struct CartCreate {
    pub owner: Option<String>,
}

/// Pricing rules applied when totalling a cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRules {
    pub free_shipping_threshold: f64,
    pub flat_shipping: f64,
    pub tax_rate: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 50.0,
            flat_shipping: 9.99,
            tax_rate: 0.08,
        }
    }
}

/// Totals shown on the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl CartSummary {
    pub fn compute(items: &[CartItem], rules: &PricingRules) -> Self {
        let item_count = items.iter().fold(0u32, |count, item| count.saturating_add(item.quantity));
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let shipping = if items.is_empty() || subtotal > rules.free_shipping_threshold {
            0.0
        } else {
            rules.flat_shipping
        };
        let tax = subtotal * rules.tax_rate;
        Self {
            item_count,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Product ids a shopper has saved for later, without duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Wishlist {
    pub id: String,
    pub owner: Option<String>,
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct WishlistCreate {
    pub owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price: f64, quantity: u32) -> CartItem {
        let product = Product::new(product_id, product_id, price, "Electronics", 4.0);
        CartItem::from_product(format!("line_{}", product_id), &product, quantity)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_summary_charges_shipping_below_threshold() {
        let summary = CartSummary::compute(&[item("p1", 10.0, 2)], &PricingRules::default());
        assert_eq!(summary.item_count, 2);
        assert!(close(summary.subtotal, 20.0));
        assert!(close(summary.shipping, 9.99));
        assert!(close(summary.tax, 1.6));
        assert!(close(summary.total, 31.59));
    }

    #[test]
    fn test_summary_free_shipping_above_threshold() {
        let items = [item("p1", 30.0, 1), item("p2", 25.0, 1)];
        let summary = CartSummary::compute(&items, &PricingRules::default());
        assert!(close(summary.shipping, 0.0));
        assert!(close(summary.total, 55.0 * 1.08));
    }

    #[test]
    fn test_summary_threshold_is_exclusive() {
        let summary = CartSummary::compute(&[item("p1", 50.0, 1)], &PricingRules::default());
        assert!(close(summary.shipping, 9.99));
    }

    #[test]
    fn test_empty_cart_costs_nothing() {
        let summary = CartSummary::compute(&[], &PricingRules::default());
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_item_count_saturates() {
        let items = [item("p1", 1.0, u32::MAX), item("p2", 1.0, u32::MAX)];
        let summary = CartSummary::compute(&items, &PricingRules::default());
        assert_eq!(summary.item_count, u32::MAX);
    }
}
