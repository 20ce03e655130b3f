use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from the admin form's params.
    ///
    /// # Errors
    /// Rejects a blank name or category and a negative or non-finite price.
    /// Rating and original price are stored as given.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        let name = params.name.trim();
        let category = params.category.trim();
        if name.is_empty() {
            return Err("name is required".to_string());
        }
        if category.is_empty() {
            return Err("category is required".to_string());
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(format!("price must be a non-negative number, got {}", params.price));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price: params.price,
            original_price: params.original_price,
            category: category.to_string(),
            rating: params.rating,
            reviews: params.reviews,
            image: params.image,
            description: params.description,
        })
    }

    /// Products are immutable once added.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err(format!("Product {} cannot be modified", self.id))
    }

    fn on_delete(&self) -> Result<(), String> {
        Err(format!("Product {} cannot be removed", self.id))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_trims_and_keeps_unchecked_fields() {
        let mut params = ProductCreate::new("  Desk Lamp ", 19.5, "Home & Garden");
        params.rating = 7.0;
        params.original_price = Some(10.0);
        let product = Product::from_create_params("12".to_string(), params).unwrap();
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.rating, 7.0);
        assert_eq!(product.original_price, Some(10.0));
        assert_eq!(product.discount_label(), None);
    }

    #[test]
    fn test_create_requires_name_category_and_price() {
        assert!(Product::from_create_params("1".into(), ProductCreate::new(" ", 1.0, "Toys")).is_err());
        assert!(Product::from_create_params("1".into(), ProductCreate::new("Kite", 1.0, "")).is_err());
        assert!(Product::from_create_params("1".into(), ProductCreate::new("Kite", -1.0, "Toys")).is_err());
        assert!(Product::from_create_params("1".into(), ProductCreate::new("Kite", f64::NAN, "Toys")).is_err());
        assert!(Product::from_create_params("1".into(), ProductCreate::new("Kite", 0.0, "Toys")).is_ok());
    }
}
