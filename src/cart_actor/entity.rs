use crate::actor_framework::Entity;
use crate::domain::{Cart, CartCreate, CartItem};
use super::actions::{CartAction, CartActionResult};

impl Cart {
    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.product_id == product_id)
    }
}

impl Entity for Cart {
    type Id = String;
    type CreateParams = CartCreate;
    type Patch = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: CartCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            owner: params.owner,
            items: Vec::new(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// Handles line edits.
    ///
    /// # Errors
    /// Adding zero units is rejected. Every other edit on an absent product
    /// is a no-op reported through the result.
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        match action {
            CartAction::AddItem { product, quantity } => {
                if quantity == 0 {
                    return Err("quantity must be at least 1".to_string());
                }
                let line = match self.position(&product.id) {
                    Some(index) => {
                        let item = &mut self.items[index];
                        item.quantity = item.quantity.saturating_add(quantity);
                        item.clone()
                    }
                    None => {
                        let line_id = format!("{}:{}", self.id, product.id);
                        let item = CartItem::from_product(line_id, &product, quantity);
                        self.items.push(item.clone());
                        item
                    }
                };
                Ok(CartActionResult::AddItem(line))
            }
            CartAction::RemoveItem(product_id) => {
                let before = self.items.len();
                self.items.retain(|item| item.product_id != product_id);
                Ok(CartActionResult::RemoveItem(self.items.len() != before))
            }
            CartAction::SetQuantity { product_id, quantity } => {
                let Some(index) = self.position(&product_id) else {
                    return Ok(CartActionResult::SetQuantity(false));
                };
                if quantity == 0 {
                    self.items.remove(index);
                } else {
                    self.items[index].quantity = quantity;
                }
                Ok(CartActionResult::SetQuantity(true))
            }
            CartAction::Clear => {
                self.items.clear();
                Ok(CartActionResult::Clear(()))
            }
            CartAction::Items => Ok(CartActionResult::Items(self.items.clone())),
            CartAction::TakeItems => Ok(CartActionResult::TakeItems(std::mem::take(&mut self.items))),
            CartAction::Restore(lines) => {
                // Restored lines go first; anything added meanwhile is merged in.
                let added = std::mem::replace(&mut self.items, lines);
                for item in added {
                    match self.position(&item.product_id) {
                        Some(index) => {
                            let line = &mut self.items[index];
                            line.quantity = line.quantity.saturating_add(item.quantity);
                        }
                        None => self.items.push(item),
                    }
                }
                Ok(CartActionResult::Restore(()))
            }
        }
    }
}
