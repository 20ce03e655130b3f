use crate::actor_framework::Entity;
use crate::domain::{Wishlist, WishlistCreate};
use super::actions::{WishlistAction, WishlistActionResult};

impl Wishlist {
    fn insert(&mut self, product_id: String) -> bool {
        if self.product_ids.contains(&product_id) {
            return false;
        }
        self.product_ids.push(product_id);
        true
    }

    fn remove(&mut self, product_id: &str) -> bool {
        let before = self.product_ids.len();
        self.product_ids.retain(|id| id != product_id);
        self.product_ids.len() != before
    }
}

impl Entity for Wishlist {
    type Id = String;
    type CreateParams = WishlistCreate;
    type Patch = ();
    type Action = WishlistAction;
    type ActionResult = WishlistActionResult;

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: WishlistCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            owner: params.owner,
            product_ids: Vec::new(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: WishlistAction) -> Result<WishlistActionResult, String> {
        let result = match action {
            WishlistAction::Add(product_id) => WishlistActionResult::Add(self.insert(product_id)),
            WishlistAction::Remove(product_id) => WishlistActionResult::Remove(self.remove(&product_id)),
            WishlistAction::Toggle(product_id) => {
                if self.remove(&product_id) {
                    WishlistActionResult::Toggle(false)
                } else {
                    WishlistActionResult::Toggle(self.insert(product_id))
                }
            }
            WishlistAction::Contains(product_id) => {
                WishlistActionResult::Contains(self.product_ids.contains(&product_id))
            }
            WishlistAction::Items => WishlistActionResult::Items(self.product_ids.clone()),
        };
        Ok(result)
    }
}
