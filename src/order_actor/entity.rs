use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderPatch, OrderStatus};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from checkout params.
    ///
    /// # Notes
    /// The order is initialized with status `Processing`.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.lines.is_empty() {
            return Err("an order needs at least one line".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            lines: params.lines,
            total: params.total,
            status: OrderStatus::Processing,
        })
    }

    /// Moves the order forward. A delivered order stays delivered.
    fn on_update(&mut self, patch: OrderPatch) -> Result<(), String> {
        match (self.status, patch.status) {
            (OrderStatus::Delivered, Some(OrderStatus::Processing)) => {
                Err(format!("Order {} has already been delivered", self.id))
            }
            (_, Some(status)) => {
                self.status = status;
                Ok(())
            }
            (_, None) => Ok(()),
        }
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
