use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};

fn required(field: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(value.to_string())
    }
}

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new User from registration params.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `params` - Email, display name and role
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            email: required("email", &params.email)?,
            name: required("name", &params.name)?,
            role: params.role,
        })
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = required("name", &name)?;
        }
        if let Some(email) = patch.email {
            self.email = required("email", &email)?;
        }
        Ok(())
    }

    /// Currently, no custom actions are defined for users.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
