use serde::{Deserialize, Serialize};

/// Access level of a registered account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(rename = "user")]
    Customer,
    Admin,
}

/// Represents a registered user of the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Params for registering a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Payload for updating an existing user's profile.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `email` - Login email address
    /// * `name` - Display name
    /// * `role` - Access level
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Accounts present in every fresh store.
pub fn default_users() -> Vec<User> {
    vec![
        User::new("1", "user@freshmart.com", "Regular User", Role::Customer),
        User::new("2", "admin@freshmart.com", "Admin User", Role::Admin),
    ]
}
