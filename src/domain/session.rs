use super::User;

/// Per-shopper context handed to every operation that needs to know who is
/// shopping and which cart and wishlist they are filling.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: Option<User>,
    cart_id: String,
    wishlist_id: String,
}

impl Session {
    pub fn new(user: Option<User>, cart_id: impl Into<String>, wishlist_id: impl Into<String>) -> Self {
        Self {
            user,
            cart_id: cart_id.into(),
            wishlist_id: wishlist_id.into(),
        }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    pub fn wishlist_id(&self) -> &str {
        &self.wishlist_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Signs the user out. The cart and wishlist stay with the session.
    pub fn logout(self) -> Session {
        Session { user: None, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn test_admin_gate_and_logout() {
        let admin = User::new("2", "admin@freshmart.com", "Admin User", Role::Admin);
        let session = Session::new(Some(admin), "cart_1", "wishlist_1");
        assert!(session.is_admin());

        let session = session.logout();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.cart_id(), "cart_1");
    }

    #[test]
    fn test_customer_is_not_admin() {
        let customer = User::new("1", "user@freshmart.com", "Regular User", Role::Customer);
        let session = Session::new(Some(customer), "cart_1", "wishlist_1");
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }
}
