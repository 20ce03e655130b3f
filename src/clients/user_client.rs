use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::domain::{Role, User, UserCreate, UserPatch};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
///
/// Authentication is a stub: every account shares one configured demo password.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    demo_password: String,
    // Emails stay unique only if the lookup and the write happen under this lock.
    email_lock: Arc<Mutex<()>>,
}

impl_client_methods!(UserClient, User, UserError, user);

impl UserClient {
    pub fn new(inner: ResourceClient<User>, demo_password: impl Into<String>) -> Self {
        Self {
            inner,
            demo_password: demo_password.into(),
            email_lock: Arc::new(Mutex::new(())),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self.inner.list().await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    /// Returns the matching user, or `None` for a wrong password or unknown email.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, UserError> {
        if password != self.demo_password {
            warn!("Login rejected: wrong password");
            return Ok(None);
        }
        let user = self.find_by_email(email).await?;
        match &user {
            Some(user) => info!(user_id = %user.id, "Login successful"),
            None => warn!("Login rejected: unknown email"),
        }
        Ok(user)
    }

    /// Registers a new customer account.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<User, UserError> {
        if password != self.demo_password {
            return Err(UserError::ValidationError("password does not meet the demo policy".to_string()));
        }
        let email = email.trim();
        let _guard = self.email_lock.lock().await;
        if self.find_by_email(email).await?.is_some() {
            return Err(UserError::AlreadyExists(email.to_string()));
        }
        let params = UserCreate {
            email: email.to_string(),
            name: name.to_string(),
            role: Role::Customer,
        };
        debug!("Sending request");
        let user = self.inner.create(params).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn update_profile(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        let _guard = self.email_lock.lock().await;
        if let Some(email) = patch.email.as_deref().map(str::trim) {
            if let Some(existing) = self.find_by_email(email).await? {
                if existing.id != id {
                    return Err(UserError::AlreadyExists(email.to_string()));
                }
            }
        }
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }
}
