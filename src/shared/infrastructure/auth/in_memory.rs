// In memory implementation of the AuthService port.
//
// Purpose
// - Exercise the login, signup and password reset flows without the hosted service.
//
// Responsibilities
// - Apply the hosted service's account rules (email shape, minimum password length, unique email).
// - Hold a single signed-in session, like a browser client does.

use crate::shared::infrastructure::auth::{AuthError, AuthService, User};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Default)]
pub struct InMemoryAuth {
    accounts: RwLock<HashMap<String, String>>,
    session: RwLock<Option<User>>,
    pub reset_requests: RwLock<Vec<String>>,
    is_offline: bool,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), AuthError> {
        if self.is_offline {
            return Err(AuthError::Backend("Auth service offline".into()));
        }
        Ok(())
    }

    async fn start_session(&self, email: &str) -> User {
        let user = User {
            name: None,
            email: email.to_string(),
        };
        *self.session.write().await = Some(user.clone());
        user
    }
}

fn check_email(email: &str) -> Result<(), AuthError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AuthError::InvalidEmail(email.to_string())),
    }
}

#[async_trait::async_trait]
impl AuthService for InMemoryAuth {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.ensure_online()?;
        check_email(email)?;
        let matches = self
            .accounts
            .read()
            .await
            .get(email)
            .is_some_and(|stored| stored == password);
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.start_session(email).await)
    }

    async fn signup(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.ensure_online()?;
        check_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }
        {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(email) {
                return Err(AuthError::EmailInUse(email.to_string()));
            }
            accounts.insert(email.to_string(), password.to_string());
        }
        Ok(self.start_session(email).await)
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.ensure_online()?;
        check_email(email)?;
        if !self.accounts.read().await.contains_key(email) {
            return Err(AuthError::UnknownEmail(email.to_string()));
        }
        self.reset_requests.write().await.push(email.to_string());
        Ok(())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.ensure_online()?;
        *self.session.write().await = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<User> {
        self.session.read().await.clone()
    }
}
