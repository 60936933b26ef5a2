// Port for the hosted authentication service.
//
// Identity only gates access; nothing in the events core reads it.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password should be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("email already in use: {0}")]
    EmailInUse(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("no account for {0}")]
    UnknownEmail(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn signup(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
    async fn current_user(&self) -> Option<User>;
}

pub mod in_memory;
