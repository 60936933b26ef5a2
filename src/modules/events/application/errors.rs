use crate::modules::events::core::transitions::TransitionError;
use crate::modules::events::core::validation::{FieldIssue, ValidationError};
use crate::shared::infrastructure::event_store::StoreError;
use thiserror::Error;

/// Validation and transition failures never reach the store; store failures are surfaced as is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] TransitionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<FieldIssue> for ApplicationError {
    fn from(issue: FieldIssue) -> Self {
        ApplicationError::Validation(issue.into())
    }
}
