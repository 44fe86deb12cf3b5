//! Lifecycle engine errors

use thiserror::Error;

use core_kernel::{ErrorKind, PortError};
use domain_claims::ClaimError;
use domain_item::ItemError;

/// Errors reported by lifecycle operations
///
/// A failed operation leaves items and claims as they were.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Malformed or missing required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not legal in the current item or claim status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Unknown item, claim or question
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A store failed underneath the engine
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LifecycleError {
    pub fn validation(message: impl Into<String>) -> Self {
        LifecycleError::Validation(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        LifecycleError::InvalidState(message.into())
    }

    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        LifecycleError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LifecycleError::Validation(_) => ErrorKind::Validation,
            LifecycleError::InvalidState(_) => ErrorKind::InvalidState,
            LifecycleError::NotFound { .. } => ErrorKind::NotFound,
            LifecycleError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<PortError> for LifecycleError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => LifecycleError::NotFound {
                entity: entity_type,
                id,
            },
            PortError::Conflict { message } => LifecycleError::InvalidState(message),
            PortError::Internal { message, .. } => LifecycleError::Internal(message),
        }
    }
}

impl From<ItemError> for LifecycleError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Port(port) => port.into(),
            ItemError::ItemNotFound(id) => LifecycleError::not_found("Item", id),
            other => match other.kind() {
                ErrorKind::Validation => LifecycleError::Validation(other.to_string()),
                _ => LifecycleError::InvalidState(other.to_string()),
            },
        }
    }
}

impl From<ClaimError> for LifecycleError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::Port(port) => port.into(),
            ClaimError::ClaimNotFound(id) => LifecycleError::not_found("Claim", id),
            ClaimError::QuestionNotFound(id) => LifecycleError::not_found("Question", id),
            other => match other.kind() {
                ErrorKind::Validation => LifecycleError::Validation(other.to_string()),
                _ => LifecycleError::InvalidState(other.to_string()),
            },
        }
    }
}
