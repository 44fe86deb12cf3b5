//! Item domain errors

use thiserror::Error;

use core_kernel::{ErrorKind, PortError};

/// Errors that can occur in the item domain
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Invalid item data: {0}")]
    InvalidData(String),

    #[error("Invalid match score: {0}")]
    InvalidMatchScore(String),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl ItemError {
    /// Creates an ItemNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        ItemError::ItemNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        ItemError::InvalidData(message.into())
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ItemError::ItemNotFound(_) => ErrorKind::NotFound,
            ItemError::InvalidStatusTransition { .. } => ErrorKind::InvalidState,
            ItemError::InvalidData(_) | ItemError::InvalidMatchScore(_) => ErrorKind::Validation,
            ItemError::Port(e) if e.is_not_found() => ErrorKind::NotFound,
            ItemError::Port(PortError::Conflict { .. }) => ErrorKind::InvalidState,
            ItemError::Port(_) => ErrorKind::Internal,
        }
    }
}
