//! Claims domain errors

use thiserror::Error;

use core_kernel::{ErrorKind, PortError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("Invalid claim data: {0}")]
    InvalidData(String),

    #[error("Invalid claim status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Question already answered: {0}")]
    QuestionAlreadyAnswered(String),

    #[error("Contact details are only exchanged for verified claims")]
    ClaimNotVerified,

    #[error(transparent)]
    Port(#[from] PortError),
}

impl ClaimError {
    /// Creates a ClaimNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        ClaimError::ClaimNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        ClaimError::InvalidData(message.into())
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClaimError::ClaimNotFound(_) | ClaimError::QuestionNotFound(_) => ErrorKind::NotFound,
            ClaimError::InvalidData(_) => ErrorKind::Validation,
            ClaimError::InvalidStatusTransition { .. }
            | ClaimError::QuestionAlreadyAnswered(_)
            | ClaimError::ClaimNotVerified => ErrorKind::InvalidState,
            ClaimError::Port(e) if e.is_not_found() => ErrorKind::NotFound,
            ClaimError::Port(PortError::Conflict { .. }) => ErrorKind::InvalidState,
            ClaimError::Port(_) => ErrorKind::Internal,
        }
    }
}
