//! Core error types used across the system

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind of failure a domain operation reports
///
/// Every domain error maps onto one of these so callers (the HTTP layer,
/// dialog controllers) can react without matching on domain-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing required input
    Validation,
    /// Operation not legal in the current item or claim status
    InvalidState,
    /// Unknown item, claim or question
    NotFound,
    /// A storage or delivery adapter failed
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Errors raised by the kernel's own plumbing
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Configuration(_) => ErrorKind::Internal,
        }
    }
}
