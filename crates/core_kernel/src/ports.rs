//! Ports and Adapters Infrastructure
//!
//! The item registry, claim ledger, contact directory and notification
//! channel are all ports: the lifecycle engine only sees the traits, and
//! adapters (in-memory stores today) implement them.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            Lifecycle Engine              │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │               Port Traits                │
//! │  ItemRegistry, ClaimLedger, ...          │
//! └──────────────────────────────────────────┘
//!                     ▲
//!                     │
//!          ┌──────────┴──────────┐
//!          │  In-memory adapter  │
//!          └─────────────────────┘
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
///
/// Shared by every adapter so the engine can map storage failures onto
/// its own error kinds uniformly.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error for a poisoned store lock
    pub fn poisoned(store: &str) -> Self {
        PortError::internal(format!("{} lock poisoned", store))
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared behind `Arc` between the engine and the HTTP layer,
/// so every implementation must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Creates a healthy result for the given adapter
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Creates an unhealthy result with a reason
    pub fn unhealthy(adapter_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            message: Some(message.into()),
            checked_at: chrono::Utc::now(),
        }
    }
}

/// Trait for adapters that support health checks
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    fn health_check(&self) -> HealthCheckResult;
}
