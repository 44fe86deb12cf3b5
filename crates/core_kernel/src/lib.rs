//! Core Kernel - Foundational types shared by the lost & found domains
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for items, claims, participants and questions
//! - The error kinds every domain operation reports
//! - Port abstractions that storage and delivery adapters implement

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{
    IdParseError, ItemId, ClaimRequestId, ParticipantId, QuestionId, NotificationId,
};
pub use error::{CoreError, ErrorKind};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
