//! Item Registry Domain
//!
//! This crate models reported items (lost, found, or anonymously found) and
//! the status lifecycle every item moves through.
//!
//! # Item Lifecycle
//!
//! ```text
//! Active <-> Verification Pending -> Item on its way -> Recovered
//!    \______________\____________________\_____________> Closed
//! ```
//!
//! Status changes are validated against the transition table in
//! [`ItemStatus::can_transition_to`]; the lifecycle engine is the only caller
//! that drives them.

pub mod item;
pub mod visibility;
pub mod badge;
pub mod ports;
pub mod adapters;
pub mod error;

pub use item::{Item, ItemDetails, ItemStatus, ItemType, MatchScore, NewItem};
pub use visibility::PublicItemView;
pub use badge::{StatusBadge, BadgeTone};
pub use ports::{ItemRegistry, ItemQuery};
pub use adapters::InMemoryItemRegistry;
pub use error::ItemError;
