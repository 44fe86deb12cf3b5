//! Adapters for the item registry port
//!
//! - **InMemoryItemRegistry**: process-local store; items live as long as
//!   the registry does

pub mod memory;

pub use memory::InMemoryItemRegistry;
