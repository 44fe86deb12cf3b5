//! Request and response bodies

pub mod items;
pub mod claims;
pub mod notifications;
