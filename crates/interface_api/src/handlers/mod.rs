//! Request handlers

pub mod health;
pub mod items;
pub mod claims;
pub mod notifications;

use validator::Validate;

use crate::error::ApiError;

/// Runs the request body's field validation
pub(crate) fn validated<T: Validate>(body: T) -> Result<T, ApiError> {
    body.validate()?;
    Ok(body)
}
