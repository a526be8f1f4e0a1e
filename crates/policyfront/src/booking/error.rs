//! Error types for the booking store.

use crate::api::ApiError;
use crate::model::Role;
use thiserror::Error;

/// Errors that can occur during appointment booking.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// The backend rejected or never answered the call.
    #[error("Booking API error: {0}")]
    Api(#[from] ApiError),

    /// No token is stored for the role making the call.
    #[error("Not authenticated: {0}")]
    NotAuthenticated(Role),

    /// Vendor, user and product ids must all be non-empty.
    #[error("Vendor, user and product ids are required")]
    MissingIds,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for BookingError {
    fn from(msg: String) -> Self {
        BookingError::Store(msg)
    }
}
