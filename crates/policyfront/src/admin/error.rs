//! Error types for the admin dashboard store.

use crate::api::ApiError;
use crate::model::Role;
use thiserror::Error;

/// Errors that can occur during dashboard operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// A backend call was rejected or never answered. For the dashboard
    /// batch this carries the first failure.
    #[error("Admin API error: {0}")]
    Api(#[from] ApiError),

    /// No admin token is stored.
    #[error("Not authenticated: {0}")]
    NotAuthenticated(Role),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for AdminError {
    fn from(msg: String) -> Self {
        AdminError::Store(msg)
    }
}
