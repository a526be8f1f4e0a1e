//! Error types for the session store.

use crate::api::ApiError;
use crate::model::Role;
use crate::session::VaultError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The backend rejected or never answered an auth call.
    #[error("Session API error: {0}")]
    Api(#[from] ApiError),

    /// No token is stored for the role, so the call cannot be made.
    #[error("Not authenticated: {0}")]
    NotAuthenticated(Role),

    /// The session file could not be written.
    #[error("Session vault error: {0}")]
    Vault(#[from] VaultError),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::Store(msg)
    }
}
