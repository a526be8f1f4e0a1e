//! Error types for the assignment store.

use crate::api::ApiError;
use crate::model::Role;
use thiserror::Error;

/// Errors that can occur during order assignment.
///
/// The guard variants (`MissingIds` through `AlreadyAssigned`) are raised
/// before any network call is made.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssignmentError {
    /// The backend rejected or never answered the call.
    #[error("Assignment API error: {0}")]
    Api(#[from] ApiError),

    /// No admin (or delivery) token is stored for the call.
    #[error("Not authenticated: {0}")]
    NotAuthenticated(Role),

    /// Order id and agent id must both be non-empty.
    #[error("Order id and agent id are required")]
    MissingIds,

    /// Assign was dispatched with no order loaded.
    #[error("No order is loaded")]
    NoOrderLoaded,

    /// Assign named a different order than the one loaded.
    #[error("Loaded order is {loaded}, not {requested}")]
    OrderMismatch { loaded: String, requested: String },

    /// The loaded order already carries a delivery agent.
    #[error("Order already has a delivery agent assigned")]
    AlreadyAssigned,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for AssignmentError {
    fn from(msg: String) -> Self {
        AssignmentError::Store(msg)
    }
}
