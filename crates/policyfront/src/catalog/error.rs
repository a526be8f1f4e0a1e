//! Error types for the catalog store.

use crate::api::ApiError;
use crate::model::Role;
use thiserror::Error;

/// Errors that can occur during insurance-product operations.
///
/// `MissingField` and `NoImages` are raised by draft validation, before any
/// network call is made.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The backend rejected or never answered the call.
    #[error("Catalog API error: {0}")]
    Api(#[from] ApiError),

    /// No vendor token is stored for the call.
    #[error("Not authenticated: {0}")]
    NotAuthenticated(Role),

    /// A required form field is blank.
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    /// The draft carries no image at all, new or existing.
    #[error("At least one product image is required")]
    NoImages,

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::Store(msg)
    }
}
