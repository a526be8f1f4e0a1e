//! # Runtime Errors
//!
//! This module defines the common error types used throughout the store
//! runtime. Centralizing them keeps error handling consistent across all
//! stores and clients.

/// Errors that can occur within the store runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
    #[error("Store dropped response channel")]
    Dropped,
    #[error("Rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the typed flow error carried by a [`StoreError::Rejected`].
    ///
    /// Flow clients use this in their `map_error` implementations so that a
    /// rejection raised inside `apply` comes back to the caller as the same
    /// typed error, not a stringified copy. Runtime errors (and rejections of
    /// a different type) are handed back unchanged.
    pub fn into_rejection<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::Rejected(inner) => inner
                .downcast::<E>()
                .map(|boxed| *boxed)
                .map_err(StoreError::Rejected),
            other => Err(other),
        }
    }
}
