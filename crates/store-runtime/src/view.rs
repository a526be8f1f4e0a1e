//! # StoreView Trait
//!
//! Provides a common interface for flow-specific clients, adding a default
//! `snapshot` method built on top of a generic `StoreClient`.

use crate::{StoreClient, StoreError, StoreModel};
use async_trait::async_trait;

/// Trait for flow-specific clients to inherit the standard read operation.
///
/// A flow client wraps a [`StoreClient`] and exposes domain-named methods for
/// its actions; this trait supplies the shared `snapshot` plumbing and the
/// error-mapping seam.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use store_runtime::{StoreClient, StoreError, StoreModel, StoreView};
///
/// // 1. Define the store state
/// #[derive(Clone, Debug, Default)]
/// struct Tally {
///     total: u32,
/// }
///
/// #[derive(Debug)]
/// enum TallyAction {
///     Bump,
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// enum TallyError {
///     #[error("store communication error: {0}")]
///     Store(String),
/// }
///
/// impl From<String> for TallyError {
///     fn from(msg: String) -> Self {
///         TallyError::Store(msg)
///     }
/// }
///
/// #[async_trait]
/// impl StoreModel for Tally {
///     type Action = TallyAction;
///     type Context = ();
///     type Error = TallyError;
///
///     async fn apply(&mut self, _action: TallyAction, _ctx: &()) -> Result<(), TallyError> {
///         self.total += 1;
///         Ok(())
///     }
/// }
///
/// // 2. Define the client wrapper
/// struct TallyClient {
///     inner: StoreClient<Tally>,
/// }
///
/// // 3. Implement StoreView
/// #[async_trait]
/// impl StoreView<Tally> for TallyClient {
///     type Error = TallyError;
///
///     fn inner(&self) -> &StoreClient<Tally> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         TallyError::Store(e.to_string())
///     }
/// }
///
/// // 4. Usage
/// async fn usage(client: TallyClient) {
///     // snapshot() is provided automatically!
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait StoreView<M: StoreModel>: Send + Sync {
    /// The flow-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<M>;

    /// Map runtime errors to the flow's error type.
    ///
    /// Use [`StoreError::into_rejection`] here to recover the typed flow
    /// error a model returned from `apply`.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read a clone of the current store state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<M, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
