//! # Generic Client
//!
//! This module defines the generic client for communicating with store
//! actors.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::model::StoreModel;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The `StoreClient<M>` forwards dispatch and snapshot requests over a Tokio
/// mpsc channel and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods return `Future`s that resolve to
///   `Result<…, StoreError>`.
/// * **Generic** – works with any state that implements `StoreModel`.
#[derive(Clone)]
pub struct StoreClient<M: StoreModel> {
    sender: mpsc::Sender<StoreRequest<M>>,
}

impl<M: StoreModel> StoreClient<M> {
    pub fn new(sender: mpsc::Sender<StoreRequest<M>>) -> Self {
        Self { sender }
    }

    /// Applies one action and returns a clone of the post-action state.
    pub async fn dispatch(&self, action: M::Action) -> Result<M, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Reads a clone of the current state without mutating it.
    pub async fn snapshot(&self) -> Result<M, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
