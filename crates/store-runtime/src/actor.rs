//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the runtime component that owns one
//! store's state. It implements the "Server" side of the Actor Model,
//! processing dispatched actions sequentially and ensuring exclusive access to
//! the state.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::model::StoreModel;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one flow's view-model state.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Even with a dozen `StoreActor` instances running, each one processes its
/// own messages *sequentially* in a loop, so the state needs no `Mutex` or
/// `RwLock`. Sequential reduction is also a correctness tool: an action
/// queued behind an in-flight one sees the first one's outcome before its own
/// guards run.
///
/// # Usage Pattern
///
/// 1. **Create**: Call [`StoreActor::new`] with the initial state to get the
///    `actor` (server) and `client` (interface).
/// 2. **Wire**: Pass dependencies (backend handle, credential store) into
///    `actor.run(context)`.
/// 3. **Run**: Spawn the actor's run loop in a background task.
///
/// # Implementation Details
///
/// ## Operations
///
/// * **Dispatch**:
///     1. Calls [`StoreModel::apply`] with the action and injected context.
///     2. On `Ok`, replies with a clone of the post-action state.
///     3. On `Err`, boxes the typed flow error into
///        [`StoreError::Rejected`] and replies with it; mutations the model
///        made before failing (its surfaced error slot) are kept.
///
/// * **Snapshot**:
///     1. Replies with a clone of the current state.
pub struct StoreActor<M: StoreModel> {
    receiver: mpsc::Receiver<StoreRequest<M>>,
    state: M,
}

impl<M: StoreModel> StoreActor<M> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The state the store starts from.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    pub fn new(initial: M, buffer_size: usize) -> (Self, StoreClient<M>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every `apply` call. This allows
    /// models to reach external dependencies that were created *after* the
    /// actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: M::Context) {
        // Extract just the type name (e.g., "Catalog" instead of
        // "policyfront::catalog::store::Catalog")
        let store_type = std::any::type_name::<M>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(store_type, ?action, "Dispatch");
                    match self.state.apply(action, &context).await {
                        Ok(()) => {
                            info!(store_type, "Applied");
                            let _ = respond_to.send(Ok(self.state.clone()));
                        }
                        Err(e) => {
                            warn!(store_type, error = %e, "Rejected");
                            let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(store_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(store_type, "Shutdown");
    }
}
