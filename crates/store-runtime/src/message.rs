//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the `StoreClient` and `StoreActor`.

use crate::error::StoreError;
use crate::model::StoreModel;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
///
/// # The Dispatch/Snapshot Pattern
/// A view-model store only needs two operations:
///
/// - **Dispatch**: Reduce one [`StoreModel::Action`] into the state. The
///   reply carries a clone of the post-action state, so a mutating call also
///   hands the caller the fresh rendering in one round trip.
/// - **Snapshot**: Read a clone of the current state without mutating it.
///
/// # Type Safety
/// The enum is generic over `M: StoreModel`, so a client for one store cannot
/// send another store's actions. This guarantees that you can't dispatch a
/// "catalog" action to a "session" store.
#[derive(Debug)]
pub enum StoreRequest<M: StoreModel> {
    Dispatch {
        action: M::Action,
        respond_to: Reply<M>,
    },
    Snapshot { respond_to: Reply<M> },
}
