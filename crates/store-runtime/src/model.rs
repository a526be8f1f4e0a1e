//! # StoreModel Trait
//!
//! The `StoreModel` trait defines the contract a flow's view-model state must
//! implement to be driven by the generic [`StoreActor`](crate::StoreActor).
//! It specifies associated types for actions, runtime context, and errors, and
//! a single async reduction hook ([`StoreModel::apply`]).
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining one contract that every flow state (session board, assignment
//! board, catalog, …) must satisfy, we write the actor loop *once* and reuse
//! it for every flow. Associated types keep the whole pipeline type-safe: a
//! session store can only be sent session actions, and the compiler enforces
//! it.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait a view-model store implements to be managed by a
/// [`StoreActor`](crate::StoreActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` because reducing an action usually awaits a
/// backend call. The `Context` type carries the store's runtime dependencies
/// and is injected into every [`apply`](StoreModel::apply) call; pass it to
/// [`StoreActor::run`](crate::StoreActor::run) rather than the constructor
/// ("late binding").
///
/// # State discipline
/// `apply` owns the only mutable reference to the state. On `Ok` the runtime
/// replies with a clone of the post-action state; on `Err` whatever the model
/// wrote before failing (typically a surfaced error message slot) is kept, and
/// the typed error travels back boxed inside
/// [`StoreError::Rejected`](crate::StoreError::Rejected).
#[async_trait]
pub trait StoreModel: Clone + Send + Sync + 'static {
    /// Messages this store reduces, one at a time.
    type Action: Send + Debug;

    /// The runtime dependencies injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The flow's typed rejection.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum covers the whole store rather than one type per action.
    /// The union is slightly less precise but keeps client signatures and
    /// pattern matching uniform across every operation of the flow.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies one action to the state.
    async fn apply(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
