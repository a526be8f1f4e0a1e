//! # Store Runtime
//!
//! This crate provides the building blocks for type-safe, sequentially
//! processed view-model stores in Rust. Each store owns one flow's state and
//! reduces dispatched actions one at a time inside its own Tokio task,
//! combining the familiar **store/dispatch** pattern with the **Actor Model**.
//!
//! ## Why a store actor?
//!
//! A UI-facing flow (an order view, a sign-in panel, a catalog editor) is a
//! small state machine fed by async requests. Wrapping that state in an actor
//! gives us:
//!
//! - **Isolated state** — the store is owned by exactly one task; no locks.
//! - **Sequential reduction** — actions apply one at a time, so a second
//!   submission queued behind an in-flight one observes the first one's
//!   outcome before it runs.
//! - **Cheap fan-out** — any number of cloned clients can dispatch and read
//!   snapshots concurrently.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Model Layer** ([`StoreModel`]) - your flow state and reduction logic
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and concurrency
//! 3. **Interface Layer** ([`StoreClient`]) - type-safe communication
//!
//! You write the flow logic **once** in the model trait, and the runtime
//! handles the async message passing, error boxing, and state snapshots.
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_runtime::{StoreActor, StoreModel};
//!
//! // 1. Define the store state and its actions
//! #[derive(Clone, Debug, Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Add(i64),
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter overflow")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl StoreModel for Counter {
//!     type Action = CounterAction;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     async fn apply(&mut self, action: CounterAction, _ctx: &()) -> Result<(), CounterError> {
//!         match action {
//!             CounterAction::Add(n) => {
//!                 self.value = self.value.checked_add(n).ok_or(CounterError)?;
//!                 Ok(())
//!             }
//!         }
//!     }
//! }
//!
//! // 2. Use the store
//! #[tokio::main]
//! async fn main() {
//!     // Create actor and client
//!     let (actor, client) = StoreActor::new(Counter::default(), 10);
//!
//!     // Spawn the actor
//!     tokio::spawn(actor.run(()));
//!
//!     // Dispatch an action; the reply is the post-action state
//!     let state = client.dispatch(CounterAction::Add(2)).await.unwrap();
//!     assert_eq!(state.value, 2);
//!
//!     // Read the current state without mutating it
//!     let snapshot = client.snapshot().await.unwrap();
//!     assert_eq!(snapshot.value, 2);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies (backend clients, credential stores) are injected at
//! **runtime** via [`StoreActor::run`], not at construction time. This "late
//! binding" lets every store be created up front and wired afterwards; the
//! model declares what it needs through [`StoreModel::Context`].
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Actions are processed **sequentially** within a store (no locks needed!)
//! - Multiple stores run in **parallel** (true concurrency)
//! - No shared mutable state (message passing only)
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockStore`](mock::MockStore) that
//! implements the same [`StoreClient`] API as the real runtime but replays
//! scripted expectations in-memory, so flow clients can be unit tested
//! without spawning any store.

pub mod actor;
pub mod client;
pub mod error;
pub mod macros;
pub mod message;
pub mod mock;
pub mod model;
pub mod tracing;
pub mod view;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Reply, StoreRequest};
pub use model::StoreModel;
pub use view::StoreView;
