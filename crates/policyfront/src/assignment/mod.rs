//! # Assignment Store
//!
//! The admin's order-to-agent assignment flow: load one order, load the
//! delivery roster, commit at most one assignment per order view.
//!
//! ## Structure
//!
//! - [`store`] - [`AssignmentBoard`] and its [`StoreModel`](store_runtime::StoreModel) implementation
//! - [`error`] - [`AssignmentError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## The phase machine
//!
//! `Unloaded → Loading → {Loaded, Failed}`; from an unassigned `Loaded`,
//! `Assigning → Loaded` (with the server's updated order on success, the
//! prior order plus an error message on failure). A `Loaded` order that
//! already carries a delivery agent is terminal for the flow, and `Failed`
//! recovers only by loading again.
//!
//! ## Key Features
//!
//! - **Local guards**: missing ids, a missing or mismatched order, and an
//!   already-assigned order are rejected before any backend call
//! - **Session exclusion**: an agent bound during this flow session drops out
//!   of [`AssignmentBoard::eligible_agents`] even before the roster refreshes
//! - **No retry**: a failed commit surfaces its message and waits for the
//!   operator

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use crate::clients::AssignmentClient;
use store_runtime::StoreActor;

/// Creates a new Assignment store and its client.
pub fn new() -> (StoreActor<AssignmentBoard>, AssignmentClient) {
    let (actor, client) = StoreActor::new(AssignmentBoard::default(), 32);
    (actor, AssignmentClient::new(client))
}
