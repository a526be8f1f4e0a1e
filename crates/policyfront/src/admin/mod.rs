//! # Admin Dashboard Store
//!
//! The back-office overview: seven concurrent list/analytics fetches and the
//! admin delete operations.
//!
//! ## Structure
//!
//! - [`store`] - [`AdminDashboard`] and its [`StoreModel`](store_runtime::StoreModel) implementation
//! - [`error`] - [`AdminError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## Key Features
//!
//! - **Concurrent batch**: `LoadAll` joins all seven fetches; the store stays
//!   sequential, the fan-out happens inside one action
//! - **All-or-nothing reporting**: successful fetches land in state even when
//!   a sibling fails, but one shared error flag makes the whole batch report
//!   failure
//! - **Local filtering**: a successful delete filters the matching list in
//!   place, no refetch

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use crate::clients::AdminClient;
use store_runtime::StoreActor;

/// Creates a new Admin dashboard store and its client.
pub fn new() -> (StoreActor<AdminDashboard>, AdminClient) {
    let (actor, client) = StoreActor::new(AdminDashboard::default(), 32);
    (actor, AdminClient::new(client))
}
