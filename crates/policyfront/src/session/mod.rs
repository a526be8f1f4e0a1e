//! # Session Store
//!
//! Four independent role sessions (customer, vendor, delivery agent, admin)
//! behind one sequential store, with bearer tokens persisted in the
//! [`TokenVault`].
//!
//! ## Structure
//!
//! - [`store`] - [`SessionState`] and its [`StoreModel`](store_runtime::StoreModel) implementation
//! - [`vault`] - [`TokenVault`], the persisted role-token slots
//! - [`error`] - [`SessionError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## Key Features
//!
//! - **Slot independence**: login, logout and expiry touch exactly one role
//! - **Silent restore**: stored tokens re-authenticate at startup; expired
//!   ones are dropped without surfacing an error
//! - **Legacy persistence**: the vault file keeps the original key names, so
//!   existing session files keep working

pub mod error;
pub mod store;
pub mod vault;

pub use error::*;
pub use store::*;
pub use vault::*;

use crate::clients::SessionClient;
use store_runtime::StoreActor;

/// Creates a new Session store and its client.
pub fn new() -> (StoreActor<SessionState>, SessionClient) {
    let (actor, client) = StoreActor::new(SessionState::default(), 32);
    (actor, SessionClient::new(client))
}
