//! # Booking Store
//!
//! Appointment booking and the two appointment list views (customer-scoped
//! and vendor-scoped).
//!
//! ## Structure
//!
//! - [`store`] - [`AppointmentBook`] and its [`StoreModel`](store_runtime::StoreModel) implementation
//! - [`error`] - [`BookingError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## Key Features
//!
//! - **One-shot create**: a booking is a single call; success appends the
//!   returned record, failure changes nothing but the error message
//! - **No cancellation**: appointments are never updated or deleted from the
//!   client
//! - **Empty is fine**: a list fetch returning `[]` is a successful empty
//!   state

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use crate::clients::BookingClient;
use store_runtime::StoreActor;

/// Creates a new Booking store and its client.
pub fn new() -> (StoreActor<AppointmentBook>, BookingClient) {
    let (actor, client) = StoreActor::new(AppointmentBook::default(), 32);
    (actor, BookingClient::new(client))
}
