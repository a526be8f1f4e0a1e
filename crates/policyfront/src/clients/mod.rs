//! Typed flow clients wrapping the generic store clients.
//!
//! Each client exposes domain-named methods for one store's actions and a
//! `current_*` snapshot accessor; all of them recover the typed flow error a
//! store rejection carries.

pub mod admin_client;
pub mod assignment_client;
pub mod booking_client;
pub mod catalog_client;
pub mod session_client;

pub use admin_client::AdminClient;
pub use assignment_client::AssignmentClient;
pub use booking_client::BookingClient;
pub use catalog_client::CatalogClient;
pub use session_client::SessionClient;
