//! Pure data structures (DTOs) mirroring the backend's wire entities.
//!
//! Everything here is a plain serde record: JSON bodies use camelCase keys and
//! Mongo-style `_id` identifiers, and optional fields default on decode so a
//! sparse backend document never fails the whole payload.

pub mod account;
pub mod agent;
pub mod appointment;
pub mod order;
pub mod product;
pub mod role;

pub use account::*;
pub use agent::*;
pub use appointment::*;
pub use order::*;
pub use product::*;
pub use role::*;
