//! # Catalog Store
//!
//! Vendor CRUD over insurance products, plus the public read-only listing.
//!
//! ## Structure
//!
//! - [`store`] - [`Catalog`] and its [`StoreModel`](store_runtime::StoreModel) implementation
//! - [`form`] - draft validation and the update image contract
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and client
//!
//! ## The image contract
//!
//! Product writes are multipart: new images travel as file parts. On update,
//! a draft with zero new images re-sends the product's existing URLs (first
//! as `mainImage`, rest as `otherImages`) so the backend keeps them instead
//! of reading their omission as deletion. [`form::validate`] owns this rule.
//!
//! ## Key Features
//!
//! - **Validation before network**: a draft missing a required field or any
//!   image produces a typed error and zero backend calls
//! - **Verbatim failure surfacing**: the server message lands in the error
//!   slot untouched; nothing retries

pub mod error;
pub mod form;
pub mod store;

pub use error::*;
pub use form::{validate, SubmitMode};
pub use store::*;

use crate::clients::CatalogClient;
use store_runtime::StoreActor;

/// Creates a new Catalog store and its client.
pub fn new() -> (StoreActor<Catalog>, CatalogClient) {
    let (actor, client) = StoreActor::new(Catalog::default(), 32);
    (actor, CatalogClient::new(client))
}
