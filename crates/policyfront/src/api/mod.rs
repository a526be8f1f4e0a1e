//! Backend REST surface.
//!
//! The [`BackendApi`] trait enumerates every operation the stores perform;
//! [`HttpBackend`] is the production `reqwest` implementation and
//! [`MockBackend`] a scriptable in-memory double that records every call.

pub mod backend;
pub mod error;
pub mod http;
pub mod mock;
pub mod types;

pub use backend::BackendApi;
pub use error::ApiError;
pub use http::HttpBackend;
pub use mock::{op, CallRecord, MockBackend, ProductWrite};
pub use types::AuthSession;
