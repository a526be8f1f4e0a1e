//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the storefront: creating the
//! five stores, wiring their shared dependencies, and shutting everything
//! down cleanly.
//!
//! ## The Orchestration Pattern
//!
//! Individual stores are simple; **wiring them together** is where the
//! complexity lives. [`Storefront`] is the conductor:
//!
//! 1. **Store Creation** - Instantiate every store and its typed client
//! 2. **Dependency Injection** - Hand each store the shared backend and
//!    token vault via context injection at `run()`
//! 3. **Graceful Shutdown** - Drop clients, await the store tasks
//!
//! ## Dependency Injection via Context
//!
//! Stores are created without dependencies and receive them late, when they
//! start:
//!
//! ```rust,ignore
//! let (session_actor, session) = session::new();
//! tokio::spawn(session_actor.run(SessionContext { backend, vault }));
//! ```
//!
//! The shared pieces are one `Arc<dyn BackendApi>` (HTTP in production, the
//! recording mock in tests and the demo) and one `Arc<TokenVault>`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every store channel
//! 2. **Stores detect closure** - `recv()` returns `None`
//! 3. **Await completion** - every store task finishes after draining its
//!    queue, so no dispatched action is lost
//!
//! ## Observability
//!
//! Call [`store_runtime::tracing::setup_tracing`] once at startup; every
//! store then logs its lifecycle and each applied action with structured
//! fields.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full action payloads
//! ```

pub mod storefront;

pub use storefront::*;
