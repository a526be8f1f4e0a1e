//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every store-based
//! application in the workspace.
//!
//! ## Configuration
//!
//! The runtime uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); store lifecycle logs already carry a `store_type`
//! field, which keeps log lines short while preserving structure.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Hierarchical spans** for request tracing
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, shutdown
//! - **Reductions**: every dispatch, with full action payloads at `debug`
//! - **Rejections**: warnings with the flow error that caused them
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full action payloads
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use store_type instead
        .compact() // Compact format shows spans inline (e.g., "order_assignment:assign")
        .init();
}
