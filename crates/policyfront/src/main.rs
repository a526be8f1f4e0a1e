//! # Policyfront
//!
//! Store-based front-end core for a multi-role insurance storefront.
//!
//! ## 🚀 Core Components
//!
//! - **[store_runtime]**: The generic store runtime. Contains [`StoreActor`](store_runtime::StoreActor) and the [`StoreModel`](store_runtime::StoreModel) trait.
//! - **[policyfront::model]**: Pure data structures ([`Order`], [`DeliveryAgent`], [`InsuranceProduct`]) shared by every flow.
//! - **[policyfront::clients]**: Type-safe wrappers (e.g., [`AssignmentClient`](policyfront::clients::AssignmentClient)) that hide the message passing.
//! - **[policyfront::lifecycle]**: Orchestration layer that manages the lifecycle of the stores.
//!
//! ## 📚 Quick Start
//!
//! The entry point is in [`main`], which demonstrates:
//! 1.  Setting up the [`Storefront`].
//! 2.  Signing in the admin session.
//! 3.  Loading an order and the delivery roster, then assigning an agent.
//!
//! ## 🧪 Testing
//!
//! See [`policyfront::api::MockBackend`] for the scriptable backend used by
//! the integration tests (and by this demo, so it runs without a server).

use std::sync::Arc;

use policyfront::api::{op, MockBackend};
use policyfront::assignment::AssignmentError;
use policyfront::config::AppConfig;
use policyfront::lifecycle::Storefront;
use policyfront::model::{Credentials, Role};
use policyfront::session::TokenVault;
use serde_json::json;
use store_runtime::tracing::setup_tracing;
use tracing::{error, info, Instrument};

/// Queues the responses the demo flows will consume.
fn seed_backend(backend: &MockBackend) {
    backend.script_role_ok(
        op::LOGIN,
        Role::Admin,
        json!({
            "token": "demo-admin-token",
            "admin": {"_id": "u9", "name": "Root", "email": "root@example.com"}
        }),
    );
    backend.script_ok(
        op::FETCH_ORDER,
        json!({
            "_id": "o1",
            "status": "pending",
            "totalAmount": 1800.0,
            "paymentMethod": "card",
            "deliveryBoy": null
        }),
    );
    backend.script_ok(
        op::LIST_AGENTS,
        json!([
            {"_id": "a1", "name": "Asha", "isAvailable": true, "rating": 4.8, "totalDeliveries": 120},
            {"_id": "a2", "name": "Vikram", "isAvailable": false, "rating": 4.1, "totalDeliveries": 64}
        ]),
    );
    backend.script_ok(
        op::ASSIGN_ORDER,
        json!({
            "_id": "o1",
            "status": "processing",
            "totalAmount": 1800.0,
            "paymentMethod": "card",
            "deliveryBoy": "a1"
        }),
    );
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(base_url = %config.base_url, "Starting storefront (demo serves scripted responses in-process)");

    // The demo keeps its session file out of the configured vault path so a
    // scripted token never shadows a real one.
    let vault_path = std::env::temp_dir().join("policyfront-demo/session.json");
    let _ = std::fs::remove_file(&vault_path);

    let backend = Arc::new(MockBackend::new());
    seed_backend(&backend);

    let storefront = Storefront::new(backend, Arc::new(TokenVault::open(vault_path)));

    // Sign in the admin session
    let span = tracing::info_span!("admin_login");
    async {
        info!("Signing in admin");
        let credentials = Credentials {
            email: "root@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        storefront
            .session
            .login(Role::Admin, credentials)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!("Admin session established");

    // Load the order and the delivery roster, then assign
    let span = tracing::info_span!("order_assignment");
    let assign_result = async {
        info!("Loading order and delivery roster");
        let board = storefront
            .assignment
            .load_order("o1")
            .await
            .map_err(|e| e.to_string())?;
        let order_status = board.order().map(|o| o.status).unwrap_or_default();
        info!(status = %order_status, "Order loaded");

        let board = storefront
            .assignment
            .load_agents()
            .await
            .map_err(|e| e.to_string())?;
        info!(eligible = board.eligible_agents().len(), "Roster loaded");

        storefront
            .assignment
            .assign("o1", "a1")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    match assign_result {
        Ok(board) => {
            let assigned_to = board
                .order()
                .and_then(|o| o.delivery_boy.clone())
                .unwrap_or_default();
            info!(agent_id = %assigned_to, "Order assigned");
        }
        Err(e) => error!(error = %e, "Assignment failed"),
    }

    // A second attempt hits the terminal guard before any backend call
    match storefront.assignment.assign("o1", "a2").await {
        Err(AssignmentError::AlreadyAssigned) => {
            info!("Second attempt rejected: order already has an agent")
        }
        Ok(_) => error!("Second assignment unexpectedly succeeded"),
        Err(e) => error!(error = %e, "Second assignment failed for the wrong reason"),
    }

    // Shutdown storefront gracefully
    storefront.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
