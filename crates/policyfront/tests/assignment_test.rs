use std::sync::Arc;

use policyfront::api::{op, ApiError, MockBackend};
use policyfront::assignment::{self, AssignmentContext, AssignmentError, AssignmentPhase};
use policyfront::clients::AssignmentClient;
use policyfront::model::Role;
use policyfront::session::TokenVault;
use serde_json::json;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Integration test: real Assignment store with a scripted backend.
///
/// Pattern 2: Store + Mocks
/// - Real Assignment store (tests the guards and the phase machine)
/// - Scripted `MockBackend` (isolates the HTTP layer)
fn spawn_board(
    backend: &Arc<MockBackend>,
    dir: &TempDir,
    seed: &[(Role, &str)],
) -> (AssignmentClient, JoinHandle<()>) {
    let vault = Arc::new(TokenVault::open(dir.path().join("session.json")));
    for (role, token) in seed {
        vault.save(*role, *token).expect("seed token");
    }
    let (actor, client) = assignment::new();
    let handle = tokio::spawn(actor.run(AssignmentContext {
        backend: backend.clone(),
        vault,
    }));
    (client, handle)
}

fn pending_order() -> serde_json::Value {
    json!({
        "_id": "o1",
        "status": "pending",
        "totalAmount": 1800.0,
        "paymentMethod": "card",
        "deliveryBoy": null
    })
}

fn roster() -> serde_json::Value {
    json!([
        {"_id": "a1", "name": "Asha", "isAvailable": true, "rating": 4.8, "totalDeliveries": 120},
        {"_id": "a2", "name": "Vikram", "isAvailable": false, "rating": 4.1, "totalDeliveries": 64}
    ])
}

/// The core flow: load an unassigned order and the roster, assign the one
/// eligible agent, and verify the view flips to its terminal assigned state.
#[tokio::test]
async fn test_assign_binds_agent_to_loaded_order() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(op::FETCH_ORDER, pending_order());
    backend.script_ok(op::LIST_AGENTS, roster());
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
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_board(&backend, &dir, &[(Role::Admin, "admin-tok")]);

    // Load the order under view
    let board = client.load_order("o1").await.expect("Failed to load order");
    let order = board.order().expect("Order should be loaded");
    assert_eq!(order.id, "o1");
    assert!(!board.is_assigned());

    // Load the roster; only the available agent is eligible
    let board = client.load_agents().await.expect("Failed to load agents");
    assert_eq!(board.agents.len(), 2);
    let eligible: Vec<&str> = board
        .eligible_agents()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(eligible, vec!["a1"]);

    // Commit the assignment
    let board = client.assign("o1", "a1").await.expect("Failed to assign");
    assert!(board.is_assigned(), "View must show the terminal state");
    assert_eq!(
        board.order().and_then(|o| o.delivery_boy.as_deref()),
        Some("a1")
    );
    assert_eq!(board.error, None);

    // The committed agent drops out of eligibility for this flow session
    assert!(board.eligible_agents().is_empty());

    // A second submission is rejected locally, with no further backend call.
    // What the backend would do if two separate admin sessions raced the
    // same order is its contract, not pinned here.
    let err = client
        .assign("o1", "a2")
        .await
        .expect_err("Second assign should be rejected");
    assert_eq!(err, AssignmentError::AlreadyAssigned);
    assert_eq!(backend.call_count(op::ASSIGN_ORDER), 1);

    drop(client);
    handle.await.expect("Assignment store task failed");
}

#[tokio::test]
async fn test_assign_without_loaded_order_is_rejected() {
    let backend = Arc::new(MockBackend::new());
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_board(&backend, &dir, &[(Role::Admin, "admin-tok")]);

    let err = client
        .assign("o1", "a1")
        .await
        .expect_err("Assign with nothing loaded should fail");
    assert_eq!(err, AssignmentError::NoOrderLoaded);
    assert!(backend.calls().is_empty(), "Guards fire before the network");

    drop(client);
    handle.await.expect("Assignment store task failed");
}

#[tokio::test]
async fn test_assign_against_a_different_order_is_rejected() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(op::FETCH_ORDER, pending_order());
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_board(&backend, &dir, &[(Role::Admin, "admin-tok")]);

    client.load_order("o1").await.expect("Failed to load order");
    let err = client
        .assign("o2", "a1")
        .await
        .expect_err("Assign for a different order should fail");
    assert_eq!(
        err,
        AssignmentError::OrderMismatch {
            loaded: "o1".to_string(),
            requested: "o2".to_string(),
        }
    );
    assert_eq!(backend.call_count(op::ASSIGN_ORDER), 0);

    drop(client);
    handle.await.expect("Assignment store task failed");
}

#[tokio::test]
async fn test_blank_ids_are_rejected_before_the_network() {
    let backend = Arc::new(MockBackend::new());
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_board(&backend, &dir, &[(Role::Admin, "admin-tok")]);

    let err = client
        .assign("", "a1")
        .await
        .expect_err("Blank order id should fail");
    assert_eq!(err, AssignmentError::MissingIds);
    assert!(backend.calls().is_empty());

    drop(client);
    handle.await.expect("Assignment store task failed");
}

/// A failed commit keeps the order view exactly as it was, and the next
/// attempt may succeed.
#[tokio::test]
async fn test_failed_assign_keeps_the_order_view() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(op::FETCH_ORDER, pending_order());
    backend.script_err(
        op::ASSIGN_ORDER,
        ApiError::Status {
            status: 500,
            message: "agent on leave".to_string(),
        },
    );
    backend.script_ok(
        op::ASSIGN_ORDER,
        json!({"_id": "o1", "status": "processing", "deliveryBoy": "a1"}),
    );
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_board(&backend, &dir, &[(Role::Admin, "admin-tok")]);

    client.load_order("o1").await.expect("Failed to load order");
    let err = client
        .assign("o1", "a1")
        .await
        .expect_err("First attempt should fail");
    assert!(matches!(err, AssignmentError::Api(_)));

    let board = client.current_board().await.expect("Failed to snapshot");
    assert!(matches!(board.phase, AssignmentPhase::Loaded(_)));
    assert!(!board.is_assigned(), "Failed commit must not bind the agent");
    assert!(board
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("agent on leave"));

    // The operator retries and the second attempt lands
    let board = client.assign("o1", "a1").await.expect("Retry should succeed");
    assert!(board.is_assigned());
    assert_eq!(board.error, None);

    drop(client);
    handle.await.expect("Assignment store task failed");
}

/// The delivery-role view reads with the agent token; the admin-side loads
/// refuse to run on it.
#[tokio::test]
async fn test_role_tokens_do_not_substitute_for_each_other() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(
        op::MY_DELIVERIES,
        json!([{"_id": "o7", "status": "shipped", "deliveryBoy": "a1"}]),
    );
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_board(&backend, &dir, &[(Role::Agent, "agent-tok")]);

    let board = client
        .load_my_orders()
        .await
        .expect("Failed to load deliveries");
    assert_eq!(board.my_orders.len(), 1);
    assert_eq!(board.my_orders[0].id, "o7");

    let calls = backend.calls();
    assert_eq!(calls[0].token.as_deref(), Some("agent-tok"));

    // The admin-side load must not fall back to the agent token
    let err = client
        .load_order("o1")
        .await
        .expect_err("Load without an admin session should fail");
    assert_eq!(err, AssignmentError::NotAuthenticated(Role::Admin));
    assert_eq!(backend.call_count(op::FETCH_ORDER), 0);

    drop(client);
    handle.await.expect("Assignment store task failed");
}
