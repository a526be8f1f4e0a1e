use std::sync::Arc;

use policyfront::api::{op, MockBackend};
use policyfront::booking::{self, BookingContext, BookingError};
use policyfront::clients::BookingClient;
use policyfront::model::Role;
use policyfront::session::TokenVault;
use serde_json::json;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Integration test: real Booking store with a scripted backend.
///
/// Pattern 2: Store + Mocks
/// - Real Booking store (tests the guards and the list semantics)
/// - Scripted `MockBackend` (isolates the HTTP layer)
fn spawn_book(
    backend: &Arc<MockBackend>,
    dir: &TempDir,
    seed: &[(Role, &str)],
) -> (BookingClient, JoinHandle<()>) {
    let vault = Arc::new(TokenVault::open(dir.path().join("session.json")));
    for (role, token) in seed {
        vault.save(*role, *token).expect("seed token");
    }
    let (actor, client) = booking::new();
    let handle = tokio::spawn(actor.run(BookingContext {
        backend: backend.clone(),
        vault,
    }));
    (client, handle)
}

#[tokio::test]
async fn test_booking_appends_to_my_appointments() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(
        op::CREATE_APPOINTMENT,
        json!({"_id": "ap1", "user": "u1", "vendor": "v1", "product": "p1", "status": "pending"}),
    );
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_book(&backend, &dir, &[(Role::Customer, "cust-tok")]);

    let book = client
        .book("v1", "u1", "p1")
        .await
        .expect("Failed to book appointment");

    assert_eq!(book.mine.len(), 1);
    assert_eq!(book.mine[0].id, "ap1");
    assert_eq!(book.error, None);
    assert!(book.vendor_queue.is_empty());

    let calls = backend.calls();
    assert_eq!(calls[0].token.as_deref(), Some("cust-tok"));

    drop(client);
    handle.await.expect("Booking store task failed");
}

#[tokio::test]
async fn test_blank_ids_issue_no_backend_call() {
    let backend = Arc::new(MockBackend::new());
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_book(&backend, &dir, &[(Role::Customer, "cust-tok")]);

    let err = client
        .book("v1", "", "p1")
        .await
        .expect_err("Blank user id should fail");
    assert_eq!(err, BookingError::MissingIds);
    assert!(backend.calls().is_empty());

    drop(client);
    handle.await.expect("Booking store task failed");
}

#[tokio::test]
async fn test_booking_requires_a_customer_session() {
    let backend = Arc::new(MockBackend::new());
    let dir = tempfile::tempdir().expect("tempdir");
    // A vendor session alone does not allow booking
    let (client, handle) = spawn_book(&backend, &dir, &[(Role::Vendor, "vendor-tok")]);

    let err = client
        .book("v1", "u1", "p1")
        .await
        .expect_err("Booking without a customer session should fail");
    assert_eq!(err, BookingError::NotAuthenticated(Role::Customer));
    assert!(backend.calls().is_empty());

    drop(client);
    handle.await.expect("Booking store task failed");
}

/// An empty list from the backend is a successful empty state, not an error.
#[tokio::test]
async fn test_empty_list_is_a_successful_state() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(op::APPOINTMENTS_FOR_USER, json!([]));
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_book(&backend, &dir, &[(Role::Customer, "cust-tok")]);

    let book = client
        .load_for_user("u1")
        .await
        .expect("Empty list must load cleanly");
    assert!(book.mine.is_empty());
    assert_eq!(book.error, None);

    drop(client);
    handle.await.expect("Booking store task failed");
}

#[tokio::test]
async fn test_customer_and_vendor_views_stay_separate() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(
        op::APPOINTMENTS_FOR_USER,
        json!([{"_id": "ap1", "user": "u1"}]),
    );
    backend.script_ok(
        op::APPOINTMENTS_FOR_VENDOR,
        json!([{"_id": "ap2", "vendor": "v1"}, {"_id": "ap3", "vendor": "v1"}]),
    );
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_book(
        &backend,
        &dir,
        &[(Role::Customer, "cust-tok"), (Role::Vendor, "vendor-tok")],
    );

    client.load_for_user("u1").await.expect("Failed to load mine");
    let book = client
        .load_for_vendor("v1")
        .await
        .expect("Failed to load vendor queue");

    assert_eq!(book.mine.len(), 1);
    assert_eq!(book.vendor_queue.len(), 2);

    // Each view read with its own role token
    let calls = backend.calls();
    assert_eq!(calls[0].token.as_deref(), Some("cust-tok"));
    assert_eq!(calls[1].token.as_deref(), Some("vendor-tok"));

    drop(client);
    handle.await.expect("Booking store task failed");
}

/// Loads wholesale-replace: a refetch does not merge with what was there.
#[tokio::test]
async fn test_reload_replaces_the_list() {
    let backend = Arc::new(MockBackend::new());
    backend.script_ok(
        op::APPOINTMENTS_FOR_USER,
        json!([{"_id": "ap1"}, {"_id": "ap2"}]),
    );
    backend.script_ok(op::APPOINTMENTS_FOR_USER, json!([{"_id": "ap2"}]));
    let dir = tempfile::tempdir().expect("tempdir");
    let (client, handle) = spawn_book(&backend, &dir, &[(Role::Customer, "cust-tok")]);

    let book = client.load_for_user("u1").await.expect("First load failed");
    assert_eq!(book.mine.len(), 2);

    let book = client.load_for_user("u1").await.expect("Second load failed");
    assert_eq!(book.mine.len(), 1);
    assert_eq!(book.mine[0].id, "ap2");

    drop(client);
    handle.await.expect("Booking store task failed");
}
