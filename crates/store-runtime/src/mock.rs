//! # Mock Store & Testing Guide
//!
//! The `MockStore<M>` type implements the same `StoreClient<M>` API as the
//! production runtime but replays scripted expectations entirely in-memory.
//! It lets you unit test flow clients without spawning any store.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real Store |
//! |---------|-----------|------------|
//! | **Speed** | Instant (in-memory) | Fast (involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real reduction |
//! | **Use Case** | Unit testing logic *around* the client | Testing the store itself or full flows |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! Three patterns cover this workspace:
//!
//! 1. **Client logic test (pure mock)** — a flow client against a
//!    `MockStore`, no reduction logic involved.
//! 2. **Real store with a scripted backend** — the store actor runs for real
//!    and its backend dependency is a scripted double; this is where the
//!    flow guards and state transitions are proven.
//! 3. **Full system test** — every store spawned and wired, end to end.
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_runtime::mock::MockStore;
//! use store_runtime::StoreModel;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Gauge {
//!     level: u32,
//! }
//!
//! #[derive(Debug)]
//! enum GaugeAction {
//!     Set(u32),
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("gauge error")]
//! struct GaugeError;
//!
//! #[async_trait]
//! impl StoreModel for Gauge {
//!     type Action = GaugeAction;
//!     type Context = ();
//!     type Error = GaugeError;
//!
//!     async fn apply(&mut self, action: GaugeAction, _ctx: &()) -> Result<(), GaugeError> {
//!         match action {
//!             GaugeAction::Set(level) => {
//!                 self.level = level;
//!                 Ok(())
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Setup mock
//!     let mut mock = MockStore::<Gauge>::new();
//!     mock.expect_dispatch().return_state(Gauge { level: 7 });
//!
//!     // 2. Drive the client exactly as production code would
//!     let client = mock.client();
//!     let state = client.dispatch(GaugeAction::Set(7)).await.unwrap();
//!     assert_eq!(state, Gauge { level: 7 });
//!
//!     // 3. Verify all expectations were met
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw receiver when a test
//! needs to inspect the action itself, or use the fluent [`MockStore`] API.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::model::StoreModel;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
enum Expectation<M: StoreModel> {
    Dispatch {
        response: Result<M, StoreError>,
    },
    Snapshot {
        response: Result<M, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Catalog>::new();
/// mock.expect_dispatch().return_state(catalog_after_create);
/// mock.expect_snapshot().return_state(catalog_after_create);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<M: StoreModel> {
    client: StoreClient<M>,
    expectations: Arc<Mutex<VecDeque<Expectation<M>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<M: StoreModel> Default for MockStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: StoreModel> MockStore<M> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<M>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before replying

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch {
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<M> {
        self.client.clone()
    }

    /// Expects a `dispatch` operation.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<M> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<M> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<M: StoreModel> {
    expectations: Arc<Mutex<VecDeque<Expectation<M>>>>,
}

impl<M: StoreModel> DispatchExpectationBuilder<M> {
    /// Sets the expectation to reply with a post-action state.
    pub fn return_state(self, state: M) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Ok(state),
        });
    }

    /// Sets the expectation to reply with an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<M: StoreModel> {
    expectations: Arc<Mutex<VecDeque<Expectation<M>>>>,
}

impl<M: StoreModel> SnapshotExpectationBuilder<M> {
    /// Sets the expectation to reply with the current state.
    pub fn return_state(self, state: M) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(state),
        });
    }

    /// Sets the expectation to reply with an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When a test needs to look at the dispatched action itself (not just reply
/// to it), the fluent [`MockStore`] is not enough: it drops the action. This
/// helper hands the test the raw channel so it can receive the
/// [`StoreRequest`], assert on the payload, and answer through the bundled
/// oneshot sender.
pub fn create_mock_client<M: StoreModel>(
    buffer_size: usize,
) -> (StoreClient<M>, mpsc::Receiver<StoreRequest<M>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request.
pub async fn expect_dispatch<M: StoreModel>(
    receiver: &mut mpsc::Receiver<StoreRequest<M>>,
) -> Option<(
    M::Action,
    tokio::sync::oneshot::Sender<Result<M, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<M: StoreModel>(
    receiver: &mut mpsc::Receiver<StoreRequest<M>>,
) -> Option<tokio::sync::oneshot::Sender<Result<M, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StoreModel;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Gauge {
        level: u32,
    }

    #[derive(Debug, PartialEq)]
    enum GaugeAction {
        Set(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("gauge error")]
    struct GaugeError;

    #[async_trait]
    impl StoreModel for Gauge {
        type Action = GaugeAction;
        type Context = ();
        type Error = GaugeError;

        async fn apply(&mut self, action: GaugeAction, _ctx: &()) -> Result<(), GaugeError> {
            match action {
                GaugeAction::Set(level) => {
                    self.level = level;
                    Ok(())
                }
            }
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Gauge>(10);

        // Test Dispatch
        let dispatch_task =
            tokio::spawn(async move { client.dispatch(GaugeAction::Set(3)).await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(action, GaugeAction::Set(3));
        responder.send(Ok(Gauge { level: 3 })).unwrap();

        let result = dispatch_task.await.unwrap();
        assert!(matches!(result, Ok(state) if state.level == 3));
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        // Create mock with fluent expectation API
        let mut mock = MockStore::<Gauge>::new();

        // Set up expectations
        mock.expect_dispatch().return_state(Gauge { level: 7 });
        mock.expect_snapshot().return_state(Gauge { level: 7 });

        let client = mock.client();

        // Execute operations
        let state = client.dispatch(GaugeAction::Set(7)).await.unwrap();
        assert_eq!(state, Gauge { level: 7 });

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot, Gauge { level: 7 });

        // Verify all expectations were met
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_store_error_injection() {
        let mut mock = MockStore::<Gauge>::new();
        let client = mock.client();

        // Simulate a closed store
        mock.expect_dispatch().return_err(StoreError::Closed);

        let result = client.dispatch(GaugeAction::Set(1)).await;
        assert!(matches!(result, Err(StoreError::Closed)));
    }
}
