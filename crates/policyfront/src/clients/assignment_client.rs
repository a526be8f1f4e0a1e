//! # Assignment Client
//!
//! Provides a high-level API for interacting with the Assignment store.
//! It wraps a `StoreClient<AssignmentBoard>` and exposes the order/agent
//! coordination methods.
use crate::assignment::{AssignmentAction, AssignmentBoard, AssignmentError};
use async_trait::async_trait;
use store_runtime::{impl_store_client, StoreClient, StoreError, StoreView};
use tracing::{debug, instrument};

/// Client for interacting with the Assignment store.
#[derive(Clone)]
pub struct AssignmentClient {
    inner: StoreClient<AssignmentBoard>,
}

impl_store_client!(AssignmentClient, AssignmentBoard, AssignmentError, board);

#[async_trait]
impl StoreView<AssignmentBoard> for AssignmentClient {
    type Error = AssignmentError;

    fn inner(&self) -> &StoreClient<AssignmentBoard> {
        &self.inner
    }

    fn map_error(e: StoreError) -> AssignmentError {
        e.into_rejection()
            .unwrap_or_else(|e| AssignmentError::Store(e.to_string()))
    }
}

impl AssignmentClient {
    #[instrument(skip(self))]
    pub async fn load_order(&self, order_id: &str) -> Result<AssignmentBoard, AssignmentError> {
        debug!("Sending request");
        self.inner
            .dispatch(AssignmentAction::LoadOrder(order_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_agents(&self) -> Result<AssignmentBoard, AssignmentError> {
        debug!("Sending request");
        self.inner
            .dispatch(AssignmentAction::LoadAgents)
            .await
            .map_err(Self::map_error)
    }

    /// Commits one assignment. Guard violations (no order loaded, different
    /// order, already assigned, blank ids) come back as typed errors without
    /// a backend call.
    #[instrument(skip(self))]
    pub async fn assign(
        &self,
        order_id: &str,
        agent_id: &str,
    ) -> Result<AssignmentBoard, AssignmentError> {
        debug!("Sending request");
        self.inner
            .dispatch(AssignmentAction::Assign {
                order_id: order_id.to_owned(),
                agent_id: agent_id.to_owned(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Delivery-role view: the signed-in agent's own assigned orders.
    #[instrument(skip(self))]
    pub async fn load_my_orders(&self) -> Result<AssignmentBoard, AssignmentError> {
        debug!("Sending request");
        self.inner
            .dispatch(AssignmentAction::LoadMyOrders)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_runtime::mock::{create_mock_client, expect_dispatch, MockStore};

    #[tokio::test]
    async fn assign_dispatches_both_ids() {
        let (client, mut receiver) = create_mock_client::<AssignmentBoard>(10);
        let client = AssignmentClient::new(client);

        let task = tokio::spawn(async move { client.assign("o1", "a1").await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        match &action {
            AssignmentAction::Assign { order_id, agent_id } => {
                assert_eq!(order_id, "o1");
                assert_eq!(agent_id, "a1");
            }
            other => panic!("Unexpected action: {other:?}"),
        }
        responder.send(Ok(AssignmentBoard::default())).unwrap();

        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn rejection_recovers_the_typed_error() {
        let mut mock = MockStore::<AssignmentBoard>::new();
        mock.expect_dispatch().return_err(StoreError::Rejected(Box::new(
            AssignmentError::AlreadyAssigned,
        )));

        let client = AssignmentClient::new(mock.client());
        let err = client.assign("o1", "a1").await.unwrap_err();
        assert_eq!(err, AssignmentError::AlreadyAssigned);
        mock.verify();
    }

    #[tokio::test]
    async fn closed_store_maps_to_store_error() {
        let mut mock = MockStore::<AssignmentBoard>::new();
        mock.expect_dispatch().return_err(StoreError::Closed);

        let client = AssignmentClient::new(mock.client());
        let err = client.load_agents().await.unwrap_err();
        assert!(matches!(err, AssignmentError::Store(_)));
    }
}
