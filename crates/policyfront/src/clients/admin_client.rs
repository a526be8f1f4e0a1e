//! # Admin Client
//!
//! Provides a high-level API for interacting with the Admin dashboard store.
//! It wraps a `StoreClient<AdminDashboard>` and exposes the batch load and
//! the delete operations.
use crate::admin::{AdminAction, AdminDashboard, AdminError};
use async_trait::async_trait;
use store_runtime::{impl_store_client, StoreClient, StoreError, StoreView};
use tracing::{debug, instrument};

/// Client for interacting with the Admin dashboard store.
#[derive(Clone)]
pub struct AdminClient {
    inner: StoreClient<AdminDashboard>,
}

impl_store_client!(AdminClient, AdminDashboard, AdminError, dashboard);

#[async_trait]
impl StoreView<AdminDashboard> for AdminClient {
    type Error = AdminError;

    fn inner(&self) -> &StoreClient<AdminDashboard> {
        &self.inner
    }

    fn map_error(e: StoreError) -> AdminError {
        e.into_rejection()
            .unwrap_or_else(|e| AdminError::Store(e.to_string()))
    }
}

impl AdminClient {
    /// Fires the seven dashboard fetches. Successes land in the returned
    /// state even when the batch as a whole reports failure.
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> Result<AdminDashboard, AdminError> {
        debug!("Sending request");
        self.inner
            .dispatch(AdminAction::LoadAll)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<AdminDashboard, AdminError> {
        debug!("Sending request");
        self.inner
            .dispatch(AdminAction::DeleteUser(user_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_vendor(&self, vendor_id: &str) -> Result<AdminDashboard, AdminError> {
        debug!("Sending request");
        self.inner
            .dispatch(AdminAction::DeleteVendor(vendor_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_agent(&self, agent_id: &str) -> Result<AdminDashboard, AdminError> {
        debug!("Sending request");
        self.inner
            .dispatch(AdminAction::DeleteAgent(agent_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: &str) -> Result<AdminDashboard, AdminError> {
        debug!("Sending request");
        self.inner
            .dispatch(AdminAction::DeleteProduct(product_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }
}
