//! # Catalog Client
//!
//! Provides a high-level API for interacting with the Catalog store.
//! It wraps a `StoreClient<Catalog>` and exposes the product CRUD methods.
use crate::catalog::{Catalog, CatalogAction, CatalogError};
use crate::model::ProductDraft;
use async_trait::async_trait;
use store_runtime::{impl_store_client, StoreClient, StoreError, StoreView};
use tracing::{debug, instrument};

/// Client for interacting with the Catalog store.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Catalog>,
}

impl_store_client!(CatalogClient, Catalog, CatalogError, catalog);

#[async_trait]
impl StoreView<Catalog> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &StoreClient<Catalog> {
        &self.inner
    }

    fn map_error(e: StoreError) -> CatalogError {
        e.into_rejection()
            .unwrap_or_else(|e| CatalogError::Store(e.to_string()))
    }
}

impl CatalogClient {
    // Drafts are skipped from spans: they carry image bytes.

    /// Creates a product from a draft. Validation failures come back typed,
    /// with no backend call.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Catalog, CatalogError> {
        debug!("Sending request");
        self.inner
            .dispatch(CatalogAction::Create(draft))
            .await
            .map_err(Self::map_error)
    }

    /// Updates a product from a draft, re-sending existing image URLs when
    /// the draft carries no new uploads.
    #[instrument(skip(self, draft))]
    pub async fn update(
        &self,
        product_id: &str,
        draft: ProductDraft,
    ) -> Result<Catalog, CatalogError> {
        debug!("Sending request");
        self.inner
            .dispatch(CatalogAction::Update {
                product_id: product_id.to_owned(),
                draft,
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, product_id: &str) -> Result<Catalog, CatalogError> {
        debug!("Sending request");
        self.inner
            .dispatch(CatalogAction::Delete(product_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_public(&self) -> Result<Catalog, CatalogError> {
        debug!("Sending request");
        self.inner
            .dispatch(CatalogAction::LoadPublic)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_vendor(&self, vendor_id: &str) -> Result<Catalog, CatalogError> {
        debug!("Sending request");
        self.inner
            .dispatch(CatalogAction::LoadVendor(vendor_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }
}
