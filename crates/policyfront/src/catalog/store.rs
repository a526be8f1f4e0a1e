//! Store model for the insurance-product catalog.

use crate::api::BackendApi;
use crate::catalog::form::{validate, SubmitMode};
use crate::catalog::CatalogError;
use crate::model::{InsuranceProduct, ProductDraft, Role};
use crate::session::TokenVault;
use async_trait::async_trait;
use std::sync::Arc;
use store_runtime::StoreModel;

/// State of the product list under view.
///
/// The same store serves the vendor's own catalog and the public listing;
/// every successful load wholesale-replaces `products`.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub products: Vec<InsuranceProduct>,
    pub error: Option<String>,
}

impl Catalog {
    fn fail(&mut self, error: CatalogError) -> Result<(), CatalogError> {
        self.error = Some(error.to_string());
        Err(error)
    }
}

/// Dependencies injected when the catalog store starts.
pub struct CatalogContext {
    pub backend: Arc<dyn BackendApi>,
    pub vault: Arc<TokenVault>,
}

impl CatalogContext {
    fn vendor_token(&self) -> Result<String, CatalogError> {
        self.vault
            .load(Role::Vendor)
            .ok_or(CatalogError::NotAuthenticated(Role::Vendor))
    }
}

#[derive(Debug)]
pub enum CatalogAction {
    Create(ProductDraft),
    Update {
        product_id: String,
        draft: ProductDraft,
    },
    Delete(String),
    LoadPublic,
    LoadVendor(String),
}

#[async_trait]
impl StoreModel for Catalog {
    type Action = CatalogAction;
    type Context = CatalogContext;
    type Error = CatalogError;

    async fn apply(
        &mut self,
        action: CatalogAction,
        ctx: &CatalogContext,
    ) -> Result<(), CatalogError> {
        match action {
            CatalogAction::Create(draft) => {
                // Validation precedes everything; a bad draft never reaches
                // the network.
                let payload = match validate(&draft, SubmitMode::Create) {
                    Ok(payload) => payload,
                    Err(e) => return self.fail(e),
                };
                let token = match ctx.vendor_token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.create_product(&token, &payload).await {
                    Ok(product) => {
                        self.products.push(product);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(CatalogError::Api(e)),
                }
            }
            CatalogAction::Update { product_id, draft } => {
                let payload = match validate(&draft, SubmitMode::Update) {
                    Ok(payload) => payload,
                    Err(e) => return self.fail(e),
                };
                let token = match ctx.vendor_token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.update_product(&token, &product_id, &payload).await {
                    Ok(updated) => {
                        if let Some(slot) = self.products.iter_mut().find(|p| p.id == updated.id) {
                            *slot = updated;
                        }
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(CatalogError::Api(e)),
                }
            }
            CatalogAction::Delete(product_id) => {
                let token = match ctx.vendor_token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.delete_product(&token, &product_id).await {
                    Ok(()) => {
                        self.products.retain(|p| p.id != product_id);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(CatalogError::Api(e)),
                }
            }
            CatalogAction::LoadPublic => match ctx.backend.list_products().await {
                Ok(products) => {
                    self.products = products;
                    self.error = None;
                    Ok(())
                }
                Err(e) => self.fail(CatalogError::Api(e)),
            },
            CatalogAction::LoadVendor(vendor_id) => {
                match ctx.backend.vendor_products(&vendor_id).await {
                    Ok(products) => {
                        self.products = products;
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(CatalogError::Api(e)),
                }
            }
        }
    }
}
