//! Boilerplate generators for flow clients.
//!
//! Every flow client wraps a [`StoreClient`](crate::StoreClient) in a field
//! named `inner` and exposes a domain-named snapshot accessor. The macro
//! below stamps out that shared surface so the hand-written part of a client
//! is only its action methods.

/// Generates the constructor and the named snapshot accessor for a flow
/// client.
///
/// Requirements on the caller:
/// - the client struct has a field `inner: StoreClient<$model>`
/// - the client implements [`StoreView`](crate::StoreView) for `$model`
/// - the invoking crate depends on `paste`
///
/// # Example
///
/// ```ignore
/// impl_store_client!(CatalogClient, Catalog, CatalogError, catalog);
/// // expands to CatalogClient::new(..) and CatalogClient::current_catalog()
/// ```
#[macro_export]
macro_rules! impl_store_client {
    ($client_name:ident, $model:ty, $error:ty, $state_name_snake:ident) => {
        impl $client_name {
            pub fn new(inner: $crate::StoreClient<$model>) -> Self {
                Self { inner }
            }
        }

        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<current_ $state_name_snake>](&self) -> Result<$model, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .snapshot()
                        .await
                        .map_err(<Self as $crate::StoreView<$model>>::map_error)
                }
            }
        }
    };
}
