//! # Session Client
//!
//! Provides a high-level API for interacting with the Session store.
//! It wraps a `StoreClient<SessionState>` and exposes role-scoped methods.
use crate::geo::Locator;
use crate::model::{Credentials, ProfileUpdate, Registration, Role};
use crate::session::{SessionAction, SessionError, SessionState};
use async_trait::async_trait;
use store_runtime::{impl_store_client, StoreClient, StoreError, StoreView};
use tracing::{debug, instrument};

/// Client for interacting with the Session store.
#[derive(Clone)]
pub struct SessionClient {
    inner: StoreClient<SessionState>,
}

impl_store_client!(SessionClient, SessionState, SessionError, session);

#[async_trait]
impl StoreView<SessionState> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &StoreClient<SessionState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> SessionError {
        e.into_rejection()
            .unwrap_or_else(|e| SessionError::Store(e.to_string()))
    }
}

impl SessionClient {
    // Credentials and registration payloads are skipped from the span so
    // passwords never reach the logs.

    #[instrument(skip(self, credentials))]
    pub async fn login(
        &self,
        role: Role,
        credentials: Credentials,
    ) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.inner
            .dispatch(SessionAction::Login { role, credentials })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, registration))]
    pub async fn register(
        &self,
        role: Role,
        registration: Registration,
    ) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.inner
            .dispatch(SessionAction::Register { role, registration })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_profile(
        &self,
        role: Role,
        update: ProfileUpdate,
    ) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.inner
            .dispatch(SessionAction::UpdateProfile { role, update })
            .await
            .map_err(Self::map_error)
    }

    /// Fills the update's location through the locator seam before
    /// dispatching. A failed locator degrades to `None` (manual entry),
    /// never to an error.
    #[instrument(skip(self, update, locator))]
    pub async fn update_profile_located(
        &self,
        role: Role,
        mut update: ProfileUpdate,
        locator: &dyn Locator,
    ) -> Result<SessionState, SessionError> {
        if update.location.is_none() {
            update.location = crate::geo::locate_with(locator).await;
        }
        self.update_profile(role, update).await
    }

    /// Silently restores every role with a stored token.
    #[instrument(skip(self))]
    pub async fn restore_all(&self) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.inner
            .dispatch(SessionAction::RestoreAll)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn logout(&self, role: Role) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.inner
            .dispatch(SessionAction::Logout(role))
            .await
            .map_err(Self::map_error)
    }
}
