//! Store model holding the four role sessions.

use crate::api::{ApiError, AuthSession, BackendApi};
use crate::model::{Credentials, ProfileUpdate, Registration, Role, RoleProfile};
use crate::session::{SessionError, TokenVault};
use async_trait::async_trait;
use std::sync::Arc;
use store_runtime::StoreModel;
use tracing::warn;

/// State of one role's session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoleSlot {
    pub profile: Option<RoleProfile>,
    pub error: Option<String>,
}

impl RoleSlot {
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }
}

/// State of all four role sessions.
///
/// The slots are fully independent: no operation ever touches more than the
/// role it was dispatched for (restore iterates, but still per role).
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub customer: RoleSlot,
    pub vendor: RoleSlot,
    pub agent: RoleSlot,
    pub admin: RoleSlot,
}

impl SessionState {
    pub fn slot(&self, role: Role) -> &RoleSlot {
        match role {
            Role::Customer => &self.customer,
            Role::Vendor => &self.vendor,
            Role::Agent => &self.agent,
            Role::Admin => &self.admin,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut RoleSlot {
        match role {
            Role::Customer => &mut self.customer,
            Role::Vendor => &mut self.vendor,
            Role::Agent => &mut self.agent,
            Role::Admin => &mut self.admin,
        }
    }

    /// Stores the outcome of a login or registration: token to the vault,
    /// profile to the slot. Any failure lands in the slot's error message.
    fn establish(
        &mut self,
        role: Role,
        outcome: Result<AuthSession, ApiError>,
        ctx: &SessionContext,
    ) -> Result<(), SessionError> {
        let outcome = outcome.map_err(SessionError::from).and_then(|session| {
            ctx.vault.save(role, session.token)?;
            Ok(session.profile)
        });
        match outcome {
            Ok(profile) => {
                let slot = self.slot_mut(role);
                slot.profile = Some(profile);
                slot.error = None;
                Ok(())
            }
            Err(e) => {
                self.slot_mut(role).error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Dependencies injected when the session store starts.
pub struct SessionContext {
    pub backend: Arc<dyn BackendApi>,
    pub vault: Arc<TokenVault>,
}

#[derive(Debug)]
pub enum SessionAction {
    Login {
        role: Role,
        credentials: Credentials,
    },
    Register {
        role: Role,
        registration: Registration,
    },
    UpdateProfile {
        role: Role,
        update: ProfileUpdate,
    },
    /// Silently re-authenticates every role with a stored token.
    RestoreAll,
    Logout(Role),
}

#[async_trait]
impl StoreModel for SessionState {
    type Action = SessionAction;
    type Context = SessionContext;
    type Error = SessionError;

    async fn apply(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<(), SessionError> {
        match action {
            SessionAction::Login { role, credentials } => {
                let outcome = ctx.backend.login(role, &credentials).await;
                self.establish(role, outcome, ctx)
            }
            SessionAction::Register { role, registration } => {
                let outcome = ctx.backend.register(role, &registration).await;
                self.establish(role, outcome, ctx)
            }
            SessionAction::UpdateProfile { role, update } => {
                let outcome = match ctx.vault.load(role) {
                    Some(token) => ctx
                        .backend
                        .update_profile(role, &token, &update)
                        .await
                        .map_err(SessionError::from),
                    None => Err(SessionError::NotAuthenticated(role)),
                };
                match outcome {
                    Ok(profile) => {
                        let slot = self.slot_mut(role);
                        slot.profile = Some(profile);
                        slot.error = None;
                        Ok(())
                    }
                    Err(e) => {
                        self.slot_mut(role).error = Some(e.to_string());
                        Err(e)
                    }
                }
            }
            SessionAction::RestoreAll => {
                // Restore is silent: it never surfaces slot errors and never
                // fails the action. A rejected token is expired, so it is
                // dropped; an unreachable backend keeps the token for the
                // next start.
                for role in ctx.vault.stored_roles() {
                    let Some(token) = ctx.vault.load(role) else {
                        continue;
                    };
                    match ctx.backend.profile(role, &token).await {
                        Ok(profile) => {
                            let slot = self.slot_mut(role);
                            slot.profile = Some(profile);
                            slot.error = None;
                        }
                        Err(e) if e.is_rejection() => {
                            warn!(%role, error = %e, "Stored session rejected, clearing token");
                            if let Err(e) = ctx.vault.clear(role) {
                                warn!(%role, error = %e, "Failed to clear rejected token");
                            }
                            self.slot_mut(role).profile = None;
                        }
                        Err(e) => {
                            warn!(%role, error = %e, "Session restore unreachable, keeping token");
                        }
                    }
                }
                Ok(())
            }
            SessionAction::Logout(role) => match ctx.vault.clear(role) {
                Ok(()) => {
                    *self.slot_mut(role) = RoleSlot::default();
                    Ok(())
                }
                Err(e) => {
                    let e = SessionError::from(e);
                    self.slot_mut(role).error = Some(e.to_string());
                    Err(e)
                }
            },
        }
    }
}
