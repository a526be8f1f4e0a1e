//! Store model for the order/agent assignment flow.

use crate::api::BackendApi;
use crate::assignment::AssignmentError;
use crate::model::{DeliveryAgent, Order, Role};
use crate::session::TokenVault;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use store_runtime::StoreModel;

/// Where the assignment flow stands for the order under view.
///
/// `Loaded` with an assigned order is terminal for this flow; `Failed`
/// recovers by dispatching another load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AssignmentPhase {
    #[default]
    Unloaded,
    Loading,
    Loaded(Order),
    Assigning(Order),
    Failed(String),
}

/// State of the assignment view.
#[derive(Clone, Debug, Default)]
pub struct AssignmentBoard {
    pub phase: AssignmentPhase,
    /// Full delivery roster, wholesale-replaced on every fetch.
    pub agents: Vec<DeliveryAgent>,
    /// Agents bound during this flow session, excluded from eligibility.
    pub session_assigned: HashSet<String>,
    /// Orders assigned to the signed-in delivery agent (delivery role view).
    pub my_orders: Vec<Order>,
    pub error: Option<String>,
}

impl AssignmentBoard {
    /// The order under view, in whichever phase holds one.
    pub fn order(&self) -> Option<&Order> {
        match &self.phase {
            AssignmentPhase::Loaded(order) | AssignmentPhase::Assigning(order) => Some(order),
            _ => None,
        }
    }

    /// Agents that can still take an order: available and not already bound
    /// during this flow session.
    pub fn eligible_agents(&self) -> Vec<&DeliveryAgent> {
        self.agents
            .iter()
            .filter(|agent| agent.is_available && !self.session_assigned.contains(&agent.id))
            .collect()
    }

    /// Whether the view shows the terminal "already assigned" rendering.
    pub fn is_assigned(&self) -> bool {
        self.order().map(Order::is_assigned).unwrap_or(false)
    }

    fn fail(&mut self, error: AssignmentError) -> Result<(), AssignmentError> {
        self.error = Some(error.to_string());
        Err(error)
    }
}

/// Dependencies injected when the assignment store starts.
pub struct AssignmentContext {
    pub backend: Arc<dyn BackendApi>,
    pub vault: Arc<TokenVault>,
}

impl AssignmentContext {
    fn token(&self, role: Role) -> Result<String, AssignmentError> {
        self.vault
            .load(role)
            .ok_or(AssignmentError::NotAuthenticated(role))
    }
}

#[derive(Debug)]
pub enum AssignmentAction {
    LoadOrder(String),
    LoadAgents,
    Assign { order_id: String, agent_id: String },
    /// Delivery-role view: the agent's own assigned orders.
    LoadMyOrders,
}

#[async_trait]
impl StoreModel for AssignmentBoard {
    type Action = AssignmentAction;
    type Context = AssignmentContext;
    type Error = AssignmentError;

    async fn apply(
        &mut self,
        action: AssignmentAction,
        ctx: &AssignmentContext,
    ) -> Result<(), AssignmentError> {
        match action {
            AssignmentAction::LoadOrder(order_id) => {
                let token = match ctx.token(Role::Admin) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                self.phase = AssignmentPhase::Loading;
                self.error = None;
                match ctx.backend.fetch_order(&token, &order_id).await {
                    Ok(order) => {
                        // Wholesale replace: nothing of a previously viewed
                        // order survives.
                        self.phase = AssignmentPhase::Loaded(order);
                        Ok(())
                    }
                    Err(e) => {
                        self.phase = AssignmentPhase::Failed(e.to_string());
                        self.fail(AssignmentError::Api(e))
                    }
                }
            }
            AssignmentAction::LoadAgents => {
                let token = match ctx.token(Role::Admin) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.list_agents(&token).await {
                    Ok(agents) => {
                        self.agents = agents;
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(AssignmentError::Api(e)),
                }
            }
            AssignmentAction::Assign { order_id, agent_id } => {
                // Local guards first: a violated precondition must not
                // produce a network call.
                if order_id.is_empty() || agent_id.is_empty() {
                    return self.fail(AssignmentError::MissingIds);
                }
                let order = match self.order() {
                    Some(order) => order.clone(),
                    None => return self.fail(AssignmentError::NoOrderLoaded),
                };
                if order.id != order_id {
                    return self.fail(AssignmentError::OrderMismatch {
                        loaded: order.id,
                        requested: order_id,
                    });
                }
                if order.is_assigned() {
                    return self.fail(AssignmentError::AlreadyAssigned);
                }
                let token = match ctx.token(Role::Admin) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };

                self.phase = AssignmentPhase::Assigning(order.clone());
                match ctx.backend.assign_order(&token, &order_id, &agent_id).await {
                    Ok(assigned) => {
                        self.phase = AssignmentPhase::Loaded(assigned);
                        self.session_assigned.insert(agent_id);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => {
                        // The order view stays exactly as it was before the
                        // attempt; only the error message changes.
                        self.phase = AssignmentPhase::Loaded(order);
                        self.fail(AssignmentError::Api(e))
                    }
                }
            }
            AssignmentAction::LoadMyOrders => {
                let token = match ctx.token(Role::Agent) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.my_deliveries(&token).await {
                    Ok(orders) => {
                        self.my_orders = orders;
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(AssignmentError::Api(e)),
                }
            }
        }
    }
}
