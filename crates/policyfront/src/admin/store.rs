//! Store model for the admin dashboard.

use crate::admin::AdminError;
use crate::api::{ApiError, BackendApi};
use crate::model::{
    Account, Appointment, DeliveryAgent, InsuranceProduct, Order, RevenueStats, Role, Vendor,
};
use crate::session::TokenVault;
use async_trait::async_trait;
use std::sync::Arc;
use store_runtime::StoreModel;

/// State of the admin dashboard.
///
/// Every list is wholesale-replaced by the batch load; `revenue` stays
/// `None` until analytics have loaded once.
#[derive(Clone, Debug, Default)]
pub struct AdminDashboard {
    pub users: Vec<Account>,
    pub vendors: Vec<Vendor>,
    pub agents: Vec<DeliveryAgent>,
    pub products: Vec<InsuranceProduct>,
    pub orders: Vec<Order>,
    pub appointments: Vec<Appointment>,
    pub revenue: Option<RevenueStats>,
    pub error: Option<String>,
}

impl AdminDashboard {
    fn fail(&mut self, error: AdminError) -> Result<(), AdminError> {
        self.error = Some(error.to_string());
        Err(error)
    }
}

/// Dependencies injected when the dashboard store starts.
pub struct AdminContext {
    pub backend: Arc<dyn BackendApi>,
    pub vault: Arc<TokenVault>,
}

impl AdminContext {
    fn token(&self) -> Result<String, AdminError> {
        self.vault
            .load(Role::Admin)
            .ok_or(AdminError::NotAuthenticated(Role::Admin))
    }
}

#[derive(Debug)]
pub enum AdminAction {
    /// Fires all seven dashboard fetches concurrently.
    LoadAll,
    DeleteUser(String),
    DeleteVendor(String),
    DeleteAgent(String),
    DeleteProduct(String),
}

fn keep_first(slot: &mut Option<ApiError>, error: ApiError) {
    if slot.is_none() {
        *slot = Some(error);
    }
}

#[async_trait]
impl StoreModel for AdminDashboard {
    type Action = AdminAction;
    type Context = AdminContext;
    type Error = AdminError;

    async fn apply(&mut self, action: AdminAction, ctx: &AdminContext) -> Result<(), AdminError> {
        match action {
            AdminAction::LoadAll => {
                let token = match ctx.token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                let backend = &ctx.backend;
                let (users, vendors, agents, products, orders, appointments, revenue) = tokio::join!(
                    backend.admin_users(&token),
                    backend.admin_vendors(&token),
                    backend.list_agents(&token),
                    backend.list_products(),
                    backend.admin_orders(&token),
                    backend.admin_appointments(&token),
                    backend.revenue_stats(&token),
                );

                // Successes land regardless; the batch still fails as a unit
                // if any fetch was rejected.
                let mut first_error = None;
                match users {
                    Ok(users) => self.users = users,
                    Err(e) => keep_first(&mut first_error, e),
                }
                match vendors {
                    Ok(vendors) => self.vendors = vendors,
                    Err(e) => keep_first(&mut first_error, e),
                }
                match agents {
                    Ok(agents) => self.agents = agents,
                    Err(e) => keep_first(&mut first_error, e),
                }
                match products {
                    Ok(products) => self.products = products,
                    Err(e) => keep_first(&mut first_error, e),
                }
                match orders {
                    Ok(orders) => self.orders = orders,
                    Err(e) => keep_first(&mut first_error, e),
                }
                match appointments {
                    Ok(appointments) => self.appointments = appointments,
                    Err(e) => keep_first(&mut first_error, e),
                }
                match revenue {
                    Ok(revenue) => self.revenue = Some(revenue),
                    Err(e) => keep_first(&mut first_error, e),
                }

                match first_error {
                    None => {
                        self.error = None;
                        Ok(())
                    }
                    Some(e) => self.fail(AdminError::Api(e)),
                }
            }
            AdminAction::DeleteUser(user_id) => {
                let token = match ctx.token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.delete_user(&token, &user_id).await {
                    Ok(()) => {
                        self.users.retain(|u| u.id != user_id);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(AdminError::Api(e)),
                }
            }
            AdminAction::DeleteVendor(vendor_id) => {
                let token = match ctx.token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.delete_vendor(&token, &vendor_id).await {
                    Ok(()) => {
                        self.vendors.retain(|v| v.id != vendor_id);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(AdminError::Api(e)),
                }
            }
            AdminAction::DeleteAgent(agent_id) => {
                let token = match ctx.token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.delete_agent(&token, &agent_id).await {
                    Ok(()) => {
                        self.agents.retain(|a| a.id != agent_id);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(AdminError::Api(e)),
                }
            }
            AdminAction::DeleteProduct(product_id) => {
                let token = match ctx.token() {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.delete_product(&token, &product_id).await {
                    Ok(()) => {
                        self.products.retain(|p| p.id != product_id);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(AdminError::Api(e)),
                }
            }
        }
    }
}
