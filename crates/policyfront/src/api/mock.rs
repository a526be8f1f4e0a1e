//! Scriptable in-memory [`BackendApi`] double.
//!
//! Tests queue responses per operation (optionally per role) and the mock
//! journals every call it sees, so a test can assert both what came back and
//! that a guarded flow issued **zero** network calls.

use crate::api::types::{decode_role_profile, WireAuth};
use crate::api::{ApiError, AuthSession, BackendApi};
use crate::model::{
    Account, Appointment, AppointmentRequest, Credentials, DeliveryAgent, InsuranceProduct, Order,
    ProductPayload, ProfileUpdate, Registration, RevenueStats, Role, RoleProfile, Vendor,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, VecDeque};

/// Operation names used for scripting and call assertions.
pub mod op {
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";
    pub const PROFILE: &str = "profile";
    pub const UPDATE_PROFILE: &str = "update_profile";
    pub const FETCH_ORDER: &str = "fetch_order";
    pub const LIST_AGENTS: &str = "list_agents";
    pub const ASSIGN_ORDER: &str = "assign_order";
    pub const MY_DELIVERIES: &str = "my_deliveries";
    pub const CREATE_APPOINTMENT: &str = "create_appointment";
    pub const APPOINTMENTS_FOR_USER: &str = "appointments_for_user";
    pub const APPOINTMENTS_FOR_VENDOR: &str = "appointments_for_vendor";
    pub const CREATE_PRODUCT: &str = "create_product";
    pub const UPDATE_PRODUCT: &str = "update_product";
    pub const DELETE_PRODUCT: &str = "delete_product";
    pub const LIST_PRODUCTS: &str = "list_products";
    pub const VENDOR_PRODUCTS: &str = "vendor_products";
    pub const ADMIN_USERS: &str = "admin_users";
    pub const ADMIN_VENDORS: &str = "admin_vendors";
    pub const ADMIN_ORDERS: &str = "admin_orders";
    pub const ADMIN_APPOINTMENTS: &str = "admin_appointments";
    pub const REVENUE_STATS: &str = "revenue_stats";
    pub const DELETE_USER: &str = "delete_user";
    pub const DELETE_VENDOR: &str = "delete_vendor";
    pub const DELETE_AGENT: &str = "delete_agent";
}

/// One observed backend call.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub op: &'static str,
    pub role: Option<Role>,
    pub token: Option<String>,
}

/// One recorded product submission; `product_id` is `None` for creates.
///
/// The catalog image contract is asserted against these, not against wire
/// bytes: what matters is which URLs and uploads the client decided to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWrite {
    pub product_id: Option<String>,
    pub payload: ProductPayload,
}

type ScriptKey = (&'static str, Option<Role>);
type Scripted = Result<serde_json::Value, ApiError>;

#[derive(Default)]
pub struct MockBackend {
    scripts: Mutex<HashMap<ScriptKey, VecDeque<Scripted>>>,
    journal: Mutex<Vec<CallRecord>>,
    product_writes: Mutex<Vec<ProductWrite>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful JSON response for `op`.
    pub fn script_ok(&self, op: &'static str, value: serde_json::Value) {
        self.push(op, None, Ok(value));
    }

    /// Queues an error for `op`.
    pub fn script_err(&self, op: &'static str, error: ApiError) {
        self.push(op, None, Err(error));
    }

    /// Queues a successful response that only a call for `role` consumes.
    pub fn script_role_ok(&self, op: &'static str, role: Role, value: serde_json::Value) {
        self.push(op, Some(role), Ok(value));
    }

    /// Queues an error that only a call for `role` consumes.
    pub fn script_role_err(&self, op: &'static str, role: Role, error: ApiError) {
        self.push(op, Some(role), Err(error));
    }

    /// Every call observed, in order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.journal.lock().clone()
    }

    /// How many times `op` was called.
    pub fn call_count(&self, op: &'static str) -> usize {
        self.journal.lock().iter().filter(|c| c.op == op).count()
    }

    /// Product create/update submissions, in order.
    pub fn product_writes(&self) -> Vec<ProductWrite> {
        self.product_writes.lock().clone()
    }

    fn push(&self, op: &'static str, role: Option<Role>, scripted: Scripted) {
        self.scripts
            .lock()
            .entry((op, role))
            .or_default()
            .push_back(scripted);
    }

    fn record(&self, op: &'static str, role: Option<Role>, token: Option<&str>) {
        self.journal.lock().push(CallRecord {
            op,
            role,
            token: token.map(str::to_owned),
        });
    }

    /// Pops the next scripted response, preferring a role-specific queue.
    /// An unscripted call fails loudly so a test cannot silently pass on a
    /// fetch it never meant to allow.
    fn next(&self, op: &'static str, role: Option<Role>) -> Scripted {
        let mut scripts = self.scripts.lock();
        if role.is_some() {
            if let Some(next) = scripts.get_mut(&(op, role)).and_then(VecDeque::pop_front) {
                return next;
            }
        }
        if let Some(next) = scripts.get_mut(&(op, None)).and_then(VecDeque::pop_front) {
            return next;
        }
        Err(ApiError::Status {
            status: 501,
            message: format!("no scripted response for {op}"),
        })
    }

    fn take<T: DeserializeOwned>(
        &self,
        op: &'static str,
        role: Option<Role>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.record(op, role, token);
        let value = self.next(op, role)?;
        Ok(serde_json::from_value(value)?)
    }

    fn take_unit(
        &self,
        op: &'static str,
        role: Option<Role>,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        self.record(op, role, token);
        self.next(op, role)?;
        Ok(())
    }

    fn take_auth(&self, op: &'static str, role: Role) -> Result<AuthSession, ApiError> {
        let wire: WireAuth = self.take(op, Some(role), None)?;
        Ok(AuthSession {
            token: wire.token,
            profile: decode_role_profile(role, wire.profile)?,
        })
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn login(&self, role: Role, _credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.take_auth(op::LOGIN, role)
    }

    async fn register(
        &self,
        role: Role,
        _registration: &Registration,
    ) -> Result<AuthSession, ApiError> {
        self.take_auth(op::REGISTER, role)
    }

    async fn profile(&self, role: Role, token: &str) -> Result<RoleProfile, ApiError> {
        let value: serde_json::Value = self.take(op::PROFILE, Some(role), Some(token))?;
        decode_role_profile(role, value)
    }

    async fn update_profile(
        &self,
        role: Role,
        token: &str,
        _update: &ProfileUpdate,
    ) -> Result<RoleProfile, ApiError> {
        let value: serde_json::Value = self.take(op::UPDATE_PROFILE, Some(role), Some(token))?;
        decode_role_profile(role, value)
    }

    async fn fetch_order(&self, token: &str, _order_id: &str) -> Result<Order, ApiError> {
        self.take(op::FETCH_ORDER, None, Some(token))
    }

    async fn list_agents(&self, token: &str) -> Result<Vec<DeliveryAgent>, ApiError> {
        self.take(op::LIST_AGENTS, None, Some(token))
    }

    async fn assign_order(
        &self,
        token: &str,
        _order_id: &str,
        _agent_id: &str,
    ) -> Result<Order, ApiError> {
        self.take(op::ASSIGN_ORDER, None, Some(token))
    }

    async fn my_deliveries(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        self.take(op::MY_DELIVERIES, None, Some(token))
    }

    async fn create_appointment(
        &self,
        token: &str,
        _request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        self.take(op::CREATE_APPOINTMENT, None, Some(token))
    }

    async fn appointments_for_user(
        &self,
        token: &str,
        _user_id: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.take(op::APPOINTMENTS_FOR_USER, None, Some(token))
    }

    async fn appointments_for_vendor(
        &self,
        token: &str,
        _vendor_id: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.take(op::APPOINTMENTS_FOR_VENDOR, None, Some(token))
    }

    async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
    ) -> Result<InsuranceProduct, ApiError> {
        self.product_writes.lock().push(ProductWrite {
            product_id: None,
            payload: payload.clone(),
        });
        self.take(op::CREATE_PRODUCT, None, Some(token))
    }

    async fn update_product(
        &self,
        token: &str,
        product_id: &str,
        payload: &ProductPayload,
    ) -> Result<InsuranceProduct, ApiError> {
        self.product_writes.lock().push(ProductWrite {
            product_id: Some(product_id.to_owned()),
            payload: payload.clone(),
        });
        self.take(op::UPDATE_PRODUCT, None, Some(token))
    }

    async fn delete_product(&self, token: &str, _product_id: &str) -> Result<(), ApiError> {
        self.take_unit(op::DELETE_PRODUCT, None, Some(token))
    }

    async fn list_products(&self) -> Result<Vec<InsuranceProduct>, ApiError> {
        self.take(op::LIST_PRODUCTS, None, None)
    }

    async fn vendor_products(&self, _vendor_id: &str) -> Result<Vec<InsuranceProduct>, ApiError> {
        self.take(op::VENDOR_PRODUCTS, None, None)
    }

    async fn admin_users(&self, token: &str) -> Result<Vec<Account>, ApiError> {
        self.take(op::ADMIN_USERS, None, Some(token))
    }

    async fn admin_vendors(&self, token: &str) -> Result<Vec<Vendor>, ApiError> {
        self.take(op::ADMIN_VENDORS, None, Some(token))
    }

    async fn admin_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        self.take(op::ADMIN_ORDERS, None, Some(token))
    }

    async fn admin_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        self.take(op::ADMIN_APPOINTMENTS, None, Some(token))
    }

    async fn revenue_stats(&self, token: &str) -> Result<RevenueStats, ApiError> {
        self.take(op::REVENUE_STATS, None, Some(token))
    }

    async fn delete_user(&self, token: &str, _user_id: &str) -> Result<(), ApiError> {
        self.take_unit(op::DELETE_USER, None, Some(token))
    }

    async fn delete_vendor(&self, token: &str, _vendor_id: &str) -> Result<(), ApiError> {
        self.take_unit(op::DELETE_VENDOR, None, Some(token))
    }

    async fn delete_agent(&self, token: &str, _agent_id: &str) -> Result<(), ApiError> {
        self.take_unit(op::DELETE_AGENT, None, Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn scripted_responses_pop_in_order() {
        let mock = MockBackend::new();
        mock.script_ok(op::FETCH_ORDER, json!({"_id": "o1", "status": "pending"}));
        mock.script_ok(op::FETCH_ORDER, json!({"_id": "o2", "status": "shipped"}));

        let first = mock.fetch_order("t", "o1").await.unwrap();
        let second = mock.fetch_order("t", "o2").await.unwrap();

        assert_eq!(first.id, "o1");
        assert_eq!(second.id, "o2");
        assert_eq!(mock.call_count(op::FETCH_ORDER), 2);
    }

    #[tokio::test]
    async fn unscripted_call_fails_loudly() {
        let mock = MockBackend::new();
        let err = mock.list_agents("t").await.unwrap_err();
        assert_eq!(err.status(), Some(501));
    }

    #[tokio::test]
    async fn role_queue_wins_over_shared_queue() {
        let mock = MockBackend::new();
        mock.script_ok(op::PROFILE, json!({"_id": "fallback", "name": "F", "email": "f@x"}));
        mock.script_role_ok(
            op::PROFILE,
            Role::Vendor,
            json!({"_id": "v1", "name": "Acme", "email": "a@x"}),
        );

        let profile = mock.profile(Role::Vendor, "t").await.unwrap();
        assert!(matches!(profile, RoleProfile::Vendor(v) if v.id == "v1"));
    }

    #[tokio::test]
    async fn journal_keeps_tokens() {
        let mock = MockBackend::new();
        mock.script_ok(op::LIST_AGENTS, json!([]));
        mock.list_agents("admin-tok").await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, op::LIST_AGENTS);
        assert_eq!(calls[0].token.as_deref(), Some("admin-tok"));
    }
}
