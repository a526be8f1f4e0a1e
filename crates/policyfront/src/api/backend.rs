use crate::api::{ApiError, AuthSession};
use crate::model::{
    Account, Appointment, AppointmentRequest, Credentials, DeliveryAgent, InsuranceProduct, Order,
    ProductPayload, ProfileUpdate, Registration, RevenueStats, Role, RoleProfile, Vendor,
};
use async_trait::async_trait;

/// Every REST operation the stores perform, as one async trait.
///
/// Implementations take the bearer token explicitly; token custody lives in
/// the [`TokenVault`](crate::session::TokenVault), not here. Every call is
/// one-shot request/response: no retries, no cancellation.
#[async_trait]
pub trait BackendApi: Send + Sync {
    // --- Auth (per role) ---

    async fn login(&self, role: Role, credentials: &Credentials) -> Result<AuthSession, ApiError>;

    async fn register(
        &self,
        role: Role,
        registration: &Registration,
    ) -> Result<AuthSession, ApiError>;

    async fn profile(&self, role: Role, token: &str) -> Result<RoleProfile, ApiError>;

    async fn update_profile(
        &self,
        role: Role,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<RoleProfile, ApiError>;

    // --- Orders & assignment ---

    async fn fetch_order(&self, token: &str, order_id: &str) -> Result<Order, ApiError>;

    async fn list_agents(&self, token: &str) -> Result<Vec<DeliveryAgent>, ApiError>;

    async fn assign_order(
        &self,
        token: &str,
        order_id: &str,
        agent_id: &str,
    ) -> Result<Order, ApiError>;

    /// The delivery agent's own assigned orders.
    async fn my_deliveries(&self, token: &str) -> Result<Vec<Order>, ApiError>;

    // --- Appointments ---

    async fn create_appointment(
        &self,
        token: &str,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError>;

    async fn appointments_for_user(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<Vec<Appointment>, ApiError>;

    async fn appointments_for_vendor(
        &self,
        token: &str,
        vendor_id: &str,
    ) -> Result<Vec<Appointment>, ApiError>;

    // --- Insurance products ---

    async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
    ) -> Result<InsuranceProduct, ApiError>;

    async fn update_product(
        &self,
        token: &str,
        product_id: &str,
        payload: &ProductPayload,
    ) -> Result<InsuranceProduct, ApiError>;

    async fn delete_product(&self, token: &str, product_id: &str) -> Result<(), ApiError>;

    /// Public listing; needs no token.
    async fn list_products(&self) -> Result<Vec<InsuranceProduct>, ApiError>;

    async fn vendor_products(&self, vendor_id: &str) -> Result<Vec<InsuranceProduct>, ApiError>;

    // --- Admin ---

    async fn admin_users(&self, token: &str) -> Result<Vec<Account>, ApiError>;

    async fn admin_vendors(&self, token: &str) -> Result<Vec<Vendor>, ApiError>;

    async fn admin_orders(&self, token: &str) -> Result<Vec<Order>, ApiError>;

    async fn admin_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError>;

    async fn revenue_stats(&self, token: &str) -> Result<RevenueStats, ApiError>;

    async fn delete_user(&self, token: &str, user_id: &str) -> Result<(), ApiError>;

    async fn delete_vendor(&self, token: &str, vendor_id: &str) -> Result<(), ApiError>;

    async fn delete_agent(&self, token: &str, agent_id: &str) -> Result<(), ApiError>;
}
