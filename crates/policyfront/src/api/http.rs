use crate::api::types::{decode_role_profile, AssignRequest, ServerMessage, WireAuth};
use crate::api::{ApiError, AuthSession, BackendApi};
use crate::model::{
    Account, Appointment, AppointmentRequest, Credentials, DeliveryAgent, InsuranceProduct, Order,
    ProductPayload, ProfileUpdate, Registration, RevenueStats, Role, RoleProfile, Vendor,
};
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Production [`BackendApi`] over HTTP.
///
/// One pooled `reqwest` client, one configured timeout for every request,
/// bearer `Authorization` per call. Responses decode straight into the
/// `model` records; error statuses surface the server's `message` field.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        Self::read_json(response).await
    }

    /// Sends a request whose success body is ignored.
    async fn send_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response.text().await.unwrap_or_default()))
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::status_error(status, response.text().await.unwrap_or_default()))
        }
    }

    /// Non-success responses carry a JSON `message` field on this backend;
    /// fall back to the raw body when they do not.
    fn status_error(status: StatusCode, body: String) -> ApiError {
        let message = match serde_json::from_str::<ServerMessage>(&body) {
            Ok(m) if !m.message.is_empty() => m.message,
            _ => body,
        };
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    async fn auth(&self, role: Role, request: RequestBuilder) -> Result<AuthSession, ApiError> {
        let wire: WireAuth = self.send(request).await?;
        Ok(AuthSession {
            token: wire.token,
            profile: decode_role_profile(role, wire.profile)?,
        })
    }

    /// Lays a validated product submission out as the multipart form the
    /// backend expects: scalar text fields, `options` as one JSON string,
    /// each upload as an `images` file part, and any surviving URLs under
    /// `mainImage` / `otherImages`.
    fn product_form(payload: &ProductPayload) -> Result<multipart::Form, ApiError> {
        let options = serde_json::to_string(&payload.options)?;
        let mut form = multipart::Form::new()
            .text("name", payload.name.clone())
            .text("description", payload.description.clone())
            .text("contactNumber", payload.contact_number.clone())
            .text("executivePhone", payload.executive_phone.clone())
            .text("categoryLevel1", payload.categories.level1.name.clone())
            .text("categoryLevel2", payload.categories.level2.name.clone())
            .text("categoryLevel3", payload.categories.level3.name.clone())
            .text("options", options);
        for image in &payload.new_images {
            let part =
                multipart::Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
            form = form.part("images", part);
        }
        if let Some(main) = &payload.main_image {
            form = form.text("mainImage", main.clone());
        }
        for url in &payload.other_images {
            form = form.text("otherImages", url.clone());
        }
        Ok(form)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        debug!(%role, "Logging in");
        let url = self.url(&format!("/api/{}/login", role.path_segment()));
        self.auth(role, self.client.post(url).json(credentials)).await
    }

    async fn register(
        &self,
        role: Role,
        registration: &Registration,
    ) -> Result<AuthSession, ApiError> {
        debug!(%role, "Registering");
        let url = self.url(&format!("/api/{}/register", role.path_segment()));
        self.auth(role, self.client.post(url).json(registration))
            .await
    }

    async fn profile(&self, role: Role, token: &str) -> Result<RoleProfile, ApiError> {
        debug!(%role, "Fetching profile");
        let url = self.url(&format!("/api/{}/profile", role.path_segment()));
        let value: serde_json::Value = self.send(self.client.get(url).bearer_auth(token)).await?;
        decode_role_profile(role, value)
    }

    async fn update_profile(
        &self,
        role: Role,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<RoleProfile, ApiError> {
        debug!(%role, "Updating profile");
        let url = self.url(&format!("/api/{}/profile", role.path_segment()));
        let value: serde_json::Value = self
            .send(self.client.put(url).bearer_auth(token).json(update))
            .await?;
        decode_role_profile(role, value)
    }

    async fn fetch_order(&self, token: &str, order_id: &str) -> Result<Order, ApiError> {
        debug!(order_id, "Fetching order");
        let url = self.url(&format!("/api/admin/orders/{order_id}"));
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn list_agents(&self, token: &str) -> Result<Vec<DeliveryAgent>, ApiError> {
        debug!("Fetching delivery roster");
        let url = self.url("/api/admin/delivery-agents");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn assign_order(
        &self,
        token: &str,
        order_id: &str,
        agent_id: &str,
    ) -> Result<Order, ApiError> {
        debug!(order_id, agent_id, "Committing assignment");
        let url = self.url("/api/admin/orders/assign");
        let body = AssignRequest {
            order_id,
            delivery_boy_id: agent_id,
        };
        self.send(self.client.post(url).bearer_auth(token).json(&body))
            .await
    }

    async fn my_deliveries(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        debug!("Fetching own deliveries");
        let url = self.url("/api/delivery/orders");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn create_appointment(
        &self,
        token: &str,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        debug!(vendor_id = %request.vendor_id, "Booking appointment");
        let url = self.url("/api/appointments");
        self.send(self.client.post(url).bearer_auth(token).json(request))
            .await
    }

    async fn appointments_for_user(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        debug!(user_id, "Fetching user appointments");
        let url = self.url(&format!("/api/appointments/user/{user_id}"));
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn appointments_for_vendor(
        &self,
        token: &str,
        vendor_id: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        debug!(vendor_id, "Fetching vendor appointments");
        let url = self.url(&format!("/api/appointments/vendor/{vendor_id}"));
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
    ) -> Result<InsuranceProduct, ApiError> {
        debug!(name = %payload.name, "Creating product");
        let url = self.url("/api/vendor/products");
        let form = Self::product_form(payload)?;
        self.send(self.client.post(url).bearer_auth(token).multipart(form))
            .await
    }

    async fn update_product(
        &self,
        token: &str,
        product_id: &str,
        payload: &ProductPayload,
    ) -> Result<InsuranceProduct, ApiError> {
        debug!(product_id, "Updating product");
        let url = self.url(&format!("/api/vendor/products/{product_id}"));
        let form = Self::product_form(payload)?;
        self.send(self.client.put(url).bearer_auth(token).multipart(form))
            .await
    }

    async fn delete_product(&self, token: &str, product_id: &str) -> Result<(), ApiError> {
        debug!(product_id, "Deleting product");
        let url = self.url(&format!("/api/vendor/products/{product_id}"));
        self.send_unit(self.client.delete(url).bearer_auth(token))
            .await
    }

    async fn list_products(&self) -> Result<Vec<InsuranceProduct>, ApiError> {
        debug!("Fetching public catalog");
        let url = self.url("/api/products");
        self.send(self.client.get(url)).await
    }

    async fn vendor_products(&self, vendor_id: &str) -> Result<Vec<InsuranceProduct>, ApiError> {
        debug!(vendor_id, "Fetching vendor catalog");
        let url = self.url(&format!("/api/vendor/{vendor_id}/products"));
        self.send(self.client.get(url)).await
    }

    async fn admin_users(&self, token: &str) -> Result<Vec<Account>, ApiError> {
        let url = self.url("/api/admin/users");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn admin_vendors(&self, token: &str) -> Result<Vec<Vendor>, ApiError> {
        let url = self.url("/api/admin/vendors");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn admin_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        let url = self.url("/api/admin/orders");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn admin_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        let url = self.url("/api/admin/appointments");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn revenue_stats(&self, token: &str) -> Result<RevenueStats, ApiError> {
        let url = self.url("/api/admin/analytics/revenue");
        self.send(self.client.get(url).bearer_auth(token)).await
    }

    async fn delete_user(&self, token: &str, user_id: &str) -> Result<(), ApiError> {
        debug!(user_id, "Deleting user");
        let url = self.url(&format!("/api/admin/users/{user_id}"));
        self.send_unit(self.client.delete(url).bearer_auth(token))
            .await
    }

    async fn delete_vendor(&self, token: &str, vendor_id: &str) -> Result<(), ApiError> {
        debug!(vendor_id, "Deleting vendor");
        let url = self.url(&format!("/api/admin/vendors/{vendor_id}"));
        self.send_unit(self.client.delete(url).bearer_auth(token))
            .await
    }

    async fn delete_agent(&self, token: &str, agent_id: &str) -> Result<(), ApiError> {
        debug!(agent_id, "Deleting delivery agent");
        let url = self.url(&format!("/api/admin/delivery-agents/{agent_id}"));
        self.send_unit(self.client.delete(url).bearer_auth(token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Categories, NewImage};
    use mockito::{Matcher, Server};

    fn backend(url: String) -> HttpBackend {
        HttpBackend::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn list_agents_sends_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/admin/delivery-agents")
            .match_header("authorization", "Bearer admin-tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"_id":"a1","name":"Pat","isAvailable":true}]"#)
            .create_async()
            .await;

        let agents = backend(server.url())
            .list_agents("admin-tok")
            .await
            .unwrap();

        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].id, "a1");
        assert!(agents[0].is_available);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_surfaces_message_field() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/user/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .create_async()
            .await;

        let credentials = Credentials {
            email: "a@b.c".into(),
            password: "nope".into(),
        };
        let err = backend(server.url())
            .login(Role::Customer, &credentials)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: "Invalid credentials".into()
            }
        );
    }

    #[tokio::test]
    async fn error_status_falls_back_to_raw_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/admin/orders/o1")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let err = backend(server.url())
            .fetch_order("t", "o1")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "upstream exploded".into()
            }
        );
    }

    #[tokio::test]
    async fn update_with_existing_urls_lays_out_multipart_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/vendor/products/p1")
            .match_header("authorization", "Bearer vendor-tok")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"(?s)name="contactNumber"\s+9999"#.into()),
                Matcher::Regex(r#"(?s)name="categoryLevel2"\s+Motor"#.into()),
                Matcher::Regex(r#"(?s)name="mainImage"\s+https://img/1\.png"#.into()),
                Matcher::Regex(r#"(?s)name="otherImages"\s+https://img/2\.png"#.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"_id":"p1","name":"Gold Plan"}"#)
            .create_async()
            .await;

        let payload = ProductPayload {
            name: "Gold Plan".into(),
            description: "Full cover".into(),
            contact_number: "9999".into(),
            executive_phone: "8888".into(),
            categories: Categories::new("Insurance", "Motor", "Car"),
            options: Default::default(),
            new_images: vec![],
            main_image: Some("https://img/1.png".into()),
            other_images: vec!["https://img/2.png".into()],
        };
        let product = backend(server.url())
            .update_product("vendor-tok", "p1", &payload)
            .await
            .unwrap();

        assert_eq!(product.id, "p1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_sends_uploads_as_image_file_parts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/vendor/products")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"(?s)name="images"; filename="policy\.png""#.into()),
                Matcher::Regex(r#"(?s)name="options"\s+\{"cashless":true\}"#.into()),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"_id":"p2","name":"Silver Plan"}"#)
            .create_async()
            .await;

        let mut payload = ProductPayload {
            name: "Silver Plan".into(),
            description: "Basic cover".into(),
            contact_number: "7777".into(),
            executive_phone: "6666".into(),
            categories: Categories::new("Insurance", "Health", "Family"),
            new_images: vec![NewImage::new("policy.png", b"png-bytes".to_vec())],
            ..Default::default()
        };
        payload.options.insert("cashless".into(), true);

        let product = backend(server.url())
            .create_product("vendor-tok", &payload)
            .await
            .unwrap();

        assert_eq!(product.id, "p2");
        mock.assert_async().await;
    }
}
