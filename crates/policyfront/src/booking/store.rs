//! Store model for the appointment booking flow.

use crate::api::BackendApi;
use crate::booking::BookingError;
use crate::model::{Appointment, AppointmentRequest, Role};
use crate::session::TokenVault;
use async_trait::async_trait;
use std::sync::Arc;
use store_runtime::StoreModel;

/// State of the appointment lists.
///
/// `mine` is the signed-in customer's view, `vendor_queue` the signed-in
/// vendor's. Loads wholesale-replace; a successful booking appends to `mine`.
/// An empty list is a successful empty state, never an error.
#[derive(Clone, Debug, Default)]
pub struct AppointmentBook {
    pub mine: Vec<Appointment>,
    pub vendor_queue: Vec<Appointment>,
    pub error: Option<String>,
}

impl AppointmentBook {
    fn fail(&mut self, error: BookingError) -> Result<(), BookingError> {
        self.error = Some(error.to_string());
        Err(error)
    }
}

/// Dependencies injected when the booking store starts.
pub struct BookingContext {
    pub backend: Arc<dyn BackendApi>,
    pub vault: Arc<TokenVault>,
}

impl BookingContext {
    fn token(&self, role: Role) -> Result<String, BookingError> {
        self.vault
            .load(role)
            .ok_or(BookingError::NotAuthenticated(role))
    }
}

#[derive(Debug)]
pub enum BookingAction {
    Book {
        vendor_id: String,
        user_id: String,
        product_id: String,
    },
    LoadForUser(String),
    LoadForVendor(String),
}

#[async_trait]
impl StoreModel for AppointmentBook {
    type Action = BookingAction;
    type Context = BookingContext;
    type Error = BookingError;

    async fn apply(
        &mut self,
        action: BookingAction,
        ctx: &BookingContext,
    ) -> Result<(), BookingError> {
        match action {
            BookingAction::Book {
                vendor_id,
                user_id,
                product_id,
            } => {
                if vendor_id.is_empty() || user_id.is_empty() || product_id.is_empty() {
                    return self.fail(BookingError::MissingIds);
                }
                let token = match ctx.token(Role::Customer) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                let request = AppointmentRequest {
                    vendor_id,
                    user_id,
                    product_id,
                };
                match ctx.backend.create_appointment(&token, &request).await {
                    Ok(appointment) => {
                        self.mine.push(appointment);
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(BookingError::Api(e)),
                }
            }
            BookingAction::LoadForUser(user_id) => {
                let token = match ctx.token(Role::Customer) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.appointments_for_user(&token, &user_id).await {
                    Ok(appointments) => {
                        self.mine = appointments;
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(BookingError::Api(e)),
                }
            }
            BookingAction::LoadForVendor(vendor_id) => {
                let token = match ctx.token(Role::Vendor) {
                    Ok(token) => token,
                    Err(e) => return self.fail(e),
                };
                match ctx.backend.appointments_for_vendor(&token, &vendor_id).await {
                    Ok(appointments) => {
                        self.vendor_queue = appointments;
                        self.error = None;
                        Ok(())
                    }
                    Err(e) => self.fail(BookingError::Api(e)),
                }
            }
        }
    }
}
