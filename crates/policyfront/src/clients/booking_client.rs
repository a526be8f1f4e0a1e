//! # Booking Client
//!
//! Provides a high-level API for interacting with the Booking store.
//! It wraps a `StoreClient<AppointmentBook>` and exposes the appointment
//! methods.
use crate::booking::{AppointmentBook, BookingAction, BookingError};
use async_trait::async_trait;
use store_runtime::{impl_store_client, StoreClient, StoreError, StoreView};
use tracing::{debug, instrument};

/// Client for interacting with the Booking store.
#[derive(Clone)]
pub struct BookingClient {
    inner: StoreClient<AppointmentBook>,
}

impl_store_client!(BookingClient, AppointmentBook, BookingError, appointments);

#[async_trait]
impl StoreView<AppointmentBook> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &StoreClient<AppointmentBook> {
        &self.inner
    }

    fn map_error(e: StoreError) -> BookingError {
        e.into_rejection()
            .unwrap_or_else(|e| BookingError::Store(e.to_string()))
    }
}

impl BookingClient {
    /// Books one appointment. Blank ids come back as a typed error without
    /// a backend call.
    #[instrument(skip(self))]
    pub async fn book(
        &self,
        vendor_id: &str,
        user_id: &str,
        product_id: &str,
    ) -> Result<AppointmentBook, BookingError> {
        debug!("Sending request");
        self.inner
            .dispatch(BookingAction::Book {
                vendor_id: vendor_id.to_owned(),
                user_id: user_id.to_owned(),
                product_id: product_id.to_owned(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_for_user(&self, user_id: &str) -> Result<AppointmentBook, BookingError> {
        debug!("Sending request");
        self.inner
            .dispatch(BookingAction::LoadForUser(user_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_for_vendor(&self, vendor_id: &str) -> Result<AppointmentBook, BookingError> {
        debug!("Sending request");
        self.inner
            .dispatch(BookingAction::LoadForVendor(vendor_id.to_owned()))
            .await
            .map_err(Self::map_error)
    }
}
