use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a booked consultation between a customer and a vendor.
///
/// Appointments are created and listed but never updated or cancelled from
/// the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a new appointment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub vendor_id: String,
    pub user_id: String,
    pub product_id: String,
}
