use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a delivery-role account eligible for order assignment.
///
/// Read-only on the client: availability, rating and delivery counters are
/// maintained by the backend, the assignment flow only filters on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAgent {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_deliveries: u32,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}
