use crate::model::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle status of an order as reported by the backend.
///
/// Deserialization is lenient: a status string this client does not know maps
/// to [`OrderStatus::Unknown`] instead of failing the whole payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Postal address an order ships to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Represents a customer order.
///
/// The client reads orders and mutates exactly one field of them: the
/// `deliveryBoy` reference written by a successful assignment. Everything
/// else is display data passed through from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub delivery_boy: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Whether an agent is already bound to this order.
    ///
    /// An absent or empty `deliveryBoy` both count as unassigned.
    pub fn is_assigned(&self) -> bool {
        self.delivery_boy.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Aggregated order and revenue analytics for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStats {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub delivered_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
}
