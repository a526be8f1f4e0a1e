use crate::model::DeliveryAgent;
use serde::{Deserialize, Serialize};

/// Geographic coordinates attached to a profile or a shipping address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Represents a customer or admin account profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Represents a vendor account profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// The profile payload an auth endpoint returns, one shape per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoleProfile {
    Customer(Account),
    Vendor(Vendor),
    Agent(DeliveryAgent),
    Admin(Account),
}

impl RoleProfile {
    pub fn id(&self) -> &str {
        match self {
            RoleProfile::Customer(a) | RoleProfile::Admin(a) => &a.id,
            RoleProfile::Vendor(v) => &v.id,
            RoleProfile::Agent(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RoleProfile::Customer(a) | RoleProfile::Admin(a) => &a.name,
            RoleProfile::Vendor(v) => &v.name,
            RoleProfile::Agent(a) => &a.name,
        }
    }
}

/// Login payload, identical for every role.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload, identical for every role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Profile mutation payload; `None` fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}
