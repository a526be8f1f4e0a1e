use crate::api::ApiError;
use crate::model::{Account, Role, RoleProfile};
use serde::{Deserialize, Serialize};

/// Result of a successful login or registration: the bearer token plus the
/// authenticated profile.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub profile: RoleProfile,
}

/// Raw auth response body.
///
/// The backend names the profile key after the role (`user`, `vendor`,
/// `deliveryBoy`, `admin`); the aliases fold them all onto one field and
/// [`decode_role_profile`] gives the value its role-specific shape.
#[derive(Debug, Deserialize)]
pub(crate) struct WireAuth {
    pub token: String,
    #[serde(
        alias = "user",
        alias = "vendor",
        alias = "deliveryBoy",
        alias = "admin"
    )]
    pub profile: serde_json::Value,
}

/// Error body shape; most backend errors carry a `message` field.
#[derive(Debug, Deserialize)]
pub(crate) struct ServerMessage {
    #[serde(default)]
    pub message: String,
}

/// Assignment commit body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignRequest<'a> {
    pub order_id: &'a str,
    pub delivery_boy_id: &'a str,
}

/// Decodes a role-shaped profile value into the matching [`RoleProfile`].
pub(crate) fn decode_role_profile(
    role: Role,
    value: serde_json::Value,
) -> Result<RoleProfile, ApiError> {
    let profile = match role {
        Role::Customer => RoleProfile::Customer(serde_json::from_value::<Account>(value)?),
        Role::Vendor => RoleProfile::Vendor(serde_json::from_value(value)?),
        Role::Agent => RoleProfile::Agent(serde_json::from_value(value)?),
        Role::Admin => RoleProfile::Admin(serde_json::from_value(value)?),
    };
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_auth_accepts_any_role_key() {
        for key in ["user", "vendor", "deliveryBoy", "admin", "profile"] {
            let body = format!(r#"{{"token":"t1","{key}":{{"_id":"x"}}}}"#);
            let wire: WireAuth = serde_json::from_str(&body).unwrap();
            assert_eq!(wire.token, "t1");
            assert_eq!(wire.profile["_id"], "x");
        }
    }

    #[test]
    fn profile_decodes_per_role() {
        let value = serde_json::json!({"_id": "v1", "name": "Acme", "email": "a@b.c"});
        let profile = decode_role_profile(Role::Vendor, value).unwrap();
        assert!(matches!(profile, RoleProfile::Vendor(v) if v.id == "v1"));
    }

    #[test]
    fn profile_decode_failure_is_decode_error() {
        let err = decode_role_profile(Role::Customer, serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
